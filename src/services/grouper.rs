use std::collections::BTreeMap;

use crate::models::{Allocation, SeatGrid};

/// Groups a flat allocation list into one seat grid per classroom, keyed by classroom id.
///
/// The first record seen for a classroom fixes its metadata and dimensions.
/// Later records for an already written seat replace it. A record without a
/// student clears its seat.
///
/// # Panics
///
/// A record outside its classroom's `rows × columns × 2` bounds panics.
pub fn group_allocations(allocations: &[Allocation]) -> BTreeMap<i64, SeatGrid> {
    let mut classrooms: BTreeMap<i64, SeatGrid> = BTreeMap::new();

    for allocation in allocations {
        let grid = classrooms
            .entry(allocation.classroom.id)
            .or_insert_with(|| SeatGrid::empty(allocation.classroom.clone()));

        let seat = allocation.student.is_some().then(|| allocation.clone());
        grid.place(allocation.row, allocation.column, allocation.sub_column, seat);
    }

    classrooms
}

use serde::Serialize;

use super::{Allocation, Classroom};

/// Left and right seat of one bench, indexed by `sub_column`.
pub type Bench = [Option<Allocation>; 2];

/// Seating chart of one classroom: `rows × columns` benches of two seats each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatGrid {
    #[serde(flatten)]
    pub classroom: Classroom,
    pub seats: Vec<Vec<Bench>>,
}

impl SeatGrid {
    /// Grid sized from the classroom's declared dimensions with every seat empty.
    pub fn empty(classroom: Classroom) -> Self {
        let seats = vec![vec![[None, None]; classroom.columns]; classroom.rows];
        Self { classroom, seats }
    }

    /// Overwrites one seat.
    ///
    /// # Panics
    ///
    /// Positions outside `rows × columns × 2` are a caller error and panic on the index.
    pub fn place(&mut self, row: usize, column: usize, sub_column: usize, seat: Option<Allocation>) {
        self.seats[row][column][sub_column] = seat;
    }

    pub fn seat(&self, row: usize, column: usize, sub_column: usize) -> Option<&Allocation> {
        self.seats.get(row)?.get(column)?.get(sub_column)?.as_ref()
    }

    pub fn allocated_count(&self) -> usize {
        self.seats
            .iter()
            .flatten()
            .flatten()
            .filter(|seat| seat.is_some())
            .count()
    }
}

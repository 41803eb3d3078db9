use serde::Serialize;

use crate::{
    models::{Allocation, College},
    services::{ColorMap, SeatPlan},
};

/// Swatch for empty seats and for students whose college has no color.
pub const UNALLOCATED_COLOR: &str = "gray";

/// Legend swatch for the "Unallocated Seat" entry.
pub const UNALLOCATED_LEGEND_COLOR: &str = "brown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: &'static str,
}

pub fn seat_color(seat: Option<&Allocation>, colors: &ColorMap) -> &'static str {
    seat.and_then(Allocation::college)
        .and_then(|college| colors.get(college.id))
        .unwrap_or(UNALLOCATED_COLOR)
}

pub fn seat_tooltip(seat: Option<&Allocation>, row: usize, column: usize, sub_column: usize) -> String {
    let Some(seat) = seat else {
        return "Unallocated seat".to_string();
    };

    let student = seat.student.as_ref();
    let name = student.and_then(|s| s.name.as_deref()).unwrap_or("N/A");
    let college = seat.college().and_then(College::display_name).unwrap_or("N/A");
    let roll_number = seat.roll_number().unwrap_or("N/A");

    format!(
        "Name: {name}\nCollege: {college}\nRoll Number: {roll_number}\nRow: {row}, Column: {column}, Sub Column: {sub_column}"
    )
}

/// One entry per colored college in ascending id order, then the unallocated swatch.
pub fn legend(plan: &SeatPlan) -> Vec<LegendEntry> {
    let mut colored: Vec<_> = plan.colors.iter().collect();
    colored.sort_by_key(|entry| entry.college_id);

    colored
        .into_iter()
        .map(|entry| LegendEntry {
            label: plan
                .college_name(entry.college_id)
                .map(str::to_string)
                .unwrap_or_else(|| format!("College {}", entry.college_id)),
            color: entry.color,
        })
        .chain(std::iter::once(LegendEntry {
            label: "Unallocated Seat".to_string(),
            color: UNALLOCATED_LEGEND_COLOR,
        }))
        .collect()
}

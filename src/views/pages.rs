//! Render contexts for the two pages. Each builder walks the seat grids once and
//! produces plain serializable values for the templates.

use serde::Serialize;

use super::seats::{legend, seat_color, seat_tooltip, LegendEntry};
use crate::{models::SeatGrid, services::SeatPlan};

#[derive(Debug, Serialize)]
pub struct ChartPage {
    pub classrooms: Vec<ChartClassroom>,
    pub legend: Vec<LegendEntry>,
}

#[derive(Debug, Serialize)]
pub struct ChartClassroom {
    pub id: i64,
    pub name: String,
    pub rows: Vec<Vec<ChartBench>>,
}

#[derive(Debug, Serialize)]
pub struct ChartBench {
    pub seats: [ChartSeat; 2],
}

#[derive(Debug, Serialize)]
pub struct ChartSeat {
    pub color: &'static str,
    pub tooltip: String,
}

#[derive(Debug, Serialize)]
pub struct PrintPage {
    pub classrooms: Vec<PrintClassroom>,
}

/// Print layout lists a classroom column by column, benches top to bottom.
#[derive(Debug, Serialize)]
pub struct PrintClassroom {
    pub name: String,
    pub columns: Vec<Vec<PrintBench>>,
}

#[derive(Debug, Serialize)]
pub struct PrintBench {
    pub left: String,
    pub right: String,
}

impl ChartPage {
    pub fn build(plan: &SeatPlan) -> Self {
        let classrooms = plan
            .classrooms
            .values()
            .map(|grid| ChartClassroom {
                id: grid.classroom.id,
                name: grid.classroom.name.clone(),
                rows: (0..grid.classroom.rows)
                    .map(|row| {
                        (0..grid.classroom.columns)
                            .map(|column| ChartBench {
                                seats: [0, 1].map(|side| {
                                    let seat = grid.seat(row, column, side);
                                    ChartSeat {
                                        color: seat_color(seat, &plan.colors),
                                        tooltip: seat_tooltip(seat, row, column, side),
                                    }
                                }),
                            })
                            .collect()
                    })
                    .collect(),
            })
            .collect();

        Self { classrooms, legend: legend(plan) }
    }
}

impl PrintPage {
    pub fn build(plan: &SeatPlan) -> Self {
        Self {
            classrooms: plan.classrooms.values().map(print_classroom).collect(),
        }
    }
}

fn print_classroom(grid: &SeatGrid) -> PrintClassroom {
    let roll = |row, column, side| {
        grid.seat(row, column, side)
            .and_then(|seat| seat.roll_number())
            .unwrap_or_default()
            .to_string()
    };

    PrintClassroom {
        name: grid.classroom.name.clone(),
        columns: (0..grid.classroom.columns)
            .map(|column| {
                (0..grid.classroom.rows)
                    .map(|row| PrintBench {
                        left: roll(row, column, 0),
                        right: roll(row, column, 1),
                    })
                    .collect()
            })
            .collect(),
    }
}

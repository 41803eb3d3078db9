use serde::{Serialize, Serializer};
use std::collections::HashMap;

use crate::models::Allocation;

/// Display colors handed out to colleges in order of first appearance.
pub const PALETTE: [&str; 10] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA07A", "#98D8C8",
    "#F06292", "#AED581", "#7986CB", "#4DB6AC", "#DCE775",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollegeColor {
    pub college_id: i64,
    pub color: &'static str,
}

/// College id to display color, kept in assignment order.
///
/// Serializes as the ordered list of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMap {
    entries: Vec<CollegeColor>,
    // college id -> position in `entries`
    index: HashMap<i64, usize>,
}

impl ColorMap {
    pub fn get(&self, college_id: i64) -> Option<&'static str> {
        self.index.get(&college_id).map(|&i| self.entries[i].color)
    }

    fn insert(&mut self, college_id: i64, color: &'static str) {
        self.index.insert(college_id, self.entries.len());
        self.entries.push(CollegeColor { college_id, color });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CollegeColor> {
        self.entries.iter()
    }
}

impl Serialize for ColorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// Assigns `PALETTE[i % 10]` to the i-th distinct college, counting in input order.
/// Allocations without a student or without a college are skipped.
pub fn assign_college_colors(allocations: &[Allocation]) -> ColorMap {
    let mut map = ColorMap::default();

    for college in allocations.iter().filter_map(Allocation::college) {
        if !map.index.contains_key(&college.id) {
            let color = PALETTE[map.len() % PALETTE.len()];
            map.insert(college.id, color);
        }
    }

    map
}

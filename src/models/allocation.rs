use serde::{Deserialize, Serialize};

use super::{Classroom, College, Student};

/// A single seat assignment as returned by the allocations endpoint.
///
/// `sub_column` is the bench side: 0 for the left seat, 1 for the right one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub classroom: Classroom,
    pub row: usize,
    pub column: usize,
    pub sub_column: usize,
    #[serde(default)]
    pub student: Option<Student>,
}

impl Allocation {
    pub fn college(&self) -> Option<&College> {
        self.student.as_ref()?.college.as_ref()
    }

    pub fn roll_number(&self) -> Option<&str> {
        self.student.as_ref()?.roll_number.as_deref()
    }
}

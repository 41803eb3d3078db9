pub mod allocation;
pub mod classroom;
pub mod seat;
pub mod student;

pub use allocation::Allocation;
pub use classroom::Classroom;
pub use seat::{Bench, SeatGrid};
pub use student::{College, Student};

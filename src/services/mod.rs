pub mod allocation_client;
pub mod colors;
pub mod grouper;
pub mod seat_plan;

pub use allocation_client::{AllocationClient, FetchError};
pub use colors::{assign_college_colors, ColorMap, PALETTE};
pub use grouper::group_allocations;
pub use seat_plan::{load_seat_plan, SeatPlan};

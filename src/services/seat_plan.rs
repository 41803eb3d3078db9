use std::collections::{BTreeMap, HashMap};

use tokio::sync::RwLock;
use tracing::{error, info};

use super::{
    allocation_client::AllocationClient,
    colors::{assign_college_colors, ColorMap},
    grouper::group_allocations,
};
use crate::models::{Allocation, College, SeatGrid};

/// Everything the pages render from: the fetched records, their seat grids and the college colors.
///
/// `SeatPlan::default()` is the empty state shown before (or instead of) a successful fetch.
#[derive(Debug, Clone, Default)]
pub struct SeatPlan {
    pub allocations: Vec<Allocation>,
    pub classrooms: BTreeMap<i64, SeatGrid>,
    pub colors: ColorMap,
    // first mention of each college id, as the legend labels it
    colleges: HashMap<i64, College>,
}

impl SeatPlan {
    pub fn from_allocations(allocations: Vec<Allocation>) -> Self {
        let classrooms = group_allocations(&allocations);
        let colors = assign_college_colors(&allocations);

        let mut colleges = HashMap::new();
        for college in allocations.iter().filter_map(Allocation::college) {
            colleges.entry(college.id).or_insert_with(|| college.clone());
        }

        Self { allocations, classrooms, colors, colleges }
    }

    /// Name of the college as carried by the first allocation that mentions it.
    /// `None` when that record has no (or a blank) name.
    pub fn college_name(&self, college_id: i64) -> Option<&str> {
        self.colleges.get(&college_id)?.display_name()
    }

    pub fn is_empty(&self) -> bool {
        self.classrooms.is_empty()
    }
}

/// Runs the single fetch-then-transform cycle. A failed fetch is logged and leaves `plan` untouched.
pub async fn load_seat_plan(client: &AllocationClient, plan: &RwLock<SeatPlan>) {
    match client.fetch_allocations().await {
        Ok(allocations) => {
            let loaded = SeatPlan::from_allocations(allocations);
            info!(
                "Seat plan ready: {} classrooms, {} colleges",
                loaded.classrooms.len(),
                loaded.colors.len()
            );
            *plan.write().await = loaded;
        }
        Err(e) => {
            error!("Error fetching allocations from {}: {}", client.allocations_url(), e);
        }
    }
}

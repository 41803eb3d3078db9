pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod services;
pub mod views;

use axum::Router;
use std::sync::Arc;
use tokio::{sync::RwLock, task};
use tower_http::trace::TraceLayer;

use services::{load_seat_plan, AllocationClient, SeatPlan};
use views::Views;

// Shared state for the whole application
pub struct AppState {
    pub config: config::Config,
    pub client: AllocationClient,
    pub views: Views,
    pub plan: RwLock<SeatPlan>,
}

impl AppState {
    /// Builds the state with an empty seat plan and starts the one-off allocations fetch in the background.
    pub fn new(config: config::Config) -> Result<Arc<Self>, handlebars::TemplateError> {
        let client = AllocationClient::from_config(&config.upstream);
        let state = Arc::new(Self {
            config,
            client,
            views: Views::new()?,
            plan: RwLock::new(SeatPlan::default()),
        });

        let state_for_bg = state.clone();
        task::spawn(async move {
            load_seat_plan(&state_for_bg.client, &state_for_bg.plan).await;
        });

        Ok(state)
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

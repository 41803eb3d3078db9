use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub environment: String,
    pub allocations_url: String,
    pub classrooms: usize,
}

// GET /health
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let classrooms = state.plan.read().await.classrooms.len();
    Json(HealthResponse {
        status: "OK",
        environment: state.config.app.environment.clone(),
        allocations_url: state.config.upstream.allocations_url.clone(),
        classrooms,
    })
}

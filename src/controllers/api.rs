use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::{models::SeatGrid, services::ColorMap, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/classrooms", get(get_classrooms))
        .route("/college-colors", get(get_college_colors))
}

// GET /api/classrooms
async fn get_classrooms(State(state): State<Arc<AppState>>) -> Json<Vec<SeatGrid>> {
    let plan = state.plan.read().await;
    Json(plan.classrooms.values().cloned().collect())
}

// GET /api/college-colors
async fn get_college_colors(State(state): State<Arc<AppState>>) -> Json<ColorMap> {
    Json(state.plan.read().await.colors.clone())
}

use axum::{extract::State, response::Html, routing::get, Router};
use std::sync::Arc;

use crate::{error::AppError, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(chart_page))
        .route("/print", get(print_page))
}

// GET /
async fn chart_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let plan = state.plan.read().await;
    Ok(Html(state.views.chart(&plan)?))
}

// GET /print
async fn print_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let plan = state.plan.read().await;
    Ok(Html(state.views.print(&plan)?))
}

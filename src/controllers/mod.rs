pub mod api;
pub mod health;
pub mod pages;

use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(health::routes())
        .merge(pages::routes())
        .nest("/api", api::routes())
}

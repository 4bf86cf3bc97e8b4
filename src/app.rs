use crate::handlers;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/analytics", get(handlers::get_analytics))
        .route("/api/analytics/snapshot", get(handlers::get_snapshot))
        .with_state(state)
}

use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/export", get(handlers::export_csv))
        .route("/api/budget", get(handlers::get_budget))
        .route("/api/periods", get(handlers::get_periods))
        .route("/api/category/update", post(handlers::update_category))
        .route("/api/category/add", post(handlers::add_category))
        .route("/api/category/remove", post(handlers::remove_category))
        .with_state(state)
}

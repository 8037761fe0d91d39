use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::handlers::{health, index, search, search_form};
use crate::state::AppState;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/search", get(search).post(search_form))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
}

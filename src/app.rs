use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/entries", get(handlers::list_entries))
        .route("/entry", post(handlers::create_entry))
        .route("/api/timeline", get(handlers::get_timeline))
        .route("/api/flashback", get(handlers::get_flashback))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

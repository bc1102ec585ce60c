pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/interview", post(handlers::handle_interview_turn))
        .route("/interview/start", get(handlers::handle_interview_start))
        .with_state(state)
}

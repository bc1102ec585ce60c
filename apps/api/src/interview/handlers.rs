//! Axum route handlers for the Interview API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::interview::turn::{run_turn, TurnRequest, TurnResponse};
use crate::state::AppState;

/// POST /interview
///
/// Runs one interview turn: replays history to the model with the current rubric
/// and advances `next_question_index` when the reply moves on.
pub async fn handle_interview_turn(
    State(state): State<AppState>,
    Json(request): Json<TurnRequest>,
) -> Result<Json<TurnResponse>, AppError> {
    let response = run_turn(state.llm.as_ref(), &state.questions, &request).await?;
    Ok(Json(response))
}

/// GET /interview/start
pub async fn handle_interview_start(State(state): State<AppState>) -> Json<TurnResponse> {
    Json(TurnResponse::opening(&state.questions))
}

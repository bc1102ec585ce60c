use std::sync::Arc;

use crate::interview::questions::QuestionBank;
use crate::llm_client::ChatModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; every request sees the same bank and model.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable chat backend. Default: GeminiClient.
    pub llm: Arc<dyn ChatModel>,
    pub questions: QuestionBank,
}

//! Interview turn: one model call per request, plus the index bookkeeping around it.
//!
//! The index only ever moves forward by one, and only when the model's reply
//! contains a transition phrase. Once it reaches the terminal entry the reply is
//! replaced by the closing message.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::interview::prompts::{render_turn_instruction, INTERVIEWER_SYSTEM};
use crate::interview::questions::QuestionBank;
use crate::llm_client::{ChatMessage, ChatModel};

/// Phrases in a model reply that mean the interviewer moved on to the next question.
/// Matched case-insensitively as substrings.
pub const MOVE_ON_KEYWORDS: &[&str] = &[
    "next question",
    "let's move on",
    "great",
    "thank you",
    "understood",
    "pivot table",
];

/// One prior message as the client tracks it. `role` is "user" or anything else (assistant).
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TurnRequest {
    pub history: Vec<HistoryMessage>,
    pub question_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnResponse {
    pub response: String,
    pub next_question_index: usize,
    pub interview_complete: bool,
}

impl TurnResponse {
    fn new(bank: &QuestionBank, response: String, next_question_index: usize) -> Self {
        Self {
            response,
            next_question_index,
            interview_complete: bank.is_terminal(next_question_index),
        }
    }

    fn closing(bank: &QuestionBank) -> Self {
        Self::new(
            bank,
            bank.terminal().question.to_string(),
            bank.terminal_index(),
        )
    }

    /// The opening question, before any model call.
    pub fn opening(bank: &QuestionBank) -> Self {
        Self::new(bank, bank.first().question.to_string(), 0)
    }
}

pub fn signals_move_on(reply: &str) -> bool {
    let reply = reply.to_lowercase();
    MOVE_ON_KEYWORDS.iter().any(|kw| reply.contains(kw))
}

/// Replays client history with mapped roles, then appends the turn instruction.
pub fn build_messages(
    history: &[HistoryMessage],
    rubric: &str,
    next_question: &str,
) -> Vec<ChatMessage> {
    history
        .iter()
        .map(|msg| {
            if msg.role == "user" {
                ChatMessage::user(msg.content.as_str())
            } else {
                ChatMessage::assistant(msg.content.as_str())
            }
        })
        .chain(std::iter::once(ChatMessage::user(render_turn_instruction(
            rubric,
            next_question,
        ))))
        .collect()
}

/// Runs a single interview turn. Model failures are returned unchanged as `AppError::Llm`.
pub async fn run_turn(
    model: &dyn ChatModel,
    bank: &QuestionBank,
    request: &TurnRequest,
) -> Result<TurnResponse, AppError> {
    let index = request.question_index;

    if bank.is_terminal(index) {
        info!("Interview turn at question {index}: already complete");
        return Ok(TurnResponse::closing(bank));
    }

    // index < terminal_index here, so index + 1 is still in the bank.
    let current = bank.question(index);
    let next = bank.question(index + 1);

    let messages = build_messages(&request.history, current.rubric, next.question);
    let reply = model.complete(INTERVIEWER_SYSTEM, &messages).await?;

    let next_index = if signals_move_on(&reply) {
        bank.clamp(index + 1)
    } else {
        index
    };

    info!("Interview turn: question {index} -> {next_index}");

    if bank.is_terminal(next_index) {
        return Ok(TurnResponse::closing(bank));
    }

    Ok(TurnResponse::new(bank, reply, next_index))
}

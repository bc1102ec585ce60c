// Interview engine: a fixed question bank walked by a single index.
// Evaluation is delegated to the model through llm_client; this module only
// assembles prompts and decides whether the index moves.

pub mod handlers;
pub mod prompts;
pub mod questions;
pub mod turn;

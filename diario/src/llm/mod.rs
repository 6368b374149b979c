mod api;
pub mod prompts;
mod provider;

pub use api::{strip_reasoning, LlmApiClient, REASONING_END_MARKER};
pub use provider::{LlmBackend, LlmProvider};

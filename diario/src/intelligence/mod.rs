pub mod advice;
pub mod scores;

pub use advice::{parse_advice, AdviceItem};
pub use scores::{extract_scores, interpret_scores, InterpretError};

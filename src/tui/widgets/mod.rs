//! Reusable TUI widgets.

pub mod prompt;
pub mod transcript;

pub use prompt::{Prompt, draw_prompt};
pub use transcript::draw_transcript;

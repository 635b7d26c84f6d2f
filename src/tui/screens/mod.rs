//! TUI screen implementations.

pub mod conversation;

pub use conversation::{ConversationState, draw_conversation};

/// Errors that can occur in the TUI layer.
///
/// The form itself cannot fail; only the terminal can.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

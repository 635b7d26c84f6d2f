//! Actions returned by the conversation screen's event handlers.

use crate::model::Step;

/// An action the screen hands back to the [`App`](super::App).
///
/// All form mutation funnels through these; the screen never touches
/// [`FormState`](crate::model::FormState) directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Replace the active field's value with the entry control's text.
    UpdateField(Step, String),
    /// Confirm the active field and move to the next step.
    Advance,
    /// Wipe the form and start over from the first question.
    Restart,
    /// Accept the review summary and mark the form submitted.
    Submit,
    /// Quit the application.
    Quit,
}

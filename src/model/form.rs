//! The form record and its mutation operations.

use super::step::Step;

/// The conversation's single mutable record: the current step plus the three
/// answers collected so far.
///
/// Exactly one field is editable at a time, determined solely by `step`.
/// All mutation goes through [`update_field`](FormState::update_field),
/// [`advance`](FormState::advance) and [`reset`](FormState::reset);
/// out-of-contract calls are silent no-ops, never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    step: Step,
    email: String,
    name: String,
    description: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Creates an empty form at the first step.
    pub fn new() -> Self {
        Self {
            step: Step::Email,
            email: String::new(),
            name: String::new(),
            description: String::new(),
        }
    }

    /// Returns the currently active step.
    pub fn step(&self) -> Step {
        self.step
    }

    /// Replaces the value of `step`'s field.
    ///
    /// Ignored unless `step` is the active step and an entry step; completed
    /// fields are one-directional and can only be revisited via
    /// [`reset`](FormState::reset).
    pub fn update_field(&mut self, step: Step, value: impl Into<String>) {
        if step != self.step {
            return;
        }
        match step {
            Step::Email => self.email = value.into(),
            Step::Name => self.name = value.into(),
            Step::Description => self.description = value.into(),
            Step::Review => {}
        }
    }

    /// Confirms the active step and moves to the next one.
    ///
    /// Never skips or wraps; a no-op at [`Step::Review`].
    pub fn advance(&mut self) {
        self.step = self.step.next();
    }

    /// Returns the form to its opening state: first step, all fields empty.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the value of `step`'s field; empty for [`Step::Review`].
    pub fn value(&self, step: Step) -> &str {
        match step {
            Step::Email => &self.email,
            Step::Name => &self.name,
            Step::Description => &self.description,
            Step::Review => "",
        }
    }

    /// The entry steps already confirmed, in order, with their values.
    pub fn completed(&self) -> impl Iterator<Item = (Step, &str)> {
        Step::FIELDS
            .into_iter()
            .filter(|field| field.index() < self.step.index())
            .map(|field| (field, self.value(field)))
    }
}

//! Focus and caret side effects driven by step changes.

use crate::model::Step;

/// Reacts to step changes by revealing the caret and moving input focus to
/// the active field's entry control.
///
/// [`sync`](FocusEffects::sync) is re-run after every applied action and
/// fires exactly once per transition; an unchanged step is a no-op. The
/// opening step is exempt both on startup and after a restart: the caret
/// stays hidden there until the user interacts or the step changes.
#[derive(Debug, Clone, Default)]
pub struct FocusEffects {
    seen: Option<Step>,
    caret_visible: bool,
}

impl FocusEffects {
    /// Creates the controller in its pre-mount state: no step seen, caret
    /// hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-runs the reaction for the current `step`.
    ///
    /// Returns the step whose entry control should receive focus when the
    /// reaction fired, `None` when the step is unchanged or is the opening
    /// step. A transition into the opening step re-hides the caret.
    pub fn sync(&mut self, step: Step) -> Option<Step> {
        if self.seen == Some(step) {
            return None;
        }
        self.seen = Some(step);
        if step == Step::Email {
            self.caret_visible = false;
            return None;
        }
        self.caret_visible = true;
        Some(step)
    }

    /// The click path: restore the caret without a step change.
    pub fn refocus(&mut self) {
        self.caret_visible = true;
    }

    /// Returns `true` if the caret should currently be shown.
    pub fn caret_visible(&self) -> bool {
        self.caret_visible
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::model::FormState;

    #[test]
    fn mount_is_suppressed() {
        let mut effects = FocusEffects::new();
        assert_eq!(effects.sync(Step::Email), None);
        assert!(!effects.caret_visible());
    }

    #[test]
    fn first_transition_fires() {
        let mut effects = FocusEffects::new();
        effects.sync(Step::Email);
        assert_eq!(effects.sync(Step::Name), Some(Step::Name));
        assert!(effects.caret_visible());
    }

    #[test]
    fn unchanged_step_does_not_refire() {
        let mut effects = FocusEffects::new();
        effects.sync(Step::Email);
        assert_eq!(effects.sync(Step::Name), Some(Step::Name));
        assert_eq!(effects.sync(Step::Name), None);
        assert_eq!(effects.sync(Step::Name), None);
    }

    #[test]
    fn every_later_step_fires_once() {
        let mut effects = FocusEffects::new();
        effects.sync(Step::Email);
        assert_eq!(effects.sync(Step::Name), Some(Step::Name));
        assert_eq!(effects.sync(Step::Description), Some(Step::Description));
        assert_eq!(effects.sync(Step::Review), Some(Step::Review));
    }

    #[test]
    fn restart_is_suppressed_and_hides_caret() {
        let mut effects = FocusEffects::new();
        effects.sync(Step::Email);
        effects.sync(Step::Name);
        effects.sync(Step::Description);
        effects.sync(Step::Review);
        assert!(effects.caret_visible());

        assert_eq!(effects.sync(Step::Email), None);
        assert!(!effects.caret_visible());
    }

    #[test]
    fn refocus_restores_caret() {
        let mut effects = FocusEffects::new();
        effects.sync(Step::Email);
        assert!(!effects.caret_visible());
        effects.refocus();
        assert!(effects.caret_visible());
    }

    #[test]
    fn refocus_after_restart_restores_caret() {
        let mut effects = FocusEffects::new();
        effects.sync(Step::Email);
        effects.sync(Step::Name);
        effects.sync(Step::Email);
        assert!(!effects.caret_visible());
        effects.refocus();
        assert!(effects.caret_visible());
    }

    #[quickcheck]
    fn fires_exactly_once_per_forward_transition(n: u8) -> bool {
        let mut form = FormState::new();
        let mut effects = FocusEffects::new();
        effects.sync(form.step());

        let mut fires = 0usize;
        for _ in 0..n {
            form.advance();
            // Run the reaction twice per change to prove idempotence.
            if effects.sync(form.step()).is_some() {
                fires += 1;
            }
            if effects.sync(form.step()).is_some() {
                fires += 1;
            }
        }
        // Only the three real transitions change the step; the rest saturate.
        fires == usize::from(n.min(3))
    }
}

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use ratatui::{Frame, Terminal};

use crate::model::{FormState, Step};

use super::action::Action;
use super::effects::FocusEffects;
use super::error::AppError;
use super::screens::conversation::{ConversationState, draw_conversation};

/// Top-level application state.
///
/// Owns the form record and the submission flag; screens hand back
/// [`Action`]s and the `App` applies them, so every mutation runs through
/// the same small set of operations.
pub struct App {
    form: FormState,
    submitted: bool,
    effects: FocusEffects,
    conversation: ConversationState,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new `App` at the first question with nothing submitted.
    pub fn new() -> Self {
        let form = FormState::new();
        let mut effects = FocusEffects::new();
        // Record the opening step so the first reaction is suppressed.
        effects.sync(form.step());
        Self {
            form,
            submitted: false,
            effects,
            conversation: ConversationState::new(),
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Renders the conversation surface.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        draw_conversation(
            &self.conversation,
            &self.form,
            self.submitted,
            frame,
            frame.area(),
        );
    }

    /// Handles a key event: global keys first, then the screen handler.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let action = self.conversation.handle_key(key, &self.form, self.submitted);
        // Typing into the entry control counts as interaction: it restores
        // the caret if the opening step still has it hidden.
        if matches!(action, Action::UpdateField(..)) && !self.effects.caret_visible() {
            self.effects.refocus();
            self.conversation.show_caret();
        }
        self.apply(action);
    }

    /// Handles a mouse event: any click on the form surface restores the
    /// caret and refocuses the active entry control.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if matches!(mouse.kind, MouseEventKind::Down(_)) {
            self.effects.refocus();
            self.conversation.show_caret();
        }
    }

    /// Applies an [`Action`], then re-runs the focus reaction for whatever
    /// step is now active.
    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::UpdateField(step, value) => self.form.update_field(step, value),
            Action::Advance => self.form.advance(),
            Action::Restart => {
                self.form.reset();
                self.submitted = false;
                self.conversation.reset();
            }
            Action::Submit => {
                if self.form.step() == Step::Review && !self.submitted {
                    self.submitted = true;
                }
            }
            Action::Quit => self.should_quit = true,
        }

        if let Some(step) = self.effects.sync(self.form.step()) {
            self.conversation.focus(step);
        }
    }

    /// Returns a reference to the form record.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Returns `true` once the review has been sent.
    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// Returns `true` if the caret should currently be shown.
    pub fn caret_visible(&self) -> bool {
        self.effects.caret_visible()
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

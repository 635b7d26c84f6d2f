//! Entry control for the active field — a single-line input with a caret.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use tui_textarea::TextArea;

use crate::model::Step;

/// The editable entry control for the currently active field.
///
/// Wraps a [`TextArea`] so the caret can be hidden without discarding typed
/// text. There is only ever one prompt; [`focus`](Prompt::focus) retargets
/// it when the active step changes.
pub struct Prompt {
    textarea: TextArea<'static>,
    step: Step,
    caret_visible: bool,
}

impl Prompt {
    /// Creates the prompt aimed at `step`, empty, with the caret hidden.
    pub fn new(step: Step) -> Self {
        let mut prompt = Self {
            textarea: TextArea::default(),
            step,
            caret_visible: false,
        };
        prompt.configure();
        prompt
    }

    fn configure(&mut self) {
        self.textarea.set_cursor_line_style(Style::default());
        self.textarea.set_placeholder_text(self.step.placeholder());
        self.textarea
            .set_placeholder_style(Style::default().fg(Color::DarkGray));
        self.apply_caret_style();
    }

    fn apply_caret_style(&mut self) {
        let style = if self.caret_visible {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::SLOW_BLINK)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(style);
    }

    /// Retargets the prompt at `step`'s field — fresh text, that step's
    /// placeholder — and reveals the caret.
    pub fn focus(&mut self, step: Step) {
        self.textarea = TextArea::default();
        self.step = step;
        self.caret_visible = true;
        self.configure();
    }

    /// Shows or hides the caret without touching the text.
    pub fn set_caret(&mut self, visible: bool) {
        self.caret_visible = visible;
        self.apply_caret_style();
    }

    /// Returns `true` if the caret is shown.
    pub fn caret_visible(&self) -> bool {
        self.caret_visible
    }

    /// The step whose field this prompt currently edits.
    pub fn step(&self) -> Step {
        self.step
    }

    /// Feeds a key event to the entry control.
    ///
    /// Returns `true` if the text changed. The confirm key is intercepted
    /// before it reaches the control, so the text stays a single line.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }

    /// The current text.
    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Drops any typed text and returns to the opening state: first step,
    /// caret hidden.
    pub fn reset(&mut self) {
        self.textarea = TextArea::default();
        self.step = Step::Email;
        self.caret_visible = false;
        self.configure();
    }
}

/// Renders the question line and the bordered entry control.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_prompt(prompt: &Prompt, frame: &mut Frame, area: Rect) {
    let [question_area, input_area, _rest] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);

    let question = Paragraph::new(Line::from(prompt.step().question()))
        .style(Style::default().fg(Color::Cyan));
    frame.render_widget(question, question_area);

    let block = Block::default()
        .title(prompt.step().label())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(input_area);
    frame.render_widget(block, input_area);
    frame.render_widget(&prompt.textarea, inner);
}

//! The conversation screen — one question at a time, answered fields pinned
//! above the prompt, review and send at the end.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{FormState, Step};
use crate::tui::action::Action;
use crate::tui::widgets::prompt::{Prompt, draw_prompt};
use crate::tui::widgets::transcript::draw_transcript;

/// Which review control is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewChoice {
    /// Wipe the form and start over from the first question.
    Restart,
    /// Send the answers as they stand.
    Send,
}

impl ReviewChoice {
    /// The other control; with only two, every movement key just swaps.
    fn toggled(self) -> Self {
        match self {
            Self::Restart => Self::Send,
            Self::Send => Self::Restart,
        }
    }
}

/// State for the conversation screen.
pub struct ConversationState {
    prompt: Prompt,
    choice: ReviewChoice,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationState {
    /// Creates the screen state with the prompt aimed at the first question
    /// and the caret hidden.
    pub fn new() -> Self {
        Self {
            prompt: Prompt::new(Step::Email),
            choice: ReviewChoice::Send,
        }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    ///
    /// The screen never mutates the form itself; every change is handed
    /// back as an action.
    pub fn handle_key(&mut self, key: KeyEvent, form: &FormState, submitted: bool) -> Action {
        if submitted {
            return match key.code {
                KeyCode::Char('r') => Action::Restart,
                KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
                _ => Action::None,
            };
        }

        if form.step() == Step::Review {
            return match key.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                    self.choice = self.choice.toggled();
                    Action::None
                }
                KeyCode::Enter => match self.choice {
                    ReviewChoice::Restart => Action::Restart,
                    ReviewChoice::Send => Action::Submit,
                },
                KeyCode::Esc => Action::Quit,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Enter => Action::Advance,
            KeyCode::Esc => Action::Quit,
            // A single active field leaves Tab nothing to reach.
            KeyCode::Tab | KeyCode::BackTab => Action::None,
            _ => {
                if self.prompt.input(key) {
                    Action::UpdateField(form.step(), self.prompt.text())
                } else {
                    Action::None
                }
            }
        }
    }

    /// Moves focus to `step`'s control: the entry prompt for an entry step,
    /// the default review control at [`Step::Review`].
    pub fn focus(&mut self, step: Step) {
        if step == Step::Review {
            self.choice = ReviewChoice::Send;
        } else {
            self.prompt.focus(step);
        }
    }

    /// Restores the caret after a click on the form surface.
    pub fn show_caret(&mut self) {
        self.prompt.set_caret(true);
    }

    /// Returns the screen to its opening state.
    pub fn reset(&mut self) {
        self.prompt.reset();
        self.choice = ReviewChoice::Send;
    }

    /// Returns a reference to the entry prompt for rendering.
    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    /// Returns the highlighted review control.
    pub fn choice(&self) -> ReviewChoice {
        self.choice
    }
}

/// Renders the whole conversation surface.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_conversation(
    state: &ConversationState,
    form: &FormState,
    submitted: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let block = Block::default()
        .title(" intake ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [greeting_area, transcript_area, panel_area, _spacer, footer_area] =
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

    let greeting = Paragraph::new(Line::from(
        "Hi there! A few quick questions and we'll get back to you.",
    ));
    frame.render_widget(greeting, greeting_area);

    draw_transcript(form, frame, transcript_area);

    if submitted {
        draw_submitted(form, frame, panel_area);
    } else if form.step() == Step::Review {
        draw_review(state, frame, panel_area);
    } else {
        draw_prompt(state.prompt(), frame, panel_area);
    }

    let hint = if submitted {
        "r: start over  q: quit"
    } else if form.step() == Step::Review {
        "\u{2190}/\u{2192}: choose  Enter: confirm  Esc: quit"
    } else {
        "Enter: confirm  Esc: quit"
    };
    let footer = Paragraph::new(Line::from(hint)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

/// Renders the review question and its two controls.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn draw_review(state: &ConversationState, frame: &mut Frame, area: Rect) {
    let [question_area, _gap, buttons_area, _rest] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let question = Paragraph::new(Line::from(Step::Review.question()))
        .style(Style::default().fg(Color::Cyan));
    frame.render_widget(question, question_area);

    let control_style = |choice| {
        if state.choice() == choice {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let buttons = Paragraph::new(Line::from(vec![
        Span::styled("[ Restart ]", control_style(ReviewChoice::Restart)),
        Span::raw("   "),
        Span::styled("[ Send it! ]", control_style(ReviewChoice::Send)),
    ]));
    frame.render_widget(buttons, buttons_area);
}

/// Renders the post-submission acknowledgment.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn draw_submitted(form: &FormState, frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        "Thanks! Your message is on its way.",
        Style::default().fg(Color::Green),
    ))];
    let email = form.value(Step::Email);
    if !email.is_empty() {
        lines.push(Line::from(format!("We'll reply to {email}.")));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

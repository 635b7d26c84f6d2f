//! Read-only rendering of the fields answered so far.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::FormState;

/// Renders one static line per completed field, in step order.
///
/// Fields at or past the active step are not rendered at all; at the review
/// step this shows all three answers.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_transcript(form: &FormState, frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = form
        .completed()
        .map(|(step, value)| {
            Line::from(vec![
                Span::styled("\u{2713} ", Style::default().fg(Color::Green)),
                Span::styled(
                    format!("{:<12}", step.label()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(value),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

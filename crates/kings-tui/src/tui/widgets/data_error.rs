// Data error widget: shown on every page when the tables failed to load.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Render the load error, its raw text, the hint about the data files, and
/// the listing of the data directory.
pub fn render(frame: &mut Frame, area: Rect, error: &str, hint: &str, listing: &str) {
    let lines = vec![
        Line::from(Span::styled(
            "Error loading the data:",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(error.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            listing.to_string(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title("Data unavailable"),
        );
    frame.render_widget(paragraph, area);
}

// Status bar widget: title, page tabs, data status.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use kings_core::pages::Page;

use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [title] | [page tabs] | [data indicator]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = vec![
        Span::styled(
            " Kings League ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("| ", Style::default().fg(Color::Gray)),
    ];

    spans.extend(page_spans(state.page));

    spans.push(Span::styled("| ", Style::default().fg(Color::Gray)));
    let (dot, color, label) = data_indicator(state);
    spans.push(Span::styled(format!("{} ", dot), Style::default().fg(color)));
    spans.push(Span::styled(label, Style::default().fg(Color::White)));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Dot, color and label describing the load status.
pub fn data_indicator(state: &ViewState) -> (&'static str, Color, String) {
    match state.status.data() {
        Some(data) => (
            "●",
            Color::Green,
            format!("{} stat rows", data.stats().len()),
        ),
        None => ("●", Color::Red, "data unavailable".to_string()),
    }
}

/// Page tabs with the active page highlighted, e.g. "[1:Ranking] [2:Players] [3:Teams]".
pub fn page_spans(active: Page) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, page) in Page::ALL.iter().enumerate() {
        let style = if *page == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("[{}:{}]", i + 1, page.label()), style));
        spans.push(Span::raw(" "));
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

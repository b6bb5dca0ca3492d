// Help bar widget: keyboard shortcut hints for the current state.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the help bar into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        help_text(state),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// Shortcut hints; navigation hints are dropped when there is no data.
pub fn help_text(state: &ViewState) -> &'static str {
    if state.data_ready() {
        " q:Quit | 1-3:Pages | Tab:Focus | \u{2191}\u{2193}/jk:Select | PgUp/PgDn:Scroll | Home:Top"
    } else {
        " q:Quit | 1-3:Pages"
    }
}

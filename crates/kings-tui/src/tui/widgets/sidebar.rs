// Sidebar widgets: page navigation, statistic selector, team filter.
//
// The selectors are disabled (dimmed, no highlight) while the data is
// unavailable.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use kings_core::pages::Page;

use super::focused_border_style;
use crate::tui::{Focus, ViewState};

/// Render the page navigation list.
pub fn render_pages(frame: &mut Frame, area: Rect, state: &ViewState) {
    let items: Vec<ListItem> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| ListItem::new(format!("{} {}", i + 1, page.label())))
        .collect();
    let selected = Page::ALL.iter().position(|p| *p == state.page);

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Navigation"))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Render the statistic selector.
pub fn render_stats(frame: &mut Frame, area: Rect, state: &ViewState) {
    render_selector(
        frame,
        area,
        "Statistic",
        state.stat_choices.iter().map(String::as_str),
        state.stat_index,
        state,
        state.focus == Focus::Stats,
    );
}

/// Render the team filter; the all-teams entry comes first.
pub fn render_teams(frame: &mut Frame, area: Rect, state: &ViewState) {
    let entries = std::iter::once(state.all_teams_label.as_str())
        .chain(state.team_choices.iter().map(String::as_str));
    render_selector(
        frame,
        area,
        "Team",
        entries,
        state.team_index,
        state,
        state.focus == Focus::Teams,
    );
}

fn render_selector<'a>(
    frame: &mut Frame,
    area: Rect,
    title: &'a str,
    entries: impl Iterator<Item = &'a str>,
    selected: usize,
    state: &ViewState,
    focused: bool,
) {
    let enabled = state.data_ready();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focused_border_style(focused && enabled, Style::default()))
        .title(title);

    if !enabled {
        let list = List::new(vec![ListItem::new("  (no data)")])
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(list, area);
        return;
    }

    let items: Vec<ListItem> = entries.map(|e| ListItem::new(e.to_string())).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(selection_style(focused))
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Highlight for the selected entry; stronger when the panel has focus.
pub fn selection_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    }
}

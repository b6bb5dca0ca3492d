// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +-------------------+------------------------------+
// | Pages (5 rows)     | Main Panel (fill)            |
// | Statistics (fill)  |                              |
// | Teams (35%)        |                              |
// +-------------------+------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: title, page tabs, data status.
    pub status_bar: Rect,
    /// Sidebar top: page navigation.
    pub pages: Rect,
    /// Sidebar middle: statistic selector.
    pub stats: Rect,
    /// Sidebar bottom: team filter.
    pub teams: Rect,
    /// Right of the sidebar: content of the active page.
    pub main_panel: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the dashboard layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    // Vertical: status(1) | middle(fill) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(area);

    let status_bar = vertical[0];
    let middle = vertical[1];
    let help_bar = vertical[2];

    // Horizontal: sidebar (30%) | main panel (70%)
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(middle);

    let sidebar = horizontal[0];
    let main_panel = horizontal[1];

    // Sidebar vertical: pages(5) | statistics(fill) | teams(35%)
    let sidebar_sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Percentage(35),
        ])
        .split(sidebar);

    AppLayout {
        status_bar,
        pages: sidebar_sections[0],
        stats: sidebar_sections[1],
        teams: sidebar_sections[2],
        main_panel,
        help_bar,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

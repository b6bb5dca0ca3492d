// TUI widget modules for each dashboard panel.

pub mod data_error;
pub mod help_bar;
pub mod placeholder;
pub mod ranking;
pub mod sidebar;
pub mod status_bar;

use ratatui::style::{Color, Style};

/// Border style for a panel; cyan when it has keyboard focus.
pub fn focused_border_style(focused: bool, base: Style) -> Style {
    if focused {
        base.fg(Color::Cyan)
    } else {
        base
    }
}

// Keyboard input handling.
//
// Translates crossterm key events into ViewState mutations (page switching,
// sidebar selection, scrolling). Only quitting leaves the TUI loop.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use kings_core::pages::Page;

use super::{Focus, ViewState};

/// Commands that leave the TUI loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    Quit,
}

/// Page size for PageUp/PageDown scrolling.
const PAGE_SIZE: isize = 10;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the loop should act on it; everything
/// else is applied to `view_state` directly.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // On Windows crossterm emits both Press and Release; ignore the latter.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return Some(UserCommand::Quit),

        // Page switching
        KeyCode::Char('1') => view_state.set_page(Page::Ranking),
        KeyCode::Char('2') => view_state.set_page(Page::Players),
        KeyCode::Char('3') => view_state.set_page(Page::Teams),

        // Focus cycling
        KeyCode::Tab => view_state.focus = view_state.focus.next(),
        KeyCode::BackTab => view_state.focus = view_state.focus.prev(),

        // Navigation within the focused panel
        KeyCode::Up | KeyCode::Char('k') => move_focused(view_state, -1),
        KeyCode::Down | KeyCode::Char('j') => move_focused(view_state, 1),

        KeyCode::PageUp => view_state.scroll_results(-PAGE_SIZE),
        KeyCode::PageDown => view_state.scroll_results(PAGE_SIZE),
        KeyCode::Home => view_state.results_scroll = 0,

        _ => {}
    }
    None
}

/// Apply an up/down step to whichever panel has focus.
fn move_focused(view_state: &mut ViewState, delta: isize) {
    match view_state.focus {
        Focus::Stats => view_state.move_stat(delta),
        Focus::Teams => view_state.move_team(delta),
        Focus::Results => view_state.scroll_results(delta),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` holding the load status, the sidebar selection,
// and the page model built from them. Input mutates the selection and
// rebuilds the model; the render tick only draws it.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Frame;
use tracing::debug;

use kings_core::config::RankingConfig;
use kings_core::pages::{build_page, DataStatus, Page, PageModel, Selection};
use kings_core::ranking::selectors::{stat_choices, team_choices};
use kings_core::ranking::TeamFilter;

use input::UserCommand;
use layout::build_layout;

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

/// Which panel receives the navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Stats,
    Teams,
    Results,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Stats => Focus::Teams,
            Focus::Teams => Focus::Results,
            Focus::Results => Focus::Stats,
        }
    }

    pub fn prev(self) -> Focus {
        match self {
            Focus::Stats => Focus::Results,
            Focus::Teams => Focus::Stats,
            Focus::Results => Focus::Teams,
        }
    }
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state: the load status, the sidebar selection, and the model of
/// the active page.
pub struct ViewState {
    /// Active page.
    pub page: Page,
    /// Outcome of the session's data load.
    pub status: DataStatus,
    /// Statistic names in selector order.
    pub stat_choices: Vec<String>,
    /// Team names, without the all-teams entry.
    pub team_choices: Vec<String>,
    /// Label of the all-teams entry at the top of the team list.
    pub all_teams_label: String,
    /// Index into `stat_choices`.
    pub stat_index: usize,
    /// 0 is the all-teams entry; `i` is `team_choices[i - 1]`.
    pub team_index: usize,
    /// Panel receiving navigation keys.
    pub focus: Focus,
    /// First visible row of the results table.
    pub results_scroll: usize,
    /// Render model of the active page, rebuilt on every selection change.
    pub model: PageModel,
}

impl ViewState {
    pub fn new(status: DataStatus, ranking: &RankingConfig) -> Self {
        let (stats, teams) = match status.data() {
            Some(data) => (
                stat_choices(data, &ranking.featured_stats),
                team_choices(data),
            ),
            None => (Vec::new(), Vec::new()),
        };

        let mut state = ViewState {
            page: Page::default(),
            status,
            stat_choices: stats,
            team_choices: teams,
            all_teams_label: ranking.all_teams_label.clone(),
            stat_index: 0,
            team_index: 0,
            focus: Focus::default(),
            results_scroll: 0,
            model: PageModel::Placeholder {
                title: "",
                message: "",
            },
        };
        state.refresh();
        state
    }

    pub fn data_ready(&self) -> bool {
        self.status.data().is_some()
    }

    /// Current sidebar selection.
    pub fn selection(&self) -> Selection {
        let team = match self.team_index {
            0 => TeamFilter::AllTeams,
            i => self
                .team_choices
                .get(i - 1)
                .map(|t| TeamFilter::Team(t.clone()))
                .unwrap_or_default(),
        };
        Selection {
            stat_name: self.stat_choices.get(self.stat_index).cloned(),
            team,
        }
    }

    /// Number of entries in the team list, including the all-teams entry.
    pub fn team_entries(&self) -> usize {
        self.team_choices.len() + 1
    }

    /// Rebuild the page model from the current page and selection.
    pub fn refresh(&mut self) {
        let selection = self.selection();
        debug!("rebuilding {:?} page for {:?}", self.page, selection);
        self.model = build_page(self.page, &self.status, &selection);
    }

    pub fn set_page(&mut self, page: Page) {
        if self.page != page {
            self.page = page;
            self.results_scroll = 0;
            self.refresh();
        }
    }

    /// Move the statistic selection by `delta`, clamped to the list.
    pub fn move_stat(&mut self, delta: isize) {
        let next = step(self.stat_index, delta, self.stat_choices.len());
        if next != self.stat_index {
            self.stat_index = next;
            self.results_scroll = 0;
            self.refresh();
        }
    }

    /// Move the team selection by `delta`, clamped to the list.
    pub fn move_team(&mut self, delta: isize) {
        if !self.data_ready() {
            return;
        }
        let next = step(self.team_index, delta, self.team_entries());
        if next != self.team_index {
            self.team_index = next;
            self.results_scroll = 0;
            self.refresh();
        }
    }

    /// Number of rows in the current results table.
    pub fn result_count(&self) -> usize {
        match &self.model {
            PageModel::Ranking(view) => view.outcome.rows().len(),
            _ => 0,
        }
    }

    pub fn scroll_results(&mut self, delta: isize) {
        let max = self.result_count().saturating_sub(1);
        self.results_scroll = step(self.results_scroll, delta, max + 1);
    }
}

/// `index + delta`, clamped to `0..len`.
fn step(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.saturating_add_signed(delta).min(len - 1)
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::sidebar::render_pages(frame, layout.pages, state);
    widgets::sidebar::render_stats(frame, layout.stats, state);
    widgets::sidebar::render_teams(frame, layout.teams, state);
    render_main_panel(frame, &layout, state);
    widgets::help_bar::render(frame, layout.help_bar, state);
}

fn render_main_panel(frame: &mut Frame, layout: &layout::AppLayout, state: &ViewState) {
    match &state.model {
        PageModel::Ranking(view) => {
            widgets::ranking::render(
                frame,
                layout.main_panel,
                view,
                state.results_scroll,
                state.focus == Focus::Results,
            )
        }
        PageModel::Placeholder { title, message } => {
            widgets::placeholder::render(frame, layout.main_panel, title, message)
        }
        PageModel::DataUnavailable {
            error,
            hint,
            listing,
        } => widgets::data_error::render(frame, layout.main_panel, error, hint, listing),
    }
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Loops over keyboard input and render ticks until the user quits.
/// 4. Restores the terminal on exit.
pub async fn run(mut view_state: ViewState) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut event_stream = EventStream::new();

    // ~30fps
    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result = loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(UserCommand::Quit) = input::handle_key(key_event, &mut view_state) {
                            break Ok(());
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse and resize events: the next tick redraws.
                    }
                    Some(Err(e)) => break Err(e.into()),
                    None => break Ok(()),
                }
            }

            _ = render_tick.tick() => {
                if let Err(e) = terminal.draw(|frame| render_frame(frame, &view_state)) {
                    break Err(e.into());
                }
            }
        }
    };

    ratatui::restore();

    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

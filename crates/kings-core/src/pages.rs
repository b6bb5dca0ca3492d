// Dashboard pages and the render models they produce.
//
// Each page is a pure function of the load status and the current sidebar
// selection; the front-end only draws the resulting `PageModel`.

use std::path::Path;
use std::sync::Arc;

use crate::config::DataPaths;
use crate::data::{DataLoadError, LeagueData};
use crate::ranking::selectors::stat_description;
use crate::ranking::{rank, RankOutcome, TeamFilter};

/// Shown when a statistic has no description.
pub const DESCRIPTION_UNAVAILABLE: &str = "(not available)";

/// Body of the pages that have no content yet.
pub const UNDER_DEVELOPMENT: &str = "Page under development...";

/// Navigable dashboard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Ranking,
    Players,
    Teams,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Ranking, Page::Players, Page::Teams];

    /// Short label for navigation.
    pub fn label(self) -> &'static str {
        match self {
            Page::Ranking => "Ranking",
            Page::Players => "Players",
            Page::Teams => "Teams",
        }
    }

    /// Heading shown above the page content.
    pub fn title(self) -> &'static str {
        match self {
            Page::Ranking => "Ranking by Statistic",
            Page::Players => "Player Profiles",
            Page::Teams => "Team Statistics",
        }
    }
}

/// Outcome of the one data load attempted per session.
#[derive(Debug, Clone)]
pub enum DataStatus {
    Ready(Arc<LeagueData>),
    Failed {
        error: String,
        hint: String,
        /// Contents of the directory expected to hold the data files.
        listing: String,
    },
}

impl DataStatus {
    /// Turn a load result into a status, keeping the raw error text. On
    /// failure the data directory is listed so a misplaced file shows up.
    pub fn from_load(
        result: Result<Arc<LeagueData>, DataLoadError>,
        paths: &DataPaths,
    ) -> Self {
        match result {
            Ok(data) => DataStatus::Ready(data),
            Err(e) => DataStatus::Failed {
                error: e.to_string(),
                hint: format!(
                    "Check that '{}' and '{}' are present next to the app.",
                    paths.players_meta, paths.stats_long
                ),
                listing: describe_data_dir(paths),
            },
        }
    }

    pub fn data(&self) -> Option<&LeagueData> {
        match self {
            DataStatus::Ready(data) => Some(data.as_ref()),
            DataStatus::Failed { .. } => None,
        }
    }
}

/// Sidebar selection driving the ranking page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub stat_name: Option<String>,
    pub team: TeamFilter,
}

/// Ranking page content.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingView {
    pub stat_name: Option<String>,
    pub description: String,
    pub outcome: RankOutcome,
}

/// What the front-end should draw for a page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageModel {
    Ranking(RankingView),
    Placeholder {
        title: &'static str,
        message: &'static str,
    },
    DataUnavailable {
        error: String,
        hint: String,
        listing: String,
    },
}

/// One-line listing of the directory holding the statistics file.
pub fn describe_data_dir(paths: &DataPaths) -> String {
    let dir = Path::new(&paths.stats_long)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    match std::fs::read_dir(dir) {
        Ok(entries) => {
            let mut names: Vec<String> = entries
                .filter_map(Result::ok)
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect();
            names.sort();
            if names.is_empty() {
                format!("{} is empty", dir.display())
            } else {
                format!("Files in {}: {}", dir.display(), names.join(", "))
            }
        }
        Err(e) => format!("cannot list {}: {e}", dir.display()),
    }
}

/// Build the render model of `page`.
pub fn build_page(page: Page, status: &DataStatus, selection: &Selection) -> PageModel {
    let data = match status {
        DataStatus::Ready(data) => data,
        DataStatus::Failed {
            error,
            hint,
            listing,
        } => {
            return PageModel::DataUnavailable {
                error: error.clone(),
                hint: hint.clone(),
                listing: listing.clone(),
            };
        }
    };

    match page {
        Page::Ranking => PageModel::Ranking(ranking_view(data, selection)),
        Page::Players | Page::Teams => PageModel::Placeholder {
            title: page.title(),
            message: UNDER_DEVELOPMENT,
        },
    }
}

/// Ranking page content for the selection.
pub fn ranking_view(data: &LeagueData, selection: &Selection) -> RankingView {
    let Some(stat_name) = selection.stat_name.as_deref() else {
        return RankingView {
            stat_name: None,
            description: DESCRIPTION_UNAVAILABLE.to_string(),
            outcome: RankOutcome::NoQualifyingRecords,
        };
    };

    RankingView {
        stat_name: Some(stat_name.to_string()),
        description: stat_description(data, stat_name)
            .unwrap_or(DESCRIPTION_UNAVAILABLE)
            .to_string(),
        outcome: rank(data, stat_name, &selection.team),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

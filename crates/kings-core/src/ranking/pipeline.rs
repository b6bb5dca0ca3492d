// Ranking of players for one statistic.
//
// Select rows of the statistic, optionally restrict to one team, drop empty
// and non-positive totals, order by total (descending, stable), then attach
// player metadata and the display value.

use tracing::debug;

use super::display::{display_value, DisplayValue};
use crate::data::{LeagueData, StatRecord};

/// Team restriction for a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TeamFilter {
    #[default]
    AllTeams,
    Team(String),
}

impl TeamFilter {
    pub fn matches(&self, record: &StatRecord) -> bool {
        match self {
            TeamFilter::AllTeams => true,
            TeamFilter::Team(name) => record.team_name == *name,
        }
    }
}

/// One ranked, joined, formatted row ready for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub player_id: String,
    pub short_name: String,
    pub team_name: String,
    /// Absent when the player has no metadata row or no image.
    pub image_url: Option<String>,
    /// Raw total the row was ordered by.
    pub stat_total: f64,
    pub value: DisplayValue,
    /// Source-supplied overall rank.
    pub stat_ranking: Option<String>,
}

/// Result of a ranking request.
#[derive(Debug, Clone, PartialEq)]
pub enum RankOutcome {
    /// No row of the statistic passed the filters. Not an error.
    NoQualifyingRecords,
    Ranked(Vec<DisplayRow>),
}

impl RankOutcome {
    pub fn rows(&self) -> &[DisplayRow] {
        match self {
            RankOutcome::NoQualifyingRecords => &[],
            RankOutcome::Ranked(rows) => rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }
}

/// Rank players on `stat_name`, optionally limited to one team.
pub fn rank(data: &LeagueData, stat_name: &str, team: &TeamFilter) -> RankOutcome {
    let mut qualifying: Vec<(&StatRecord, f64)> = data
        .stats()
        .iter()
        .filter(|r| r.stat_name == stat_name && team.matches(r))
        .filter_map(|r| r.total().filter(|t| *t > 0.0).map(|t| (r, t)))
        .collect();

    if qualifying.is_empty() {
        debug!("no qualifying rows for '{}' ({:?})", stat_name, team);
        return RankOutcome::NoQualifyingRecords;
    }

    // `sort_by` is stable, so equal totals keep source order.
    qualifying.sort_by(|(_, a), (_, b)| b.total_cmp(a));

    let rows: Vec<DisplayRow> = qualifying
        .into_iter()
        .map(|(record, total)| DisplayRow {
            player_id: record.player_id.clone(),
            short_name: record.short_name.clone(),
            team_name: record.team_name.clone(),
            image_url: data
                .player(&record.player_id)
                .and_then(|p| p.image_url.clone()),
            stat_total: total,
            value: display_value(record, data),
            stat_ranking: record.stat_ranking.clone(),
        })
        .collect();

    debug!("ranked {} rows for '{}' ({:?})", rows.len(), stat_name, team);
    RankOutcome::Ranked(rows)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

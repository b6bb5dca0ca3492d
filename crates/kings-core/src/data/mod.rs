// League data: the two input tables and the lookups built over them.
//
// `loader` parses the CSV files, `store` memoizes the loaded pair for the
// whole process.

pub mod loader;
pub mod store;

use std::collections::{BTreeMap, HashMap};

use tracing::warn;

pub use loader::{load_tables, DataLoadError};
pub use store::DataStore;

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// One row of the player metadata table.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerMeta {
    pub player_id: String,
    pub image_url: Option<String>,
    /// Every other column of the row, keyed by header name.
    pub extra: BTreeMap<String, String>,
}

/// One (player, statistic) row of the long-format statistics table.
#[derive(Debug, Clone, PartialEq)]
pub struct StatRecord {
    pub player_id: String,
    pub team_name: String,
    pub short_name: String,
    pub stat_code: String,
    pub stat_name: String,
    pub stat_description: Option<String>,
    pub stat_total: Option<f64>,
    /// Rank as supplied by the data source; carried through verbatim.
    pub stat_ranking: Option<String>,
}

impl StatRecord {
    /// The statistic total, treating NaN the same as an empty cell.
    pub fn total(&self) -> Option<f64> {
        self.stat_total.filter(|v| !v.is_nan())
    }
}

// ---------------------------------------------------------------------------
// LeagueData
// ---------------------------------------------------------------------------

/// Both tables, read-only after construction, plus lookup indexes.
#[derive(Debug, Clone, Default)]
pub struct LeagueData {
    players: Vec<PlayerMeta>,
    stats: Vec<StatRecord>,
    /// player_id -> index into `players` (first occurrence wins).
    player_index: HashMap<String, usize>,
    /// player_id -> stat_code -> index into `stats` (first occurrence wins).
    stat_index: HashMap<String, HashMap<String, usize>>,
}

impl LeagueData {
    pub fn new(players: Vec<PlayerMeta>, stats: Vec<StatRecord>) -> Self {
        let mut player_index = HashMap::with_capacity(players.len());
        for (i, player) in players.iter().enumerate() {
            if player_index.contains_key(&player.player_id) {
                warn!(
                    "duplicate player_id '{}' in player metadata, keeping first row",
                    player.player_id
                );
                continue;
            }
            player_index.insert(player.player_id.clone(), i);
        }

        let mut stat_index: HashMap<String, HashMap<String, usize>> = HashMap::new();
        for (i, record) in stats.iter().enumerate() {
            stat_index
                .entry(record.player_id.clone())
                .or_default()
                .entry(record.stat_code.clone())
                .or_insert(i);
        }

        LeagueData {
            players,
            stats,
            player_index,
            stat_index,
        }
    }

    pub fn players(&self) -> &[PlayerMeta] {
        &self.players
    }

    /// All statistic rows in source order.
    pub fn stats(&self) -> &[StatRecord] {
        &self.stats
    }

    pub fn player(&self, player_id: &str) -> Option<&PlayerMeta> {
        self.player_index.get(player_id).map(|&i| &self.players[i])
    }

    /// First statistic row for `player_id` with the given `stat_code`.
    pub fn find_stat(&self, player_id: &str, stat_code: &str) -> Option<&StatRecord> {
        self.stat_index
            .get(player_id)
            .and_then(|codes| codes.get(stat_code))
            .map(|&i| &self.stats[i])
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

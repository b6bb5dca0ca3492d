// CSV loading for the player metadata and long-format statistics tables.
//
// Both tables are read in full before either is handed out, so a caller
// either gets the complete pair or a single `DataLoadError`.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use super::{LeagueData, PlayerMeta, StatRecord};
use crate::config::DataPaths;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("{path} is missing required column `{column}`")]
    MissingColumn { path: String, column: &'static str },
}

// ---------------------------------------------------------------------------
// Column sets
// ---------------------------------------------------------------------------

const PLAYER_COLUMNS: &[&str] = &["player_id", "image_url"];

const STAT_COLUMNS: &[&str] = &[
    "player_id",
    "team_name",
    "shortName",
    "stat_code",
    "stat_name",
    "stat_total",
];

// ---------------------------------------------------------------------------
// Raw CSV serde struct (private)
// ---------------------------------------------------------------------------

/// Statistics CSV row. Columns not named here are ignored; empty cells in
/// optional columns come through as `None`.
#[derive(Debug, Deserialize)]
struct RawStatRow {
    player_id: String,
    #[serde(default)]
    team_name: String,
    #[serde(rename = "shortName", default)]
    short_name: String,
    stat_code: String,
    #[serde(default)]
    stat_name: String,
    #[serde(default)]
    stat_description: Option<String>,
    stat_total: Option<f64>,
    #[serde(default)]
    stat_ranking: Option<String>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Canonical form of a player id so both tables join on the same key.
///
/// Ids exported as floats ("12.0") are reduced to their integer form ("12").
pub fn normalize_id(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.strip_suffix(".0") {
        Some(int_part)
            if !int_part.is_empty() && int_part.bytes().all(|b| b.is_ascii_digit()) =>
        {
            int_part.to_string()
        }
        _ => trimmed.to_string(),
    }
}

fn csv_reader<R: Read>(rdr: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(rdr)
}

fn csv_error(source_name: &str, source: csv::Error) -> DataLoadError {
    DataLoadError::Csv {
        path: source_name.to_string(),
        source,
    }
}

/// Fail with `MissingColumn` for the first required header that is absent.
fn require_columns(
    headers: &csv::StringRecord,
    required: &[&'static str],
    source_name: &str,
) -> Result<(), DataLoadError> {
    for &column in required {
        if !headers.iter().any(|h| h == column) {
            return Err(DataLoadError::MissingColumn {
                path: source_name.to_string(),
                column,
            });
        }
    }
    Ok(())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Reader-based loaders (enable testing without temp files)
// ---------------------------------------------------------------------------

/// Parse the player metadata table. `source_name` only labels errors.
pub fn read_players<R: Read>(
    rdr: R,
    source_name: &str,
) -> Result<Vec<PlayerMeta>, DataLoadError> {
    let mut reader = csv_reader(rdr);
    let headers = reader
        .headers()
        .map_err(|e| csv_error(source_name, e))?
        .clone();
    require_columns(&headers, PLAYER_COLUMNS, source_name)?;

    let mut players = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| csv_error(source_name, e))?;

        let mut player_id = String::new();
        let mut image_url = None;
        let mut extra = BTreeMap::new();
        for (header, value) in headers.iter().zip(record.iter()) {
            match header {
                "player_id" => player_id = normalize_id(value),
                "image_url" => image_url = non_empty(Some(value.to_string())),
                _ => {
                    extra.insert(header.to_string(), value.to_string());
                }
            }
        }

        if player_id.is_empty() {
            warn!("skipping player metadata row without player_id in {}", source_name);
            continue;
        }
        players.push(PlayerMeta {
            player_id,
            image_url,
            extra,
        });
    }
    Ok(players)
}

/// Parse the long-format statistics table. `source_name` only labels errors.
pub fn read_stats<R: Read>(
    rdr: R,
    source_name: &str,
) -> Result<Vec<StatRecord>, DataLoadError> {
    let mut reader = csv_reader(rdr);
    let headers = reader
        .headers()
        .map_err(|e| csv_error(source_name, e))?
        .clone();
    require_columns(&headers, STAT_COLUMNS, source_name)?;

    let mut stats = Vec::new();
    for result in reader.deserialize::<RawStatRow>() {
        let raw = result.map_err(|e| csv_error(source_name, e))?;
        stats.push(StatRecord {
            player_id: normalize_id(&raw.player_id),
            team_name: raw.team_name,
            short_name: raw.short_name,
            stat_code: raw.stat_code,
            stat_name: raw.stat_name,
            stat_description: non_empty(raw.stat_description),
            stat_total: raw.stat_total,
            stat_ranking: non_empty(raw.stat_ranking),
        });
    }
    Ok(stats)
}

// ---------------------------------------------------------------------------
// Public path-based loaders
// ---------------------------------------------------------------------------

fn open(path: &Path) -> Result<std::fs::File, DataLoadError> {
    std::fs::File::open(path).map_err(|e| DataLoadError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load player metadata from a CSV file.
pub fn load_players(path: &Path) -> Result<Vec<PlayerMeta>, DataLoadError> {
    read_players(open(path)?, &path.display().to_string())
}

/// Load the long-format statistics from a CSV file.
pub fn load_stats(path: &Path) -> Result<Vec<StatRecord>, DataLoadError> {
    read_stats(open(path)?, &path.display().to_string())
}

/// Load both tables. Any failure discards whatever was already read.
pub fn load_tables(paths: &DataPaths) -> Result<LeagueData, DataLoadError> {
    let players = load_players(Path::new(&paths.players_meta))?;
    let stats = load_stats(Path::new(&paths.stats_long))?;

    info!(
        "Loaded {} players from {} and {} stat rows from {}",
        players.len(),
        paths.players_meta,
        stats.len(),
        paths.stats_long
    );

    Ok(LeagueData::new(players, stats))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const STATS_HEADER: &str =
        "player_id,team_name,shortName,stat_code,stat_name,stat_description,stat_total,stat_ranking";

    #[test]
    fn players_csv_keeps_extra_columns() {
        let csv_data = "\
player_id,name,image_url,position
1,Rafa Souza,https://img.example/1.png,GK
2,Leo Lima,,FW";

        let players = read_players(csv_data.as_bytes(), "meta").unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].player_id, "1");
        assert_eq!(
            players[0].image_url.as_deref(),
            Some("https://img.example/1.png")
        );
        assert_eq!(players[0].extra["name"], "Rafa Souza");
        assert_eq!(players[0].extra["position"], "GK");
        assert!(!players[0].extra.contains_key("player_id"));
        assert_eq!(players[1].image_url, None);
    }

    #[test]
    fn players_csv_missing_image_column_fails() {
        let csv_data = "player_id,name\n1,Rafa";
        match read_players(csv_data.as_bytes(), "meta") {
            Err(DataLoadError::MissingColumn { path, column }) => {
                assert_eq!(path, "meta");
                assert_eq!(column, "image_url");
            }
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn players_csv_skips_blank_ids() {
        let csv_data = "player_id,image_url\n ,a.png\n3,b.png";
        let players = read_players(csv_data.as_bytes(), "meta").unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].player_id, "3");
    }

    #[test]
    fn players_csv_ragged_row_is_error() {
        let csv_data = "player_id,image_url\n1,a.png,extra";
        assert!(matches!(
            read_players(csv_data.as_bytes(), "meta"),
            Err(DataLoadError::Csv { .. })
        ));
    }

    #[test]
    fn stats_csv_parses_rows_in_order() {
        let csv_data = format!(
            "{STATS_HEADER}
10,Furia FC,Rafa,GOL-R,Goals,Goals scored,5,1
11,Furia FC,Leo,GOL-R,Goals,Goals scored,3,2"
        );

        let stats = read_stats(csv_data.as_bytes(), "stats").unwrap();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].player_id, "10");
        assert_eq!(stats[0].team_name, "Furia FC");
        assert_eq!(stats[0].short_name, "Rafa");
        assert_eq!(stats[0].stat_code, "GOL-R");
        assert_eq!(stats[0].stat_name, "Goals");
        assert_eq!(stats[0].stat_description.as_deref(), Some("Goals scored"));
        assert_eq!(stats[0].stat_total, Some(5.0));
        assert_eq!(stats[0].stat_ranking.as_deref(), Some("1"));
        assert_eq!(stats[1].short_name, "Leo");
    }

    #[test]
    fn stats_csv_empty_cells_are_none() {
        let csv_data = format!("{STATS_HEADER}\n10,Furia FC,Rafa,MVP,MVP,,,");
        let stats = read_stats(csv_data.as_bytes(), "stats").unwrap();
        assert_eq!(stats[0].stat_total, None);
        assert_eq!(stats[0].stat_description, None);
        assert_eq!(stats[0].stat_ranking, None);
    }

    #[test]
    fn stats_csv_nan_total_is_missing() {
        let csv_data = format!("{STATS_HEADER}\n10,Furia FC,Rafa,MVP,MVP,,NaN,");
        let stats = read_stats(csv_data.as_bytes(), "stats").unwrap();
        assert_eq!(stats[0].total(), None);
    }

    #[test]
    fn stats_csv_optional_columns_may_be_absent() {
        let csv_data = "\
player_id,team_name,shortName,stat_code,stat_name,stat_total
10,Furia FC,Rafa,ASS-V,Assists,2";
        let stats = read_stats(csv_data.as_bytes(), "stats").unwrap();
        assert_eq!(stats[0].stat_total, Some(2.0));
        assert_eq!(stats[0].stat_description, None);
        assert_eq!(stats[0].stat_ranking, None);
    }

    #[test]
    fn stats_csv_missing_total_column_fails() {
        let csv_data = "player_id,team_name,shortName,stat_code,stat_name\n1,A,B,C,D";
        match read_stats(csv_data.as_bytes(), "stats") {
            Err(DataLoadError::MissingColumn { column, .. }) => assert_eq!(column, "stat_total"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn stats_csv_non_numeric_total_is_error() {
        let csv_data = format!("{STATS_HEADER}\n10,Furia FC,Rafa,MVP,MVP,,lots,");
        assert!(matches!(
            read_stats(csv_data.as_bytes(), "stats"),
            Err(DataLoadError::Csv { .. })
        ));
    }

    #[test]
    fn ids_are_trimmed_and_float_suffix_removed() {
        assert_eq!(normalize_id(" 12 "), "12");
        assert_eq!(normalize_id("12.0"), "12");
        assert_eq!(normalize_id("12.5"), "12.5");
        assert_eq!(normalize_id("abc.0"), "abc.0");
        assert_eq!(normalize_id(".0"), ".0");
    }

    #[test]
    fn float_ids_join_with_integer_ids() {
        let meta = read_players("player_id,image_url\n12,a.png".as_bytes(), "meta").unwrap();
        let stats = read_stats(
            format!("{STATS_HEADER}\n12.0,Furia FC,Rafa,MVP,MVP,,1,").as_bytes(),
            "stats",
        )
        .unwrap();
        let data = LeagueData::new(meta, stats);
        let record = &data.stats()[0];
        assert!(data.player(&record.player_id).is_some());
    }

    #[test]
    fn load_tables_fails_when_a_file_is_missing() {
        let dir = std::env::temp_dir().join("kings_loader_missing_stats");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let meta_path = dir.join("players_meta.csv");
        std::fs::write(&meta_path, "player_id,image_url\n1,a.png\n").unwrap();

        let paths = DataPaths {
            players_meta: meta_path.display().to_string(),
            stats_long: dir.join("stats_long.csv").display().to_string(),
        };
        match load_tables(&paths) {
            Err(DataLoadError::Io { path, .. }) => assert!(path.ends_with("stats_long.csv")),
            other => panic!("expected Io error, got {other:?}"),
        }

        let _ = std::fs::remove_dir_all(&dir);
    }
}

// Configuration loading and parsing (dashboard.toml).

use serde::Deserialize;
use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// File name of the dashboard config inside `config/` and `defaults/`.
pub const CONFIG_FILE_NAME: &str = "dashboard.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// dashboard.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub data: DataPaths,
    pub ranking: RankingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Locations of the two input tables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataPaths {
    pub players_meta: String,
    pub stats_long: String,
}

impl Default for DataPaths {
    fn default() -> Self {
        DataPaths {
            players_meta: "players_meta.csv".to_string(),
            stats_long: "stats_long.csv".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    /// Statistic names shown first in the selector, in this order.
    #[serde(default)]
    pub featured_stats: Vec<String>,
    /// Sidebar label for the "no team filter" entry.
    #[serde(default = "default_all_teams_label")]
    pub all_teams_label: String,
}

fn default_all_teams_label() -> String {
    "All teams".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub dir: String,
    pub file: String,
    /// Default `EnvFilter` directive; `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            dir: "logs".to_string(),
            file: "kings-dashboard.log".to_string(),
            filter: "kings_tui=info,kings_core=info,warn".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/dashboard.toml` relative to `base_dir`.
///
/// This does not install the shipped default; prefer `load_config()`.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = config_path(base_dir);
    let text = std::fs::read_to_string(&path)
        .map_err(|_| ConfigError::FileNotFound { path: path.clone() })?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Install `defaults/dashboard.toml` as `config/dashboard.toml` when the
/// latter is missing. Returns the installed path, or `None` if a config was
/// already present. An existing config is never overwritten.
pub fn ensure_config_file(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let target = config_path(base_dir);
    if target.exists() {
        return Ok(None);
    }

    let source = base_dir.join("defaults").join(CONFIG_FILE_NAME);
    let content = std::fs::read(&source).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!(
            "no {} and cannot read {}: {e}",
            target.display(),
            source.display()
        ),
    })?;

    if let Some(dir) = target.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to create {}: {e}", dir.display()),
        })?;
    }

    // `create_new` so a config written concurrently is left alone.
    let mut dest = match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&target)
    {
        Ok(dest) => dest,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => return Ok(None),
        Err(e) => {
            return Err(ConfigError::DefaultsCopyError {
                message: format!("failed to create {}: {e}", target.display()),
            })
        }
    };
    dest.write_all(&content)
        .map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to write {}: {e}", target.display()),
        })?;

    info!("installed default config at {}", target.display());
    Ok(Some(target))
}

/// Load the config relative to the working directory, installing the
/// shipped default on first run.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("cannot resolve working directory: {e}"),
    })?;
    ensure_config_file(&cwd)?;
    load_config_from(&cwd)
}

fn config_path(base_dir: &Path) -> PathBuf {
    base_dir.join("config").join(CONFIG_FILE_NAME)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    let path_fields: &[(&str, &str)] = &[
        ("data.players_meta", config.data.players_meta.as_str()),
        ("data.stats_long", config.data.stats_long.as_str()),
    ];
    for (name, val) in path_fields {
        if val.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must not be empty".into(),
            });
        }
    }

    let mut seen = HashSet::new();
    for stat in &config.ranking.featured_stats {
        if stat.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: "ranking.featured_stats".into(),
                message: "entries must not be empty".into(),
            });
        }
        if !seen.insert(stat.as_str()) {
            return Err(ConfigError::ValidationError {
                field: "ranking.featured_stats".into(),
                message: format!("duplicate entry \"{stat}\""),
            });
        }
    }

    if config.ranking.all_teams_label.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "ranking.all_teams_label".into(),
            message: "must not be empty".into(),
        });
    }

    if config.logging.file.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "logging.file".into(),
            message: "must not be empty".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

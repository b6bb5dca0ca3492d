// League dashboard entry point.
//
// Startup sequence:
// 1. Load config (copying defaults on first run)
// 2. Initialize tracing (log to file, not terminal)
// 3. Load the league tables once through the process-wide store
// 4. Build the view state (failure becomes the data error page)
// 5. Run the TUI until the user quits

use kings_core::config::{self, LoggingConfig};
use kings_core::data::store;
use kings_core::pages::DataStatus;
use kings_tui::tui;

use anyhow::Context;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Load config
    let config = config::load_config().context("failed to load configuration")?;

    // 2. Initialize tracing; the log settings come from config
    init_tracing(&config.logging)?;
    info!("League dashboard starting up");
    info!(
        "Config loaded: players={}, stats={}, {} featured statistics",
        config.data.players_meta,
        config.data.stats_long,
        config.ranking.featured_stats.len()
    );

    // 3. Load the tables; a failure is shown in the UI, not returned
    let data_store = store::install_global(config.data.clone());
    let loaded = data_store.load();
    match &loaded {
        Ok(data) => info!(
            "Loaded {} players and {} stat rows",
            data.players().len(),
            data.stats().len()
        ),
        Err(e) => error!("Data load failed: {}", e),
    }

    // 4. Build the view state
    let status = DataStatus::from_load(loaded, data_store.paths());
    let view_state = tui::ViewState::new(status, &config.ranking);

    // 5. Run the TUI event loop (blocking until user quits)
    if let Err(e) = tui::run(view_state).await {
        error!("TUI error: {}", e);
        return Err(e);
    }

    info!("League dashboard shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join(&logging.dir);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let log_file = std::fs::File::create(log_dir.join(&logging.file))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&logging.filter)),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}

// Process-wide memoized data load.
//
// The first successful `load()` reads both CSV files; later calls hand out the
// same `Arc<LeagueData>` without touching the disk. Failures are not cached,
// so a later call reads the files again.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tracing::{debug, info, warn};

use super::loader::{load_tables, DataLoadError};
use super::LeagueData;
use crate::config::DataPaths;

/// Lazily loaded, shared copy of the league tables.
#[derive(Debug)]
pub struct DataStore {
    paths: DataPaths,
    cached: Mutex<Option<Arc<LeagueData>>>,
}

impl DataStore {
    pub fn new(paths: DataPaths) -> Self {
        DataStore {
            paths,
            cached: Mutex::new(None),
        }
    }

    /// The file locations this store reads from.
    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    /// Return the cached tables, loading them on first use.
    ///
    /// The lock is held across the read so concurrent callers trigger at most
    /// one physical load.
    pub fn load(&self) -> Result<Arc<LeagueData>, DataLoadError> {
        let mut slot = self.cached.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(data) = slot.as_ref() {
            debug!("serving league data from cache");
            return Ok(Arc::clone(data));
        }

        let data = Arc::new(load_tables(&self.paths)?);
        *slot = Some(Arc::clone(&data));
        Ok(data)
    }

    pub fn is_loaded(&self) -> bool {
        self.cached
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Drop the cached tables; the next `load()` re-reads the files.
    pub fn invalidate(&self) {
        let mut slot = self.cached.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.take().is_some() {
            info!("league data cache invalidated");
        }
    }
}

// ---------------------------------------------------------------------------
// Global instance
// ---------------------------------------------------------------------------

static GLOBAL: OnceLock<DataStore> = OnceLock::new();

/// Install the process-wide store with the given paths.
///
/// The first caller wins; later calls get the existing store back and a
/// warning if their paths differ.
pub fn install_global(paths: DataPaths) -> &'static DataStore {
    let store = GLOBAL.get_or_init(|| DataStore::new(paths.clone()));
    if store.paths != paths {
        warn!(
            "global data store already installed for {} / {}; ignoring {} / {}",
            store.paths.players_meta,
            store.paths.stats_long,
            paths.players_meta,
            paths.stats_long
        );
    }
    store
}

/// The process-wide store, created with the default file names if nothing
/// was installed.
pub fn global() -> &'static DataStore {
    GLOBAL.get_or_init(|| DataStore::new(DataPaths::default()))
}

/// Load the league tables through the process-wide store.
pub fn load() -> Result<Arc<LeagueData>, DataLoadError> {
    global().load()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

use super::loader::{LoadError, load_file};
use super::model::ExerciseDataset;

// ---------------------------------------------------------------------------
// Load-once dataset cache
// ---------------------------------------------------------------------------

static GLOBAL_CACHE: Lazy<DatasetCache> = Lazy::new(DatasetCache::default);

/// Memoizes parsed datasets by path.
///
/// Each path is read at most once per cache; later loads return the same
/// `Arc` without touching the file, so edits to the file are only picked up
/// by a new process. Failed loads are not cached.
#[derive(Default)]
pub struct DatasetCache {
    entries: Mutex<HashMap<PathBuf, Arc<ExerciseDataset>>>,
}

impl DatasetCache {
    /// The process-wide cache, created on first use.
    pub fn global() -> &'static DatasetCache {
        &GLOBAL_CACHE
    }

    /// Return the cached dataset for `path`, loading it on first access.
    pub fn load(&self, path: &Path) -> Result<Arc<ExerciseDataset>, LoadError> {
        // A poisoned lock only means a panic elsewhere; the map itself is intact.
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(dataset) = entries.get(path) {
            log::debug!("Using cached dataset for {}", path.display());
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(load_file(path)?);
        entries.insert(path.to_path_buf(), Arc::clone(&dataset));
        Ok(dataset)
    }
}

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::data::cache::DatasetCache;
use crate::data::filter::{distinct_values, recommend};
use crate::data::loader::LoadError;
use crate::data::model::{EQUIPMENT, ExerciseDataset, ExerciseRecord, MAIN_MUSCLE};

// ---------------------------------------------------------------------------
// Query outcome
// ---------------------------------------------------------------------------

/// Result of pressing the trigger button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Matches(Vec<ExerciseRecord>),
    /// Nothing matched; shown as a warning, the form stays usable.
    Empty,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Dataset that could not be loaded at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub message: String,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset, or why it could not be loaded.
    pub dataset: Result<Arc<ExerciseDataset>, LoadFailure>,

    /// Options for the muscle group selector.
    pub muscle_options: Vec<String>,

    /// Options for the equipment selector.
    pub equipment_options: Vec<String>,

    pub selected_muscle: Option<String>,
    pub selected_equipment: Option<String>,

    /// Outcome of the last query; cleared whenever a selection changes.
    pub outcome: Option<QueryOutcome>,
}

impl AppState {
    /// Load the dataset at `path` through the process-wide cache.
    pub fn load(path: &Path) -> Self {
        Self::from_load_result(path, DatasetCache::global().load(path))
    }

    pub fn from_load_result(path: &Path, result: Result<Arc<ExerciseDataset>, LoadError>) -> Self {
        match result {
            Ok(dataset) => Self::with_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                Self {
                    dataset: Err(LoadFailure {
                        path: path.to_path_buf(),
                        message: e.to_string(),
                    }),
                    muscle_options: Vec::new(),
                    equipment_options: Vec::new(),
                    selected_muscle: None,
                    selected_equipment: None,
                    outcome: None,
                }
            }
        }
    }

    /// Ingest a loaded dataset and preselect the first option of each selector.
    pub fn with_dataset(dataset: Arc<ExerciseDataset>) -> Self {
        let muscle_options = distinct_values(&dataset, MAIN_MUSCLE);
        let equipment_options = distinct_values(&dataset, EQUIPMENT);
        Self {
            selected_muscle: muscle_options.first().cloned(),
            selected_equipment: equipment_options.first().cloned(),
            muscle_options,
            equipment_options,
            dataset: Ok(dataset),
            outcome: None,
        }
    }

    pub fn select_muscle(&mut self, muscle: &str) {
        if self.selected_muscle.as_deref() != Some(muscle) {
            self.selected_muscle = Some(muscle.to_string());
            self.outcome = None;
        }
    }

    pub fn select_equipment(&mut self, equipment: &str) {
        if self.selected_equipment.as_deref() != Some(equipment) {
            self.selected_equipment = Some(equipment.to_string());
            self.outcome = None;
        }
    }

    /// Run the recommendation query for the current selections.
    ///
    /// Does nothing without a dataset or while a selector has no value,
    /// which only happens when the dataset has no usable rows.
    pub fn run_query(&mut self) {
        let (Ok(dataset), Some(muscle), Some(equipment)) = (
            &self.dataset,
            self.selected_muscle.as_deref(),
            self.selected_equipment.as_deref(),
        ) else {
            return;
        };

        let recommendations = recommend(dataset, muscle, equipment);
        self.outcome = Some(if recommendations.is_empty() {
            QueryOutcome::Empty
        } else {
            QueryOutcome::Matches(recommendations)
        });
    }
}

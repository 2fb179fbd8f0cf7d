/// Data layer: core types, loading, caching and filtering.
///
/// Architecture:
/// ```text
///  gym_exercise_dataset.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV, normalize headers → ExerciseDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cache    │  load once per path, share as Arc<ExerciseDataset>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  muscle + equipment containment → Vec<ExerciseRecord>
///   └──────────┘
/// ```

pub mod cache;
pub mod filter;
pub mod loader;
pub mod model;

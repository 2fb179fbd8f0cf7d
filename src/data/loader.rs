use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use super::model::{Cell, DIFFICULTY, ExerciseDataset, NA_VALUES};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("dataset file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid CSV: {0}")]
    Parse(#[from] csv::Error),
    #[error("line {line}: expected at most {expected} fields, found {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("missing required column '{column}'")]
    MissingColumn { column: &'static str },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the exercise dataset from a comma-separated file with a header row.
///
/// Does not cache; see [`super::cache::DatasetCache`] for the load-once path.
pub fn load_file(path: &Path) -> Result<ExerciseDataset, LoadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    let dataset = load_csv(file)?;
    log::info!(
        "Loaded {} exercises from {} with columns {:?}",
        dataset.len(),
        path.display(),
        dataset.column_names
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse CSV text into a dataset.
///
/// * Header names are normalized with [`normalize_headers`].
/// * Empty fields and NA markers ([`NA_VALUES`]) become missing cells; rows
///   shorter than the header are padded with missing cells.
/// * Rows longer than the header are rejected.
pub fn load_csv<R: Read>(input: R) -> Result<ExerciseDataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input);

    let headers = normalize_headers(reader.headers()?.iter().map(str::to_string).collect());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() > headers.len() {
            return Err(LoadError::RaggedRow {
                line: record.position().map_or(0, |p| p.line()),
                expected: headers.len(),
                found: record.len(),
            });
        }
        rows.push(record.iter().map(parse_cell).collect());
    }

    ExerciseDataset::new(headers, rows).map_err(|column| LoadError::MissingColumn { column })
}

fn parse_cell(s: &str) -> Cell {
    if NA_VALUES.contains(&s) {
        None
    } else {
        Some(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Header normalization
// ---------------------------------------------------------------------------

/// Trim every column name, then rename the first one containing
/// `"Difficulty"` (case-sensitive) to exactly `"Difficulty"`.
///
/// Only the first candidate is renamed; later candidates keep their trimmed
/// names and their data, and are reported with a warning.
pub fn normalize_headers(headers: Vec<String>) -> Vec<String> {
    let mut headers: Vec<String> = headers.into_iter().map(|h| h.trim().to_string()).collect();

    let mut candidates = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| h.contains(DIFFICULTY))
        .map(|(i, _)| i);

    if let Some(first) = candidates.next() {
        let ignored: Vec<usize> = candidates.collect();
        if !ignored.is_empty() {
            log::warn!(
                "Using column '{}' as '{DIFFICULTY}'; ignoring other candidates {:?}",
                headers[first],
                ignored.iter().map(|&i| headers[i].as_str()).collect::<Vec<_>>()
            );
        }
        headers[first] = DIFFICULTY.to_string();
    }

    headers
}

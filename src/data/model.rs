use std::fmt;

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

pub const EXERCISE_NAME: &str = "Exercise Name";
pub const EQUIPMENT: &str = "Equipment";
pub const MAIN_MUSCLE: &str = "Main_muscle";
pub const DIFFICULTY: &str = "Difficulty";
pub const PREPARATION: &str = "Preparation";
pub const EXECUTION: &str = "Execution";

/// Field values read as missing, matching the default NA markers of common
/// dataframe CSV readers. Compared exactly, without trimming.
pub const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// The six columns every recommendation is projected to, in display order.
pub const PROJECTED_COLUMNS: [&str; 6] = [
    EXERCISE_NAME,
    EQUIPMENT,
    MAIN_MUSCLE,
    DIFFICULTY,
    PREPARATION,
    EXECUTION,
];

/// A single cell. `None` when the field is empty or an NA marker, or the row
/// is too short.
pub type Cell = Option<String>;

// ---------------------------------------------------------------------------
// ExerciseRecord – one projected row
// ---------------------------------------------------------------------------

/// One recommendation: a dataset row projected to the six display columns.
///
/// Equality and hashing cover all six fields, with a missing value equal to
/// another missing value, which is what de-duplication relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ExerciseRecord {
    pub exercise_name: Cell,
    pub equipment: Cell,
    pub main_muscle: Cell,
    pub difficulty: Cell,
    pub preparation: Cell,
    pub execution: Cell,
}

impl ExerciseRecord {
    /// Short fields shown as bold-labelled lines, with their display labels.
    pub fn summary_fields(&self) -> [(&'static str, FieldValue<'_>); 4] {
        [
            ("Exercise Name", FieldValue(self.exercise_name.as_deref())),
            ("Equipment", FieldValue(self.equipment.as_deref())),
            ("Main Muscle", FieldValue(self.main_muscle.as_deref())),
            ("Difficulty", FieldValue(self.difficulty.as_deref())),
        ]
    }

    /// Free-text fields shown as labelled plain-text blocks.
    pub fn instruction_fields(&self) -> [(&'static str, FieldValue<'_>); 2] {
        [
            ("Preparation", FieldValue(self.preparation.as_deref())),
            ("Execution", FieldValue(self.execution.as_deref())),
        ]
    }
}

/// Display wrapper for a possibly missing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValue<'a>(pub Option<&'a str>);

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(s) => write!(f, "{s}"),
            None => write!(f, "n/a"),
        }
    }
}

// ---------------------------------------------------------------------------
// Schema – resolved positions of the projected columns
// ---------------------------------------------------------------------------

/// Positions of the projected columns inside a dataset row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub exercise_name: usize,
    pub equipment: usize,
    pub main_muscle: usize,
    pub difficulty: usize,
    pub preparation: usize,
    pub execution: usize,
}

impl Schema {
    /// Resolve every projected column against normalized header names.
    /// A name that occurs more than once resolves to its first occurrence.
    /// Returns the first column that cannot be found as the error.
    pub fn resolve(column_names: &[String]) -> Result<Self, &'static str> {
        let mut positions = [0; PROJECTED_COLUMNS.len()];
        for (slot, name) in positions.iter_mut().zip(PROJECTED_COLUMNS) {
            *slot = column_names.iter().position(|c| c == name).ok_or(name)?;
        }
        let [exercise_name, equipment, main_muscle, difficulty, preparation, execution] = positions;
        Ok(Schema {
            exercise_name,
            equipment,
            main_muscle,
            difficulty,
            preparation,
            execution,
        })
    }
}

// ---------------------------------------------------------------------------
// ExerciseDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseDataset {
    /// Normalized column names in file order, including extra columns.
    pub column_names: Vec<String>,
    /// Rows of cells aligned with `column_names`.
    pub rows: Vec<Vec<Cell>>,
    schema: Schema,
}

impl ExerciseDataset {
    /// Build a dataset from normalized column names and rows.
    ///
    /// Rows shorter than the header are padded with missing cells.
    pub fn new(column_names: Vec<String>, mut rows: Vec<Vec<Cell>>) -> Result<Self, &'static str> {
        let schema = Schema::resolve(&column_names)?;
        for row in &mut rows {
            if row.len() < column_names.len() {
                row.resize(column_names.len(), None);
            }
        }
        Ok(ExerciseDataset {
            column_names,
            rows,
            schema,
        })
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    /// Position of the first column carrying `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names.iter().position(|c| c == name)
    }

    /// Project one row to the display record.
    pub fn record(&self, row: &[Cell]) -> ExerciseRecord {
        let cell = |idx: usize| row.get(idx).cloned().flatten();
        ExerciseRecord {
            exercise_name: cell(self.schema.exercise_name),
            equipment: cell(self.schema.equipment),
            main_muscle: cell(self.schema.main_muscle),
            difficulty: cell(self.schema.difficulty),
            preparation: cell(self.schema.preparation),
            execution: cell(self.schema.execution),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

use std::collections::HashSet;

use super::model::{ExerciseDataset, ExerciseRecord};

// ---------------------------------------------------------------------------
// Recommendation query
// ---------------------------------------------------------------------------

/// Return the exercises whose `Main_muscle` contains `main_muscle` and whose
/// `Equipment` contains `equipment`.
///
/// * Matching is literal, case-sensitive substring containment.
/// * A row with a missing `Main_muscle` or `Equipment` never matches.
/// * Matches are projected to the six display fields; exact duplicates are
///   dropped, keeping the first occurrence.
pub fn recommend(dataset: &ExerciseDataset, main_muscle: &str, equipment: &str) -> Vec<ExerciseRecord> {
    let schema = dataset.schema();
    let contains = |cell: Option<&Option<String>>, needle: &str| {
        cell.and_then(|c| c.as_deref())
            .is_some_and(|value| value.contains(needle))
    };

    let mut seen = HashSet::new();
    let recommendations: Vec<ExerciseRecord> = dataset
        .rows
        .iter()
        .filter(|row| {
            contains(row.get(schema.main_muscle), main_muscle)
                && contains(row.get(schema.equipment), equipment)
        })
        .map(|row| dataset.record(row))
        .filter(|record| seen.insert(record.clone()))
        .collect();

    log::debug!(
        "Query main_muscle={main_muscle:?} equipment={equipment:?}: {} of {} rows",
        recommendations.len(),
        dataset.len()
    );
    recommendations
}

// ---------------------------------------------------------------------------
// Selection options
// ---------------------------------------------------------------------------

/// Distinct non-missing values of `column`, in order of first occurrence.
/// Returns an empty list for an unknown column.
pub fn distinct_values(dataset: &ExerciseDataset, column: &str) -> Vec<String> {
    let Some(idx) = dataset.column_index(column) else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    dataset
        .rows
        .iter()
        .filter_map(|row| row.get(idx).cloned().flatten())
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::data::loader::load_csv;
    use crate::data::model::{EQUIPMENT, MAIN_MUSCLE, PROJECTED_COLUMNS};

    fn row(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(str::to_string)).collect()
    }

    fn record(values: [&str; 6]) -> ExerciseRecord {
        let [name, equipment, muscle, difficulty, preparation, execution] = values.map(|v| Some(v.to_string()));
        ExerciseRecord {
            exercise_name: name,
            equipment,
            main_muscle: muscle,
            difficulty,
            preparation,
            execution,
        }
    }

    fn dataset(columns: &[&str], rows: Vec<Vec<Option<String>>>) -> ExerciseDataset {
        ExerciseDataset::new(columns.iter().map(|c| c.to_string()).collect(), rows).unwrap()
    }

    #[fixture]
    fn chest() -> ExerciseDataset {
        dataset(
            &PROJECTED_COLUMNS,
            vec![
                row(&[
                    Some("Bench Press"),
                    Some("Barbell"),
                    Some("Chest"),
                    Some("Intermediate"),
                    Some("Lie on bench"),
                    Some("Press up"),
                ]),
                row(&[
                    Some("Push Up"),
                    Some("Bodyweight"),
                    Some("Chest"),
                    Some("Beginner"),
                    Some("Plank position"),
                    Some("Lower and push"),
                ]),
            ],
        )
    }

    #[rstest]
    fn test_recommend_exact_match(chest: ExerciseDataset) {
        assert_eq!(
            recommend(&chest, "Chest", "Barbell"),
            vec![record([
                "Bench Press",
                "Barbell",
                "Chest",
                "Intermediate",
                "Lie on bench",
                "Press up"
            ])]
        );
    }

    #[rstest]
    fn test_recommend_no_match(chest: ExerciseDataset) {
        assert!(recommend(&chest, "Leg", "Barbell").is_empty());
    }

    #[rstest]
    #[case("Chest", "", 2)]
    #[case("", "", 2)]
    #[case("Che", "Body", 1)]
    #[case("chest", "Barbell", 0)]
    #[case("Chest", "barbell", 0)]
    #[case(" Chest", "Barbell", 0)]
    #[case("Ch.st", "Barbell", 0)]
    #[case("Chest", "Barbell|Bodyweight", 0)]
    fn test_recommend_containment(
        chest: ExerciseDataset,
        #[case] main_muscle: &str,
        #[case] equipment: &str,
        #[case] expected: usize,
    ) {
        let result = recommend(&chest, main_muscle, equipment);

        assert_eq!(result.len(), expected);
        for r in &result {
            assert!(r.main_muscle.as_deref().unwrap().contains(main_muscle));
            assert!(r.equipment.as_deref().unwrap().contains(equipment));
        }
    }

    #[test]
    fn test_recommend_skips_missing_fields() {
        let ds = dataset(
            &PROJECTED_COLUMNS,
            vec![
                row(&[Some("A"), None, Some("Chest"), None, None, None]),
                row(&[Some("B"), Some("Cable"), None, None, None, None]),
                row(&[Some("C"), Some("Cable")]),
                row(&[Some("D"), Some("Cable"), Some("Chest"), None, None, None]),
            ],
        );

        let result = recommend(&ds, "", "");

        assert_eq!(
            result,
            vec![ExerciseRecord {
                exercise_name: Some("D".to_string()),
                equipment: Some("Cable".to_string()),
                main_muscle: Some("Chest".to_string()),
                ..ExerciseRecord::default()
            }]
        );
    }

    #[test]
    fn test_recommend_removes_duplicates_in_order() {
        let ds = dataset(
            &[
                "Exercise Name",
                "Equipment",
                "Main_muscle",
                "Difficulty",
                "Preparation",
                "Execution",
                "Source",
            ],
            vec![
                row(&[Some("Dip"), Some("Parallel Bars"), Some("Triceps"), Some("Beginner"), None, None, Some("a")]),
                row(&[Some("Fly"), Some("Cable"), Some("Chest"), Some("Beginner"), None, None, Some("a")]),
                row(&[Some("Dip"), Some("Parallel Bars"), Some("Triceps"), Some("Beginner"), None, None, Some("b")]),
                row(&[Some("Dip"), Some("Parallel Bars"), Some("Triceps"), Some("Advanced"), None, None, Some("c")]),
            ],
        );

        let names: Vec<_> = recommend(&ds, "", "")
            .into_iter()
            .map(|r| (r.exercise_name.unwrap(), r.difficulty.unwrap()))
            .collect();

        assert_eq!(
            names,
            vec![
                ("Dip".to_string(), "Beginner".to_string()),
                ("Fly".to_string(), "Beginner".to_string()),
                ("Dip".to_string(), "Advanced".to_string()),
            ]
        );
    }

    #[test]
    fn test_recommend_uses_first_duplicate_column() {
        let ds = dataset(
            &[
                "Exercise Name",
                "Equipment",
                "Main_muscle",
                "Difficulty",
                "Preparation",
                "Execution",
                "Main_muscle",
            ],
            vec![row(&[Some("Row"), Some("Cable"), Some("Back"), None, None, None, Some("Chest")])],
        );

        assert_eq!(recommend(&ds, "Back", "Cable").len(), 1);
        assert_eq!(recommend(&ds, "Chest", "Cable").len(), 0);
    }

    #[test]
    fn test_na_markers_never_match_or_appear_as_options() {
        let csv = "\
Exercise Name,Equipment,Main_muscle,Difficulty,Preparation,Execution
Dip,NA,Chest,Beginner,Grip bars,Lower and press
Row,Barbell,null,Intermediate,Hinge,Pull
Fly,N/A,NaN,Beginner,Lie down,Open arms
Bench Press,Barbell,Chest,Intermediate,Lie on bench,Press up
";
        let ds = load_csv(csv.as_bytes()).unwrap();

        assert_eq!(distinct_values(&ds, EQUIPMENT), vec!["Barbell"]);
        assert_eq!(distinct_values(&ds, MAIN_MUSCLE), vec!["Chest"]);

        let names: Vec<_> = recommend(&ds, "", "")
            .into_iter()
            .map(|r| r.exercise_name.unwrap())
            .collect();
        assert_eq!(names, vec!["Bench Press"]);
        assert!(recommend(&ds, "Chest", "NA").is_empty());
        assert!(recommend(&ds, "null", "Barbell").is_empty());
    }

    #[test]
    fn test_distinct_values() {
        let ds = dataset(
            &PROJECTED_COLUMNS,
            vec![
                row(&[Some("A"), Some("Dumbbell"), Some("Shoulders")]),
                row(&[Some("B"), Some("Barbell"), None]),
                row(&[Some("C"), Some("Dumbbell"), Some("Biceps")]),
                row(&[Some("D"), None, Some("Shoulders")]),
            ],
        );

        assert_eq!(distinct_values(&ds, EQUIPMENT), vec!["Dumbbell", "Barbell"]);
        assert_eq!(distinct_values(&ds, MAIN_MUSCLE), vec!["Shoulders", "Biceps"]);
        assert_eq!(distinct_values(&ds, "Unknown"), Vec::<String>::new());
    }
}

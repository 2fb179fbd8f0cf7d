use anyhow::{Context, Result};
use serde::Serialize;

/// One CSV row. The header names mimic real-world exports: padded names and
/// a decorated difficulty column, both of which the loader normalizes.
#[derive(Serialize)]
struct SampleRow {
    #[serde(rename = "Exercise Name")]
    exercise_name: &'static str,
    #[serde(rename = "Equipment ")]
    equipment: Option<&'static str>,
    #[serde(rename = " Main_muscle")]
    main_muscle: Option<&'static str>,
    #[serde(rename = "Difficulty (1-5)")]
    difficulty: u8,
    #[serde(rename = "Preparation")]
    preparation: &'static str,
    #[serde(rename = "Execution")]
    execution: &'static str,
    #[serde(rename = "Target_Muscles")]
    target_muscles: &'static str,
}

const fn row(
    exercise_name: &'static str,
    equipment: Option<&'static str>,
    main_muscle: Option<&'static str>,
    difficulty: u8,
    preparation: &'static str,
    execution: &'static str,
    target_muscles: &'static str,
) -> SampleRow {
    SampleRow {
        exercise_name,
        equipment,
        main_muscle,
        difficulty,
        preparation,
        execution,
        target_muscles,
    }
}

const ROWS: &[SampleRow] = &[
    row(
        "Barbell Bench Press",
        Some("Barbell"),
        Some("Chest"),
        3,
        "Lie flat on the bench, grip the bar slightly wider than shoulder width.",
        "Lower the bar to mid-chest, then press it back up until the arms are straight.",
        "Pectoralis Major Sternal Head",
    ),
    row(
        "Push Up",
        Some("Body Weight"),
        Some("Chest"),
        1,
        "Start in a high plank with hands under the shoulders.",
        "Lower the chest to the floor, then push back up.",
        "Pectoralis Major Sternal Head",
    ),
    row(
        "Dumbbell Fly",
        Some("Dumbbell"),
        Some("Chest"),
        2,
        "Lie on a flat bench holding dumbbells above the chest, elbows slightly bent.",
        "Open the arms in a wide arc, then bring the dumbbells back together.",
        "Pectoralis Major Sternal Head",
    ),
    row(
        "Barbell Back Squat",
        Some("Barbell"),
        Some("Quadriceps"),
        3,
        "Rest the bar on the upper back, feet shoulder width apart.",
        "Sit back and down until the thighs are parallel, then drive up.",
        "Quadriceps",
    ),
    row(
        "Goblet Squat",
        Some("Dumbbell"),
        Some("Quadriceps"),
        2,
        "Hold a dumbbell vertically against the chest.",
        "Squat down keeping the chest up, then stand back up.",
        "Quadriceps",
    ),
    row(
        "Lever Seated Row",
        Some("Lever (plate loaded)"),
        Some("Back, Latissimus Dorsi"),
        2,
        "Sit facing the pad and grasp the handles.",
        "Pull the handles towards the torso, squeezing the shoulder blades.",
        "Latissimus Dorsi",
    ),
    row(
        "Cable Pulldown",
        Some("Cable"),
        Some("Back, Latissimus Dorsi"),
        2,
        "Sit at the machine and grip the bar wide.",
        "Pull the bar down to the upper chest, then let it rise slowly.",
        "Latissimus Dorsi",
    ),
    row(
        "Dumbbell Curl",
        Some("Dumbbell"),
        Some("Biceps"),
        1,
        "Stand holding dumbbells at the sides, palms forward.",
        "Curl the weights up to the shoulders, then lower them.",
        "Biceps Brachii",
    ),
    // Duplicate of the row above except for an unprojected column.
    row(
        "Dumbbell Curl",
        Some("Dumbbell"),
        Some("Biceps"),
        1,
        "Stand holding dumbbells at the sides, palms forward.",
        "Curl the weights up to the shoulders, then lower them.",
        "Brachialis",
    ),
    row(
        "Plank",
        None,
        Some("Core"),
        1,
        "Rest on the forearms and toes, body in a straight line.",
        "Hold the position while bracing the abdominals.",
        "Rectus Abdominis",
    ),
    row(
        "Farmer's Walk",
        Some("Kettlebell"),
        None,
        2,
        "Pick up a heavy kettlebell in each hand.",
        "Walk with short, quick steps while standing tall.",
        "Forearms",
    ),
];

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "gym_exercise_dataset.csv".to_string());

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    for row in ROWS {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {} exercises to {output_path}", ROWS.len());
    Ok(())
}

use eframe::egui::{Color32, RichText, ScrollArea, Ui};

use crate::data::model::ExerciseRecord;
use crate::state::{AppState, QueryOutcome};

// ---------------------------------------------------------------------------
// Results (central panel)
// ---------------------------------------------------------------------------

/// Render the recommendations, the empty-result warning, or the load error.
pub fn results_view(ui: &mut Ui, state: &AppState) {
    if let Err(failure) = &state.dataset {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(
                RichText::new(format!(
                    "Could not load the exercise dataset from {}:\n{}",
                    failure.path.display(),
                    failure.message
                ))
                .color(Color32::RED)
                .size(16.0),
            );
        });
        return;
    }

    match &state.outcome {
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Pick a muscle group and equipment, then press Get Exercises");
            });
        }
        Some(QueryOutcome::Empty) => {
            ui.label(
                RichText::new("⚠ No exercises found. Try adjusting your inputs!")
                    .color(Color32::from_rgb(230, 160, 20))
                    .strong(),
            );
        }
        Some(QueryOutcome::Matches(records)) => {
            ui.heading("✅ Recommended Exercises:");
            ui.add_space(4.0);
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    for record in records {
                        exercise_card(ui, record);
                    }
                });
        }
    }
}

fn exercise_card(ui: &mut Ui, record: &ExerciseRecord) {
    for (label, value) in record.summary_fields() {
        ui.horizontal_wrapped(|ui: &mut Ui| {
            ui.label(RichText::new(format!("{label}:")).strong());
            ui.label(value.to_string());
        });
    }
    for (label, value) in record.instruction_fields() {
        ui.label(RichText::new(format!("{label}:")).strong());
        ui.label(RichText::new(value.to_string()).monospace());
    }
    ui.separator();
}

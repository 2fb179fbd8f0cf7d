use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – workout form
// ---------------------------------------------------------------------------

/// Render the sidebar form: two selectors and the trigger button.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Customize Your Workout");
    ui.separator();

    match &state.dataset {
        Err(_) => {
            ui.label("No dataset loaded.");
            return;
        }
        Ok(ds) if ds.is_empty() => {
            ui.label("The dataset has no rows.");
            return;
        }
        Ok(_) => {}
    }

    // Clone the options so selection changes can mutate the state.
    let muscles = state.muscle_options.clone();
    let equipment = state.equipment_options.clone();

    ui.strong("🎯 Select Main Muscle Group");
    let current = state.selected_muscle.clone().unwrap_or_default();
    egui::ComboBox::from_id_salt("main_muscle")
        .selected_text(current.as_str())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for muscle in &muscles {
                if ui.selectable_label(current == *muscle, muscle.as_str()).clicked() {
                    state.select_muscle(muscle);
                }
            }
        });
    ui.add_space(8.0);

    ui.strong("🛠 Select Equipment");
    let current = state.selected_equipment.clone().unwrap_or_default();
    egui::ComboBox::from_id_salt("equipment")
        .selected_text(current.as_str())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for item in &equipment {
                if ui.selectable_label(current == *item, item.as_str()).clicked() {
                    state.select_equipment(item);
                }
            }
        });
    ui.add_space(12.0);

    let ready = state.selected_muscle.is_some() && state.selected_equipment.is_some();
    if ui
        .add_enabled(ready, egui::Button::new("💡 Get Exercises"))
        .clicked()
    {
        state.run_query();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with dataset information.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("🏋 AI-Powered Exercise Recommender");

        ui.separator();

        match &state.dataset {
            Ok(ds) => {
                ui.label(format!(
                    "{} exercises, {} muscle groups, {} equipment types",
                    ds.len(),
                    state.muscle_options.len(),
                    state.equipment_options.len()
                ));
            }
            Err(failure) => {
                ui.label(
                    RichText::new(format!("Failed to load {}", failure.path.display()))
                        .color(Color32::RED),
                );
            }
        }
    });
}
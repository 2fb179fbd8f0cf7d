mod app;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::RecommenderApp;
use eframe::egui;
use state::AppState;

/// Dataset read when no path is given on the command line.
const DATA_FILE: &str = "gym_exercise_dataset.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DATA_FILE));
    let state = AppState::load(&path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "AI-Powered Exercise Recommender",
        options,
        Box::new(|_cc| Ok(Box::new(RecommenderApp::new(state)))),
    )
}

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use bizdash_gantt::app::GanttApp;
use bizdash_gantt::config::Settings;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings_path = Settings::default_path();
    let settings = Settings::load(&settings_path);
    let tasks_file = std::env::args_os().nth(1).map(PathBuf::from);
    log::info!(
        "Starting with settings from {} (tasks: {})",
        settings_path.display(),
        tasks_file
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "last opened".to_string())
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 400.0])
            .with_title("Project Timeline"),
        ..Default::default()
    };

    eframe::run_native(
        "Project Timeline",
        options,
        Box::new(move |cc| Ok(Box::new(GanttApp::new(cc, settings, settings_path, tasks_file)))),
    )
}

use chrono::{Duration, NaiveDate};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::config::Settings;
use crate::io::{JsonFileStore, TaskStore};
use crate::model::calendar::today;
use crate::model::{derive_range, validate_range, Selection, Task, TaskBoard, TaskStatus, VisibleWindow};
use crate::ui;

/// Main application state.
pub struct GanttApp {
    pub board: TaskBoard,
    pub window: VisibleWindow,
    pub selection: Selection,
    pub store: Option<JsonFileStore>,

    pub settings: Settings,
    pub settings_path: PathBuf,

    // Edit dialog fields
    pub edit_start: NaiveDate,
    pub edit_end: NaiveDate,

    // Status message
    pub status_message: String,
}

impl GanttApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        settings_path: PathBuf,
        tasks_file: Option<PathBuf>,
    ) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);
        ui::theme::apply_theme(&cc.egui_ctx);

        Self::with_settings(settings, settings_path, tasks_file)
    }

    /// Build the state without a UI context. Loads `tasks_file`, else the
    /// last file from settings, else a sample board.
    pub fn with_settings(
        settings: Settings,
        settings_path: PathBuf,
        tasks_file: Option<PathBuf>,
    ) -> Self {
        let now = today();
        let mut app = Self {
            board: TaskBoard::default(),
            window: VisibleWindow::new(now, now + Duration::days(27), settings.cell_width),
            selection: Selection::Idle,
            store: None,
            settings,
            settings_path,
            edit_start: now,
            edit_end: now,
            status_message: "Ready".to_string(),
        };

        match tasks_file.or_else(|| app.settings.last_tasks_file.clone()) {
            Some(path) => app.load_from(&path),
            None => {
                app.board = TaskBoard::new(Self::sample_tasks());
                app.window.refit(&app.board.tasks);
                app.status_message = "Showing sample tasks".to_string();
            }
        }
        app
    }

    /// Generate sample tasks for demonstration.
    fn sample_tasks() -> Vec<Task> {
        let today = today();
        let day = |n: i64| today + Duration::days(n);
        vec![
            Task::new("Client onboarding", day(-6), day(-2))
                .with_status(TaskStatus::Completed)
                .with_assignee("Omar"),
            Task::new("Site survey", day(-3), day(2))
                .with_status(TaskStatus::InProgress)
                .with_assignee("Layla"),
            Task::new("Quotation", day(1), day(3))
                .with_status(TaskStatus::Review)
                .with_assignee("Omar"),
            Task::new("Procurement", day(3), day(12))
                .with_status(TaskStatus::AtRisk)
                .with_assignee("Yousef"),
            Task::new("Installation", day(10), day(20)).with_assignee("Noura"),
            Task::new("Handover", day(21), day(21)),
        ]
    }

    // --- File operations ---

    pub fn open_tasks(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Task list", &["json"])
            .pick_file()
        {
            self.load_from(&path);
        }
    }

    pub fn load_from(&mut self, path: &Path) {
        let store = JsonFileStore::new(path);
        match store.load() {
            Ok(tasks) => {
                let count = tasks.len();
                self.board.replace(tasks);
                self.selection.clear();
                if self.settings.refit_on_load {
                    self.window.refit(&self.board.tasks);
                }
                self.status_message = format!("Loaded {} tasks from {}", count, store.describe());
                self.store = Some(store);
                self.remember_file(path);
            }
            Err(e) => {
                log::error!("Failed to load {}: {}", path.display(), e);
                self.status_message = format!("Error loading: {}", e);
            }
        }
    }

    pub fn reload(&mut self) {
        let Some(path) = self.store.as_ref().map(|s| s.path().to_path_buf()) else {
            self.status_message = "Nothing to reload".to_string();
            return;
        };
        self.load_from(&path);
    }

    pub fn import_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv", "txt"])
            .pick_file()
        {
            match crate::io::csv_import::import_csv(&path) {
                Ok((tasks, skipped)) => {
                    let count = tasks.len();
                    self.board.replace(tasks);
                    // Imported rows are not backed by the open task file.
                    self.store = None;
                    self.selection.clear();
                    self.window.refit(&self.board.tasks);
                    self.status_message = if skipped > 0 {
                        format!("Imported {} tasks ({} rows skipped)", count, skipped)
                    } else {
                        format!("Imported {} tasks", count)
                    };
                }
                Err(e) => {
                    log::error!("CSV import from {} failed: {}", path.display(), e);
                    self.status_message = format!("CSV import failed: {}", e);
                }
            }
        }
    }

    pub fn export_csv(&mut self) {
        if self.board.is_empty() {
            self.status_message = "Nothing to export".to_string();
            return;
        }
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name("tasks.csv")
            .save_file()
        {
            match crate::io::csv_export::export_csv(&self.board.tasks, &path) {
                Ok(count) => self.status_message = format!("Exported {} tasks to CSV", count),
                Err(e) => {
                    log::error!("CSV export to {} failed: {}", path.display(), e);
                    self.status_message = format!("CSV export failed: {}", e);
                }
            }
        }
    }

    fn remember_file(&mut self, path: &Path) {
        if self.settings.last_tasks_file.as_deref() == Some(path) {
            return;
        }
        self.settings.last_tasks_file = Some(path.to_path_buf());
        if let Err(e) = self.settings.save(&self.settings_path) {
            log::warn!("Could not save settings to {}: {}", self.settings_path.display(), e);
        }
    }

    // --- Schedule changes ---

    /// Apply a date change in memory, then persist it if a store is open.
    pub fn apply_date_change(&mut self, id: Uuid, start: NaiveDate, end: NaiveDate) {
        if !self.board.set_task_dates(id, start, end) {
            self.status_message = "Task no longer exists".to_string();
            return;
        }
        self.persist(id, start, end);
    }

    fn persist(&mut self, id: Uuid, start: NaiveDate, end: NaiveDate) {
        let name = self.board.get(id).map(|t| t.name.clone()).unwrap_or_default();
        let Some(store) = self.store.as_mut() else {
            self.status_message = format!("Updated '{}' ({} → {}, not saved)", name, start, end);
            return;
        };
        match store.persist_dates(id, start, end) {
            Ok(()) => self.status_message = format!("Updated '{}' ({} → {})", name, start, end),
            Err(e) => {
                log::error!("Failed to persist '{}': {}", name, e);
                self.status_message = format!("Error saving '{}': {}", name, e);
            }
        }
    }

    pub fn begin_edit(&mut self, id: Uuid) {
        let Some(task) = self.board.get(id) else {
            return;
        };
        match task.dates() {
            Ok((start, end)) => {
                self.edit_start = start;
                self.edit_end = end;
            }
            Err(e) => {
                log::warn!("Editing task with unreadable dates: {}", e);
                self.edit_start = today();
                self.edit_end = today();
            }
        }
        self.selection.open_editor_for(id);
    }

    /// Validate the dialog fields and apply them. Returns false and keeps
    /// the editor open when the range is inverted.
    pub fn save_edit(&mut self) -> bool {
        let Selection::Editing(id) = self.selection else {
            return false;
        };
        if let Err(e) = validate_range(self.edit_start, self.edit_end) {
            self.status_message = e.to_string();
            return false;
        }
        self.apply_date_change(id, self.edit_start, self.edit_end);
        self.selection.close();
        true
    }

    pub fn cancel_edit(&mut self) {
        self.selection.close();
    }

    // --- Navigation ---

    pub fn fit_to_tasks(&mut self) {
        if self.board.is_empty() {
            self.status_message = "No tasks to fit".to_string();
        } else if derive_range(&self.board.tasks).is_none() {
            self.status_message = "No tasks with valid dates".to_string();
        } else {
            self.window.refit(&self.board.tasks);
        }
    }

    /// Page the window one span forward or back.
    pub fn page(&mut self, forward: bool) {
        let moved = if forward {
            self.window.page_forward()
        } else {
            self.window.page_backward()
        };
        if !moved {
            self.status_message = "Reached the end of the calendar".to_string();
        }
    }

    pub fn go_to_today(&mut self) {
        self.window.jump_to(today() - Duration::days(2));
    }
}

impl eframe::App for GanttApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_HEADER)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .size(11.0)
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "{} → {}",
                                self.window.start.format("%d/%m/%Y"),
                                self.window.end.format("%d/%m/%Y")
                            ))
                            .size(10.5)
                            .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Bottom panel: legend
        egui::TopBottomPanel::bottom("legend").show(ctx, |ui| {
            ui::legend::show_legend(&self.board, ui);
        });

        // Central panel: Gantt chart
        let chart_frame = egui::Frame::default()
            .fill(ui::theme::BG_DARK)
            .inner_margin(egui::Margin::ZERO);
        let mut interaction = ui::gantt_chart::ChartInteraction::default();
        egui::CentralPanel::default().frame(chart_frame).show(ctx, |ui| {
            interaction = ui::gantt_chart::show_gantt_chart(
                &mut self.board,
                &self.window,
                &mut self.selection,
                ui,
            );
        });

        if let Some((id, start, end)) = interaction.rescheduled {
            self.persist(id, start, end);
        }
        if let Some(id) = interaction.open_editor {
            self.begin_edit(id);
        }

        // Dialogs
        if self.selection.is_editing() {
            ui::dialogs::show_edit_dialog(self, ctx);
        }
    }
}

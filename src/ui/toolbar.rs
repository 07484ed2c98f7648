use crate::app::GanttApp;
use crate::ui::theme;
use egui::{menu, RichText, Ui};
use egui_phosphor::regular as icons;

/// Render the top toolbar / menu bar.
pub fn show_toolbar(app: &mut GanttApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").font(theme::font_header()), |ui| {
            if ui.button("  Open...").clicked() {
                app.open_tasks();
                ui.close_menu();
            }
            if ui
                .add_enabled(app.store.is_some(), egui::Button::new("  Reload"))
                .clicked()
            {
                app.reload();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Import CSV...").clicked() {
                app.import_csv();
                ui.close_menu();
            }
            if ui.button("  Export CSV...").clicked() {
                app.export_csv();
                ui.close_menu();
            }
        });

        ui.separator();

        if ui
            .button(icons::CARET_LEFT)
            .on_hover_text("Previous page")
            .clicked()
        {
            app.page(false);
        }
        if ui
            .button(format!("{} Today", icons::CALENDAR_BLANK))
            .on_hover_text("Jump to today")
            .clicked()
        {
            app.go_to_today();
        }
        if ui
            .button(icons::CARET_RIGHT)
            .on_hover_text("Next page")
            .clicked()
        {
            app.page(true);
        }
        if ui
            .button(format!("{} Fit", icons::ARROWS_OUT_LINE_HORIZONTAL))
            .on_hover_text("Fit the timeline to all tasks")
            .clicked()
        {
            app.fit_to_tasks();
        }

        // Right-aligned source name
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let source = match &app.store {
                Some(store) => store.path().display().to_string(),
                None => "(unsaved)".to_string(),
            };
            ui.label(RichText::new(source).size(11.0).weak());
        });
    });
}

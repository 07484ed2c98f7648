use crate::app::GanttApp;
use crate::model::{validate_range, Selection};
use crate::ui::theme;
use egui::{Color32, Context, RichText, Window};

/// Render the "Edit Schedule" dialog for the task being edited.
pub fn show_edit_dialog(app: &mut GanttApp, ctx: &Context) {
    let Selection::Editing(id) = app.selection else {
        return;
    };
    let Some(task) = app.board.get(id) else {
        app.selection.clear();
        return;
    };
    let title = task.name.clone();
    let status = task.status;
    let assignee = task.assignee.clone();

    let mut save = false;
    let mut cancel = false;

    Window::new(RichText::new("Edit Schedule").strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([320.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.label(RichText::new(&title).strong().size(13.0));
            ui.horizontal(|ui| {
                let (dot, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
                ui.painter().circle_filled(dot.center(), 4.0, theme::status_color(status));
                ui.label(RichText::new(status.label()).color(theme::TEXT_SECONDARY));
                if let Some(assignee) = &assignee {
                    ui.label(RichText::new(format!("· {}", assignee)).color(theme::TEXT_DIM));
                }
            });
            ui.add_space(6.0);

            egui::Grid::new("edit_schedule_grid")
                .num_columns(2)
                .striped(false)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Start").color(theme::TEXT_SECONDARY));
                    ui.add(egui_extras::DatePickerButton::new(&mut app.edit_start).id_salt("edit_dp_start"));
                    ui.end_row();

                    ui.label(RichText::new("End").color(theme::TEXT_SECONDARY));
                    ui.add(egui_extras::DatePickerButton::new(&mut app.edit_end).id_salt("edit_dp_end"));
                    ui.end_row();
                });

            let validation = validate_range(app.edit_start, app.edit_end);
            if let Err(e) = &validation {
                ui.add_space(4.0);
                ui.label(RichText::new(e.to_string()).size(11.0).color(theme::TEXT_ERROR));
            }

            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let save_btn = egui::Button::new(RichText::new("Save").color(Color32::WHITE))
                    .fill(theme::ACCENT)
                    .rounding(egui::Rounding::same(4.0));
                if ui.add_enabled_ui(validation.is_ok(), |ui| ui.add_sized([80.0, 28.0], save_btn)).inner.clicked() {
                    save = true;
                }
                if ui.add_sized([80.0, 28.0], egui::Button::new("Cancel")).clicked() {
                    cancel = true;
                }
            });
            ui.add_space(2.0);
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        cancel = true;
    }
    if save {
        app.save_edit();
    } else if cancel {
        app.cancel_edit();
    }
}

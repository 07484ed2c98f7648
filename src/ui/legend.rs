use crate::model::TaskBoard;
use crate::ui::theme;
use egui::{Color32, RichText, Sense, Ui};

fn swatch(ui: &mut Ui, color: Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(14.0, 8.0), Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
}

/// Status colour key with per-status task counts.
pub fn show_legend(board: &TaskBoard, ui: &mut Ui) {
    ui.horizontal_wrapped(|ui| {
        for (status, count) in board.status_counts() {
            swatch(ui, theme::status_color(status));
            ui.label(
                RichText::new(format!("{} ({})", status.label(), count))
                    .size(11.0)
                    .color(theme::TEXT_SECONDARY),
            );
            ui.add_space(6.0);
        }
        ui.separator();
        swatch(ui, theme::BG_WEEKEND);
        ui.label(RichText::new("Weekend").size(11.0).color(theme::TEXT_DIM));
        swatch(ui, theme::TODAY_LINE);
        ui.label(RichText::new("Today").size(11.0).color(theme::TEXT_DIM));
    });
}

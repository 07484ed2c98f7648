use egui::style::WidgetVisuals;
use egui::{Color32, FontId, Rounding, Stroke, Visuals};

use crate::model::TaskStatus;

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_DARK: Color32 = Color32::from_rgb(24, 24, 32);
pub const BG_PANEL: Color32 = Color32::from_rgb(30, 30, 40);
pub const BG_HEADER: Color32 = Color32::from_rgb(34, 37, 48);
pub const BG_SELECTED: Color32 = Color32::from_rgba_premultiplied(80, 140, 220, 45);
pub const BG_WEEKEND: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 60);
pub const BG_TODAY: Color32 = Color32::from_rgba_premultiplied(60, 20, 20, 70);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(50, 52, 64);
pub const BORDER_ACCENT: Color32 = Color32::from_rgb(90, 140, 220);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 232, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(155, 160, 178);
pub const TEXT_DIM: Color32 = Color32::from_rgb(100, 105, 120);
pub const TEXT_ON_BAR: Color32 = Color32::from_rgb(255, 255, 255);
pub const TEXT_ERROR: Color32 = Color32::from_rgb(240, 110, 110);

pub const ACCENT: Color32 = Color32::from_rgb(80, 140, 220);
pub const TODAY_LINE: Color32 = Color32::from_rgb(240, 75, 75);
pub const GRID_LINE: Color32 = Color32::from_rgb(44, 46, 58);

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const ROW_HEIGHT: f32 = 30.0;
pub const ROW_GAP: f32 = 2.0;
pub const HEADER_HEIGHT: f32 = 44.0;
pub const BAR_ROUNDING: f32 = 5.0;
pub const BAR_INSET: f32 = 3.0; // vertical inset so bars don't touch row edges
pub const STATUS_BAR_HEIGHT: f32 = 24.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_header() -> FontId {
    FontId::proportional(12.0)
}

pub fn font_sub() -> FontId {
    FontId::proportional(10.5)
}

pub fn font_bar() -> FontId {
    FontId::proportional(11.5)
}

pub fn font_small() -> FontId {
    FontId::proportional(9.5)
}

// ── Status colours ───────────────────────────────────────────────────────────

pub fn status_color(status: TaskStatus) -> Color32 {
    match status {
        TaskStatus::Completed => Color32::from_rgb(52, 168, 83),
        TaskStatus::InProgress => Color32::from_rgb(66, 133, 244),
        TaskStatus::Review => Color32::from_rgb(171, 71, 188),
        TaskStatus::AtRisk => Color32::from_rgb(229, 57, 53),
        TaskStatus::NotStarted => Color32::from_rgb(120, 124, 140),
    }
}

// ── Visuals ──────────────────────────────────────────────────────────────────

const WIDGET_ROUNDING: f32 = 4.0;
const INPUT_BG: Color32 = Color32::from_rgb(20, 20, 28);

fn widget_colors(widget: &mut WidgetVisuals, fill: Color32, border: Color32, text: Stroke) {
    widget.bg_fill = fill;
    widget.weak_bg_fill = fill;
    widget.bg_stroke = Stroke::new(1.0, border);
    widget.fg_stroke = text;
    widget.rounding = Rounding::same(WIDGET_ROUNDING);
}

/// Dark visuals keyed to the chart palette, so panels, dialogs and the
/// timeline share one set of colours.
pub fn chart_visuals() -> Visuals {
    let mut visuals = Visuals::dark();
    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = INPUT_BG;
    visuals.faint_bg_color = BG_HEADER;
    visuals.code_bg_color = BG_WEEKEND;
    visuals.error_fg_color = TEXT_ERROR;
    visuals.warn_fg_color = TODAY_LINE;
    visuals.hyperlink_color = ACCENT;

    let widgets = &mut visuals.widgets;
    widget_colors(&mut widgets.noninteractive, BG_PANEL, BORDER_SUBTLE, Stroke::new(1.0, TEXT_SECONDARY));
    widget_colors(&mut widgets.inactive, BG_HEADER, BORDER_SUBTLE, Stroke::new(1.0, TEXT_PRIMARY));
    widget_colors(&mut widgets.hovered, GRID_LINE, ACCENT, Stroke::new(1.0, TEXT_PRIMARY));
    widget_colors(&mut widgets.active, BORDER_SUBTLE, BORDER_ACCENT, Stroke::new(2.0, TEXT_ON_BAR));
    widget_colors(&mut widgets.open, BG_HEADER, BORDER_ACCENT, Stroke::new(1.0, TEXT_PRIMARY));

    visuals.selection.bg_fill = BG_SELECTED;
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);
    visuals.window_rounding = Rounding::same(BAR_ROUNDING + 3.0);
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.striped = false;
    visuals
}

/// Install [`chart_visuals`] and the spacing the toolbar expects. Call once
/// at startup.
pub fn apply_theme(ctx: &egui::Context) {
    ctx.set_visuals(chart_visuals());
    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 4.0);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);
        style.spacing.interact_size.y = ROW_HEIGHT - 8.0;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_a_distinct_color() {
        let colors: Vec<Color32> = TaskStatus::ALL.iter().map(|s| status_color(*s)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn visuals_follow_the_chart_palette() {
        let visuals = chart_visuals();
        assert_eq!(visuals.panel_fill, BG_PANEL);
        assert_eq!(visuals.faint_bg_color, BG_HEADER);
        assert_eq!(visuals.error_fg_color, TEXT_ERROR);
        assert_eq!(visuals.selection.bg_fill, BG_SELECTED);
        assert_eq!(visuals.widgets.hovered.bg_stroke.color, ACCENT);
        assert_eq!(visuals.widgets.inactive.weak_bg_fill, visuals.widgets.inactive.bg_fill);
    }
}

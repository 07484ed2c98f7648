use crate::model::{calendar, Selection, TaskBoard, VisibleWindow};
use crate::ui::theme;
use chrono::{Datelike, NaiveDate};
use egui::{Color32, Id, Pos2, Rect, Rounding, Sense, Stroke, Ui, Vec2};
use uuid::Uuid;

const ROW_HEIGHT: f32 = theme::ROW_HEIGHT;
const ROW_PADDING: f32 = theme::ROW_GAP;
const HEADER_HEIGHT: f32 = theme::HEADER_HEIGHT;

/// A bar drag in progress. Lives in egui temp data between frames, under
/// one id for the whole chart, so it survives the bar scrolling out of view.
#[derive(Debug, Clone, PartialEq)]
struct BarDrag {
    task_id: Uuid,
    start_pointer_x: f32,
    /// Days the task has been moved so far.
    applied_days: i64,
}

impl BarDrag {
    fn new(task_id: Uuid, start_pointer_x: f32) -> Self {
        Self {
            task_id,
            start_pointer_x,
            applied_days: 0,
        }
    }

    /// Move the task so it follows the pointer, in whole days.
    fn follow(&mut self, board: &mut TaskBoard, pointer_x: f32, cell_width: f32) {
        let target = drag_days(pointer_x - self.start_pointer_x, cell_width);
        let step = target - self.applied_days;
        if step != 0 && board.shift_task(self.task_id, step).is_some() {
            self.applied_days = target;
        }
    }

    /// The task's final dates, if the drag moved it at all.
    fn finish(self, board: &TaskBoard) -> Option<(Uuid, NaiveDate, NaiveDate)> {
        if self.applied_days == 0 {
            return None;
        }
        let (start, end) = board.get(self.task_id)?.dates().ok()?;
        Some((self.task_id, start, end))
    }
}

fn bar_drag_id() -> Id {
    Id::new("gantt-bar-drag")
}

/// Result details from interactions in the Gantt chart.
#[derive(Debug, Clone, Default)]
pub struct ChartInteraction {
    /// A drag finished; the board already holds these dates.
    pub rescheduled: Option<(Uuid, NaiveDate, NaiveDate)>,
    /// A bar was double-clicked.
    pub open_editor: Option<Uuid>,
}

/// Render the Gantt chart area.
pub fn show_gantt_chart(
    board: &mut TaskBoard,
    window: &VisibleWindow,
    selection: &mut Selection,
    ui: &mut Ui,
) -> ChartInteraction {
    let mut interaction = ChartInteraction::default();
    let available = ui.available_size();
    let grid_width = window.grid_width();
    let chart_width = grid_width.max(available.x);
    let chart_height = HEADER_HEIGHT + (board.len() as f32 * (ROW_HEIGHT + ROW_PADDING)) + 40.0;

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(
                Vec2::new(chart_width, chart_height.max(available.y)),
                Sense::click(),
            );
            let origin = response.rect.min;
            let bottom = response.rect.max.y;
            let mut consumed_click = false;

            painter.rect_filled(response.rect, 0.0, theme::BG_DARK);

            draw_day_columns(&painter, origin, window, bottom);
            draw_timeline_header(&painter, origin, window, chart_width);

            // Row separators
            for i in 0..board.len() {
                let y = origin.y + HEADER_HEIGHT + (i + 1) as f32 * (ROW_HEIGHT + ROW_PADDING);
                painter.line_segment(
                    [Pos2::new(origin.x, y), Pos2::new(origin.x + chart_width, y)],
                    Stroke::new(0.5, theme::BORDER_SUBTLE),
                );
            }

            // Task bars
            for (i, task) in board.tasks.iter().enumerate() {
                let Some(visible) = window.position(task).clip(grid_width) else {
                    continue;
                };
                let y = origin.y + HEADER_HEIGHT + i as f32 * (ROW_HEIGHT + ROW_PADDING) + ROW_PADDING;
                let bar_rect = Rect::from_min_size(
                    Pos2::new(origin.x + visible.left, y + theme::BAR_INSET),
                    Vec2::new(visible.width, ROW_HEIGHT - theme::BAR_INSET * 2.0),
                );
                let is_selected = selection.is_selected(task.id);
                draw_task_bar(&painter, bar_rect, &task.name, theme::status_color(task.status), is_selected);

                let bar_response = ui.interact(
                    bar_rect,
                    ui.make_persistent_id(("task-bar", task.id)),
                    Sense::click_and_drag(),
                );

                if bar_response.double_clicked() {
                    interaction.open_editor = Some(task.id);
                    consumed_click = true;
                } else if bar_response.clicked() {
                    selection.select(task.id);
                    consumed_click = true;
                }

                if bar_response.drag_started() && task.dates().is_ok() {
                    let ptr_x = bar_response.interact_pointer_pos().map(|p| p.x).unwrap_or(0.0);
                    ui.ctx()
                        .data_mut(|data| data.insert_temp(bar_drag_id(), BarDrag::new(task.id, ptr_x)));
                    selection.select(task.id);
                    consumed_click = true;
                }

                if bar_response.hovered() && !bar_response.dragged() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                    egui::show_tooltip_at_pointer(
                        ui.ctx(),
                        ui.layer_id(),
                        egui::Id::new(("task-tip", task.id)),
                        |ui| {
                            ui.strong(&task.name);
                            ui.label(format!("{} → {}", task.start_date, task.end_date));
                            ui.label(task.status.label());
                            if let Some(assignee) = &task.assignee {
                                ui.label(assignee);
                            }
                        },
                    );
                }
            }

            // Empty click on background clears selection
            if response.clicked() && !consumed_click {
                selection.clear();
            }
        });

    // Handled outside the bar loop: a bar dragged past the window edge is
    // clipped away and gets no response of its own.
    let drag = ui.ctx().data_mut(|data| data.get_temp::<BarDrag>(bar_drag_id()));
    if let Some(mut drag) = drag {
        let (pressed, pointer) = ui.input(|i| (i.pointer.primary_down(), i.pointer.interact_pos()));
        if pressed {
            if let Some(pos) = pointer {
                drag.follow(board, pos.x, window.cell_width);
            }
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
            ui.ctx().data_mut(|data| data.insert_temp(bar_drag_id(), drag));
        } else {
            ui.ctx().data_mut(|data| data.remove::<BarDrag>(bar_drag_id()));
            interaction.rescheduled = drag.finish(board);
        }
    }

    interaction
}

fn drag_days(delta_x: f32, cell_width: f32) -> i64 {
    (delta_x / cell_width).round() as i64
}

/// Weekend and today shading plus vertical grid lines, one column per day.
fn draw_day_columns(painter: &egui::Painter, origin: Pos2, window: &VisibleWindow, bottom: f32) {
    for date in window.days_iter() {
        let x = origin.x + window.date_to_x(date);
        let column = Rect::from_min_max(
            Pos2::new(x, origin.y + HEADER_HEIGHT),
            Pos2::new(x + window.cell_width, bottom),
        );
        if calendar::is_today(date) {
            painter.rect_filled(column, 0.0, theme::BG_TODAY);
        } else if calendar::is_weekend(date) {
            painter.rect_filled(column, 0.0, theme::BG_WEEKEND);
        }
        painter.line_segment(
            [Pos2::new(x, origin.y + HEADER_HEIGHT), Pos2::new(x, bottom)],
            Stroke::new(0.5, theme::GRID_LINE),
        );
    }
}

fn draw_timeline_header(painter: &egui::Painter, origin: Pos2, window: &VisibleWindow, width: f32) {
    painter.rect_filled(
        Rect::from_min_size(origin, Vec2::new(width, HEADER_HEIGHT)),
        0.0,
        theme::BG_HEADER,
    );
    painter.line_segment(
        [
            Pos2::new(origin.x, origin.y + HEADER_HEIGHT),
            Pos2::new(origin.x + width, origin.y + HEADER_HEIGHT),
        ],
        Stroke::new(1.0, theme::BORDER_SUBTLE),
    );

    for date in window.days_iter() {
        let x = origin.x + window.date_to_x(date);

        if date == window.start || date.day() == 1 {
            painter.text(
                Pos2::new(x + 4.0, origin.y + 11.0),
                egui::Align2::LEFT_CENTER,
                date.format("%B %Y").to_string(),
                theme::font_header(),
                theme::TEXT_PRIMARY,
            );
        }

        let (label_color, weekday_color) = if calendar::is_today(date) {
            (theme::TODAY_LINE, theme::TODAY_LINE)
        } else if calendar::is_weekend(date) {
            (theme::TEXT_DIM, theme::TEXT_DIM)
        } else {
            (theme::TEXT_PRIMARY, theme::TEXT_SECONDARY)
        };
        let center = x + window.cell_width / 2.0;
        painter.text(
            Pos2::new(center, origin.y + 26.0),
            egui::Align2::CENTER_CENTER,
            date.format("%d").to_string(),
            theme::font_sub(),
            label_color,
        );
        painter.text(
            Pos2::new(center, origin.y + 37.0),
            egui::Align2::CENTER_CENTER,
            date.format("%a").to_string(),
            theme::font_small(),
            weekday_color,
        );
    }
}

fn draw_task_bar(painter: &egui::Painter, bar_rect: Rect, name: &str, color: Color32, is_selected: bool) {
    let rounding = Rounding::same(theme::BAR_ROUNDING);

    // Soft shadow
    painter.rect_filled(
        bar_rect.translate(Vec2::new(1.0, 2.0)),
        rounding,
        Color32::from_black_alpha(35),
    );
    painter.rect_filled(bar_rect, rounding, color);

    if is_selected {
        painter.rect_stroke(
            bar_rect.expand(1.5),
            Rounding::same(theme::BAR_ROUNDING + 1.5),
            Stroke::new(2.0, theme::BORDER_ACCENT),
        );
    }

    // Task name on bar (single line, clipped to bar bounds)
    if bar_rect.width() > 30.0 {
        let galley = painter.layout_no_wrap(name.to_string(), theme::font_bar(), theme::TEXT_ON_BAR);
        let clipped = painter.with_clip_rect(bar_rect);
        let text_y = bar_rect.top() + (bar_rect.height() - galley.size().y) / 2.0;
        clipped.galley(Pos2::new(bar_rect.left() + 6.0, text_y), galley, Color32::TRANSPARENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn drag_distance_rounds_to_whole_days() {
        assert_eq!(drag_days(0.0, 60.0), 0);
        assert_eq!(drag_days(29.0, 60.0), 0);
        assert_eq!(drag_days(31.0, 60.0), 1);
        assert_eq!(drag_days(-95.0, 60.0), -2);
        assert_eq!(drag_days(180.0, 60.0), 3);
    }

    #[test]
    fn drag_follows_pointer_without_drift() {
        let task = Task::new("Survey", d(2024, 3, 4), d(2024, 3, 8));
        let id = task.id;
        let mut board = TaskBoard::new(vec![task]);
        let mut drag = BarDrag::new(id, 100.0);

        drag.follow(&mut board, 220.0, 60.0);
        drag.follow(&mut board, 220.0, 60.0);
        assert_eq!(board.get(id).unwrap().dates().unwrap(), (d(2024, 3, 6), d(2024, 3, 10)));

        drag.follow(&mut board, 40.0, 60.0);
        assert_eq!(board.get(id).unwrap().dates().unwrap(), (d(2024, 3, 3), d(2024, 3, 7)));
        assert_eq!(drag.applied_days, -1);
    }

    #[test]
    fn drag_past_window_edge_still_reports_reschedule() {
        let window = VisibleWindow::new(d(2024, 3, 1), d(2024, 3, 10), 60.0);
        let task = Task::new("Install", d(2024, 3, 8), d(2024, 3, 9));
        let id = task.id;
        let mut board = TaskBoard::new(vec![task]);
        let mut drag = BarDrag::new(id, 500.0);

        drag.follow(&mut board, 500.0 + 60.0 * 5.0, window.cell_width);
        let moved = board.get(id).unwrap();
        assert_eq!(window.position(moved).clip(window.grid_width()), None);

        assert_eq!(drag.finish(&board), Some((id, d(2024, 3, 13), d(2024, 3, 14))));
    }

    #[test]
    fn drag_back_to_origin_reports_nothing() {
        let task = Task::new("Quote", d(2024, 3, 1), d(2024, 3, 2));
        let id = task.id;
        let mut board = TaskBoard::new(vec![task]);
        let before = board.clone();
        let mut drag = BarDrag::new(id, 0.0);

        drag.follow(&mut board, 120.0, 60.0);
        drag.follow(&mut board, 10.0, 60.0);
        assert_eq!(board, before);
        assert_eq!(drag.finish(&board), None);
    }

    #[test]
    fn drag_past_calendar_end_leaves_task_alone() {
        let task = Task::new("Last", d(9999, 12, 30), d(9999, 12, 31));
        let id = task.id;
        let mut board = TaskBoard::new(vec![task]);
        let before = board.clone();
        let mut drag = BarDrag::new(id, 0.0);

        drag.follow(&mut board, 120.0, 60.0);
        drag.follow(&mut board, f32::MAX, 60.0);
        assert_eq!(board, before);
        assert_eq!(drag.finish(&board), None);
    }
}

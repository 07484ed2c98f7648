pub mod board;
pub mod calendar;
pub mod position;
pub mod selection;
pub mod task;
pub mod window;

pub use board::{validate_range, TaskBoard};
pub use calendar::{days_between, is_today, is_today_at, is_weekend};
pub use position::{position_for, Position, DEFAULT_CELL_WIDTH};
pub use selection::Selection;
pub use task::{Task, TaskStatus};
pub use window::{derive_range, VisibleWindow};

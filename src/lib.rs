//! Gantt timeline engine for the business dashboard.
//!
//! [`model`] holds the engine: range derivation, the day grid, bar
//! positions, day classification, the task board and selection state.
//! [`io`] loads and persists task collections; [`ui`] and [`app`] render
//! them with egui.

pub mod app;
pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod ui;

pub use error::{DateError, ScheduleError, StoreError};

pub mod csv_export;
pub mod csv_import;
pub mod store;

pub use store::{load_tasks, save_tasks, JsonFileStore, TaskStore};

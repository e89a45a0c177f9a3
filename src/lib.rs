pub mod app;
pub mod dates;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod reports;
pub mod routines;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{resolve_data_path, DataStore, JsonFileStore, MemoryStore};

pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod storage;
pub mod store;
pub mod ui;
pub mod state;
pub mod views;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{EntryStorage, FileStorage, MemoryStorage};
pub use store::EntryStore;

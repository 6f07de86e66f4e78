pub mod app;
pub mod calendar;
pub mod date_key;
pub mod errors;
pub mod grid;
pub mod handlers;
pub mod index;
pub mod models;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use calendar::{CalendarView, CalendarWidget};
pub use grid::{compute_grid, GridCell};
pub use index::EventIndex;
pub use state::AppState;
pub use storage::{load_feed, resolve_data_path};

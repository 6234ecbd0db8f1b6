pub mod aliases;
pub mod app;
pub mod config;
pub mod dates;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod stats;
pub mod ui;
pub mod upstream;
pub mod state;

pub use app::router;
pub use config::Config;
pub use dates::{normalize_date, DateInput};
pub use normalize::normalize_records;
pub use state::AppState;

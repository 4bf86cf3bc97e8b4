pub mod analytics;
pub mod app;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod ui;

pub use analytics::StatsAggregator;
pub use app::router;
pub use config::Config;
pub use state::AppState;

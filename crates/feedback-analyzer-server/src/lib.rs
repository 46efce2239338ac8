pub mod app;
pub mod cli;
pub mod config;
pub mod routes;
pub mod state;
pub mod static_files;
pub mod telemetry;

pub use app::*;
pub use config::*;
pub use state::*;

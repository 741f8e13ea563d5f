// Library exports for testing and potential library use

/// Application version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod app;
pub mod cli;
pub mod debug;
pub mod report;

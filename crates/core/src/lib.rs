pub mod config;
pub mod tracker;

// Re-export for convenience
pub use config::Config;
pub use tracker::{DEFAULT_SPACES_PER_LEVEL, IndentTracker};

pub mod api;
pub mod config;
pub mod error;
pub mod heuristics;
pub mod loader;
pub mod metrics;
pub mod model;
pub mod scorer;
pub mod source;
// cmd and reports are modules of the binary crate (main.rs).

//! thumbtrack - headless player for the thumbtrack_ui overlay scrollbar
//!
//! Runs the scrollbar engine against a simulated container so interaction
//! sessions can be scripted, replayed and inspected without a browser.

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
pub mod config;
pub mod host;
pub mod scenario;

#[cfg(not(target_arch = "wasm32"))]
pub use cli::Args;
pub use config::{ConfigError, DemoConfig, LogLevel};
pub use scenario::{Report, Scenario, ScenarioError, ScenarioRunner, Step, run};

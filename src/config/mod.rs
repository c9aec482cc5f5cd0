//! Startup configuration: initial parameter values, population size, and
//! UI cadence. Loaded once at launch; nothing is ever written back.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, Defaults, UiConfig};

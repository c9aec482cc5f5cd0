use serde::{Deserialize, Serialize};

use crate::calc::DEFAULT_POPULATION;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Initial values the screen starts from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Initial sensitivity as a percentage (default: 90).
    #[serde(default = "default_sensitivity_pct")]
    pub sensitivity_pct: f64,
    /// Initial specificity as a percentage (default: 95).
    #[serde(default = "default_specificity_pct")]
    pub specificity_pct: f64,
    /// Initial prevalence as a percentage (default: 5).
    #[serde(default = "default_prevalence_pct")]
    pub prevalence_pct: f64,
    /// Hypothetical population the confusion cells are projected over
    /// (default: 10,000).
    #[serde(default = "default_population")]
    pub population: i64,
}

/// Cosmetic UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_sensitivity_pct() -> f64 {
    90.0
}

fn default_specificity_pct() -> f64 {
    95.0
}

fn default_prevalence_pct() -> f64 {
    5.0
}

fn default_population() -> i64 {
    DEFAULT_POPULATION
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            sensitivity_pct: default_sensitivity_pct(),
            specificity_pct: default_specificity_pct(),
            prevalence_pct: default_prevalence_pct(),
            population: default_population(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

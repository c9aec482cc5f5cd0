use clap::Parser;
use std::path::PathBuf;

use crate::calc::Params;
use crate::config::Defaults;

/// Command-line overrides for the startup defaults.
///
/// Like the numeric fields on screen, values are taken as given and not
/// clamped; the config file is the only validated source.
#[derive(Debug, Parser)]
#[command(
    name = "ppvcalc",
    version,
    about = "Interactive PPV calculator for diagnostic tests"
)]
pub struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Initial sensitivity as a percentage.
    #[arg(long, value_name = "PCT")]
    pub sensitivity: Option<f64>,

    /// Initial specificity as a percentage.
    #[arg(long, value_name = "PCT")]
    pub specificity: Option<f64>,

    /// Initial prevalence as a percentage.
    #[arg(long, value_name = "PCT")]
    pub prevalence: Option<f64>,

    /// Population the confusion cells are projected over.
    #[arg(long, value_name = "N")]
    pub population: Option<i64>,
}

impl Cli {
    /// Starting parameter values: config defaults with CLI flags applied
    /// on top.
    pub fn initial_params(&self, defaults: &Defaults) -> Params {
        Params::new(
            self.sensitivity.unwrap_or(defaults.sensitivity_pct),
            self.specificity.unwrap_or(defaults.specificity_pct),
            self.prevalence.unwrap_or(defaults.prevalence_pct),
        )
    }

    pub fn population(&self, defaults: &Defaults) -> i64 {
        self.population.unwrap_or(defaults.population)
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use crate::calc::Param;
    use crate::config::Defaults;
    use clap::Parser;

    #[test]
    fn no_flags_uses_config_defaults() {
        let cli = Cli::parse_from(["ppvcalc"]);
        let defaults = Defaults::default();
        let params = cli.initial_params(&defaults);
        assert_eq!(params.get(Param::Sensitivity), 90.0);
        assert_eq!(cli.population(&defaults), 10_000);
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "ppvcalc",
            "--prevalence",
            "12.5",
            "--population",
            "500",
        ]);
        let defaults = Defaults::default();
        let params = cli.initial_params(&defaults);
        assert_eq!(params.get(Param::Prevalence), 12.5);
        assert_eq!(params.get(Param::Specificity), 95.0);
        assert_eq!(cli.population(&defaults), 500);
    }
}

//! Layered simulation settings.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults ([`SimConfig::default`])
//! 2. An optional config file (TOML, JSON or YAML, picked by extension)
//! 3. Environment variables prefixed with `INTELLIFENCE__`, using `__` to
//!    separate nested keys, e.g. `INTELLIFENCE__ODDS__CRITICAL=0.05`

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use intellifence_sim::SimConfig;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "INTELLIFENCE";

/// Load and validate the simulation settings.
pub fn load(config_path: Option<&Path>) -> Result<SimConfig> {
    let mut builder = Config::builder();
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path));
    }
    let config = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("loading settings")?;

    let settings: SimConfig = config.try_deserialize().context("parsing settings")?;
    settings.validate()?;
    Ok(settings)
}

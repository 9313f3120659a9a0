//! Application configuration management.
//!
//! Configuration is merged from default values, an optional TOML file and
//! environment variables. Command-line flags are applied on top by the caller.

use crate::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings that may be provided without touching the command line
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct AppConfig {
    /// The auction definitions file used when none is given on the command line
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// How outcomes are written
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_input() -> PathBuf {
    PathBuf::from("data/auctionInputs.txt")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            format: OutputFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. The given config file
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern `SPA_<KEY>`:
    ///
    /// ```bash
    /// export SPA_INPUT="auctions/today.txt"
    /// export SPA_FORMAT="json"
    /// ```
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Start with default values
        config = config.add_source(config::Config::try_from(&Self::default())?);

        // Layer on config file if it is specified and exists
        if let Some(path) = path {
            if path.exists() {
                config = config.add_source(config::File::from(path))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        config = config.add_source(
            config::Environment::with_prefix("SPA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}

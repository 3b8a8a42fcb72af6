//! Sample values used by the demo binaries.
//!
//! Every field defaults to the value the demos were written around. Set
//! `CAPABILITY_DEMO_CONFIG` to a TOML file to override any of them.

use crate::money::Amount;
use serde::Deserialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const CONFIG_ENV: &str = "CAPABILITY_DEMO_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub checkout_amount: Amount,
    pub gift_card_balance: Amount,
    pub dog_name: String,
    pub cat_name: String,
    pub car_doors: u8,
    pub motorcycle_has_sidecar: bool,
    pub accelerations: u32,
    pub document: String,
    pub dividend: i64,
    pub divisor: i64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            checkout_amount: Amount::from_cents(10_000),
            gift_card_balance: Amount::from_cents(2_500),
            dog_name: "Buddy".to_string(),
            cat_name: "Kitty".to_string(),
            car_doors: 4,
            motorcycle_has_sidecar: false,
            accelerations: 2,
            document: "quarterly-report.pdf".to_string(),
            dividend: 10,
            divisor: 0,
        }
    }
}

impl DemoConfig {
    /// Reads the file named by `CAPABILITY_DEMO_CONFIG`, or returns the
    /// defaults when the variable is unset.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(std::env::var_os(CONFIG_ENV))
    }

    /// `load` with the variable's value passed in.
    pub fn load_from(path: Option<OsString>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_path(Path::new(&path)),
            None => {
                debug!("{} not set, using default sample values", CONFIG_ENV);
                Ok(Self::default())
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded demo config");
        Ok(config)
    }
}

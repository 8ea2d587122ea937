//! Runtime configuration from environment variables (and `.env` via dotenv).

use crate::output::OutputOrder;
use std::path::PathBuf;

/// Env var naming the log4rs YAML config file.
pub const LOG_CONFIG_VAR: &str = "VLSM_LOG_CONFIG";
/// Env var selecting the reporting order, `size` or `request`.
pub const OUTPUT_ORDER_VAR: &str = "VLSM_OUTPUT_ORDER";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_config: PathBuf,
    pub output_order: OutputOrder,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            output_order: OutputOrder::default(),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Config {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup, unknown values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(path) = lookup(LOG_CONFIG_VAR).filter(|p| !p.trim().is_empty()) {
            config.log_config = PathBuf::from(path.trim());
        }
        if let Some(order) = lookup(OUTPUT_ORDER_VAR) {
            match order.parse::<OutputOrder>() {
                Ok(order) => config.output_order = order,
                Err(e) => log::warn!("{OUTPUT_ORDER_VAR}: {e}, using {:?}", config.output_order),
            }
        }
        config
    }
}

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime configuration for the recipe service.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Address to bind to. Port 0 picks a free port.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Pre-load the starter recipes on boot.
    #[serde(default = "default_seed")]
    pub seed: bool,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            seed: default_seed(),
            log_filter: default_log_filter(),
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_seed() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl ServiceConfig {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables with RECIPES__ prefix
    /// 2. recipes.toml in the current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPES__BIND_ADDR=0.0.0.0:3000
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("recipes")
    }

    /// Same as `load`, reading `<name>.toml` instead of `recipes.toml`.
    pub fn load_from(name: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(name).required(false))
            .add_source(
                Environment::with_prefix("RECIPES")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

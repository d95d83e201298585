//! Daemon configuration
//!
//! Defaults overlaid by `ORDERFLOW_*` environment variables
//! (e.g. `ORDERFLOW_DB_PATH`, `ORDERFLOW_RPC_PORT`, `ORDERFLOW_STRICT_VALIDATION`).

use anyhow::{Context, Result};
use config::{Config, Environment};
use orderflow_core::domain::ValidationMode;
use serde::Deserialize;

const DEFAULT_DB_PATH: &str = "~/.orderflow/orders.db";
const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 9640;

#[derive(Debug, Clone, Deserialize)]
pub struct DaemonConfig {
    pub db_path: String,
    pub rpc_host: String,
    pub rpc_port: u16,
    /// "pretty" or "json"
    pub log_format: String,
    /// Also write daily-rotated log files here when set
    pub log_dir: Option<String>,
    pub strict_validation: bool,
}

impl DaemonConfig {
    /// Load from the process environment
    pub fn load() -> Result<Self> {
        Self::from_env(Environment::with_prefix("ORDERFLOW").try_parsing(true))
    }

    fn from_env(env: Environment) -> Result<Self> {
        let mut cfg: DaemonConfig = Config::builder()
            .set_default("db_path", DEFAULT_DB_PATH)?
            .set_default("rpc_host", DEFAULT_RPC_HOST)?
            .set_default("rpc_port", DEFAULT_RPC_PORT as i64)?
            .set_default("log_format", "pretty")?
            .set_default("strict_validation", false)?
            .add_source(env)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        cfg.db_path = shellexpand::tilde(&cfg.db_path).into_owned();
        if let Some(dir) = cfg.log_dir.take() {
            cfg.log_dir = Some(shellexpand::tilde(&dir).into_owned());
        }

        Ok(cfg)
    }

    pub fn validation_mode(&self) -> ValidationMode {
        if self.strict_validation {
            ValidationMode::Strict
        } else {
            ValidationMode::Lenient
        }
    }
}

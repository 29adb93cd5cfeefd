//! Configuration for the JSend demo service

use anyhow::Result;
use clap::Parser;
use jsend::{Compat, JSendConfig, ValidationMode};
use std::path::PathBuf;

/// Configuration for the demo service
#[derive(Debug, Clone, Parser)]
#[command(name = "jsend-demo")]
#[command(about = "Serves JSend envelopes through the axum middleware")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env, default_value = "0.0.0.0:3000")]
    pub bind_addr: String,

    /// Reject envelopes carrying keys outside their variant
    #[arg(long, env = "JSEND_STRICT")]
    pub strict: bool,

    /// Enable every legacy compatibility behaviour
    #[arg(long, env = "JSEND_LEGACY_COMPAT")]
    pub legacy_compat: bool,

    /// YAML file with JSend settings; overrides --strict and --legacy-compat
    #[arg(long = "config", env = "JSEND_CONFIG")]
    pub config_path: Option<PathBuf>,

    /// Output logs in JSON format
    #[arg(long, env)]
    pub log_json: bool,
}

impl Config {
    /// Parse configuration from command-line args and environment variables
    pub fn parse_config() -> Self {
        Config::parse()
    }

    /// Resolve the JSend settings, preferring the YAML file when one is given.
    pub fn jsend_config(&self) -> Result<JSendConfig> {
        if let Some(path) = &self.config_path {
            return JSendConfig::from_yaml_file(path);
        }

        Ok(JSendConfig {
            mode: if self.strict {
                ValidationMode::Strict
            } else {
                ValidationMode::Lenient
            },
            compat: if self.legacy_compat {
                Compat::legacy()
            } else {
                Compat::default()
            },
        })
    }
}

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::store::LatencyFloor;

/// Main configuration structure for the backoffice state engine
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Latency normalization settings
    pub latency: LatencyConfig,
    /// List paging defaults
    pub paging: PagingConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LatencyConfig {
    /// Floor in milliseconds applied to every resource without an override
    pub default_floor_ms: u64,
    /// Per-resource overrides, keyed by store name (e.g. "authentication")
    pub floors: HashMap<String, u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PagingConfig {
    /// Page size requested when a screen does not specify one
    pub default_page_size: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level directive for the env filter
    pub log_level: String,
    /// Emit JSON-formatted log lines
    pub json_logs: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            latency: LatencyConfig {
                default_floor_ms: 250,
                // Sign-in deliberately pauses longer than data fetches
                floors: HashMap::from([("authentication".to_string(), 1000)]),
            },
            paging: PagingConfig {
                default_page_size: 20,
            },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
                json_logs: false,
            },
        }
    }
}

impl EngineConfig {
    /// Load configuration with precedence:
    /// 1. Default values
    /// 2. Configuration file (backoffice.toml)
    /// 3. Environment variables (prefixed with BACKOFFICE_)
    pub fn load() -> Result<Self> {
        let defaults = Config::try_from(&EngineConfig::default())?;
        let mut builder = Config::builder().add_source(defaults);

        if Path::new("backoffice.toml").exists() {
            builder = builder.add_source(File::with_name("backoffice"));
        }

        builder = builder.add_source(
            Environment::with_prefix("BACKOFFICE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Floor for one store, falling back to the default
    pub fn latency_for(&self, resource: &str) -> LatencyFloor {
        let millis = self
            .latency
            .floors
            .get(resource)
            .copied()
            .unwrap_or(self.latency.default_floor_ms);
        LatencyFloor::from_millis(millis)
    }
}

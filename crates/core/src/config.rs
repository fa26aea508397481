// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Adapter configuration file
//!
//! ```toml
//! [connection]
//! server_url = "tcp://localhost:61616"
//! client_id = "orders-service"
//!
//! [activation.orders]
//! destination = "orders"
//! destination_type = "topic"
//! default_client_id = true
//! subscription_durability = "durable"
//! subscription_name = "orders-sub"
//! ```

use crate::activation::ActivationSpec;
use crate::defaults::ConnectionDefaults;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading adapter configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown activation '{0}'")]
    UnknownActivation(String),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterConfig {
    #[serde(default)]
    pub connection: ConnectionDefaults,
    #[serde(default)]
    pub activation: BTreeMap<String, ActivationSpec>,
}

impl AdapterConfig {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            activations = config.activation.len(),
            "loaded adapter config"
        );
        Ok(config)
    }

    pub fn activation(&self, name: &str) -> Result<&ActivationSpec, ConfigError> {
        self.activation
            .get(name)
            .ok_or_else(|| ConfigError::UnknownActivation(name.to_string()))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod check;
pub mod resolve;

use anyhow::{Context, Result};
use jmsra_core::AdapterConfig;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "jmsra.toml";

/// Pick the config file: `--config`, then JMSRA_CONFIG, then ./jmsra.toml.
fn config_path(arg: Option<&Path>) -> PathBuf {
    arg.map(Path::to_path_buf)
        .or_else(crate::env::config_path)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Load the adapter config and apply environment overrides.
pub fn load_config(arg: Option<&Path>) -> Result<AdapterConfig> {
    let path = config_path(arg);
    let mut config = AdapterConfig::load(&path)
        .with_context(|| format!("cannot load adapter config {}", path.display()))?;
    if let Some(client_id) = crate::env::client_id_override() {
        tracing::debug!(client_id = %client_id, "connection client id overridden from environment");
        config.connection.client_id = Some(client_id);
    }
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

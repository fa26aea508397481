// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `jmsra check` - validate every activation

use anyhow::{bail, Result};
use jmsra_core::AdapterConfig;
use jmsra_engine::preflight;
use serde::Serialize;

use crate::output::OutputFormat;

#[derive(Debug, Serialize)]
struct Problem {
    activation: String,
    error: String,
}

/// Run preflight for every activation, in name order.
fn problems(config: &AdapterConfig) -> Vec<Problem> {
    config
        .activation
        .iter()
        .filter_map(|(name, spec)| {
            preflight(spec, &config.connection)
                .err()
                .map(|e| Problem {
                    activation: name.clone(),
                    error: e.to_string(),
                })
        })
        .collect()
}

pub fn handle(config: &AdapterConfig, format: OutputFormat) -> Result<()> {
    let problems = problems(config);
    match format {
        OutputFormat::Text => {
            for p in &problems {
                println!("{}: {}", p.activation, p.error);
            }
            if problems.is_empty() {
                println!("ok: {} activations", config.activation.len());
            }
        }
        OutputFormat::Json => {
            let report = serde_json::json!({
                "activations": config.activation.len(),
                "problems": problems,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    if !problems.is_empty() {
        bail!("{} invalid activation(s)", problems.len());
    }
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;

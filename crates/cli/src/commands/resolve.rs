// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `jmsra resolve` - show an activation's connection identity

use anyhow::Result;
use clap::Args;
use jmsra_core::{AdapterConfig, Resolution};
use jmsra_engine::preflight;

use crate::output::OutputFormat;

#[derive(Args)]
pub struct ResolveArgs {
    /// Activation name (the `[activation.<name>]` table)
    pub activation: String,
}

/// Text form: `client_id: <id or <none>>` and `source: <source>`.
fn render_text(name: &str, resolution: &Resolution) -> String {
    let client_id = resolution
        .client_id
        .as_ref()
        .map(|id| id.as_str())
        .unwrap_or("<none>");
    format!(
        "activation: {name}\nclient_id: {client_id}\nsource: {}",
        resolution.source
    )
}

pub fn handle(args: ResolveArgs, config: &AdapterConfig, format: OutputFormat) -> Result<()> {
    let spec = config.activation(&args.activation)?;
    let resolution = preflight(spec, &config.connection)?;
    match format {
        OutputFormat::Text => println!("{}", render_text(&args.activation, &resolution)),
        OutputFormat::Json => {
            let report = serde_json::json!({
                "activation": args.activation,
                "client_id": resolution.client_id,
                "source": resolution.source,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;

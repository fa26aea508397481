// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! jmsra - JMS resource adapter activation diagnostics

mod commands;
mod env;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, resolve};
use output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "jmsra",
    version,
    about = "Inspect JMS endpoint activations and their connection identity"
)]
struct Cli {
    /// Adapter config file (default: $JMSRA_CONFIG, then ./jmsra.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every activation in the config
    Check,
    /// Show the client id an activation's connection would carry
    Resolve(resolve::ResolveArgs),
}

fn main() {
    init_tracing();
    if let Err(e) = run() {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by RUST_LOG (default: warn).
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, the
/// "Caused by" chain is skipped.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // No subcommand: print help and exit 0
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
            return Ok(());
        }
    };

    let config = commands::load_config(cli.config.as_deref())?;
    match command {
        Commands::Check => check::handle(&config, cli.output),
        Commands::Resolve(args) => resolve::handle(args, &config, cli.output),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

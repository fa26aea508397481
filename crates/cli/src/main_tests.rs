// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn format_error_single() {
    let err = anyhow::anyhow!("unknown activation 'x'");
    assert_eq!(format_error(&err), "unknown activation 'x'");
}

#[test]
fn format_error_skips_redundant_chain() {
    let err = anyhow::anyhow!("broker down").context("connect failed: broker down");
    assert_eq!(format_error(&err), "connect failed: broker down");
}

#[test]
fn format_error_renders_distinct_causes() {
    let err = anyhow::anyhow!("file missing").context("failed to load config");
    let msg = format_error(&err);
    assert!(msg.starts_with("failed to load config"), "got: {}", msg);
    assert!(msg.contains("Caused by:\n    0: file missing"), "got: {}", msg);
}

#[test]
fn cli_parses_resolve_with_global_flags() {
    let cli = Cli::try_parse_from(["jmsra", "resolve", "orders", "-o", "json", "-c", "a.toml"])
        .unwrap();
    assert_eq!(cli.output, OutputFormat::Json);
    assert_eq!(cli.config, Some(PathBuf::from("a.toml")));
    assert!(matches!(cli.command, Some(Commands::Resolve(ref a)) if a.activation == "orders"));
}

#[test]
fn cli_resolve_requires_activation() {
    assert!(Cli::try_parse_from(["jmsra", "resolve"]).is_err());
}

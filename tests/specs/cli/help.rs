//! Help output.

use crate::prelude::*;

#[test]
fn no_subcommand_prints_help() {
    cli()
        .args(&[])
        .passes()
        .stdout_has("Usage: jmsra")
        .stdout_has("resolve")
        .stdout_has("check");
}

#[test]
fn resolve_help_names_argument() {
    cli()
        .args(&["resolve", "--help"])
        .passes()
        .stdout_has("<ACTIVATION>");
}

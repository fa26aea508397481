// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

/// Config file named by JMSRA_CONFIG, if set and non-empty.
pub fn config_path() -> Option<PathBuf> {
    std::env::var("JMSRA_CONFIG")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// Connection default client id override from JMSRA_CLIENT_ID.
///
/// An empty value is kept: it clears the configured default.
pub fn client_id_override() -> Option<String> {
    std::env::var("JMSRA_CLIENT_ID").ok()
}

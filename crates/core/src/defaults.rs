// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Adapter-wide connection defaults

use serde::{Deserialize, Serialize};

/// Broker URL used when the configuration does not name one.
pub const DEFAULT_SERVER_URL: &str = "tcp://localhost:61616";

/// What to do when a durable activation takes its identity from the
/// connection default and that default is unset or empty.
///
/// Activations with an explicit client id selection are never checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurableIdentityPolicy {
    /// Log a warning and connect anyway.
    #[default]
    Warn,
    /// Refuse to resolve an identity for the activation.
    Reject,
}

/// Connection configuration shared by every activation of the adapter.
///
/// Passed explicitly into resolution; never mutated after load.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConnectionDefaults {
    pub server_url: Option<String>,
    pub user_name: Option<String>,
    pub password: Option<String>,
    /// Fallback client identifier. May be unset, empty or non-empty.
    pub client_id: Option<String>,
    pub durable_without_client_id: DurableIdentityPolicy,
}

impl ConnectionDefaults {
    pub fn server_url(&self) -> &str {
        self.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }
}

impl std::fmt::Debug for ConnectionDefaults {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionDefaults")
            .field("server_url", &self.server_url)
            .field("user_name", &self.user_name)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("client_id", &self.client_id)
            .field("durable_without_client_id", &self.durable_without_client_id)
            .finish()
    }
}

#[cfg(test)]
#[path = "defaults_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Message endpoint activation descriptors
//!
//! An [`ActivationSpec`] describes one request to bind a message-driven
//! endpoint to a broker destination. Where the connection's client identifier
//! comes from is a [`ClientIdSelection`]: either the adapter's connection
//! default or the activation's own value. The two sources are exclusive, so
//! resolution can never read both.

use crate::redelivery::{RedeliveryError, RedeliveryPolicy};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Where an activation takes its connection client identifier from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientIdSelection {
    /// Use `ConnectionDefaults::client_id`.
    ConnectionDefault,
    /// Use the activation's own value, which may be absent.
    Explicit(Option<String>),
}

impl Default for ClientIdSelection {
    fn default() -> Self {
        ClientIdSelection::Explicit(None)
    }
}

impl ClientIdSelection {
    pub fn explicit(client_id: impl Into<String>) -> Self {
        ClientIdSelection::Explicit(Some(client_id.into()))
    }

    pub fn uses_connection_default(&self) -> bool {
        matches!(self, ClientIdSelection::ConnectionDefault)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionDurability {
    Durable,
    #[default]
    NonDurable,
}

impl SubscriptionDurability {
    pub fn is_durable(self) -> bool {
        self == SubscriptionDurability::Durable
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationType {
    #[default]
    Queue,
    Topic,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcknowledgeMode {
    #[default]
    #[serde(rename = "auto-acknowledge", alias = "Auto-acknowledge")]
    AutoAcknowledge,
    #[serde(rename = "dups-ok-acknowledge", alias = "Dups-ok-acknowledge")]
    DupsOkAcknowledge,
}

/// Problems found by [`ActivationSpec::validate`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActivationError {
    #[error("destination is required")]
    MissingDestination,
    #[error("durable subscriptions require a topic destination (got queue '{0}')")]
    DurableOnQueue(String),
    #[error("durable subscriptions require subscription_name")]
    MissingSubscriptionName,
    #[error("{field} must be greater than zero")]
    ZeroLimit { field: &'static str },
    #[error("invalid redelivery policy: {0}")]
    Redelivery(#[from] RedeliveryError),
}

const DEFAULT_MAX_SESSIONS: u32 = 10;
const DEFAULT_MAX_MESSAGES_PER_SESSION: u32 = 10;

/// Read-only description of one endpoint activation.
#[derive(Clone, PartialEq)]
pub struct ActivationSpec {
    pub user_name: Option<String>,
    pub password: Option<String>,
    pub client_id: ClientIdSelection,
    pub subscription_durability: SubscriptionDurability,
    /// Passed through to the connection untouched.
    pub redelivery: Option<RedeliveryPolicy>,
    pub destination: String,
    pub destination_type: DestinationType,
    pub subscription_name: Option<String>,
    pub message_selector: Option<String>,
    pub acknowledge_mode: AcknowledgeMode,
    pub max_sessions: u32,
    pub max_messages_per_session: u32,
}

impl Default for ActivationSpec {
    fn default() -> Self {
        Self {
            user_name: None,
            password: None,
            client_id: ClientIdSelection::default(),
            subscription_durability: SubscriptionDurability::default(),
            redelivery: None,
            destination: String::new(),
            destination_type: DestinationType::default(),
            subscription_name: None,
            message_selector: None,
            acknowledge_mode: AcknowledgeMode::default(),
            max_sessions: DEFAULT_MAX_SESSIONS,
            max_messages_per_session: DEFAULT_MAX_MESSAGES_PER_SESSION,
        }
    }
}

impl ActivationSpec {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            ..Self::default()
        }
    }

    pub fn is_durable(&self) -> bool {
        self.subscription_durability.is_durable()
    }

    /// Check the activation for configuration errors, collecting all of them.
    pub fn validate(&self) -> Result<(), Vec<ActivationError>> {
        let mut errors = Vec::new();

        if self.destination.trim().is_empty() {
            errors.push(ActivationError::MissingDestination);
        }
        if self.is_durable() {
            if self.destination_type == DestinationType::Queue {
                errors.push(ActivationError::DurableOnQueue(self.destination.clone()));
            }
            if self.subscription_name.as_deref().is_none_or(str::is_empty) {
                errors.push(ActivationError::MissingSubscriptionName);
            }
        }
        if self.max_sessions == 0 {
            errors.push(ActivationError::ZeroLimit {
                field: "max_sessions",
            });
        }
        if self.max_messages_per_session == 0 {
            errors.push(ActivationError::ZeroLimit {
                field: "max_messages_per_session",
            });
        }
        if let Some(policy) = &self.redelivery {
            if let Err(e) = policy.validate() {
                errors.push(e.into());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl std::fmt::Debug for ActivationSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivationSpec")
            .field("destination", &self.destination)
            .field("destination_type", &self.destination_type)
            .field("user_name", &self.user_name)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("client_id", &self.client_id)
            .field("subscription_durability", &self.subscription_durability)
            .field("subscription_name", &self.subscription_name)
            .finish_non_exhaustive()
    }
}

impl<'de> Deserialize<'de> for ActivationSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Helper {
            user_name: Option<String>,
            password: Option<String>,
            #[serde(default)]
            default_client_id: bool,
            client_id: Option<String>,
            #[serde(default)]
            subscription_durability: SubscriptionDurability,
            redelivery: Option<RedeliveryPolicy>,
            #[serde(default)]
            destination: String,
            #[serde(default)]
            destination_type: DestinationType,
            subscription_name: Option<String>,
            message_selector: Option<String>,
            #[serde(default)]
            acknowledge_mode: AcknowledgeMode,
            #[serde(default = "default_max_sessions")]
            max_sessions: u32,
            #[serde(default = "default_max_messages_per_session")]
            max_messages_per_session: u32,
        }

        let h = Helper::deserialize(deserializer)?;
        let client_id = match (h.default_client_id, h.client_id) {
            (true, Some(_)) => {
                return Err(serde::de::Error::custom(
                    "client_id cannot be combined with default_client_id = true",
                ));
            }
            (true, None) => ClientIdSelection::ConnectionDefault,
            (false, explicit) => ClientIdSelection::Explicit(explicit),
        };
        Ok(ActivationSpec {
            user_name: h.user_name,
            password: h.password,
            client_id,
            subscription_durability: h.subscription_durability,
            redelivery: h.redelivery,
            destination: h.destination,
            destination_type: h.destination_type,
            subscription_name: h.subscription_name,
            message_selector: h.message_selector,
            acknowledge_mode: h.acknowledge_mode,
            max_sessions: h.max_sessions,
            max_messages_per_session: h.max_messages_per_session,
        })
    }
}

fn default_max_sessions() -> u32 {
    DEFAULT_MAX_SESSIONS
}

fn default_max_messages_per_session() -> u32 {
    DEFAULT_MAX_MESSAGES_PER_SESSION
}

#[cfg(test)]
#[path = "activation_tests.rs"]
mod tests;

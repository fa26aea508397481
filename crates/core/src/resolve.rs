// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client identifier resolution for endpoint activations.
//!
//! Exactly one identifier source is read per activation, chosen by its
//! [`ClientIdSelection`]:
//!
//! - `ConnectionDefault` reads `ConnectionDefaults::client_id` and the
//!   activation's durability flag. The flag never changes the identifier; it
//!   only feeds the [`DurableIdentityPolicy`] check.
//! - `Explicit` reads the activation's own value and nothing else. An
//!   activation that names its own identity, even an absent one, has opted
//!   out of the connection default and of the policy check.
//!
//! Both `None` and `""` resolve to no identifier, in which case the broker's
//! default local identity applies.

use crate::activation::{ActivationSpec, ClientIdSelection};
use crate::client_id::ClientId;
use crate::defaults::{ConnectionDefaults, DurableIdentityPolicy};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error(
        "durable subscription '{destination}' requires a client id, but the connection default is unset"
    )]
    DurableWithoutClientId { destination: String },
}

/// Which configuration value the identifier was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientIdSource {
    ConnectionDefault,
    Activation,
}

impl std::fmt::Display for ClientIdSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientIdSource::ConnectionDefault => write!(f, "connection default"),
            ClientIdSource::Activation => write!(f, "activation"),
        }
    }
}

/// Outcome of resolving an activation's client identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// `None` leaves the connection identity unset.
    pub client_id: Option<ClientId>,
    pub source: ClientIdSource,
}

/// Decide the client identifier a new connection for `spec` should carry.
pub fn resolve_client_id(
    spec: &ActivationSpec,
    defaults: &ConnectionDefaults,
) -> Result<Resolution, ResolveError> {
    let resolution = match &spec.client_id {
        ClientIdSelection::ConnectionDefault => {
            let client_id = ClientId::normalize(defaults.client_id.as_deref());
            if spec.is_durable() && client_id.is_none() {
                match defaults.durable_without_client_id {
                    DurableIdentityPolicy::Warn => tracing::warn!(
                        destination = %spec.destination,
                        subscription = ?spec.subscription_name,
                        "durable subscription on a connection without client id"
                    ),
                    DurableIdentityPolicy::Reject => {
                        return Err(ResolveError::DurableWithoutClientId {
                            destination: spec.destination.clone(),
                        });
                    }
                }
            }
            Resolution {
                client_id,
                source: ClientIdSource::ConnectionDefault,
            }
        }
        ClientIdSelection::Explicit(explicit) => Resolution {
            client_id: ClientId::normalize(explicit.as_deref()),
            source: ClientIdSource::Activation,
        },
    };

    tracing::debug!(
        destination = %spec.destination,
        client_id = ?resolution.client_id.as_ref().map(ClientId::as_str),
        source = %resolution.source,
        "resolved client id"
    );
    Ok(resolution)
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{
    ActivationSpec, ClientIdSelection, ConnectionDefaults, DestinationType, SubscriptionDurability,
};

/// Durable topic activation that takes its identity from the connection defaults.
pub fn default_id_activation(destination: &str) -> ActivationSpec {
    ActivationSpec {
        client_id: ClientIdSelection::ConnectionDefault,
        destination_type: DestinationType::Topic,
        subscription_durability: SubscriptionDurability::Durable,
        subscription_name: Some(format!("{destination}-sub")),
        ..ActivationSpec::new(destination)
    }
}

/// Queue activation carrying its own (possibly absent) client id.
pub fn explicit_id_activation(destination: &str, client_id: Option<&str>) -> ActivationSpec {
    ActivationSpec {
        client_id: ClientIdSelection::Explicit(client_id.map(str::to_string)),
        ..ActivationSpec::new(destination)
    }
}

pub fn defaults_with_client_id(client_id: Option<&str>) -> ConnectionDefaults {
    ConnectionDefaults {
        server_url: Some("vm://localhost?broker.persistent=false".to_string()),
        client_id: client_id.map(str::to_string),
        ..ConnectionDefaults::default()
    }
}

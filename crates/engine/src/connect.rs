// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-activation connection setup

use crate::error::MakeConnectionError;
use jmsra_adapters::{BrokerConnection, ConnectionFactory};
use jmsra_core::{resolve_client_id, ActivationSpec, ConnectionDefaults, Credentials};

/// Open a broker connection for `spec` and apply its resolved identity.
///
/// Credentials, client id and redelivery policy are all worked out before the
/// factory is called, so a rejected identity never opens a connection. The
/// client id is written at most once; when none resolves the connection
/// keeps the broker's default identity. The connection is returned unstarted.
pub async fn make_connection<F: ConnectionFactory>(
    factory: &F,
    spec: &ActivationSpec,
    defaults: &ConnectionDefaults,
) -> Result<F::Connection, MakeConnectionError> {
    let credentials = Credentials::resolve(spec, defaults);
    let resolution = resolve_client_id(spec, defaults)?;
    let redelivery = spec.redelivery.clone();

    let mut connection = factory.create_connection(&credentials).await?;

    if let Some(client_id) = resolution.client_id {
        if let Err(e) = connection.set_client_id(client_id) {
            if let Err(close_err) = connection.close().await {
                tracing::warn!(error = %close_err, "close after failed client id failed");
            }
            return Err(e.into());
        }
    }
    if let Some(policy) = redelivery {
        connection.set_redelivery_policy(policy);
    }

    tracing::info!(
        destination = %spec.destination,
        client_id = connection.client_id().map(|id| id.as_str()).unwrap_or("<none>"),
        source = %resolution.source,
        "activation connection ready"
    );
    Ok(connection)
}

#[cfg(test)]
#[path = "connect_tests.rs"]
mod tests;

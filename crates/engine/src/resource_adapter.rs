// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource adapter entry point for endpoint activations

use crate::connect;
use crate::error::MakeConnectionError;
use jmsra_adapters::ConnectionFactory;
use jmsra_core::{resolve_client_id, ActivationSpec, ConnectionDefaults, Resolution};

/// Validate an activation and resolve its client id without connecting.
pub fn preflight(
    spec: &ActivationSpec,
    defaults: &ConnectionDefaults,
) -> Result<Resolution, MakeConnectionError> {
    spec.validate()
        .map_err(MakeConnectionError::InvalidActivation)?;
    Ok(resolve_client_id(spec, defaults)?)
}

/// Hands out broker connections for endpoint activations.
///
/// Holds a connection factory and the adapter's connection defaults. Neither
/// changes after construction, so one adapter can serve concurrent
/// activations.
#[derive(Clone)]
pub struct ResourceAdapter<F> {
    factory: F,
    defaults: ConnectionDefaults,
}

impl<F: ConnectionFactory> ResourceAdapter<F> {
    pub fn new(factory: F, defaults: ConnectionDefaults) -> Self {
        Self { factory, defaults }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn defaults(&self) -> &ConnectionDefaults {
        &self.defaults
    }

    /// Validate `spec` and open its connection using the adapter's defaults.
    pub async fn make_connection(
        &self,
        spec: &ActivationSpec,
    ) -> Result<F::Connection, MakeConnectionError> {
        self.make_connection_with(spec, &self.defaults).await
    }

    /// Like [`ResourceAdapter::make_connection`] with caller-supplied defaults.
    pub async fn make_connection_with(
        &self,
        spec: &ActivationSpec,
        defaults: &ConnectionDefaults,
    ) -> Result<F::Connection, MakeConnectionError> {
        if let Err(errors) = spec.validate() {
            tracing::warn!(
                destination = %spec.destination,
                errors = errors.len(),
                "rejecting invalid activation"
            );
            return Err(MakeConnectionError::InvalidActivation(errors));
        }
        connect::make_connection(&self.factory, spec, defaults).await
    }
}

#[cfg(test)]
#[path = "resource_adapter_tests.rs"]
mod tests;

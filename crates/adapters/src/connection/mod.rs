// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Broker connection adapters

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ConnectionCall, FakeConnection, FakeConnectionFactory};

use async_trait::async_trait;
use jmsra_core::{ClientId, Credentials, RedeliveryPolicy};
use thiserror::Error;

/// Errors from broker connection operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionError {
    #[error("authentication failed for user {0:?}")]
    AuthenticationFailed(Option<String>),
    #[error("broker unreachable: {0}")]
    Unreachable(String),
    #[error("client id already set to '{0}'")]
    ClientIdAlreadySet(ClientId),
    #[error("client id cannot be set after the connection is in use")]
    ClientIdAfterStart,
    #[error("client id '{0}' is already in use by another connection")]
    ClientIdInUse(ClientId),
    #[error("connection is closed")]
    Closed,
}

/// Creates transport-level broker connections.
#[async_trait]
pub trait ConnectionFactory: Clone + Send + Sync + 'static {
    type Connection: BrokerConnection;

    /// Open a connection authenticated with `credentials`.
    ///
    /// The returned connection has no client id and is not started.
    async fn create_connection(
        &self,
        credentials: &Credentials,
    ) -> Result<Self::Connection, ConnectionError>;
}

/// A broker connection handle owned by the component that requested it.
#[async_trait]
pub trait BrokerConnection: Send + Sync + 'static {
    fn client_id(&self) -> Option<&ClientId>;

    /// Set the connection identity.
    ///
    /// Allowed once, and only before [`BrokerConnection::start`].
    fn set_client_id(&mut self, client_id: ClientId) -> Result<(), ConnectionError>;

    fn redelivery_policy(&self) -> Option<&RedeliveryPolicy>;

    fn set_redelivery_policy(&mut self, policy: RedeliveryPolicy);

    /// Begin message delivery. Freezes the connection identity.
    async fn start(&mut self) -> Result<(), ConnectionError>;

    async fn close(&mut self) -> Result<(), ConnectionError>;
}

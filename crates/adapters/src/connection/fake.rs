// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake connection factory for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{BrokerConnection, ConnectionError, ConnectionFactory};
use async_trait::async_trait;
use jmsra_core::{ClientId, Credentials, RedeliveryPolicy};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Recorded broker call
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionCall {
    Create { credentials: Credentials },
    SetClientId { connection: u64, client_id: ClientId },
    SetRedeliveryPolicy { connection: u64, policy: RedeliveryPolicy },
    Start { connection: u64 },
    Close { connection: u64 },
}

struct FakeBrokerState {
    calls: Vec<ConnectionCall>,
    next_id: u64,
    /// Client ids held by open connections, like a broker enforcing uniqueness.
    client_ids: HashMap<ClientId, u64>,
    create_error: Option<ConnectionError>,
}

/// In-memory broker that hands out [`FakeConnection`]s.
#[derive(Clone)]
pub struct FakeConnectionFactory {
    inner: Arc<Mutex<FakeBrokerState>>,
}

impl Default for FakeConnectionFactory {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeBrokerState {
                calls: Vec::new(),
                next_id: 1,
                client_ids: HashMap::new(),
                create_error: None,
            })),
        }
    }
}

impl FakeConnectionFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ConnectionCall> {
        self.inner.lock().calls.clone()
    }

    /// Fail the next `create_connection` with `error`.
    pub fn fail_next_create(&self, error: ConnectionError) {
        self.inner.lock().create_error = Some(error);
    }

    /// Whether an open connection currently holds `client_id`.
    pub fn client_id_in_use(&self, client_id: &str) -> bool {
        self.inner.lock().client_ids.contains_key(client_id)
    }
}

#[async_trait]
impl ConnectionFactory for FakeConnectionFactory {
    type Connection = FakeConnection;

    async fn create_connection(
        &self,
        credentials: &Credentials,
    ) -> Result<FakeConnection, ConnectionError> {
        let mut state = self.inner.lock();
        state.calls.push(ConnectionCall::Create {
            credentials: credentials.clone(),
        });
        if let Some(err) = state.create_error.take() {
            return Err(err);
        }
        let id = state.next_id;
        state.next_id += 1;
        Ok(FakeConnection {
            id,
            client_id: None,
            redelivery: None,
            started: false,
            closed: false,
            broker: Arc::clone(&self.inner),
        })
    }
}

/// Connection handed out by [`FakeConnectionFactory`]
pub struct FakeConnection {
    id: u64,
    client_id: Option<ClientId>,
    redelivery: Option<RedeliveryPolicy>,
    started: bool,
    closed: bool,
    broker: Arc<Mutex<FakeBrokerState>>,
}

impl FakeConnection {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl std::fmt::Debug for FakeConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeConnection")
            .field("id", &self.id)
            .field("client_id", &self.client_id)
            .field("started", &self.started)
            .field("closed", &self.closed)
            .finish()
    }
}

#[async_trait]
impl BrokerConnection for FakeConnection {
    fn client_id(&self) -> Option<&ClientId> {
        self.client_id.as_ref()
    }

    fn set_client_id(&mut self, client_id: ClientId) -> Result<(), ConnectionError> {
        if self.closed {
            return Err(ConnectionError::Closed);
        }
        if self.started {
            return Err(ConnectionError::ClientIdAfterStart);
        }
        if let Some(current) = &self.client_id {
            return Err(ConnectionError::ClientIdAlreadySet(current.clone()));
        }
        let mut broker = self.broker.lock();
        if broker.client_ids.contains_key(&client_id) {
            return Err(ConnectionError::ClientIdInUse(client_id));
        }
        broker.client_ids.insert(client_id.clone(), self.id);
        broker.calls.push(ConnectionCall::SetClientId {
            connection: self.id,
            client_id: client_id.clone(),
        });
        self.client_id = Some(client_id);
        Ok(())
    }

    fn redelivery_policy(&self) -> Option<&RedeliveryPolicy> {
        self.redelivery.as_ref()
    }

    fn set_redelivery_policy(&mut self, policy: RedeliveryPolicy) {
        self.broker
            .lock()
            .calls
            .push(ConnectionCall::SetRedeliveryPolicy {
                connection: self.id,
                policy: policy.clone(),
            });
        self.redelivery = Some(policy);
    }

    async fn start(&mut self) -> Result<(), ConnectionError> {
        if self.closed {
            return Err(ConnectionError::Closed);
        }
        self.broker.lock().calls.push(ConnectionCall::Start {
            connection: self.id,
        });
        self.started = true;
        Ok(())
    }

    async fn close(&mut self) -> Result<(), ConnectionError> {
        if self.closed {
            return Ok(());
        }
        let mut broker = self.broker.lock();
        if let Some(client_id) = &self.client_id {
            broker.client_ids.remove(client_id);
        }
        broker.calls.push(ConnectionCall::Close {
            connection: self.id,
        });
        self.closed = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;

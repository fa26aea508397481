// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::connection::{ConnectionError, ConnectionFactory};
use async_trait::async_trait;
use jmsra_core::Credentials;
use tracing::Instrument;

/// Wrapper that adds tracing to any ConnectionFactory
#[derive(Clone)]
pub struct TracedConnectionFactory<F> {
    inner: F,
    server_url: String,
}

impl<F> TracedConnectionFactory<F> {
    pub fn new(inner: F, server_url: impl Into<String>) -> Self {
        Self {
            inner,
            server_url: server_url.into(),
        }
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }
}

#[async_trait]
impl<F: ConnectionFactory> ConnectionFactory for TracedConnectionFactory<F> {
    type Connection = F::Connection;

    async fn create_connection(
        &self,
        credentials: &Credentials,
    ) -> Result<Self::Connection, ConnectionError> {
        let span = tracing::info_span!(
            "connection.create",
            server_url = %self.server_url,
            user = credentials.user_name.as_deref().unwrap_or("<anonymous>"),
        );
        async {
            tracing::info!("connecting");
            let start = std::time::Instant::now();
            let result = self.inner.create_connection(credentials).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(_) => tracing::info!(elapsed_ms, "connection created"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "connect failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;

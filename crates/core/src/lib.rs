// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jmsra-core: client identity and activation model for the JMS resource adapter

pub mod activation;
pub mod client_id;
pub mod config;
pub mod credentials;
pub mod defaults;
pub mod redelivery;
pub mod resolve;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use activation::{
    AcknowledgeMode, ActivationError, ActivationSpec, ClientIdSelection, DestinationType,
    SubscriptionDurability,
};
pub use client_id::ClientId;
pub use config::{AdapterConfig, ConfigError};
pub use credentials::Credentials;
pub use defaults::{ConnectionDefaults, DurableIdentityPolicy, DEFAULT_SERVER_URL};
pub use redelivery::{RedeliveryError, RedeliveryPolicy};
pub use resolve::{resolve_client_id, ClientIdSource, Resolution, ResolveError};

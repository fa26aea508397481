// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Connection setup for message endpoint activations

mod connect;
mod error;
mod resource_adapter;

pub use connect::make_connection;
pub use error::MakeConnectionError;
pub use resource_adapter::{preflight, ResourceAdapter};

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for connection setup

use jmsra_adapters::ConnectionError;
use jmsra_core::{ActivationError, ResolveError};
use thiserror::Error;

/// Errors that can occur while making an activation's connection
#[derive(Debug, Error)]
pub enum MakeConnectionError {
    #[error("invalid activation: {}", join(.0))]
    InvalidActivation(Vec<ActivationError>),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error("connection error: {0}")]
    Connection(#[from] ConnectionError),
}

fn join(errors: &[ActivationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

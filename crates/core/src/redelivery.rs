// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Message redelivery policy handed through to broker connections

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors from redelivery policy validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RedeliveryError {
    #[error("backoff_multiplier must be a finite number of at least 1.0 with exponential backoff (got {0})")]
    BackoffMultiplier(f64),
    #[error("maximum_redelivery_delay_ms ({max}) is below initial_redelivery_delay_ms ({initial})")]
    MaximumBelowInitial { max: u64, initial: u64 },
}

/// How a consumer retries messages that were rolled back or not acknowledged.
///
/// Defaults match the broker client defaults: six redeliveries, one second
/// apart, no exponential backoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedeliveryPolicy {
    /// Redeliveries before the message is sent to the dead letter queue.
    /// `None` retries forever.
    pub maximum_redeliveries: Option<u32>,
    pub initial_redelivery_delay_ms: u64,
    pub redelivery_delay_ms: u64,
    pub backoff_multiplier: f64,
    pub use_exponential_backoff: bool,
    pub maximum_redelivery_delay_ms: Option<u64>,
}

impl Default for RedeliveryPolicy {
    fn default() -> Self {
        Self {
            maximum_redeliveries: Some(6),
            initial_redelivery_delay_ms: 1000,
            redelivery_delay_ms: 1000,
            backoff_multiplier: 5.0,
            use_exponential_backoff: false,
            maximum_redelivery_delay_ms: None,
        }
    }
}

impl RedeliveryPolicy {
    pub fn validate(&self) -> Result<(), RedeliveryError> {
        let multiplier = self.backoff_multiplier;
        if self.use_exponential_backoff && (!multiplier.is_finite() || multiplier < 1.0) {
            return Err(RedeliveryError::BackoffMultiplier(multiplier));
        }
        if let Some(max) = self.maximum_redelivery_delay_ms {
            if max < self.initial_redelivery_delay_ms {
                return Err(RedeliveryError::MaximumBelowInitial {
                    max,
                    initial: self.initial_redelivery_delay_ms,
                });
            }
        }
        Ok(())
    }

    /// Whether another delivery is allowed after `attempt` redeliveries.
    pub fn allows(&self, attempt: u32) -> bool {
        self.maximum_redeliveries.is_none_or(|max| attempt < max)
    }

    /// Delay before redelivery attempt `attempt` (1-based).
    ///
    /// The first attempt waits `initial_redelivery_delay_ms`. Later attempts
    /// wait `redelivery_delay_ms`, or grow by `backoff_multiplier` per attempt
    /// when exponential backoff is on. The result never exceeds
    /// `maximum_redelivery_delay_ms`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let ms = if attempt <= 1 {
            self.initial_redelivery_delay_ms
        } else if self.use_exponential_backoff {
            let exponent = i32::try_from(attempt - 1).unwrap_or(i32::MAX);
            let factor = self.backoff_multiplier.powi(exponent);
            let scaled = self.initial_redelivery_delay_ms as f64 * factor;
            if scaled >= u64::MAX as f64 {
                u64::MAX
            } else {
                scaled as u64
            }
        } else {
            self.redelivery_delay_ms
        };
        let capped = match self.maximum_redelivery_delay_ms {
            Some(max) => ms.min(max),
            None => ms,
        };
        Duration::from_millis(capped)
    }
}

#[cfg(test)]
#[path = "redelivery_tests.rs"]
mod tests;

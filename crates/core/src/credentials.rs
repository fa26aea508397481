// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Broker login credentials

use crate::activation::ActivationSpec;
use crate::defaults::ConnectionDefaults;

/// User name and password used to open a broker connection.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub user_name: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    pub fn new(user_name: Option<String>, password: Option<String>) -> Self {
        Self {
            user_name,
            password,
        }
    }

    /// Credentials for an activation: its own values win, connection defaults fill gaps.
    pub fn resolve(spec: &ActivationSpec, defaults: &ConnectionDefaults) -> Self {
        Self {
            user_name: spec
                .user_name
                .clone()
                .or_else(|| defaults.user_name.clone()),
            password: spec.password.clone().or_else(|| defaults.password.clone()),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.user_name.is_none()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user_name", &self.user_name)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

#[cfg(test)]
#[path = "credentials_tests.rs"]
mod tests;

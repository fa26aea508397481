// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Broker connection client identifier

use serde::{Deserialize, Serialize};

/// Client identifier carried by a broker connection.
///
/// Always non-empty. The absence of an identity is modelled as
/// `Option<ClientId>::None`, never as an empty string, so the broker's
/// default local identity applies whenever no `ClientId` is present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClientId(String);

impl ClientId {
    /// Normalize a candidate identifier.
    ///
    /// `None` and the empty string both mean "no identity"; anything else is
    /// kept verbatim.
    pub fn normalize(candidate: Option<&str>) -> Option<Self> {
        match candidate {
            None | Some("") => None,
            Some(id) => Some(Self(id.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ClientId {
    type Error = EmptyClientId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.is_empty() {
            Err(EmptyClientId)
        } else {
            Ok(Self(s))
        }
    }
}

impl From<ClientId> for String {
    fn from(id: ClientId) -> Self {
        id.0
    }
}

impl PartialEq<str> for ClientId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ClientId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::borrow::Borrow<str> for ClientId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Returned when building a [`ClientId`] from an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("client id must not be empty")]
pub struct EmptyClientId;

#[cfg(test)]
#[path = "client_id_tests.rs"]
mod tests;

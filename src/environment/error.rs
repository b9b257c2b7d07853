// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Environment validation errors.

/// Reasons a bundled environment record is unusable.
///
/// `field` always carries the wire name of the offending field
/// (e.g. `apiServerUrl`, `auth0.callbackURL`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("{field} is not a valid URL: {source}")]
    InvalidUrl {
        field: &'static str,
        source: url::ParseError,
    },

    #[error("{field} must use http or https (got '{scheme}')")]
    UnsupportedScheme { field: &'static str, scheme: String },

    #[error("{field} must not carry leading or trailing whitespace")]
    SurroundingWhitespace { field: &'static str },

    #[error("{field} must be a bare Auth0 tenant prefix (got '{prefix}')")]
    InvalidDomainPrefix { field: &'static str, prefix: String },
}

impl ConfigError {
    /// Wire name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::EmptyField { field }
            | ConfigError::InvalidUrl { field, .. }
            | ConfigError::UnsupportedScheme { field, .. }
            | ConfigError::SurroundingWhitespace { field }
            | ConfigError::InvalidDomainPrefix { field, .. } => *field,
        }
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Deployment Environment
//!
//! The environment record tells the coffee shop client where the backend API
//! lives and how to talk to Auth0. Exactly one record is compiled into each
//! build:
//!
//! | Cargo feature | Variant | `production` |
//! |---------------|---------|--------------|
//! | (none) | [`Variant::Development`] | `false` |
//! | `production` | [`Variant::Production`] | `true` |
//!
//! Records are `'static` values built from string literals. There is no
//! setter and no lazy initialisation, so every caller sees the same record
//! for the lifetime of the process.
//!
//! ## Wire format
//!
//! ```json
//! {
//!   "production": false,
//!   "apiServerUrl": "http://127.0.0.1:5000",
//!   "auth0": {
//!     "url": "yousifelhady.us",
//!     "audience": "coffeeshop",
//!     "clientId": "JFzytfseUgNjfV22u7p1UTbm3jgvw1fJ",
//!     "callbackURL": "http://localhost:8100"
//!   }
//! }
//! ```

mod development;
mod error;
mod production;

use serde::Serialize;
use url::Url;
use utoipa::ToSchema;

pub use error::ConfigError;

/// Deployment parameters consumed by the client application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentConfig {
    /// Build/deployment mode flag.
    pub production: bool,

    /// Base URL of the backend API server.
    #[schema(value_type = String, example = "http://127.0.0.1:5000")]
    pub api_server_url: &'static str,

    /// Auth0 parameters.
    pub auth0: Auth0Config,
}

/// Auth0 tenant and application parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Auth0Config {
    /// Tenant domain prefix (the part before `.auth0.com`).
    #[serde(rename = "url")]
    #[schema(value_type = String, example = "yousifelhady.us")]
    pub domain_prefix: &'static str,

    /// API identifier tokens are issued for.
    #[schema(value_type = String, example = "coffeeshop")]
    pub audience: &'static str,

    /// Public client identifier issued by Auth0.
    #[schema(value_type = String)]
    pub client_id: &'static str,

    /// Where Auth0 redirects after login.
    #[serde(rename = "callbackURL")]
    #[schema(value_type = String, example = "http://localhost:8100")]
    pub callback_url: &'static str,
}

/// Named environment variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Development,
    Production,
}

impl Variant {
    /// The variant compiled into this build.
    #[cfg(not(feature = "production"))]
    pub const ACTIVE: Variant = Variant::Development;

    /// The variant compiled into this build.
    #[cfg(feature = "production")]
    pub const ACTIVE: Variant = Variant::Production;

    /// The full record for this variant.
    pub fn config(self) -> &'static EnvironmentConfig {
        match self {
            Variant::Development => &development::ENVIRONMENT,
            Variant::Production => &production::ENVIRONMENT,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Development => write!(f, "development"),
            Variant::Production => write!(f, "production"),
        }
    }
}

/// The environment record bundled into this build.
pub fn environment() -> &'static EnvironmentConfig {
    Variant::ACTIVE.config()
}

impl EnvironmentConfig {
    /// Check that every field is populated and every URL is usable.
    ///
    /// Fields are checked in declaration order and the first failure is
    /// returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_text("apiServerUrl", self.api_server_url)?;
        parse_http_url("apiServerUrl", self.api_server_url)?;
        self.auth0.validate()
    }
}

impl Auth0Config {
    /// Expected `iss` claim of tokens minted by this tenant.
    pub fn issuer(&self) -> String {
        format!("https://{}.auth0.com/", self.domain_prefix)
    }

    /// Tenant JWKS endpoint.
    pub fn jwks_url(&self) -> String {
        format!("{}.well-known/jwks.json", self.issuer())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        require_text("auth0.url", self.domain_prefix)?;
        let issuer = Url::parse(&self.issuer()).map_err(|source| ConfigError::InvalidUrl {
            field: "auth0.url",
            source,
        })?;
        // The prefix must only extend the host, never the path or userinfo
        let expected_host = format!("{}.auth0.com", self.domain_prefix);
        let host_matches = issuer
            .host_str()
            .is_some_and(|host| host.eq_ignore_ascii_case(&expected_host));
        if !host_matches || issuer.path() != "/" || !issuer.username().is_empty() {
            return Err(ConfigError::InvalidDomainPrefix {
                field: "auth0.url",
                prefix: self.domain_prefix.to_string(),
            });
        }
        require_text("auth0.audience", self.audience)?;
        require_text("auth0.clientId", self.client_id)?;
        require_text("auth0.callbackURL", self.callback_url)?;
        parse_http_url("auth0.callbackURL", self.callback_url)?;
        Ok(())
    }
}

/// Non-empty and served exactly as written: `Url::parse` would silently
/// trim padding that clients then concatenate verbatim.
fn require_text(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyField { field });
    }
    if value.trim() != value {
        return Err(ConfigError::SurroundingWhitespace { field });
    }
    Ok(())
}

fn parse_http_url(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|source| ConfigError::InvalidUrl { field, source })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme {
            field,
            scheme: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> EnvironmentConfig {
        *Variant::Development.config()
    }

    #[test]
    fn accessor_returns_same_record_every_time() {
        let first = environment();
        let second = environment();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);
    }

    #[test]
    fn accessor_returns_active_variant() {
        assert!(std::ptr::eq(environment(), Variant::ACTIVE.config()));
        assert_eq!(environment().production, Variant::ACTIVE == Variant::Production);
    }

    #[test]
    fn development_api_server_url_is_unmodified() {
        assert_eq!(
            Variant::Development.config().api_server_url,
            "http://127.0.0.1:5000"
        );
    }

    #[test]
    fn development_auth0_values() {
        let auth0 = &Variant::Development.config().auth0;
        assert_eq!(auth0.domain_prefix, "yousifelhady.us");
        assert_eq!(auth0.audience, "coffeeshop");
        assert_eq!(auth0.client_id, "JFzytfseUgNjfV22u7p1UTbm3jgvw1fJ");
        assert_eq!(auth0.callback_url, "http://localhost:8100");
    }

    #[test]
    fn variants_carry_their_mode_flag() {
        assert!(!Variant::Development.config().production);
        assert!(Variant::Production.config().production);
    }

    #[test]
    fn every_variant_is_valid() {
        for variant in [Variant::Development, Variant::Production] {
            let config = variant.config();
            assert_eq!(config.validate(), Ok(()), "{variant} failed validation");
            assert!(Url::parse(config.api_server_url).is_ok());
            assert!(Url::parse(config.auth0.callback_url).is_ok());
            assert!(!config.auth0.client_id.is_empty());
            assert!(!config.auth0.audience.is_empty());
        }
    }

    #[test]
    fn switching_variant_swaps_the_whole_record() {
        for variant in [Variant::Development, Variant::Production] {
            let record = variant.config();
            let state = crate::state::AppState::new(variant);
            let served = state.environment;

            assert_eq!(served.production, record.production);
            assert_eq!(served.api_server_url, record.api_server_url);
            assert_eq!(served.auth0.domain_prefix, record.auth0.domain_prefix);
            assert_eq!(served.auth0.audience, record.auth0.audience);
            assert_eq!(served.auth0.client_id, record.auth0.client_id);
            assert_eq!(served.auth0.callback_url, record.auth0.callback_url);
            assert_eq!(served.production, variant == Variant::Production);
        }

        let dev = Variant::Development.config();
        let prod = Variant::Production.config();
        assert_ne!(dev, prod);
        assert_ne!(dev.production, prod.production);
    }

    #[test]
    fn serializes_with_wire_names() {
        let value = serde_json::to_value(Variant::Development.config()).unwrap();
        assert_eq!(
            value,
            json!({
                "production": false,
                "apiServerUrl": "http://127.0.0.1:5000",
                "auth0": {
                    "url": "yousifelhady.us",
                    "audience": "coffeeshop",
                    "clientId": "JFzytfseUgNjfV22u7p1UTbm3jgvw1fJ",
                    "callbackURL": "http://localhost:8100"
                }
            })
        );
    }

    #[test]
    fn issuer_and_jwks_derive_from_domain_prefix() {
        let auth0 = &sample().auth0;
        assert_eq!(auth0.issuer(), "https://yousifelhady.us.auth0.com/");
        assert_eq!(
            auth0.jwks_url(),
            "https://yousifelhady.us.auth0.com/.well-known/jwks.json"
        );
    }

    #[test]
    fn validate_rejects_empty_client_id() {
        let mut config = sample();
        config.auth0.client_id = "";
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyField {
                field: "auth0.clientId"
            })
        );
    }

    #[test]
    fn validate_rejects_whitespace_audience() {
        let mut config = sample();
        config.auth0.audience = "   ";
        let err = config.validate().unwrap_err();
        assert_eq!(err.field(), "auth0.audience");
    }

    #[test]
    fn validate_rejects_url_without_scheme() {
        let mut config = sample();
        config.api_server_url = "127.0.0.1:5000";
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidUrl {
                field: "apiServerUrl",
                ..
            }
        ));
    }

    #[test]
    fn validate_rejects_non_http_callback() {
        let mut config = sample();
        config.auth0.callback_url = "localhost:8100";
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnsupportedScheme {
                field: "auth0.callbackURL",
                scheme: "localhost".to_string(),
            })
        );
    }

    #[test]
    fn validate_rejects_domain_prefix_that_breaks_issuer() {
        let mut config = sample();
        config.auth0.domain_prefix = "not a tenant";
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidUrl {
                field: "auth0.url",
                ..
            }
        ));
    }

    #[test]
    fn validate_rejects_domain_prefix_that_moves_the_issuer_host() {
        for prefix in ["evil.example/x", "evil.example#", "evil.example?", "tenant@evil"] {
            let mut config = sample();
            config.auth0.domain_prefix = prefix;
            assert_eq!(
                config.validate(),
                Err(ConfigError::InvalidDomainPrefix {
                    field: "auth0.url",
                    prefix: prefix.to_string(),
                }),
                "{prefix} was accepted"
            );
        }
    }

    #[test]
    fn validate_rejects_padded_url() {
        let mut config = sample();
        config.api_server_url = "  http://127.0.0.1:5000\n";
        assert_eq!(
            config.validate(),
            Err(ConfigError::SurroundingWhitespace {
                field: "apiServerUrl"
            })
        );

        let mut config = sample();
        config.auth0.callback_url = "http://localhost:8100 ";
        assert_eq!(config.validate().unwrap_err().field(), "auth0.callbackURL");
    }

    #[test]
    fn validate_reports_first_failure_in_field_order() {
        let mut config = sample();
        config.api_server_url = "";
        config.auth0.client_id = "";
        assert_eq!(config.validate().unwrap_err().field(), "apiServerUrl");
    }

    #[test]
    fn variant_display_matches_serde() {
        assert_eq!(Variant::Production.to_string(), "production");
        assert_eq!(
            serde_json::to_value(Variant::Development).unwrap(),
            json!("development")
        );
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Service Runtime Configuration
//!
//! Settings for the process that publishes the environment record. None of
//! these feed the record itself, which is compiled in (see
//! [`crate::environment`]).
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::net::{AddrParseError, SocketAddr};

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Resolve the bind address from optional `HOST` / `PORT` values.
///
/// An unparsable port falls back to [`DEFAULT_PORT`]; an unparsable host is
/// an error.
pub fn bind_addr(host: Option<String>, port: Option<String>) -> Result<SocketAddr, AddrParseError> {
    let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = port
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);

    format!("{host}:{port}").parse()
}

/// [`bind_addr`] fed from the process environment.
pub fn bind_addr_from_env() -> Result<SocketAddr, AddrParseError> {
    bind_addr(std::env::var(HOST_ENV).ok(), std::env::var(PORT_ENV).ok())
}

// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Production environment.
//!
//! Shares the Auth0 tenant, audience and client with development. Replace
//! the URLs with the deployed API server and client origin before release.

use super::{Auth0Config, EnvironmentConfig};

pub static ENVIRONMENT: EnvironmentConfig = EnvironmentConfig {
    production: true,
    api_server_url: "http://127.0.0.1:5000",
    auth0: Auth0Config {
        domain_prefix: "yousifelhady.us",
        audience: "coffeeshop",
        client_id: "JFzytfseUgNjfV22u7p1UTbm3jgvw1fJ",
        callback_url: "http://localhost:8100",
    },
};

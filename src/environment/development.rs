// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Development environment: local API server and local client callback.

use super::{Auth0Config, EnvironmentConfig};

pub static ENVIRONMENT: EnvironmentConfig = EnvironmentConfig {
    production: false,
    // Local backend API server
    api_server_url: "http://127.0.0.1:5000",
    auth0: Auth0Config {
        domain_prefix: "yousifelhady.us",
        audience: "coffeeshop",
        client_id: "JFzytfseUgNjfV22u7p1UTbm3jgvw1fJ",
        // Local client application
        callback_url: "http://localhost:8100",
    },
};

// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::process::ExitCode;

use coffee_shop_environment::{
    api::router,
    config,
    environment::{environment, Variant},
    logging::{self, LogFormat},
    state::AppState,
};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_logging(LogFormat::from_env());

    // Refuse to serve a record the client cannot use
    let env = environment();
    if let Err(e) = env.validate() {
        tracing::error!(variant = %Variant::ACTIVE, error = %e, "Bundled environment is invalid");
        return ExitCode::FAILURE;
    }

    tracing::info!(
        variant = %Variant::ACTIVE,
        production = env.production,
        api_server_url = env.api_server_url,
        auth0_issuer = %env.auth0.issuer(),
        auth0_jwks_url = %env.auth0.jwks_url(),
        audience = env.auth0.audience,
        "Environment loaded"
    );

    let addr = match config::bind_addr_from_env() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(error = %e, "Failed to parse bind address");
            return ExitCode::FAILURE;
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Environment server listening on http://{addr} (docs at /docs)");

    if let Err(e) = axum::serve(listener, router(AppState::default()))
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "HTTP server failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

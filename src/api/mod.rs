// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    environment::{Auth0Config, EnvironmentConfig, Variant},
    state::AppState,
};

pub mod environment;
pub mod health;

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/environment", get(environment::get_environment))
        .route("/environment/variant", get(environment::get_variant))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        environment::get_environment,
        environment::get_variant,
        health::liveness,
        health::readiness
    ),
    components(
        schemas(
            EnvironmentConfig,
            Auth0Config,
            Variant,
            environment::VariantResponse,
            health::HealthResponse,
            health::ReadyResponse,
            health::HealthChecks
        )
    ),
    tags(
        (name = "Environment", description = "Bundled deployment environment"),
        (name = "Health", description = "Liveness and readiness probes")
    )
)]
struct ApiDoc;

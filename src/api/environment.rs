// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Environment record endpoints (read-only).

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::environment::{EnvironmentConfig, Variant};
use crate::state::AppState;

/// Response for GET /environment/variant
#[derive(Debug, Serialize, ToSchema)]
pub struct VariantResponse {
    /// Variant compiled into this build.
    pub variant: Variant,
}

/// Get the bundled environment record.
///
/// Clients read the API server URL and Auth0 parameters from here.
#[utoipa::path(
    get,
    path = "/environment",
    tag = "Environment",
    responses(
        (status = 200, description = "Active environment record", body = EnvironmentConfig)
    )
)]
pub async fn get_environment(State(state): State<AppState>) -> Json<EnvironmentConfig> {
    Json(*state.environment)
}

/// Get the name of the bundled environment variant.
#[utoipa::path(
    get,
    path = "/environment/variant",
    tag = "Environment",
    responses(
        (status = 200, description = "Active variant", body = VariantResponse)
    )
)]
pub async fn get_variant(State(state): State<AppState>) -> Json<VariantResponse> {
    Json(VariantResponse {
        variant: state.variant,
    })
}

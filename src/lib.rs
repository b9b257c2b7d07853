// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Coffee Shop Environment - Deployment Configuration Service
//!
//! This crate bundles the coffee shop client's deployment environment (backend
//! API URL and Auth0 parameters) at compile time and publishes it read-only
//! over HTTP.
//!
//! ## Modules
//!
//! - `environment` - The compiled-in environment record and its validation
//! - `api` - HTTP API handlers (Axum)
//! - `config` - Runtime settings of the publishing service
//! - `logging` - Tracing subscriber setup

pub mod api;
pub mod config;
pub mod environment;
pub mod logging;
pub mod state;

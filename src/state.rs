// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use crate::environment::{EnvironmentConfig, Variant};

/// Shared handler state. Holds only `'static` references, so cloning is free
/// and no locking is involved.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub variant: Variant,
    pub environment: &'static EnvironmentConfig,
}

impl AppState {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            environment: variant.config(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Variant::ACTIVE)
    }
}

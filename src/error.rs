// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.
//!
//! Every failure in the ride board is scoped to a single operation: either
//! the user's input was rejected, or a write to local storage did not land.

use crate::db::StoreError;
use crate::validation::ValidationError;

/// Application error returned by mutation operations.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// User-correctable input problem. Nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A write to the key-value store failed. In-memory state was rolled back.
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl AppError {
    /// True if the user can fix this by editing the form.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }

    /// True if the error came from the persistence layer.
    pub fn is_storage(&self) -> bool {
        matches!(self, AppError::Storage(_))
    }
}

/// Result type alias for ride board operations
pub type Result<T> = std::result::Result<T, AppError>;

//! Error types for the todo resource handler.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the caller sent bad data." Both are
//! expected, recoverable outcomes the transport maps straight to status
//! codes; neither is treated as a fault inside the core.

use thiserror::Error;

use crate::instrument::Outcome;
use crate::store::StoreError;

/// API-level failures returned by `TodoHandler` operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Caller-supplied data violates a precondition: empty title, or an id
    /// mismatch between path and body. The message is safe to return to the
    /// caller verbatim.
    #[error("{0}")]
    InvalidInput(String),

    /// The referenced id does not currently exist in the store.
    #[error("resource not found")]
    NotFound,
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::EmptyTitle => ApiError::InvalidInput("Title is required".to_string()),
        }
    }
}

impl From<&ApiError> for Outcome {
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::InvalidInput(_) => Outcome::InvalidInput,
            ApiError::NotFound => Outcome::NotFound,
        }
    }
}

// SPDX-License-Identifier: MIT

//! Error taxonomy for the harness.
//!
//! Two families: `ClientError` covers everything the remote resource client
//! can report (never fatal during cleanup), and `AssertionFailure` is the
//! only error kind meant to fail a test.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by a [`ResourceClient`](crate::client::ResourceClient)
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientError {
    /// Id is well-formed but names no existing resource
    #[error("resource not found: {id}")]
    NotFound { id: String },

    /// Id is malformed and was rejected before reaching the service
    #[error("invalid identifier: {reason}")]
    Validation { reason: String },

    /// Deletion blocked by a dependent resource (asset with live locators)
    #[error("delete of {id} blocked: {reason}")]
    DependencyBlocked { id: String, reason: String },

    /// Transport, auth, or any other service-side failure
    #[error("service error: {message}")]
    Service { message: String },
}

impl ClientError {
    /// Not-found error for the given id
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Validation error with a reason
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    /// Dependency-blocked delete error
    pub fn dependency_blocked(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DependencyBlocked {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Generic service failure
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            message: message.into(),
        }
    }
}

/// A structural expectation violated during verification.
///
/// Carries the caller-supplied message label plus renderings of the expected
/// and actual values where they exist.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}{}", render_values(.expected, .actual))]
pub struct AssertionFailure {
    /// Context label, e.g. `"locators: orderedAndFilteredActualInfo 2"`
    pub message: String,
    /// Rendering of the expected value, when one applies
    pub expected: Option<String>,
    /// Rendering of the actual value, when one applies
    pub actual: Option<String>,
}

impl AssertionFailure {
    /// Failure with a bare message and no value pair
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// Failure carrying expected/actual renderings
    pub fn mismatch(
        message: impl Into<String>,
        expected: impl std::fmt::Debug,
        actual: impl std::fmt::Debug,
    ) -> Self {
        Self {
            message: message.into(),
            expected: Some(format!("{expected:?}")),
            actual: Some(format!("{actual:?}")),
        }
    }
}

fn render_values(expected: &Option<String>, actual: &Option<String>) -> String {
    match (expected, actual) {
        (Some(e), Some(a)) => format!(" (expected {e}, actual {a})"),
        (Some(e), None) => format!(" (expected {e})"),
        (None, Some(a)) => format!(" (actual {a})"),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

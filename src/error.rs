//! Error types for the allocation engine.
//!
//! An empty-candidates condition is deliberately not a variant here: an
//! empty active-employee list or an empty project set is a success carrying
//! an empty allocation list plus a diagnostic, never an `Err`. Bad skill
//! patterns are likewise not propagated; they are a logged warning with an
//! in-band degrade to literal matching (see `crate::skill`). Solver statuses
//! (infeasible, unbounded, abnormal, model-invalid, not-solved) are not
//! errors either: they come back as a [`crate::gate::report::SolverReport`]
//! alongside an empty allocation list (see `crate::allocate`), so callers can
//! branch on them without unwrapping an `Err`.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors the allocation engine can return.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Config out of range, inconsistent ratios, malformed month keys.
    #[error("invalid input: {0}")]
    InputValidation(String),

    /// Solver backend creation failed (e.g. `ffi` feature disabled).
    #[error("solver unavailable: {0}")]
    SolverUnavailable(String),

    /// Internal error (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an `InputValidation` error.
    pub fn input_validation(msg: impl Into<String>) -> Self {
        Self::InputValidation(msg.into())
    }

    /// Create a `SolverUnavailable` error.
    pub fn solver_unavailable(msg: impl Into<String>) -> Self {
        Self::SolverUnavailable(msg.into())
    }

    /// Create an `Internal` error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

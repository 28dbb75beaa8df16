//! Determinism, provenance, and reporting scaffolding around a solve.
//!
//! These types wrap a [`crate::solver::solve`] call with the audit trail and
//! reproducibility guarantees the engine promises: a [`SolverReport`] names
//! why the solver stopped and which constraints it violated, a
//! [`ReplayEnvelope`] pins the inputs/outputs/version that produced it, and
//! [`DeterminismSpec`] fixes the tie-break rule used when the solve hits one.

pub mod budgets;
pub mod constraints;
pub mod determinism;
pub mod provenance;
pub mod report;

pub use budgets::*;
pub use constraints::*;
pub use determinism::*;
pub use provenance::*;
pub use report::*;

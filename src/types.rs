//! Common types used across optimization modules

use serde::{Deserialize, Serialize};

/// Solver status after optimization: the seven statuses callers must be able
/// to observe and branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverStatus {
    /// Optimal solution found
    Optimal,
    /// Feasible solution found (may not be optimal, e.g. time limit hit)
    Feasible,
    /// Problem is infeasible
    Infeasible,
    /// Problem is unbounded
    Unbounded,
    /// Solver terminated abnormally (numerical trouble, etc)
    Abnormal,
    /// Solver rejected the model itself
    ModelInvalid,
    /// Solver never ran or produced no status
    NotSolved,
}

impl SolverStatus {
    /// Returns true if a solution was found
    pub fn has_solution(self) -> bool {
        matches!(self, Self::Optimal | Self::Feasible)
    }

    /// Returns true if the solution is proven optimal
    pub fn is_optimal(self) -> bool {
        matches!(self, Self::Optimal)
    }
}

/// Common solver parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverParams {
    /// Maximum solve time in seconds (0 = unlimited)
    pub time_limit_seconds: f64,
    /// Maximum iterations (0 = unlimited)
    pub iteration_limit: usize,
    /// Number of threads to use (0 = auto)
    pub num_threads: usize,
    /// Random seed for reproducibility
    pub random_seed: u64,
    /// Verbosity level (0 = silent)
    pub verbosity: u32,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            time_limit_seconds: 0.0,
            iteration_limit: 0,
            num_threads: 0,
            random_seed: 0,
            verbosity: 0,
        }
    }
}

impl SolverParams {
    /// Create params with a time limit
    pub fn with_time_limit(seconds: f64) -> Self {
        Self {
            time_limit_seconds: seconds,
            ..Default::default()
        }
    }

    /// Check if time limit is set
    pub fn has_time_limit(&self) -> bool {
        self.time_limit_seconds > 0.0
    }

    /// Check if iteration limit is set
    pub fn has_iteration_limit(&self) -> bool {
        self.iteration_limit > 0
    }
}

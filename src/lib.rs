//! # portfolio-allocator
//!
//! Multi-period resource-to-project allocation: given employees, projects,
//! and a calendar of months, formulate and solve an LP (or MILP, in discrete
//! mode) that assigns fractional FTE shares to (employee, project, month)
//! triples under budget, capacity, skill, and role constraints, then turns
//! the solved primal values into a reporting-ready allocation table.
//!
//! ## Pipeline
//!
//! 1. [`problem::build`] — materializes decision variables and the
//!    constraint catalog from [`domain::Employee`]/[`domain::Project`].
//! 2. [`objective::compose`] — attaches the weighted objective terms.
//! 3. [`solver::solve`] — hands the model to an LP/MILP backend (requires
//!    the `ffi` feature).
//! 4. [`assembler::assemble`] — turns primal values into [`domain::Allocation`] rows.
//! 5. [`analytics`] — post-solve utilization, skill-gap, and pivot reports.
//!
//! [`allocate`] drives the whole pipeline in one call.
//!
//! ## Feature Flags
//!
//! - `ffi` — link the OR-Tools backend (GLOP/CBC) via `ortools-sys`. Without
//!   it, [`solver::solve`] fails fast with [`Error::SolverUnavailable`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod analytics;
pub mod assembler;
pub mod config;
pub mod domain;
pub mod gate;
pub mod objective;
pub mod priority;
pub mod problem;
pub mod skill;
pub mod solver;

mod error;
mod types;

pub use error::{Error, Result};
pub use types::*;

use config::{Config, Weights};
use domain::{Allocation, Employee, Project};
use gate::budgets::SolveBudgets;
use gate::provenance::ReplayEnvelope;
use gate::report::{SolverReport, StopReason};
use priority::PriorityWeights;

/// The result of one `allocate()` call: the allocation table plus the
/// solver's execution report.
///
/// `allocations` is empty whenever `report.feasible` is `false` — callers
/// should branch on `report.stop_reason`/`report.feasible` rather than on
/// whether the list is non-empty, since a feasible solve with zero
/// candidates also produces an empty list.
#[derive(Debug, Clone)]
pub struct AllocationOutcome {
    /// One row per (employee, project, month) with a non-zero share.
    pub allocations: Vec<Allocation>,
    /// Solver status, objective value, and diagnostics for this solve.
    pub report: SolverReport,
}

/// Run the full pipeline for one scenario: build the model, compose the
/// objective, solve, and assemble the allocation table.
///
/// Every solver outcome — optimal, feasible-but-not-proven-optimal,
/// infeasible, unbounded, or model-invalid — comes back as `Ok`, carrying a
/// [`SolverReport`] so the caller can branch on `report.stop_reason` instead
/// of catching an `Err`. `Err` is reserved for engine failures that precede
/// the solve: bad input, a disabled solver backend, or an internal bug.
pub fn allocate(
    scenario_id: &str,
    employees: &[Employee],
    projects: &[Project],
    weights: &Weights,
    config: &Config,
    priority_weights: PriorityWeights,
    budgets: &SolveBudgets,
) -> Result<AllocationOutcome> {
    config.validate()?;
    budgets.validate()?;

    let mut built = problem::build(employees, projects, config)?;
    if built.model.num_vars() == 0 {
        tracing::info!(scenario_id, "no active employees or projects; nothing to allocate");
        let report = SolverReport::infeasible(
            "none",
            Vec::new(),
            StopReason::DataInsufficient,
            ReplayEnvelope::minimal(0),
        );
        return Ok(AllocationOutcome { allocations: Vec::new(), report });
    }

    objective::compose(
        &mut built.model,
        &built.variables,
        employees,
        projects,
        weights,
        config,
        priority_weights,
    );

    let (solution, report) = solver::solve(&built.model, budgets)?;
    if !solution.status.has_solution() {
        tracing::warn!(scenario_id, stop_reason = ?report.stop_reason, "solve did not produce a usable solution");
        return Ok(AllocationOutcome { allocations: Vec::new(), report });
    }

    let allocations = assembler::assemble(scenario_id, &solution, &built.variables, employees, projects, config);
    Ok(AllocationOutcome { allocations, report })
}

/// Prelude for common imports.
pub mod prelude {
    pub use crate::analytics;
    pub use crate::assembler::assemble;
    pub use crate::config::{Config, Weights};
    pub use crate::domain::{Allocation, Employee, EmployeeStatus, MonthKey, Project, ProjectPeriod, SkillRequirement};
    pub use crate::gate::budgets::SolveBudgets;
    pub use crate::gate::report::{SolverReport, StopReason};
    pub use crate::priority::PriorityWeights;
    pub use crate::types::SolverStatus;
    pub use crate::{allocate, AllocationOutcome, Error, Result};
}

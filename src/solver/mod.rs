//! Solver Driver: hands a [`Model`](crate::problem::Model) to an LP or
//! MILP backend and reads back primal values.

#[cfg(feature = "ffi")]
use std::time::Instant;

#[cfg(not(feature = "ffi"))]
use crate::error::Error;
use crate::error::Result;
use crate::gate::budgets::SolveBudgets;
#[cfg(feature = "ffi")]
use crate::gate::provenance::ReplayEnvelope;
use crate::gate::report::SolverReport;
#[cfg(feature = "ffi")]
use crate::gate::report::{Diagnostic, StopReason};
#[cfg(feature = "ffi")]
use crate::problem::VarKind;
use crate::problem::Model;
use crate::types::SolverStatus;

/// Primal values read back from a solved model, indexed by `VarId.0`.
#[derive(Debug, Clone)]
pub struct Solution {
    /// One value per variable in the model, in `VarId` order.
    pub values: Vec<f64>,
    /// The solver's reported status.
    pub status: SolverStatus,
    /// Objective value, if the solver produced one.
    pub objective_value: Option<f64>,
}

impl Solution {
    /// Value of a specific variable.
    pub fn value(&self, var: crate::problem::VarId) -> f64 {
        self.values.get(var.0).copied().unwrap_or(0.0)
    }
}

#[cfg(feature = "ffi")]
fn map_status(status: ortools_sys::OrtoolsStatus) -> SolverStatus {
    use ortools_sys::OrtoolsStatus as O;
    match status {
        O::Optimal => SolverStatus::Optimal,
        O::Feasible => SolverStatus::Feasible,
        O::Infeasible => SolverStatus::Infeasible,
        O::Unbounded => SolverStatus::Unbounded,
        O::ModelInvalid => SolverStatus::ModelInvalid,
        O::Error | O::Unknown => SolverStatus::Abnormal,
    }
}

#[cfg(feature = "ffi")]
fn stop_reason_for(status: SolverStatus) -> StopReason {
    match status {
        SolverStatus::Optimal => StopReason::Optimal,
        SolverStatus::Feasible => StopReason::Feasible,
        SolverStatus::Infeasible => StopReason::Infeasible,
        SolverStatus::Unbounded => StopReason::Unbounded,
        SolverStatus::Abnormal => StopReason::Abnormal,
        SolverStatus::ModelInvalid => StopReason::ModelInvalid,
        SolverStatus::NotSolved => StopReason::SolverError,
    }
}

/// Solve `model`, using GLOP for continuous models and CBC for discrete
/// (integer-variable) ones. Requires the `ffi` feature; without it, solver
/// construction itself fails.
#[cfg(feature = "ffi")]
pub fn solve(model: &Model, budgets: &SolveBudgets) -> Result<(Solution, SolverReport)> {
    use ortools_sys::safe::LinearSolver;
    use ortools_sys::LpSolverType;

    let started = Instant::now();
    let has_integers = model.variables.iter().any(|v| v.kind == VarKind::Integer);
    let solver_type = if has_integers { LpSolverType::Cbc } else { LpSolverType::Glop };
    let mut solver = LinearSolver::new("portfolio-allocator", solver_type);

    let mut native_ids = Vec::with_capacity(model.variables.len());
    for v in &model.variables {
        let id = match v.kind {
            VarKind::Continuous => solver.num_var(v.lb, v.ub, &v.name),
            VarKind::Integer => solver.int_var(v.lb, v.ub, &v.name),
        };
        native_ids.push(id);
    }

    for c in &model.constraints {
        let row = solver.add_constraint(c.lb, c.ub, &c.name);
        for &(var, coeff) in &c.terms {
            solver.set_constraint_coeff(row, native_ids[var.0], coeff);
        }
    }

    for (&var, &coeff) in &model.objective {
        solver.set_objective_coeff(native_ids[var.0], coeff);
    }
    solver.set_time_limit_ms(budgets.time_limit.as_millis().min(i64::MAX as u128) as i64);
    solver.minimize();

    tracing::info!(
        vars = model.num_vars(),
        constraints = model.num_constraints(),
        backend = ?solver_type,
        time_limit_s = budgets.time_limit.as_secs_f64(),
        "starting solve"
    );

    let ortools_status = solver.solve();
    let status = map_status(ortools_status);
    let elapsed = started.elapsed();

    let values = native_ids.iter().map(|&id| solver.var_value(id)).collect();
    let objective_value = status.has_solution().then(|| solver.objective_value());

    tracing::info!(?status, elapsed_s = elapsed.as_secs_f64(), "solve finished");

    let stop_reason = stop_reason_for(status);
    let replay = ReplayEnvelope::minimal(0);
    let report = if status.has_solution() {
        SolverReport::feasible("ortools", objective_value.unwrap_or(0.0), stop_reason, replay)
    } else {
        SolverReport::infeasible("ortools", Vec::new(), stop_reason, replay)
    }
    .with_diagnostic(Diagnostic::performance("solve", elapsed.as_secs_f64() * 1000.0, 0));

    Ok((Solution { values, status, objective_value }, report))
}

/// Stub when the `ffi` feature is disabled: fails fast rather than silently
/// returning an empty solution.
#[cfg(not(feature = "ffi"))]
pub fn solve(_model: &Model, _budgets: &SolveBudgets) -> Result<(Solution, SolverReport)> {
    Err(Error::solver_unavailable(
        "OR-Tools backend not compiled in; build with the `ffi` feature",
    ))
}

#[cfg(all(test, feature = "ffi"))]
mod tests {
    use super::*;

    #[test]
    fn solves_trivial_model() {
        let mut model = Model::new();
        let x = model.add_continuous_var(0.0, 5.0, "x");
        model.add_le(vec![(x, 1.0)], 3.0, "cap");
        model.add_objective_term(x, -1.0);
        let (solution, report) = solve(&model, &SolveBudgets::default()).unwrap();
        assert!(solution.status.has_solution());
        assert!((solution.value(x) - 3.0).abs() < 1e-6);
        assert!(report.feasible);
    }
}

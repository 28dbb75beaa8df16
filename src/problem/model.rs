//! A backend-agnostic linear/mixed-integer model: the shape the Problem
//! Builder and Objective Composer populate, and the Solver Driver consumes.
//!
//! Keeping this independent of `ortools-sys` lets the Problem Builder and
//! Objective Composer be built and unit-tested without the `ffi` feature;
//! only [`crate::solver`] needs the real backend.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Opaque handle to a decision variable within a [`Model`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VarId(pub usize);

/// Whether a variable is continuous or must take integer values (MILP mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VarKind {
    /// Continuous in `[lb, ub]`.
    Continuous,
    /// Integer in `[lb, ub]`.
    Integer,
}

/// A decision variable: bounds, kind, and a human-readable name
/// (`x[e,p,m]`, `sd[e,p,m]`, ...) used in solver diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variable {
    /// Lower bound.
    pub lb: f64,
    /// Upper bound.
    pub ub: f64,
    /// Continuous or integer.
    pub kind: VarKind,
    /// Debug/telemetry name.
    pub name: String,
}

/// A linear row `lb <= sum(coeff * var) <= ub`. Single-sided constraints are
/// expressed with `lb = -inf` or `ub = +inf`; equality sets `lb == ub`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Constraint {
    /// Lower bound on the weighted sum.
    pub lb: f64,
    /// Upper bound on the weighted sum.
    pub ub: f64,
    /// Telemetry name, matching a constraint catalog entry (`C1`, `C4`, ...).
    pub name: String,
    /// Non-zero coefficients, `(variable, coefficient)`.
    pub terms: Vec<(VarId, f64)>,
}

/// The full problem: variables, constraints, and a single minimized
/// objective. Always a minimization; "maximize" terms are folded in with
/// negated coefficients by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Model {
    /// All decision variables, indexed by `VarId.0`.
    pub variables: Vec<Variable>,
    /// All constraint rows.
    pub constraints: Vec<Constraint>,
    /// Sparse objective coefficients, accumulated per variable so repeated
    /// `add_objective_term` calls on the same variable sum rather than
    /// overwrite (the Solver Driver issues one `SetCoefficient` per entry).
    pub objective: IndexMap<VarId, f64>,
}

impl Model {
    /// An empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a continuous variable, returning its handle.
    pub fn add_continuous_var(&mut self, lb: f64, ub: f64, name: impl Into<String>) -> VarId {
        self.push_var(Variable { lb, ub, kind: VarKind::Continuous, name: name.into() })
    }

    /// Add an integer variable, returning its handle.
    pub fn add_integer_var(&mut self, lb: f64, ub: f64, name: impl Into<String>) -> VarId {
        self.push_var(Variable { lb, ub, kind: VarKind::Integer, name: name.into() })
    }

    fn push_var(&mut self, var: Variable) -> VarId {
        let id = VarId(self.variables.len());
        self.variables.push(var);
        id
    }

    /// `sum(terms) <= rhs`.
    pub fn add_le(&mut self, terms: Vec<(VarId, f64)>, rhs: f64, name: impl Into<String>) {
        self.constraints.push(Constraint { lb: f64::NEG_INFINITY, ub: rhs, name: name.into(), terms });
    }

    /// `sum(terms) >= rhs`.
    pub fn add_ge(&mut self, terms: Vec<(VarId, f64)>, rhs: f64, name: impl Into<String>) {
        self.constraints.push(Constraint { lb: rhs, ub: f64::INFINITY, name: name.into(), terms });
    }

    /// `sum(terms) == rhs`.
    pub fn add_eq(&mut self, terms: Vec<(VarId, f64)>, rhs: f64, name: impl Into<String>) {
        self.constraints.push(Constraint { lb: rhs, ub: rhs, name: name.into(), terms });
    }

    /// Add (accumulating) a coefficient on `var` in the objective.
    pub fn add_objective_term(&mut self, var: VarId, coeff: f64) {
        if coeff == 0.0 {
            return;
        }
        *self.objective.entry(var).or_insert(0.0) += coeff;
    }

    /// Number of variables.
    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    /// Number of constraint rows.
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }
}

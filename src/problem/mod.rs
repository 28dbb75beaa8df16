//! Problem Builder: turns employees, projects, and configuration into
//! a backend-agnostic LP/MILP [`Model`](model::Model).

pub mod builder;
pub mod model;
pub mod variables;

pub use builder::{build, BuiltProblem};
pub use model::{Constraint, Model, VarId, VarKind, Variable};
pub use variables::VariableIndex;

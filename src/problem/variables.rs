//! Variable index: maps domain keys (employee, project, month, ...) to the
//! [`VarId`] handles materialized in the [`Model`](super::model::Model).

use indexmap::IndexMap;

use super::model::VarId;
use crate::domain::MonthKey;

/// `(employee_id, project_id, month)`.
pub type Epm = (String, String, MonthKey);
/// `(project_id, month)`.
pub type Pm = (String, MonthKey);
/// `(employee_id, month)`.
pub type Em = (String, MonthKey);
/// `(role, project_id, month)`.
pub type Rpm = (String, String, MonthKey);

/// Every variable the Problem Builder creates, keyed for lookup by the
/// Objective Composer, Solver Driver, and Allocation Assembler.
#[derive(Debug, Clone, Default)]
pub struct VariableIndex {
    /// Regular allocation `x[e,p,m]`.
    pub x: IndexMap<Epm, VarId>,
    /// Skill-development allocation `sd[e,p,m]`.
    pub sd: IndexMap<Epm, VarId>,
    /// Whether the `x[e,p,m]` variable was created despite failing mandatory
    /// skills (only possible under `allow_allocation_without_skills`).
    pub no_required_skills: IndexMap<Epm, bool>,
    /// Fragmentation slack `phi[e,p,m]`.
    pub fragmentation: IndexMap<Epm, VarId>,
    /// Continuity slack `delta[e,p,m]`, keyed by the later of the two months.
    pub continuity: IndexMap<Epm, VarId>,
    /// Leveling slack `lambda[e,m]`, keyed by the later of the two months.
    pub leveling: IndexMap<Em, VarId>,
    /// Diversity penalty `d[p,m]`.
    pub diversity: IndexMap<Pm, VarId>,
    /// Role-deviation penalty `rho[r,p,m]`.
    pub role_deviation: IndexMap<Rpm, VarId>,
    /// Max-utilization scalar `U`, shared across the whole model.
    pub max_utilization: Option<VarId>,
}

impl VariableIndex {
    /// A fresh, empty index.
    pub fn new() -> Self {
        Self::default()
    }
}

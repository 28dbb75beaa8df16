//! The `Allocation` output record.

use serde::{Deserialize, Serialize};

use super::month::MonthKey;

/// A single (employee, project, month) allocation, or one of the two
/// reporting-only synthetic records (available capacity / skill development).
///
/// Rows with `employee_id = None` never occur; rows with `project_id = None`
/// are "available capacity" and rows with `skill_development = true` are
/// learning slots. Both kinds are reporting-only and must not be persisted
/// by the (out-of-scope) persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Scenario this allocation belongs to.
    pub scenario_id: String,
    /// The employee this fraction is assigned to.
    pub employee_id: String,
    /// The project, or `None` for an "available capacity" row.
    pub project_id: Option<String>,
    /// The calendar month.
    pub month: MonthKey,
    /// FTE share, rounded to 4 decimals.
    pub fraction: f64,
    /// Monetary cost, rounded to 2 decimals.
    pub cost: f64,
    /// Set when the employee was assigned despite failing mandatory skills
    /// (only possible under `allow_allocation_without_skills`).
    pub no_required_skills: bool,
    /// Set when this row comes from a skill-development (`sd`) variable.
    pub skill_development: bool,
    /// Set when this is a synthesized "available capacity" row.
    pub available_capacity: bool,
}

impl Allocation {
    /// A regular (employee, project, month) allocation from a solved `x` variable.
    #[allow(clippy::too_many_arguments)]
    pub fn regular(
        scenario_id: impl Into<String>,
        employee_id: impl Into<String>,
        project_id: impl Into<String>,
        month: MonthKey,
        fraction: f64,
        cost: f64,
        no_required_skills: bool,
    ) -> Self {
        Self {
            scenario_id: scenario_id.into(),
            employee_id: employee_id.into(),
            project_id: Some(project_id.into()),
            month,
            fraction: round4(fraction),
            cost: round2(cost),
            no_required_skills,
            skill_development: false,
            available_capacity: false,
        }
    }

    /// A skill-development allocation from a solved `sd` variable.
    pub fn skill_development(
        scenario_id: impl Into<String>,
        employee_id: impl Into<String>,
        project_id: impl Into<String>,
        month: MonthKey,
        fraction: f64,
        cost: f64,
    ) -> Self {
        Self {
            scenario_id: scenario_id.into(),
            employee_id: employee_id.into(),
            project_id: Some(project_id.into()),
            month,
            fraction: round4(fraction),
            cost: round2(cost),
            no_required_skills: false,
            skill_development: true,
            available_capacity: false,
        }
    }

    /// A synthesized "available capacity" row: `fte_capacity - sum(fraction)`.
    pub fn available_capacity(
        scenario_id: impl Into<String>,
        employee_id: impl Into<String>,
        month: MonthKey,
        remaining: f64,
    ) -> Self {
        Self {
            scenario_id: scenario_id.into(),
            employee_id: employee_id.into(),
            project_id: None,
            month,
            fraction: round4(remaining),
            cost: 0.0,
            no_required_skills: false,
            skill_development: false,
            available_capacity: true,
        }
    }

    /// True for rows the (out-of-scope) persistence layer must skip.
    pub fn is_reporting_only(&self) -> bool {
        self.available_capacity
    }
}

/// Round to 4 decimal places, matching the Allocation Assembler's fraction precision.
pub fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

/// Round to 2 decimal places, matching the Allocation Assembler's cost precision.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

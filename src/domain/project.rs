//! The `Project` record and its calendar period.

use serde::{Deserialize, Serialize};

use super::month::MonthKey;
use super::skill::SkillRequirement;
use crate::error::{Error, Result};

/// The inclusive `[start, end]` run of calendar months a project is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPeriod {
    /// First month the project consumes budget/capacity.
    pub start: MonthKey,
    /// Last month, inclusive.
    pub end: MonthKey,
}

impl ProjectPeriod {
    /// Build a period from two `YYYY-MM` strings, validating `start <= end`.
    pub fn new(start: &str, end: &str) -> Result<Self> {
        let start = MonthKey::parse(start)?;
        let end = MonthKey::parse(end)?;
        if start > end {
            return Err(Error::input_validation(format!(
                "project period start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// All months in the period, in order.
    pub fn months(&self) -> Vec<MonthKey> {
        self.start.range_to(self.end)
    }

    /// Number of months in the period.
    pub fn len(&self) -> usize {
        self.months().len()
    }

    /// Whether the period spans zero months (never true for a validated period).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A unit of demand: a project to be staffed over its [`ProjectPeriod`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Stable unique key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The inclusive month range the project is open.
    pub period: ProjectPeriod,
    /// Skill expression gating and scoring candidate employees.
    #[serde(default)]
    pub required_skills: SkillRequirement,
    /// Hard monetary cap across the whole period.
    pub max_budget: f64,
    /// Bottom-up ask; reporting only, never constrains the solve.
    #[serde(default)]
    pub requested_budget: Option<f64>,
    /// Business impact tier, feeds the priority scorer.
    #[serde(default)]
    pub impact: Option<String>,
    /// Business driver, feeds the priority scorer and the waterfall bonus.
    #[serde(default)]
    pub driver: Option<String>,
    /// Rank within `(funding_source, driver)`; 1 = highest.
    #[serde(default)]
    pub rank: Option<i64>,
    /// Spend-silo grouping key.
    pub funding_source: String,
    /// Soft region preference for the diversity bonus.
    #[serde(default)]
    pub region_preference: Option<String>,
    /// Soft team-alignment preference.
    #[serde(default)]
    pub team: Option<String>,
    /// Soft sub-team-alignment preference.
    #[serde(default)]
    pub sub_team: Option<String>,
    /// Soft pod-alignment preference.
    #[serde(default)]
    pub pod: Option<String>,
    /// Estimated effort in man-months; `None` excludes the project from
    /// reports requiring it.
    #[serde(default)]
    pub effort_estimate_man_months: Option<f64>,
    /// Per-month cap on any single employee's FTE share into this project.
    pub max_resource_allocation_pct: f64,
}

impl Project {
    /// `max_budget` spread evenly across the period's months.
    pub fn per_month_budget(&self) -> f64 {
        let n = self.period.len().max(1) as f64;
        self.max_budget / n
    }

    /// Validate the fields that the Problem Builder relies on being sane.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(Error::input_validation("project id must not be empty"));
        }
        if self.max_budget < 0.0 {
            return Err(Error::input_validation(format!(
                "project {} has negative max_budget",
                self.id
            )));
        }
        if !(0.0..=1.0).contains(&self.max_resource_allocation_pct) || self.max_resource_allocation_pct <= 0.0 {
            return Err(Error::input_validation(format!(
                "project {} max_resource_allocation_pct must be in (0,1]",
                self.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(start: &str, end: &str) -> Project {
        Project {
            id: "p1".into(),
            name: "Project One".into(),
            period: ProjectPeriod::new(start, end).unwrap(),
            required_skills: SkillRequirement::none(),
            max_budget: 300.0,
            requested_budget: None,
            impact: None,
            driver: None,
            rank: None,
            funding_source: "fs1".into(),
            region_preference: None,
            team: None,
            sub_team: None,
            pod: None,
            effort_estimate_man_months: None,
            max_resource_allocation_pct: 0.8,
        }
    }

    #[test]
    fn per_month_budget_splits_evenly() {
        let p = project("2025-01", "2025-03");
        assert_eq!(p.period.len(), 3);
        assert!((p.per_month_budget() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_inverted_period() {
        assert!(ProjectPeriod::new("2025-03", "2025-01").is_err());
    }

    #[test]
    fn validate_catches_bad_cap() {
        let mut p = project("2025-01", "2025-01");
        p.max_resource_allocation_pct = 1.5;
        assert!(p.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_cap() {
        let mut p = project("2025-01", "2025-01");
        p.max_resource_allocation_pct = 0.0;
        assert!(p.validate().is_err());
    }
}

//! Configuration: the knobs recognized by the Problem Builder and Objective
//! Composer, plus the objective weight map.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Objective weights, keyed by the nine terms the composer attaches. Missing
/// keys take the corresponding default, and all nine defaults sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weights {
    /// Weight on direct allocation cost.
    pub cost: f64,
    /// Weight on the skill-mismatch penalty.
    pub skill: f64,
    /// Weight on the fragmentation slack.
    pub fragmentation: f64,
    /// Weight on the month-to-month continuity slack.
    pub continuity: f64,
    /// Weight on the per-employee utilization-balance scalar.
    pub balance: f64,
    /// Weight on the preference-mismatch penalty.
    pub preference: f64,
    /// Weight on the team-diversity penalty.
    pub diversity: f64,
    /// Weight on the month-to-month leveling slack.
    pub leveling: f64,
    /// Weight on the role-allocation deviation penalty.
    pub role_balance: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            cost: 0.30,
            skill: 0.15,
            fragmentation: 0.10,
            continuity: 0.10,
            balance: 0.10,
            preference: 0.05,
            diversity: 0.05,
            leveling: 0.05,
            role_balance: 0.10,
        }
    }
}

impl Weights {
    /// Build from a sparse map, filling any missing key with its default.
    pub fn from_overrides(overrides: &IndexMap<String, f64>) -> Self {
        let defaults = Self::default();
        Self {
            cost: *overrides.get("cost").unwrap_or(&defaults.cost),
            skill: *overrides.get("skill").unwrap_or(&defaults.skill),
            fragmentation: *overrides
                .get("fragmentation")
                .unwrap_or(&defaults.fragmentation),
            continuity: *overrides.get("continuity").unwrap_or(&defaults.continuity),
            balance: *overrides.get("balance").unwrap_or(&defaults.balance),
            preference: *overrides.get("preference").unwrap_or(&defaults.preference),
            diversity: *overrides.get("diversity").unwrap_or(&defaults.diversity),
            leveling: *overrides.get("leveling").unwrap_or(&defaults.leveling),
            role_balance: *overrides
                .get("role_balance")
                .unwrap_or(&defaults.role_balance),
        }
    }
}

/// Per-role target ratios and floors, keyed by role name. Insertion order is
/// preserved (`indexmap`) so diagnostics and tie-breaking stay deterministic.
pub type RoleMap = IndexMap<String, f64>;

fn default_role_ratios() -> RoleMap {
    [("DEV".to_string(), 0.5), ("QA".to_string(), 0.3), ("BA".to_string(), 0.2)]
        .into_iter()
        .collect()
}

fn default_min_role_allocation() -> RoleMap {
    [("DEV".to_string(), 0.1), ("QA".to_string(), 0.05), ("BA".to_string(), 0.0)]
        .into_iter()
        .collect()
}

/// The full set of Problem Builder / Objective Composer knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Upper bound on `x[e,p,m]`; must be in `(0,1]`.
    pub max_employee_per_project: f64,
    /// Scales the project-month floor (C7).
    pub min_team_size: u32,
    /// Whether to create `sd` (skill-development) variables.
    pub allow_skill_development: bool,
    /// Upper bound on `sd[e,p,m]`.
    pub skill_dev_max_fte: f64,
    /// Switch to MILP with integer level-index variables.
    pub discrete_allocations: bool,
    /// The discrete FTE levels used when `discrete_allocations` is set.
    pub allocation_increments: Vec<f64>,
    /// `true` selects the whole-period budget constraint (C3b) over the
    /// per-month one (C3a).
    pub budget_flexibility: bool,
    /// Activate team-diversity penalties.
    pub enable_team_diversity: bool,
    /// Activate the preference-mismatch penalty.
    pub enable_employee_preferences: bool,
    /// Activate role minimums (C6) and role-deviation penalties.
    pub enforce_role_allocation: bool,
    /// Target role ratios; must sum to 1 within tolerance.
    pub role_allocation_ratios: RoleMap,
    /// Per-role allocation floors used by C6.
    pub min_role_allocation: RoleMap,
    /// Permit assigning employees who fail mandatory skills.
    pub allow_allocation_without_skills: bool,
    /// Extra cost multiplier applied to such assignments.
    pub no_skills_penalty_multiplier: f64,
    /// Add a negative objective term rewarding budget spend.
    pub maximize_budget_utilization: bool,
    /// Scales the budget-maximization term.
    pub budget_maximization_weight_multiplier: f64,
    /// Minimum fraction of budget that must be spent (C3c).
    pub min_budget_utilization: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_employee_per_project: 0.8,
            min_team_size: 1,
            allow_skill_development: true,
            skill_dev_max_fte: 0.2,
            discrete_allocations: false,
            allocation_increments: vec![0.25, 0.5, 0.75, 1.0],
            budget_flexibility: true,
            enable_team_diversity: true,
            enable_employee_preferences: true,
            enforce_role_allocation: true,
            role_allocation_ratios: default_role_ratios(),
            min_role_allocation: default_min_role_allocation(),
            allow_allocation_without_skills: false,
            no_skills_penalty_multiplier: 2.0,
            maximize_budget_utilization: false,
            budget_maximization_weight_multiplier: 1.0,
            min_budget_utilization: 0.0,
        }
    }
}

impl Config {
    /// Objective coefficients on a discrete-mode `x` are scaled by this
    /// constant rather than the configured increments. Documented
    /// simplification, not a computed mean.
    pub fn average_increment_coefficient(&self) -> f64 {
        0.5
    }

    /// The largest configured discrete level, used to convert a level index
    /// back into an FTE upper bound for capacity-style constraints.
    pub fn max_increment(&self) -> f64 {
        self.allocation_increments
            .iter()
            .cloned()
            .fold(0.0_f64, f64::max)
    }

    /// Validate the documented ranges, returning `Error::InputValidation`
    /// naming the offending field on failure.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.max_employee_per_project) || self.max_employee_per_project <= 0.0 {
            return Err(Error::input_validation(
                "max_employee_per_project must be in (0,1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.skill_dev_max_fte) {
            return Err(Error::input_validation("skill_dev_max_fte must be in [0,1]"));
        }
        if self.discrete_allocations && self.allocation_increments.is_empty() {
            return Err(Error::input_validation(
                "allocation_increments must be non-empty when discrete_allocations is set",
            ));
        }
        if self.allocation_increments.iter().any(|v| !(0.0..=1.0).contains(v)) {
            return Err(Error::input_validation(
                "allocation_increments entries must be in [0,1]",
            ));
        }
        if self.no_skills_penalty_multiplier < 0.0 {
            return Err(Error::input_validation(
                "no_skills_penalty_multiplier must be >= 0",
            ));
        }
        if self.budget_maximization_weight_multiplier < 0.0 {
            return Err(Error::input_validation(
                "budget_maximization_weight_multiplier must be >= 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.min_budget_utilization) {
            return Err(Error::input_validation(
                "min_budget_utilization must be in [0,1]",
            ));
        }
        if self.enforce_role_allocation && !self.role_allocation_ratios.is_empty() {
            let sum: f64 = self.role_allocation_ratios.values().sum();
            if (sum - 1.0).abs() > 1e-6 {
                return Err(Error::input_validation(format!(
                    "role_allocation_ratios must sum to 1.0, got {sum}"
                )));
            }
        }
        for (role, floor) in &self.min_role_allocation {
            if *floor < 0.0 {
                return Err(Error::input_validation(format!(
                    "min_role_allocation[{role}] must be >= 0"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn default_weights_sum_to_one() {
        let w = Weights::default();
        let sum = w.cost
            + w.skill
            + w.fragmentation
            + w.continuity
            + w.balance
            + w.preference
            + w.diversity
            + w.leveling
            + w.role_balance;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_out_of_range_cap() {
        let mut c = Config::default();
        c.max_employee_per_project = 1.5;
        assert!(c.validate().is_err());
        c.max_employee_per_project = 0.0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_role_ratios_not_summing_to_one() {
        let mut c = Config::default();
        c.role_allocation_ratios.insert("DEV".into(), 0.9);
        assert!(c.validate().is_err());
    }

    #[test]
    fn weights_from_overrides_fills_defaults() {
        let mut overrides = IndexMap::new();
        overrides.insert("cost".to_string(), 0.5);
        let w = Weights::from_overrides(&overrides);
        assert_eq!(w.cost, 0.5);
        assert_eq!(w.skill, Weights::default().skill);
    }

    #[test]
    fn average_increment_coefficient_is_the_documented_constant() {
        let c = Config::default();
        assert_eq!(c.average_increment_coefficient(), 0.5);
    }

    #[test]
    fn max_increment_is_largest_configured_level() {
        let c = Config::default();
        assert_eq!(c.max_increment(), 1.0);
    }
}

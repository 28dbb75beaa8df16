//! Priority Scorer: turns a project's categorical fields (driver, impact,
//! rank) into a scalar priority in `[0,1]`.

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::domain::Project;

/// Maximum rank considered by [`norm_rank`]; ranks beyond this still clamp to 0.
pub const MAX_RANK: i64 = 20;

/// Weights for the three priority components.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriorityWeights {
    /// Weight on the normalized driver component.
    pub driver: f64,
    /// Weight on the normalized impact component.
    pub impact: f64,
    /// Weight on the normalized rank component.
    pub rank: f64,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            driver: 0.4,
            impact: 0.4,
            rank: 0.2,
        }
    }
}

fn clamp01<T: Float>(v: T) -> T {
    v.max(T::zero()).min(T::one())
}

/// Table lookup for `driver`, with numeric fallback `clamp(n/10, 0, 1)` and
/// a `0.5` default for anything unrecognized.
pub fn norm_driver(driver: Option<&str>) -> f64 {
    let Some(driver) = driver else { return 0.5 };
    let lower = driver.trim().to_lowercase();
    match lower.as_str() {
        "regulatory" => 1.0,
        "compliance" => 0.95,
        "strategic" => 0.9,
        "product" => 0.7,
        "operational" => 0.5,
        "research" => 0.4,
        "maintenance" => 0.3,
        _ => lower
            .parse::<f64>()
            .map(|n| clamp01(n / 10.0))
            .unwrap_or(0.5),
    }
}

/// Table lookup for `impact`, with the same numeric fallback as [`norm_driver`].
pub fn norm_impact(impact: Option<&str>) -> f64 {
    let Some(impact) = impact else { return 0.5 };
    let lower = impact.trim().to_lowercase();
    match lower.as_str() {
        "high" | "critical" => 1.0,
        "important" => 0.8,
        "medium" => 0.5,
        "minor" => 0.2,
        "low" => 0.0,
        _ => lower
            .parse::<f64>()
            .map(|n| clamp01(n / 10.0))
            .unwrap_or(0.5),
    }
}

/// `1 - (r-1)/max_rank`, clamped; `0.5` when rank is absent or non-positive.
pub fn norm_rank(rank: Option<i64>) -> f64 {
    match rank {
        Some(r) if r >= 1 => clamp01(1.0 - (r - 1) as f64 / MAX_RANK as f64),
        _ => 0.5,
    }
}

/// `priority(project) = w_driver*norm_driver + w_impact*norm_impact + w_rank*norm_rank`.
pub fn priority(project: &Project, weights: PriorityWeights) -> f64 {
    weights.driver * norm_driver(project.driver.as_deref())
        + weights.impact * norm_impact(project.impact.as_deref())
        + weights.rank * norm_rank(project.rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_table_lookup() {
        assert_eq!(norm_driver(Some("Regulatory")), 1.0);
        assert_eq!(norm_driver(Some("maintenance")), 0.3);
        assert_eq!(norm_driver(None), 0.5);
    }

    #[test]
    fn driver_numeric_fallback() {
        assert!((norm_driver(Some("7")) - 0.7).abs() < 1e-9);
        assert_eq!(norm_driver(Some("unknown-text")), 0.5);
    }

    #[test]
    fn impact_table_lookup() {
        assert_eq!(norm_impact(Some("critical")), 1.0);
        assert_eq!(norm_impact(Some("low")), 0.0);
    }

    #[test]
    fn rank_normalization_monotonic_in_rank() {
        let r1 = norm_rank(Some(1));
        let r5 = norm_rank(Some(5));
        let r20 = norm_rank(Some(20));
        assert!(r1 > r5);
        assert!(r5 > r20);
        assert!((r1 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rank_absent_defaults_to_half() {
        assert_eq!(norm_rank(None), 0.5);
        assert_eq!(norm_rank(Some(0)), 0.5);
    }

    #[test]
    fn impact_monotonicity_low_to_high() {
        let low = norm_impact(Some("low"));
        let medium = norm_impact(Some("medium"));
        let high = norm_impact(Some("high"));
        assert!(low <= medium);
        assert!(medium <= high);
    }
}

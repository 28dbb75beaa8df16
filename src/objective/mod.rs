//! Objective Composer: attaches the nine weighted terms plus the priority
//! waterfall bonus, region-diversity bonus, and optional budget-maximization
//! bonus to a [`Model`](crate::problem::Model).

use indexmap::IndexMap;

use crate::config::{Config, Weights};
use crate::domain::{Employee, Project};
use crate::priority::{self, PriorityWeights};
use crate::problem::{Model, VariableIndex};
use crate::skill;

/// Multiplier ratio applied to `config.priority_waterfall_multiplier` for
/// (funding_source, driver, rank) ahead of the base project-priority tier.
const FUNDING_SOURCE_TIER_RATIO: f64 = 20.0;
const DRIVER_TIER_RATIO: f64 = 10.0;
const RANK_TIER_RATIO: f64 = 5.0;

/// Base multiplier `M` for the waterfall's `M^-(max-value)` shape.
const DEFAULT_WATERFALL_MULTIPLIER: f64 = 100.0;

/// Scales the whole waterfall bonus.
const WATERFALL_PRIORITY_WEIGHT: f64 = 1.0;

/// Scales the region-diversity bonus; mirrors `region_diversity_weight`.
const REGION_DIVERSITY_WEIGHT: f64 = 0.1;

/// Multiplicative penalty when an employee's region doesn't match a
/// project's `region_preference`.
const REGION_MISMATCH_PENALTY: f64 = 0.1;

fn mean_cost(employees: &[&Employee]) -> f64 {
    if employees.is_empty() {
        return 0.0;
    }
    employees.iter().map(|e| e.cost_per_period).sum::<f64>() / employees.len() as f64
}

struct WaterfallFactors {
    funding_source: IndexMap<String, f64>,
    driver: IndexMap<(String, String), f64>,
    rank: IndexMap<(String, String, String), u32>,
}

/// Pre-compute the three hierarchy layers the waterfall bonus needs, grounded
/// in the funding_source > driver > rank > project-priority ordering.
fn compute_waterfall_inputs(projects: &[Project], priority_weights: PriorityWeights) -> WaterfallFactors {
    let project_priority: IndexMap<String, f64> = projects
        .iter()
        .map(|p| (p.id.clone(), priority::priority(p, priority_weights)))
        .collect();

    let mut funding_source: IndexMap<String, f64> = IndexMap::new();
    for p in projects {
        let pr = project_priority[&p.id];
        let entry = funding_source.entry(p.funding_source.clone()).or_insert(pr);
        if pr > *entry {
            *entry = pr;
        }
    }

    let mut driver: IndexMap<(String, String), f64> = IndexMap::new();
    for p in projects {
        let Some(d) = p.driver.clone() else { continue };
        driver
            .entry((p.funding_source.clone(), d))
            .or_insert_with(|| priority::norm_driver(p.driver.as_deref()));
    }

    let mut groups: IndexMap<(String, String), Vec<&Project>> = IndexMap::new();
    for p in projects {
        let Some(d) = p.driver.clone() else { continue };
        groups.entry((p.funding_source.clone(), d)).or_default().push(p);
    }
    let mut rank: IndexMap<(String, String, String), u32> = IndexMap::new();
    for ((fs, d), mut projs) in groups {
        projs.sort_by(|a, b| {
            let ra = a.rank.unwrap_or(999);
            let rb = b.rank.unwrap_or(999);
            ra.cmp(&rb).then_with(|| {
                project_priority[&b.id]
                    .partial_cmp(&project_priority[&a.id])
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
        });
        for (idx, p) in projs.into_iter().enumerate() {
            rank.insert((fs.clone(), d.clone(), p.id.clone()), idx as u32 + 1);
        }
    }

    WaterfallFactors { funding_source, driver, rank }
}

/// `w * base^-(max-value)`, the shared waterfall-tier shape.
fn tier_factor(base: f64, max_value: f64, value: f64) -> f64 {
    if base <= 0.0 {
        return 0.0;
    }
    1.0 / base.powf(max_value - value)
}

fn waterfall_bonus(p: &Project, project_priority: f64, inputs: &WaterfallFactors) -> f64 {
    let max_fs = inputs.funding_source.values().cloned().fold(1.0_f64, f64::max);
    let max_driver = inputs.driver.values().cloned().fold(1.0_f64, f64::max);
    let max_priority = 1.0_f64;

    let fs_mult = DEFAULT_WATERFALL_MULTIPLIER * FUNDING_SOURCE_TIER_RATIO;
    let fs_priority = *inputs.funding_source.get(&p.funding_source).unwrap_or(&0.5);
    let fs_term = tier_factor(fs_mult, max_fs, fs_priority) * FUNDING_SOURCE_TIER_RATIO;

    let driver_mult = DEFAULT_WATERFALL_MULTIPLIER * DRIVER_TIER_RATIO;
    let driver_key = p.driver.clone().unwrap_or_default();
    let driver_priority = *inputs
        .driver
        .get(&(p.funding_source.clone(), driver_key.clone()))
        .unwrap_or(&0.5);
    let driver_term = tier_factor(driver_mult, max_driver, driver_priority) * DRIVER_TIER_RATIO;

    let rank_mult = DEFAULT_WATERFALL_MULTIPLIER * RANK_TIER_RATIO;
    let rank = inputs
        .rank
        .get(&(p.funding_source.clone(), driver_key, p.id.clone()))
        .copied()
        .unwrap_or(999);
    let rank_term = tier_factor(rank_mult, (rank - 1) as f64, 0.0) * RANK_TIER_RATIO;

    let priority_term = tier_factor(DEFAULT_WATERFALL_MULTIPLIER, max_priority, project_priority);

    (fs_term + driver_term + rank_term + priority_term) * WATERFALL_PRIORITY_WEIGHT
}

/// Distinct regions represented among `active` employees with any eligible
/// variable on `p`, and per-region eligible-variable counts.
fn region_distribution<'a>(
    active: &[&'a Employee],
    p: &Project,
    vars: &VariableIndex,
) -> (IndexMap<String, usize>, usize) {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    let mut total = 0usize;
    for e in active {
        let Some(region) = e.region.clone() else { continue };
        let has_any = p
            .period
            .months()
            .iter()
            .any(|&m| vars.x.contains_key(&(e.id.clone(), p.id.clone(), m)));
        if has_any {
            *counts.entry(region).or_insert(0) += 1;
            total += 1;
        }
    }
    (counts, total)
}

/// Attach every weighted term to `model`'s objective. `model` must already
/// contain the variables `vars` indexes (i.e. this runs after `problem::build`).
pub fn compose(
    model: &mut Model,
    vars: &VariableIndex,
    employees: &[Employee],
    projects: &[Project],
    weights: &Weights,
    config: &Config,
    priority_weights: PriorityWeights,
) {
    let active: Vec<&Employee> = employees.iter().filter(|e| e.is_active()).collect();
    if active.is_empty() || projects.is_empty() {
        return;
    }
    let cbar = mean_cost(&active);
    let increment_scale = if config.discrete_allocations { config.average_increment_coefficient() } else { 1.0 };
    let waterfall_inputs = compute_waterfall_inputs(projects, priority_weights);
    let max_regions = active
        .iter()
        .filter_map(|e| e.region.clone())
        .collect::<std::collections::HashSet<_>>()
        .len()
        .max(1);

    for p in projects {
        let project_priority = priority::priority(p, priority_weights);
        let priority_factor = if project_priority > 0.0 { 1.0 / project_priority } else { 1.0 };
        let bonus = waterfall_bonus(p, project_priority, &waterfall_inputs);
        let (region_counts, region_total) = region_distribution(&active, p, vars);

        for &m in &p.period.months() {
            for e in &active {
                let key = (e.id.clone(), p.id.clone(), m);
                if let Some(&x) = vars.x.get(&key) {
                    let no_skills_penalty = if *vars.no_required_skills.get(&key).unwrap_or(&false) {
                        config.no_skills_penalty_multiplier - 1.0
                    } else {
                        0.0
                    };
                    let region_bonus = if let Some(region) = &e.region {
                        if region_total > 0 {
                            let freq = *region_counts.get(region).unwrap_or(&0) as f64 / region_total as f64;
                            REGION_DIVERSITY_WEIGHT * (1.0 - freq) / max_regions as f64
                        } else {
                            REGION_DIVERSITY_WEIGHT / max_regions as f64
                        }
                    } else {
                        0.0
                    };

                    let region_mismatch = match (&p.region_preference, &e.region) {
                        (Some(pref), Some(region)) if !pref.is_empty() && pref != region => REGION_MISMATCH_PENALTY,
                        _ => 0.0,
                    };

                    let mut coeff = weights.cost
                        * e.cost_per_period
                        * increment_scale
                        * priority_factor
                        * (1.0 + region_mismatch + no_skills_penalty);

                    let score = skill::match_score(e, &p.required_skills);
                    coeff += weights.skill * (1.0 - score.overall_score) * cbar * increment_scale;

                    if config.enable_employee_preferences && !e.prefers(&p.id) {
                        coeff += weights.preference * cbar * increment_scale;
                    }

                    coeff -= bonus * increment_scale;
                    coeff -= region_bonus * increment_scale;

                    if config.maximize_budget_utilization {
                        coeff -= config.budget_maximization_weight_multiplier * cbar * increment_scale;
                    }

                    model.add_objective_term(x, coeff);
                }

                if let Some(&sd) = vars.sd.get(&key) {
                    // Skill-development slots are not cost-optimized beyond their own bound.
                    model.add_objective_term(sd, weights.skill * cbar * 0.1);
                }
            }
        }
    }

    for &phi in vars.fragmentation.values() {
        model.add_objective_term(phi, weights.fragmentation * cbar);
    }
    for &delta in vars.continuity.values() {
        model.add_objective_term(delta, weights.continuity * cbar);
    }
    for &lambda in vars.leveling.values() {
        model.add_objective_term(lambda, weights.leveling * cbar);
    }
    for &d in vars.diversity.values() {
        model.add_objective_term(d, weights.diversity * cbar);
    }
    for &rho in vars.role_deviation.values() {
        model.add_objective_term(rho, weights.role_balance * cbar);
    }
    if let Some(u) = vars.max_utilization {
        model.add_objective_term(u, weights.balance * cbar);
    }
}

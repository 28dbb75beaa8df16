//! Allocation Assembler: turns solver primals into [`Allocation`]
//! records, with epsilon filtering and synthesized capacity/skill-dev rows.

use crate::config::Config;
use crate::domain::{round2, round4, Allocation, Employee, MonthKey, Project};
use crate::problem::VariableIndex;
use crate::solver::Solution;

/// Primal values below this are treated as zero.
const EPSILON: f64 = 1e-6;

/// In discrete mode `x` holds a level index into `allocation_increments`, not
/// the FTE fraction itself; convert it back to the actual share.
fn actual_fte(raw: f64, config: &Config) -> f64 {
    if !config.discrete_allocations {
        return raw;
    }
    let level = raw.round() as usize;
    config.allocation_increments.get(level).copied().unwrap_or(0.0)
}

/// Build the full allocation list for one scenario from a solved model.
pub fn assemble(
    scenario_id: &str,
    solution: &Solution,
    vars: &VariableIndex,
    employees: &[Employee],
    projects: &[Project],
    config: &Config,
) -> Vec<Allocation> {
    let mut out = Vec::new();
    let mut consumed: std::collections::HashMap<(String, MonthKey), f64> = std::collections::HashMap::new();

    for ((employee_id, project_id, month), &var) in &vars.x {
        let fraction = actual_fte(solution.value(var), config);
        if fraction <= EPSILON {
            continue;
        }
        let employee = employees.iter().find(|e| &e.id == employee_id);
        let Some(employee) = employee else { continue };
        let fraction = round4(fraction);
        let cost = round2(fraction * employee.cost_per_period);
        let no_skills = *vars.no_required_skills.get(&(employee_id.clone(), project_id.clone(), *month)).unwrap_or(&false);

        *consumed.entry((employee_id.clone(), *month)).or_insert(0.0) += fraction;

        out.push(Allocation::regular(
            scenario_id,
            employee_id,
            project_id,
            *month,
            fraction,
            cost,
            no_skills,
        ));
    }

    for ((employee_id, project_id, month), &var) in &vars.sd {
        let fraction = solution.value(var);
        if fraction <= EPSILON {
            continue;
        }
        let employee = employees.iter().find(|e| &e.id == employee_id);
        let Some(employee) = employee else { continue };
        let fraction = round4(fraction);
        let cost = round2(fraction * employee.cost_per_period);

        *consumed.entry((employee_id.clone(), *month)).or_insert(0.0) += fraction;

        out.push(Allocation::skill_development(scenario_id, employee_id, project_id, *month, fraction, cost));
    }

    let months: Vec<MonthKey> = projects.iter().flat_map(|p| p.period.months()).collect();
    let mut distinct_months = months.clone();
    distinct_months.sort_unstable();
    distinct_months.dedup();

    for e in employees.iter().filter(|e| e.is_active()) {
        for &m in &distinct_months {
            let used = consumed.get(&(e.id.clone(), m)).copied().unwrap_or(0.0);
            let remaining = round4(e.fte_capacity - used);
            if remaining > EPSILON {
                out.push(Allocation::available_capacity(scenario_id, &e.id, m, remaining));
            }
        }
    }

    out
}

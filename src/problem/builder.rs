//! Problem Builder: materializes decision variables and the full constraint
//! catalog (C1-C7 plus auxiliary slack variables) from the domain model and
//! configuration.

use indexmap::IndexMap;
use rayon::prelude::*;

use super::model::{Model, VarId};
use super::variables::VariableIndex;
use crate::config::Config;
use crate::domain::{Employee, MonthKey, Project};
use crate::error::Result;
use crate::skill;

/// Output of [`build`]: the populated model plus the index needed to read
/// values back and to attach objective terms.
pub struct BuiltProblem {
    /// The variables and constraints.
    pub model: Model,
    /// Lookup from domain keys to variable handles.
    pub variables: VariableIndex,
}

/// Build the full LP/MILP model for `employees` allocated across `projects`.
pub fn build(employees: &[Employee], projects: &[Project], config: &Config) -> Result<BuiltProblem> {
    let active: Vec<&Employee> = employees.iter().filter(|e| e.is_active()).collect();
    for p in projects {
        p.validate()?;
    }

    let mut model = Model::new();
    let mut vars = VariableIndex::new();

    // No active employees or no projects: the caller (`crate::allocate`) treats
    // this as the `NoCandidates` success case, not an error, so we hand back an
    // empty-but-valid model rather than failing here.
    if active.is_empty() || projects.is_empty() {
        return Ok(BuiltProblem { model, variables: vars });
    }

    let employees_by_role = group_by_role(&active);

    create_allocation_variables(&mut model, &mut vars, &active, projects, config);
    create_auxiliary_variables(&mut model, &mut vars, &active, projects, config);

    add_employee_capacity_constraints(&mut model, &vars, &active, projects, config);
    add_yearly_average_constraints(&mut model, &vars, &active, projects, config);
    add_budget_constraints(&mut model, &vars, &active, projects, config);
    add_funding_source_silo_constraints(&mut model, &vars, &active, projects, config);
    add_per_employee_project_cap_constraints(&mut model, &vars, &active, projects, config);
    add_role_constraints(&mut model, &mut vars, &active, projects, config, &employees_by_role);
    add_project_month_floor_constraints(&mut model, &vars, &active, projects, config);
    add_fragmentation_constraints(&mut model, &vars, &active, projects, config);
    add_continuity_constraints(&mut model, &vars, &active, projects);
    add_leveling_constraints(&mut model, &vars, &active, projects);
    add_max_utilization_constraints(&mut model, &vars, &active, projects, config);
    if config.enable_team_diversity {
        add_diversity_constraints(&mut model, &vars, &active, projects);
    }

    Ok(BuiltProblem { model, variables: vars })
}

fn group_by_role<'a>(active: &[&'a Employee]) -> IndexMap<String, Vec<usize>> {
    let mut by_role: IndexMap<String, Vec<usize>> = IndexMap::new();
    for (idx, e) in active.iter().enumerate() {
        by_role.entry(e.effective_role()).or_default().push(idx);
    }
    by_role
}

/// Upper bound on a single `x[e,p,m]`, before the separate C5 row.
fn x_upper_bound(e: &Employee, config: &Config) -> f64 {
    e.fte_capacity.min(config.max_employee_per_project)
}

fn var_name(prefix: &str, e: &str, p: &str, m: MonthKey) -> String {
    format!("{prefix}_e{e}_p{p}_m{m}")
}

fn create_allocation_variables(
    model: &mut Model,
    vars: &mut VariableIndex,
    active: &[&Employee],
    projects: &[Project],
    config: &Config,
) {
    let level_ub = (config.allocation_increments.len().max(1) - 1) as f64;

    for p in projects {
        let months = p.period.months();
        // Parallel eligibility precompute (skill matching is the hot loop here);
        // insertion into the deterministic IndexMaps happens sequentially below.
        let eligibility: Vec<(bool, bool)> = active
            .par_iter()
            .map(|e| {
                let mandatory_ok = skill::mandatory_satisfied(&p.required_skills, e);
                let sd_candidate = config.allow_skill_development
                    && skill::is_skill_development_candidate(e, &p.required_skills);
                (mandatory_ok, sd_candidate)
            })
            .collect();

        for (e, &(mandatory_ok, sd_candidate)) in active.iter().zip(eligibility.iter()) {
            let create_x = mandatory_ok || config.allow_allocation_without_skills;
            for &m in &months {
                if create_x {
                    let ub = x_upper_bound(e, config);
                    let id = if config.discrete_allocations {
                        model.add_integer_var(0.0, level_ub, var_name("x", &e.id, &p.id, m))
                    } else {
                        model.add_continuous_var(0.0, ub, var_name("x", &e.id, &p.id, m))
                    };
                    vars.x.insert((e.id.clone(), p.id.clone(), m), id);
                    vars.no_required_skills
                        .insert((e.id.clone(), p.id.clone(), m), !mandatory_ok);
                }
                if sd_candidate {
                    let id = model.add_continuous_var(
                        0.0,
                        config.skill_dev_max_fte,
                        var_name("sd", &e.id, &p.id, m),
                    );
                    vars.sd.insert((e.id.clone(), p.id.clone(), m), id);
                }
            }
        }
    }
}

fn create_auxiliary_variables(
    model: &mut Model,
    vars: &mut VariableIndex,
    active: &[&Employee],
    projects: &[Project],
    config: &Config,
) {
    // Fragmentation slack exists for every x variable.
    for p in projects {
        for &m in &p.period.months() {
            for e in active {
                if vars.x.contains_key(&(e.id.clone(), p.id.clone(), m)) {
                    let id = model.add_continuous_var(0.0, 1.0, var_name("frag", &e.id, &p.id, m));
                    vars.fragmentation.insert((e.id.clone(), p.id.clone(), m), id);
                }
            }
        }
    }

    // Continuity slack for consecutive months within the same project.
    for p in projects {
        let months = p.period.months();
        for window in months.windows(2) {
            let (prev, cur) = (window[0], window[1]);
            for e in active {
                let has_cur = vars.x.contains_key(&(e.id.clone(), p.id.clone(), cur));
                let has_prev = vars.x.contains_key(&(e.id.clone(), p.id.clone(), prev));
                if has_cur && has_prev {
                    let id = model.add_continuous_var(0.0, 1.0, var_name("cont", &e.id, &p.id, cur));
                    vars.continuity.insert((e.id.clone(), p.id.clone(), cur), id);
                }
            }
        }
    }

    // Leveling slack per employee across consecutive global months.
    let mut all_months: Vec<MonthKey> = projects.iter().flat_map(|p| p.period.months()).collect();
    all_months.sort_unstable();
    all_months.dedup();
    for window in all_months.windows(2) {
        let (_prev, cur) = (window[0], window[1]);
        for e in active {
            let id = model.add_continuous_var(0.0, 2.0, format!("level_e{}_m{}", e.id, cur));
            vars.leveling.insert((e.id.clone(), cur), id);
        }
    }

    // Diversity penalty, one per (project, month).
    if config.enable_team_diversity {
        for p in projects {
            for &m in &p.period.months() {
                let id = model.add_continuous_var(0.0, 1.0, format!("div_p{}_m{}", p.id, m));
                vars.diversity.insert((p.id.clone(), m), id);
            }
        }
    }

    // Role-deviation penalty, one per (role, project, month) with a positive target ratio.
    if config.enforce_role_allocation {
        for p in projects {
            for &m in &p.period.months() {
                for (role, ratio) in &config.role_allocation_ratios {
                    if *ratio > 0.0 {
                        let id = model.add_continuous_var(
                            0.0,
                            1.0,
                            format!("role_dev_{role}_p{}_m{}", p.id, m),
                        );
                        vars.role_deviation
                            .insert((role.clone(), p.id.clone(), m), id);
                    }
                }
            }
        }
    }

    // Single shared max-utilization scalar.
    let project_months: usize = projects.iter().map(|p| p.period.len()).sum();
    vars.max_utilization = Some(model.add_continuous_var(
        0.0,
        project_months.max(1) as f64,
        "max_utilization",
    ));
}

/// C1: employee monthly capacity.
fn add_employee_capacity_constraints(
    model: &mut Model,
    vars: &VariableIndex,
    active: &[&Employee],
    projects: &[Project],
    config: &Config,
) {
    let mut months: Vec<MonthKey> = projects.iter().flat_map(|p| p.period.months()).collect();
    months.sort_unstable();
    months.dedup();

    for e in active {
        for &m in &months {
            let mut terms = Vec::new();
            for p in projects {
                let coeff = if config.discrete_allocations { config.max_increment() } else { 1.0 };
                if let Some(&v) = vars.x.get(&(e.id.clone(), p.id.clone(), m)) {
                    terms.push((v, coeff));
                }
                if let Some(&v) = vars.sd.get(&(e.id.clone(), p.id.clone(), m)) {
                    terms.push((v, 1.0));
                }
            }
            if !terms.is_empty() {
                model.add_le(terms, e.fte_capacity, format!("C1_capacity_e{}_m{}", e.id, m));
            }
        }
    }
}

/// C2: employee yearly average FTE ceiling.
fn add_yearly_average_constraints(
    model: &mut Model,
    vars: &VariableIndex,
    active: &[&Employee],
    projects: &[Project],
    config: &Config,
) {
    use crate::domain::group_by_year;

    let mut months: Vec<MonthKey> = projects.iter().flat_map(|p| p.period.months()).collect();
    months.sort_unstable();
    months.dedup();
    let by_year = group_by_year(&months);

    for e in active {
        for (year, year_months) in &by_year {
            let mut terms = Vec::new();
            for &m in year_months {
                for p in projects {
                    let coeff = if config.discrete_allocations { config.max_increment() } else { 1.0 };
                    if let Some(&v) = vars.x.get(&(e.id.clone(), p.id.clone(), m)) {
                        terms.push((v, coeff));
                    }
                    if let Some(&v) = vars.sd.get(&(e.id.clone(), p.id.clone(), m)) {
                        terms.push((v, 1.0));
                    }
                }
            }
            if !terms.is_empty() {
                model.add_le(
                    terms,
                    year_months.len() as f64,
                    format!("C2_yearly_avg_e{}_y{}", e.id, year),
                );
            }
        }
    }
}

/// C3a/C3b/C3c: project budget and minimum-utilization constraints.
fn add_budget_constraints(
    model: &mut Model,
    vars: &VariableIndex,
    active: &[&Employee],
    projects: &[Project],
    config: &Config,
) {
    let coeff_scale = if config.discrete_allocations { config.average_increment_coefficient() } else { 1.0 };

    for p in projects {
        let months = p.period.months();
        if config.budget_flexibility {
            // C3b: whole-period budget.
            let mut terms = Vec::new();
            for &m in &months {
                for e in active {
                    if let Some(&v) = vars.x.get(&(e.id.clone(), p.id.clone(), m)) {
                        terms.push((v, e.cost_per_period * coeff_scale));
                    }
                }
            }
            if !terms.is_empty() {
                model.add_le(terms.clone(), p.max_budget, format!("C3b_budget_total_p{}", p.id));
                if config.min_budget_utilization > 0.0 {
                    model.add_ge(
                        terms,
                        p.max_budget * config.min_budget_utilization,
                        format!("C3c_min_budget_util_p{}", p.id),
                    );
                }
            }
        } else {
            // C3a: per-month budget.
            let per_month = p.per_month_budget();
            for &m in &months {
                let mut terms = Vec::new();
                for e in active {
                    if let Some(&v) = vars.x.get(&(e.id.clone(), p.id.clone(), m)) {
                        terms.push((v, e.cost_per_period * coeff_scale));
                    }
                }
                if !terms.is_empty() {
                    model.add_le(terms.clone(), per_month, format!("C3a_budget_p{}_m{}", p.id, m));
                    if config.min_budget_utilization > 0.0 {
                        model.add_ge(
                            terms,
                            per_month * config.min_budget_utilization,
                            format!("C3c_min_budget_util_p{}_m{}", p.id, m),
                        );
                    }
                }
            }
        }
    }
}

/// C4: funding-source spend silo.
fn add_funding_source_silo_constraints(
    model: &mut Model,
    vars: &VariableIndex,
    active: &[&Employee],
    projects: &[Project],
    config: &Config,
) {
    let coeff_scale = if config.discrete_allocations { config.average_increment_coefficient() } else { 1.0 };

    let mut by_source: IndexMap<String, Vec<&Project>> = IndexMap::new();
    for p in projects {
        by_source.entry(p.funding_source.clone()).or_default().push(p);
    }

    for (source, projs) in &by_source {
        let mut terms = Vec::new();
        let mut silo_budget = 0.0;
        for p in projs {
            silo_budget += p.max_budget;
            for &m in &p.period.months() {
                for e in active {
                    if let Some(&v) = vars.x.get(&(e.id.clone(), p.id.clone(), m)) {
                        terms.push((v, e.cost_per_period * coeff_scale));
                    }
                }
            }
        }
        if !terms.is_empty() {
            model.add_le(terms, silo_budget, format!("C4_funding_silo_{source}"));
        }
    }
}

/// C5: per-project per-employee per-month cap from `max_resource_allocation_pct`.
/// In discrete mode `x` is a level index, so the cap must be converted from a
/// fraction to the highest level whose FTE share stays within it.
fn add_per_employee_project_cap_constraints(
    model: &mut Model,
    vars: &VariableIndex,
    active: &[&Employee],
    projects: &[Project],
    config: &Config,
) {
    for p in projects {
        let bound = if config.discrete_allocations {
            let min_increment = config.allocation_increments.iter().cloned().fold(f64::INFINITY, f64::min);
            let level_ub = (config.allocation_increments.len().max(1) - 1) as f64;
            (p.max_resource_allocation_pct / min_increment).floor().min(level_ub).max(0.0)
        } else {
            p.max_resource_allocation_pct
        };
        for &m in &p.period.months() {
            for e in active {
                if let Some(&v) = vars.x.get(&(e.id.clone(), p.id.clone(), m)) {
                    model.add_le(
                        vec![(v, 1.0)],
                        bound,
                        format!("C5_max_alloc_e{}_p{}_m{}", e.id, p.id, m),
                    );
                }
            }
        }
    }
}

/// C6 + role-proportion auxiliary rows linking `rho` to the deviation it penalizes.
fn add_role_constraints(
    model: &mut Model,
    vars: &mut VariableIndex,
    active: &[&Employee],
    projects: &[Project],
    config: &Config,
    employees_by_role: &IndexMap<String, Vec<usize>>,
) {
    if !config.enforce_role_allocation {
        return;
    }
    for p in projects {
        for &m in &p.period.months() {
            let total_terms: Vec<(VarId, f64)> = active
                .iter()
                .filter_map(|e| vars.x.get(&(e.id.clone(), p.id.clone(), m)).map(|&v| (v, 1.0)))
                .collect();
            if total_terms.is_empty() {
                continue;
            }

            for (role, min_fte) in &config.min_role_allocation {
                if *min_fte <= 0.0 {
                    continue;
                }
                let role_terms: Vec<(VarId, f64)> = employees_by_role
                    .get(role)
                    .into_iter()
                    .flatten()
                    .filter_map(|&idx| {
                        vars.x
                            .get(&(active[idx].id.clone(), p.id.clone(), m))
                            .map(|&v| (v, 1.0))
                    })
                    .collect();
                if !role_terms.is_empty() {
                    model.add_ge(role_terms, *min_fte, format!("C6_min_{role}_p{}_m{}", p.id, m));
                }
            }

            // rho[r,p,m] >= target_ratio * total - role_total  (one-sided auxiliary slack).
            for (role, ratio) in &config.role_allocation_ratios {
                if *ratio <= 0.0 {
                    continue;
                }
                let Some(&rho) = vars.role_deviation.get(&(role.clone(), p.id.clone(), m)) else {
                    continue;
                };
                let role_terms: Vec<(VarId, f64)> = employees_by_role
                    .get(role)
                    .into_iter()
                    .flatten()
                    .filter_map(|&idx| {
                        vars.x
                            .get(&(active[idx].id.clone(), p.id.clone(), m))
                            .map(|&v| (v, 1.0))
                    })
                    .collect();
                let mut terms = vec![(rho, 1.0)];
                for &(v, _) in &total_terms {
                    terms.push((v, -*ratio));
                }
                for &(v, _) in &role_terms {
                    terms.push((v, 1.0));
                }
                model.add_ge(terms, 0.0, format!("role_bal_{role}_p{}_m{}", p.id, m));
            }
        }
    }
}

/// C7: project-month floor (minimum team size and cheapest-feasible increment).
fn add_project_month_floor_constraints(
    model: &mut Model,
    vars: &VariableIndex,
    active: &[&Employee],
    projects: &[Project],
    config: &Config,
) {
    if config.min_team_size > 0 {
        let min_total = config.min_team_size as f64 * 0.1;
        let coeff = if config.discrete_allocations { 0.25 } else { 1.0 };
        for p in projects {
            for &m in &p.period.months() {
                let terms: Vec<(VarId, f64)> = active
                    .iter()
                    .filter_map(|e| vars.x.get(&(e.id.clone(), p.id.clone(), m)).map(|&v| (v, coeff)))
                    .collect();
                if !terms.is_empty() {
                    model.add_ge(terms, min_total, format!("C7_min_team_p{}_m{}", p.id, m));
                }
            }
        }
    }

    for p in projects {
        let budget = if config.budget_flexibility {
            p.max_budget / p.period.len().max(1) as f64
        } else {
            p.per_month_budget()
        };
        if budget <= 0.0 {
            continue;
        }
        let cheapest = active.iter().map(|e| e.cost_per_period).fold(f64::INFINITY, f64::min);
        if !cheapest.is_finite() {
            continue;
        }
        let min_alloc = if config.discrete_allocations {
            config.allocation_increments.iter().cloned().fold(f64::INFINITY, f64::min)
        } else {
            0.1
        };
        if budget < cheapest * min_alloc {
            continue;
        }
        for &m in &p.period.months() {
            let terms: Vec<(VarId, f64)> = active
                .iter()
                .filter_map(|e| vars.x.get(&(e.id.clone(), p.id.clone(), m)).map(|&v| (v, 1.0)))
                .collect();
            if !terms.is_empty() {
                model.add_ge(terms, min_alloc, format!("C7_min_alloc_p{}_m{}", p.id, m));
            }
        }
    }
}

/// Fragmentation slack: `phi + 4*x <= 1` (auxiliary, intentionally one-sided).
fn add_fragmentation_constraints(
    model: &mut Model,
    vars: &VariableIndex,
    active: &[&Employee],
    projects: &[Project],
    _config: &Config,
) {
    for p in projects {
        for &m in &p.period.months() {
            for e in active {
                let key = (e.id.clone(), p.id.clone(), m);
                if let (Some(&phi), Some(&x)) = (vars.fragmentation.get(&key), vars.x.get(&key)) {
                    model.add_le(vec![(phi, 1.0), (x, 4.0)], 1.0, format!("frag_const_e{}_p{}_m{}", e.id, p.id, m));
                }
            }
        }
    }
}

/// Continuity slack: two one-sided rows bounding `delta >= |x_m - x_{m-1}|`.
fn add_continuity_constraints(model: &mut Model, vars: &VariableIndex, active: &[&Employee], projects: &[Project]) {
    for p in projects {
        let months = p.period.months();
        for window in months.windows(2) {
            let (prev, cur) = (window[0], window[1]);
            for e in active {
                let Some(&delta) = vars.continuity.get(&(e.id.clone(), p.id.clone(), cur)) else { continue };
                let cur_x = vars.x.get(&(e.id.clone(), p.id.clone(), cur)).copied();
                let prev_x = vars.x.get(&(e.id.clone(), p.id.clone(), prev)).copied();
                let (Some(cur_x), Some(prev_x)) = (cur_x, prev_x) else { continue };
                model.add_ge(
                    vec![(delta, 1.0), (cur_x, -1.0), (prev_x, 1.0)],
                    0.0,
                    format!("cont1_e{}_p{}_m{}", e.id, p.id, cur),
                );
                model.add_ge(
                    vec![(delta, 1.0), (cur_x, 1.0), (prev_x, -1.0)],
                    0.0,
                    format!("cont2_e{}_p{}_m{}", e.id, p.id, cur),
                );
            }
        }
    }
}

/// Leveling slack: two one-sided rows bounding `lambda >= |total_m - total_{m-1}|`.
fn add_leveling_constraints(model: &mut Model, vars: &VariableIndex, active: &[&Employee], projects: &[Project]) {
    let mut all_months: Vec<MonthKey> = projects.iter().flat_map(|p| p.period.months()).collect();
    all_months.sort_unstable();
    all_months.dedup();

    for window in all_months.windows(2) {
        let (prev, cur) = (window[0], window[1]);
        for e in active {
            let Some(&lambda) = vars.leveling.get(&(e.id.clone(), cur)) else { continue };
            let mut terms1 = vec![(lambda, -1.0)];
            let mut terms2 = vec![(lambda, -1.0)];
            for p in projects {
                if let Some(&v) = vars.x.get(&(e.id.clone(), p.id.clone(), cur)) {
                    terms1.push((v, 1.0));
                    terms2.push((v, -1.0));
                }
                if let Some(&v) = vars.x.get(&(e.id.clone(), p.id.clone(), prev)) {
                    terms1.push((v, -1.0));
                    terms2.push((v, 1.0));
                }
            }
            model.add_ge(terms1, 0.0, format!("level1_e{}_m{}", e.id, cur));
            model.add_ge(terms2, 0.0, format!("level2_e{}_m{}", e.id, cur));
        }
    }
}

/// Max-utilization scalar: `U >= sum_p x[e,p,m]` for every `(e,m)`.
fn add_max_utilization_constraints(
    model: &mut Model,
    vars: &VariableIndex,
    active: &[&Employee],
    projects: &[Project],
    config: &Config,
) {
    let Some(u) = vars.max_utilization else { return };
    let mut months: Vec<MonthKey> = projects.iter().flat_map(|p| p.period.months()).collect();
    months.sort_unstable();
    months.dedup();

    for e in active {
        for &m in &months {
            let mut terms = vec![(u, -1.0)];
            for p in projects {
                if let Some(&v) = vars.x.get(&(e.id.clone(), p.id.clone(), m)) {
                    let coeff = if config.discrete_allocations { config.average_increment_coefficient() } else { 1.0 };
                    terms.push((v, coeff));
                }
            }
            if terms.len() > 1 {
                model.add_ge(terms, 0.0, format!("balance_e{}_m{}", e.id, m));
            }
        }
    }
}

/// Diversity penalty: `d[p,m] >= 1 - sum_e x[e,p,m]`.
fn add_diversity_constraints(model: &mut Model, vars: &VariableIndex, active: &[&Employee], projects: &[Project]) {
    for p in projects {
        for &m in &p.period.months() {
            let Some(&d) = vars.diversity.get(&(p.id.clone(), m)) else { continue };
            let mut terms = vec![(d, 1.0)];
            for e in active {
                if let Some(&v) = vars.x.get(&(e.id.clone(), p.id.clone(), m)) {
                    terms.push((v, 1.0));
                }
            }
            model.add_ge(terms, 1.0, format!("div_const_p{}_m{}", p.id, m));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmployeeStatus, ProjectPeriod, SkillRequirement};

    fn employee(id: &str, fte: f64, cost: f64, skills: &str) -> Employee {
        Employee {
            id: id.into(),
            name: id.into(),
            status: EmployeeStatus::Active,
            fte_capacity: fte,
            cost_per_period: cost,
            role: None,
            technical_skills: skills.into(),
            functional_skills: String::new(),
            region: None,
            grade: None,
            gender: None,
            team: None,
            sub_team: None,
            pod: None,
            preferred_projects: vec![],
        }
    }

    fn project(id: &str, budget: f64, start: &str, end: &str, required: &str) -> Project {
        Project {
            id: id.into(),
            name: id.into(),
            period: ProjectPeriod::new(start, end).unwrap(),
            required_skills: SkillRequirement::from_simple_string(required),
            max_budget: budget,
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
    fn creates_variable_for_matching_employee() {
        let employees = vec![employee("e1", 1.0, 10.0, "python")];
        let projects = vec![project("p1", 300.0, "2025-01", "2025-03", "python")];
        let built = build(&employees, &projects, &Config::default()).unwrap();
        assert_eq!(built.variables.x.len(), 3);
        assert!(built.model.num_constraints() > 0);
    }

    #[test]
    fn skips_employee_failing_mandatory_skills() {
        let employees = vec![employee("e1", 1.0, 10.0, "cobol")];
        let projects = vec![project("p1", 300.0, "2025-01", "2025-01", "python")];
        let built = build(&employees, &projects, &Config::default()).unwrap();
        assert!(built.variables.x.is_empty());
    }

    #[test]
    fn empty_active_population_yields_empty_model_not_an_error() {
        let mut e = employee("e1", 1.0, 10.0, "python");
        e.status = EmployeeStatus::Inactive;
        let projects = vec![project("p1", 300.0, "2025-01", "2025-01", "python")];
        let built = build(&[e], &projects, &Config::default()).unwrap();
        assert!(built.variables.x.is_empty());
    }

    #[test]
    fn discrete_mode_uses_integer_variables() {
        let employees = vec![employee("e1", 1.0, 10.0, "python")];
        let projects = vec![project("p1", 300.0, "2025-01", "2025-01", "python")];
        let mut config = Config::default();
        config.discrete_allocations = true;
        let built = build(&employees, &projects, &config).unwrap();
        let id = built.variables.x.values().next().unwrap();
        assert_eq!(built.model.variables[id.0].kind, crate::problem::model::VarKind::Integer);
    }
}

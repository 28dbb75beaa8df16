//! Analytics: post-solve reports turning the numeric solution into
//! budget/utilization/skill-gap explanations.

use indexmap::IndexMap;

use crate::domain::{Allocation, Employee, MonthKey, Project};
use crate::skill;

/// Per-project budget utilization and the reason its remainder went unspent.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectUtilization {
    /// The project id.
    pub project_id: String,
    /// Total allocated cost across the project's period.
    pub allocated: f64,
    /// The project's hard budget cap.
    pub budget: f64,
    /// `allocated / budget`, 0 when budget is 0.
    pub utilization: f64,
    /// Synthesized explanation when utilization is materially below 1.0.
    pub reason: Option<String>,
}

/// Per-employee utilization and the reason for any unused capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeUtilization {
    /// The employee id.
    pub employee_id: String,
    /// Total allocated FTE across all months considered.
    pub allocated: f64,
    /// Total capacity across those months.
    pub capacity: f64,
    /// `allocated / capacity`, 0 when capacity is 0.
    pub utilization: f64,
    /// Remaining (unused) capacity.
    pub remaining: f64,
    /// Synthesized explanation when utilization is materially below 1.0.
    pub reason: Option<String>,
}

/// Projects under 95% utilized whose mandatory skills exclude candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillGapEntry {
    /// The project id.
    pub project_id: String,
    /// Utilization fraction (see [`ProjectUtilization`]).
    pub utilization: f64,
    /// Count of active employees failing the project's mandatory skills.
    pub blocked_resource_count: usize,
}

/// A project with unspent budget, its eligible-resource pool, and an FTE estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct UnderutilizedProject {
    /// The project id.
    pub project_id: String,
    /// `budget - allocated`.
    pub budget_gap: f64,
    /// Active employees satisfying mandatory skills.
    pub eligible_resource_count: usize,
    /// Total active employees.
    pub total_resource_count: usize,
    /// `budget_gap / mean_eligible_cost`, `None` if no eligible resources.
    pub estimated_fte_needed: Option<f64>,
}

/// One row of a pivot view: an (employee, project) pair with per-column fractions.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotRow {
    /// The employee id.
    pub employee_id: String,
    /// The project id.
    pub project_id: String,
    /// Column label (`YYYY-MM` for monthly, `YYYY-Qn` for quarterly) to fraction.
    pub columns: IndexMap<String, f64>,
}

const UTILIZATION_THRESHOLD: f64 = 0.95;

fn allocated_cost_for_project(allocations: &[Allocation], project_id: &str) -> f64 {
    allocations
        .iter()
        .filter(|a| !a.is_reporting_only() && a.project_id.as_deref() == Some(project_id))
        .map(|a| a.cost)
        .sum()
}

fn project_budget_reason(project: &Project, allocations: &[Allocation], employees: &[Employee]) -> Option<String> {
    let active: Vec<&Employee> = employees.iter().filter(|e| e.is_active()).collect();
    let eligible = active
        .iter()
        .filter(|e| skill::mandatory_satisfied(&project.required_skills, e))
        .count();
    let assigned: std::collections::HashSet<&str> = allocations
        .iter()
        .filter(|a| a.project_id.as_deref() == Some(project.id.as_str()))
        .map(|a| a.employee_id.as_str())
        .collect();

    if eligible == 0 {
        return Some("insufficient skill matches: no active employees satisfy mandatory skills".into());
    }
    if assigned.len() == eligible && eligible < active.len() / 2 {
        return Some("capacity exhausted: all eligible employees fully committed".into());
    }
    if project.max_resource_allocation_pct < 0.5 {
        return Some("max-per-project cap limits individual contribution".into());
    }
    Some("budget too large relative to eligible capacity, or waterfall weight too low".into())
}

/// Budget utilization and explanation per project.
pub fn project_utilization(projects: &[Project], allocations: &[Allocation], employees: &[Employee]) -> Vec<ProjectUtilization> {
    projects
        .iter()
        .map(|p| {
            let allocated = allocated_cost_for_project(allocations, &p.id);
            let utilization = if p.max_budget > 0.0 { allocated / p.max_budget } else { 0.0 };
            let reason = if utilization < UTILIZATION_THRESHOLD {
                project_budget_reason(p, allocations, employees)
            } else {
                None
            };
            ProjectUtilization { project_id: p.id.clone(), allocated, budget: p.max_budget, utilization, reason }
        })
        .collect()
}

fn employee_reason(employee: &Employee, projects: &[Project], allocations: &[Allocation], mean_cost: f64) -> Option<String> {
    let has_match = projects.iter().any(|p| skill::mandatory_satisfied(&p.required_skills, employee));
    if !has_match {
        return Some("no matching projects: fails mandatory skills on every open project".into());
    }
    let assigned_projects: std::collections::HashSet<&str> = allocations
        .iter()
        .filter(|a| a.employee_id == employee.id)
        .filter_map(|a| a.project_id.as_deref())
        .collect();
    if employee.cost_per_period > mean_cost {
        return Some("cost above average: deprioritized relative to cheaper peers".into());
    }
    if !assigned_projects.is_empty() {
        return Some("all assigned projects saturated at the per-project cap".into());
    }
    Some("per-project cap limits further allocation".into())
}

/// Utilization and explanation per active employee, across all months their
/// projects span.
pub fn employee_utilization(
    employees: &[Employee],
    projects: &[Project],
    allocations: &[Allocation],
) -> Vec<EmployeeUtilization> {
    let mut months: Vec<MonthKey> = projects.iter().flat_map(|p| p.period.months()).collect();
    months.sort_unstable();
    months.dedup();
    let mean_cost = {
        let active: Vec<&Employee> = employees.iter().filter(|e| e.is_active()).collect();
        if active.is_empty() { 0.0 } else { active.iter().map(|e| e.cost_per_period).sum::<f64>() / active.len() as f64 }
    };

    employees
        .iter()
        .filter(|e| e.is_active())
        .map(|e| {
            let allocated: f64 = allocations
                .iter()
                .filter(|a| !a.is_reporting_only() && a.employee_id == e.id)
                .map(|a| a.fraction)
                .sum();
            let capacity = e.fte_capacity * months.len() as f64;
            let utilization = if capacity > 0.0 { allocated / capacity } else { 0.0 };
            let remaining = (capacity - allocated).max(0.0);
            let reason = if utilization < UTILIZATION_THRESHOLD {
                employee_reason(e, projects, allocations, mean_cost)
            } else {
                None
            };
            EmployeeUtilization { employee_id: e.id.clone(), allocated, capacity, utilization, remaining, reason }
        })
        .collect()
}

/// Projects under 95% utilized whose mandatory skills block some resources.
pub fn skill_gap_report(projects: &[Project], employees: &[Employee], allocations: &[Allocation]) -> Vec<SkillGapEntry> {
    let active: Vec<&Employee> = employees.iter().filter(|e| e.is_active()).collect();
    let utilization = project_utilization(projects, allocations, employees);

    projects
        .iter()
        .zip(utilization.iter())
        .filter(|(_, u)| u.utilization < UTILIZATION_THRESHOLD)
        .filter_map(|(p, u)| {
            let blocked = active.iter().filter(|e| !skill::mandatory_satisfied(&p.required_skills, e)).count();
            (blocked > 0).then(|| SkillGapEntry {
                project_id: p.id.clone(),
                utilization: u.utilization,
                blocked_resource_count: blocked,
            })
        })
        .collect()
}

/// Projects with unspent budget, the eligible-resource pool, and an FTE estimate.
pub fn underutilized_projects(projects: &[Project], employees: &[Employee], allocations: &[Allocation]) -> Vec<UnderutilizedProject> {
    let active: Vec<&Employee> = employees.iter().filter(|e| e.is_active()).collect();
    let utilization = project_utilization(projects, allocations, employees);

    projects
        .iter()
        .zip(utilization.iter())
        .filter(|(_, u)| u.budget - u.allocated > 1e-6)
        .map(|(p, u)| {
            let eligible: Vec<&&Employee> = active.iter().filter(|e| skill::mandatory_satisfied(&p.required_skills, e)).collect();
            let gap = u.budget - u.allocated;
            let estimated_fte_needed = if eligible.is_empty() {
                None
            } else {
                let mean_cost = eligible.iter().map(|e| e.cost_per_period).sum::<f64>() / eligible.len() as f64;
                (mean_cost > 0.0).then(|| gap / mean_cost)
            };
            UnderutilizedProject {
                project_id: p.id.clone(),
                budget_gap: gap,
                eligible_resource_count: eligible.len(),
                total_resource_count: active.len(),
                estimated_fte_needed,
            }
        })
        .collect()
}

/// Monthly pivot view: one row per (employee, project), columns `YYYY-MM`.
pub fn monthly_pivot(allocations: &[Allocation]) -> Vec<PivotRow> {
    pivot(allocations, |m| m.to_string())
}

/// Quarterly pivot view: one row per (employee, project), columns `YYYY-Qn`.
pub fn quarterly_pivot(allocations: &[Allocation]) -> Vec<PivotRow> {
    pivot(allocations, |m| m.quarter_label())
}

fn pivot(allocations: &[Allocation], column_key: impl Fn(MonthKey) -> String) -> Vec<PivotRow> {
    let mut rows: IndexMap<(String, String), IndexMap<String, f64>> = IndexMap::new();
    for a in allocations {
        if a.is_reporting_only() {
            continue;
        }
        let Some(project_id) = &a.project_id else { continue };
        let key = (a.employee_id.clone(), project_id.clone());
        *rows.entry(key).or_default().entry(column_key(a.month)).or_insert(0.0) += a.fraction;
    }
    rows.into_iter()
        .map(|((employee_id, project_id), columns)| PivotRow { employee_id, project_id, columns })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmployeeStatus, ProjectPeriod, SkillRequirement};

    fn employee(id: &str, cost: f64) -> Employee {
        Employee {
            id: id.into(),
            name: id.into(),
            status: EmployeeStatus::Active,
            fte_capacity: 1.0,
            cost_per_period: cost,
            role: None,
            technical_skills: "python".into(),
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

    fn project(id: &str, budget: f64) -> Project {
        Project {
            id: id.into(),
            name: id.into(),
            period: ProjectPeriod::new("2025-01", "2025-02").unwrap(),
            required_skills: SkillRequirement::from_simple_string("python"),
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
    fn full_utilization_has_no_reason() {
        let employees = vec![employee("e1", 10.0)];
        let projects = vec![project("p1", 20.0)];
        let m = MonthKey::parse("2025-01").unwrap();
        let allocations = vec![Allocation::regular("s1", "e1", "p1", m, 1.0, 10.0, false)];
        let util = project_utilization(&projects, &allocations, &employees);
        assert!((util[0].allocated - 10.0).abs() < 1e-9);
    }

    #[test]
    fn zero_allocation_produces_a_reason() {
        let employees = vec![employee("e1", 10.0)];
        let projects = vec![project("p1", 20.0)];
        let util = project_utilization(&projects, &[], &employees);
        assert!(util[0].reason.is_some());
    }

    #[test]
    fn skill_gap_flags_blocked_projects() {
        let mut employees = vec![employee("e1", 10.0)];
        employees[0].technical_skills = "cobol".into();
        let projects = vec![project("p1", 20.0)];
        let gaps = skill_gap_report(&projects, &employees, &[]);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].blocked_resource_count, 1);
    }

    #[test]
    fn underutilized_reports_gap_and_fte_estimate() {
        let employees = vec![employee("e1", 10.0)];
        let projects = vec![project("p1", 100.0)];
        let m = MonthKey::parse("2025-01").unwrap();
        let allocations = vec![Allocation::regular("s1", "e1", "p1", m, 0.5, 5.0, false)];
        let report = underutilized_projects(&projects, &employees, &allocations);
        assert_eq!(report.len(), 1);
        assert!((report[0].budget_gap - 95.0).abs() < 1e-9);
        assert!(report[0].estimated_fte_needed.is_some());
    }

    #[test]
    fn quarterly_pivot_groups_by_quarter() {
        let m1 = MonthKey::parse("2025-01").unwrap();
        let m2 = MonthKey::parse("2025-02").unwrap();
        let allocations = vec![
            Allocation::regular("s1", "e1", "p1", m1, 0.5, 5.0, false),
            Allocation::regular("s1", "e1", "p1", m2, 0.5, 5.0, false),
        ];
        let rows = quarterly_pivot(&allocations);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].columns.len(), 1);
        assert!((rows[0].columns["2025-Q1"] - 1.0).abs() < 1e-9);
    }
}

//! End-to-end seed scenarios (S1-S6) exercising the full `allocate()` pipeline.
//!
//! These require the real LP/MILP backend, so they only run with the `ffi`
//! feature compiled in.

#![cfg(feature = "ffi")]

use portfolio_allocator::config::{Config, Weights};
use portfolio_allocator::domain::{Employee, EmployeeStatus, Project, ProjectPeriod, SkillRequirement};
use portfolio_allocator::gate::budgets::SolveBudgets;
use portfolio_allocator::priority::PriorityWeights;
use portfolio_allocator::{allocate, analytics};

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

fn project(id: &str, budget: f64, start: &str, end: &str, required: &str, fs: &str) -> Project {
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
        funding_source: fs.into(),
        region_preference: None,
        team: None,
        sub_team: None,
        pod: None,
        effort_estimate_man_months: None,
        max_resource_allocation_pct: 1.0,
    }
}

fn run(employees: &[Employee], projects: &[Project], config: &Config) -> Vec<portfolio_allocator::domain::Allocation> {
    let outcome = allocate(
        "test-scenario",
        employees,
        projects,
        &Weights::default(),
        config,
        PriorityWeights::default(),
        &SolveBudgets::default(),
    )
    .unwrap();
    assert!(outcome.report.feasible, "scenario expected a feasible solve: {:?}", outcome.report.stop_reason);
    outcome.allocations
}

#[test]
fn s1_single_project_single_employee_perfect_match() {
    let employees = vec![employee("e1", 1.0, 10.0, "python")];
    let projects = vec![project("p1", 30.0, "2025-01", "2025-03", "python", "fs1")];
    let allocations = run(&employees, &projects, &Config::default());

    let regular: Vec<_> = allocations.iter().filter(|a| a.project_id.as_deref() == Some("p1")).collect();
    assert_eq!(regular.len(), 3);
    for a in &regular {
        assert!((a.fraction - 1.0).abs() < 1e-4, "fraction {}", a.fraction);
    }
    let total_cost: f64 = regular.iter().map(|a| a.cost).sum();
    assert!((total_cost - 30.0).abs() < 1e-2);

    let util = analytics::project_utilization(&projects, &allocations, &employees);
    let p1 = util.iter().find(|u| u.project_id == "p1").unwrap();
    assert!((p1.utilization - 1.0).abs() < 1e-3);

    let underutilized = analytics::underutilized_projects(&projects, &employees, &allocations);
    assert!(underutilized.is_empty());
}

#[test]
fn s2_budget_too_tight() {
    let employees = vec![employee("e1", 1.0, 10.0, "python")];
    let projects = vec![project("p1", 15.0, "2025-01", "2025-03", "python", "fs1")];
    let allocations = run(&employees, &projects, &Config::default());

    let regular: Vec<_> = allocations.iter().filter(|a| a.project_id.as_deref() == Some("p1")).collect();
    let total_cost: f64 = regular.iter().map(|a| a.cost).sum();
    assert!(total_cost <= 15.0 + 1e-2);

    let underutilized = analytics::underutilized_projects(&projects, &employees, &allocations);
    assert!(!underutilized.is_empty(), "a budget-starved project should be reported underutilized");
}

#[test]
fn s3_funding_source_silo_has_no_cross_bleed() {
    let employees = vec![
        employee("e1", 1.0, 10.0, "python"),
        employee("e2", 1.0, 10.0, "python"),
    ];
    let mut p1 = project("p1", 100.0, "2025-01", "2025-01", "python", "fs-a");
    p1.rank = Some(1);
    p1.driver = Some("strategic".into());
    let mut p2 = project("p2", 100.0, "2025-01", "2025-01", "python", "fs-b");
    p2.rank = Some(5);
    p2.driver = Some("maintenance".into());
    let projects = vec![p1, p2];

    let allocations = run(&employees, &projects, &Config::default());
    let cost_p2: f64 = allocations
        .iter()
        .filter(|a| a.project_id.as_deref() == Some("p2"))
        .map(|a| a.cost)
        .sum();
    assert!(cost_p2 <= 100.0 + 1e-2);
}

#[test]
fn s4_role_quota_met_for_every_role() {
    let mut dev = employee("e-dev", 1.0, 1.0, "python");
    dev.role = Some("DEV".into());
    let mut qa = employee("e-qa", 1.0, 1.0, "python");
    qa.role = Some("QA".into());
    let mut ba = employee("e-ba", 1.0, 1.0, "python");
    ba.role = Some("BA".into());
    let employees = vec![dev, qa, ba];
    let projects = vec![project("p1", 9.0, "2025-01", "2025-01", "python", "fs1")];

    let mut config = Config::default();
    config.min_role_allocation.insert("DEV".into(), 0.4);
    config.min_role_allocation.insert("QA".into(), 0.3);
    config.min_role_allocation.insert("BA".into(), 0.2);

    let allocations = run(&employees, &projects, &config);
    for (role, floor) in [("e-dev", 0.4), ("e-qa", 0.3), ("e-ba", 0.2)] {
        let fraction: f64 = allocations
            .iter()
            .filter(|a| a.employee_id == role && a.project_id.as_deref() == Some("p1"))
            .map(|a| a.fraction)
            .sum();
        assert!(fraction + 1e-4 >= floor, "{role} got {fraction}, floor {floor}");
    }
}

#[test]
fn s5_skill_development_slot_created() {
    let employees = vec![employee("e1", 1.0, 10.0, "python")];
    let projects = vec![project("p1", 30.0, "2025-01", "2025-01", "rust", "fs1")];

    let mut config = Config::default();
    config.allow_skill_development = true;
    config.skill_dev_max_fte = 0.2;

    let allocations = run(&employees, &projects, &config);
    let sd: Vec<_> = allocations.iter().filter(|a| a.skill_development).collect();
    assert_eq!(sd.len(), 1);
    assert!(sd[0].fraction <= 0.2 + 1e-6);

    let regular_rust = allocations
        .iter()
        .any(|a| a.project_id.as_deref() == Some("p1") && !a.skill_development && !a.no_required_skills);
    assert!(!regular_rust, "no regular allocation should pass the mandatory rust gate");
}

#[test]
fn s6_discrete_allocations_snap_to_increments() {
    let employees = vec![employee("e1", 1.0, 10.0, "python")];
    let projects = vec![project("p1", 30.0, "2025-01", "2025-01", "python", "fs1")];

    let mut config = Config::default();
    config.discrete_allocations = true;
    config.allocation_increments = vec![0.25, 0.5, 0.75, 1.0];

    let allocations = run(&employees, &projects, &config);
    let regular: Vec<_> = allocations.iter().filter(|a| a.project_id.as_deref() == Some("p1")).collect();
    for a in regular {
        let snaps = config.allocation_increments.iter().any(|lvl| (a.fraction - lvl).abs() < 1e-4);
        assert!(snaps, "fraction {} is not one of the configured increments", a.fraction);
    }
}

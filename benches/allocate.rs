//! Benchmark for the full allocate() pipeline on a mid-sized synthetic portfolio.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use portfolio_allocator::config::{Config, Weights};
use portfolio_allocator::domain::{Employee, EmployeeStatus, Project, ProjectPeriod, SkillRequirement};
use portfolio_allocator::gate::budgets::SolveBudgets;
use portfolio_allocator::priority::PriorityWeights;

const SKILLS: &[&str] = &["python", "java", "rust", "sql", "react"];
const ROLES: &[&str] = &["DEV", "QA", "BA"];
const FUNDING_SOURCES: &[&str] = &["fs-a", "fs-b", "fs-c"];

fn synthetic_employees(n: usize, seed: u64) -> Vec<Employee> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| Employee {
            id: format!("e{i}"),
            name: format!("Employee {i}"),
            status: EmployeeStatus::Active,
            fte_capacity: 1.0,
            cost_per_period: rng.gen_range(6.0..20.0),
            role: Some(ROLES[i % ROLES.len()].to_string()),
            technical_skills: SKILLS[i % SKILLS.len()].to_string(),
            functional_skills: String::new(),
            region: Some(["us", "eu", "apac"][i % 3].to_string()),
            grade: None,
            gender: None,
            team: None,
            sub_team: None,
            pod: None,
            preferred_projects: vec![],
        })
        .collect()
}

fn synthetic_projects(n: usize, seed: u64) -> Vec<Project> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| Project {
            id: format!("p{i}"),
            name: format!("Project {i}"),
            period: ProjectPeriod::new("2025-01", "2025-06").unwrap(),
            required_skills: SkillRequirement::from_simple_string(SKILLS[i % SKILLS.len()]),
            max_budget: rng.gen_range(200.0..2000.0),
            requested_budget: None,
            impact: Some(["low", "medium", "high"][i % 3].to_string()),
            driver: Some(["strategic", "operational", "maintenance"][i % 3].to_string()),
            rank: Some((i % 10 + 1) as i64),
            funding_source: FUNDING_SOURCES[i % FUNDING_SOURCES.len()].to_string(),
            region_preference: None,
            team: None,
            sub_team: None,
            pod: None,
            effort_estimate_man_months: None,
            max_resource_allocation_pct: 0.8,
        })
        .collect()
}

fn bench_allocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate");

    for &(employees_n, projects_n) in &[(20usize, 10usize), (50, 25)] {
        let employees = synthetic_employees(employees_n, 42);
        let projects = synthetic_projects(projects_n, 7);
        let config = Config::default();
        let weights = Weights::default();
        let budgets = SolveBudgets::default();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{employees_n}e_{projects_n}p")),
            &(employees, projects),
            |b, (employees, projects)| {
                b.iter(|| {
                    portfolio_allocator::allocate(
                        "bench-scenario",
                        black_box(employees),
                        black_box(projects),
                        &weights,
                        &config,
                        PriorityWeights::default(),
                        &budgets,
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_allocate);
criterion_main!(benches);

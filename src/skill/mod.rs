//! Skill Matcher: evaluates whether an employee satisfies a project's skill
//! expression and produces a numeric match score.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::domain::{Employee, SkillRequirement};

/// Regex metacharacters whose presence in a pattern forces regex mode,
/// even without an explicit `regex:` prefix.
const REGEX_METACHARS: &[char] = &['*', '+', '?', '^', '$', '[', ']', '(', ')', '{', '}', '|', '\\'];

/// Per-bucket and overall score for one (employee, project) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    /// `0.6`-weighted technical-bucket score.
    pub technical_score: f64,
    /// `0.4`-weighted functional-bucket score.
    pub functional_score: f64,
    /// `0.6*technical + 0.4*functional`.
    pub overall_score: f64,
    /// Whether every mandatory pattern (AND + OR) is satisfied.
    pub mandatory_satisfied: bool,
}

/// Decide whether `pattern` should be compiled as regex rather than matched literally.
fn is_regex_pattern(pattern: &str) -> bool {
    pattern.starts_with("regex:") || pattern.chars().any(|c| REGEX_METACHARS.contains(&c))
}

/// `matches(pattern, skill_bag) -> bool`, case-insensitive, with silent
/// degrade to literal substring matching on regex compile failure.
pub fn matches(pattern: &str, skill_bag: &str) -> bool {
    let bag = skill_bag.to_lowercase();
    if is_regex_pattern(pattern) {
        let body = pattern.strip_prefix("regex:").unwrap_or(pattern);
        match RegexBuilder::new(body).case_insensitive(true).build() {
            Ok(re) => return re.is_match(&bag),
            Err(_) => {
                tracing::warn!(pattern = %pattern, "invalid skill regex, degrading to literal match");
                let literal = body.to_lowercase();
                return bag.contains(&literal);
            }
        }
    }
    bag.contains(&pattern.to_lowercase())
}

/// Fraction of `and_patterns` that match `bag`, `1.0` if the bucket is empty.
fn and_fraction(and_patterns: &[String], bag: &str) -> f64 {
    if and_patterns.is_empty() {
        return 1.0;
    }
    let matched = and_patterns.iter().filter(|p| matches(p, bag)).count();
    matched as f64 / and_patterns.len() as f64
}

/// Whether the OR bucket is satisfied (vacuously true if empty).
fn or_satisfied(or_patterns: &[String], bag: &str) -> bool {
    or_patterns.is_empty() || or_patterns.iter().any(|p| matches(p, bag))
}

/// `mandatory_and`/`mandatory_or` gate: every AND pattern must match and the
/// OR bucket (if non-empty) must have at least one match.
pub fn mandatory_satisfied(requirement: &SkillRequirement, employee: &Employee) -> bool {
    let tech = employee.skill_bag(true);
    let func = employee.skill_bag(false);
    let combined = format!("{tech},{func}");
    let and_ok = requirement
        .mandatory_and
        .iter()
        .all(|p| matches(p, &combined));
    let or_ok = or_satisfied(&requirement.mandatory_or, &combined);
    and_ok && or_ok
}

/// Compute the soft technical/functional/overall scores.
pub fn match_score(employee: &Employee, requirement: &SkillRequirement) -> MatchScore {
    let tech_bag = employee.skill_bag(true);
    let func_bag = employee.skill_bag(false);

    let tech_and = and_fraction(&requirement.technical_and, &tech_bag);
    let tech_or = or_satisfied(&requirement.technical_or, &tech_bag);
    let technical_score = tech_and.min(if tech_or { 1.0 } else { 0.0 });

    let func_and = and_fraction(&requirement.functional_and, &func_bag);
    let func_or = or_satisfied(&requirement.functional_or, &func_bag);
    let functional_score = func_and.min(if func_or { 1.0 } else { 0.0 });

    let overall_score = 0.6 * technical_score + 0.4 * functional_score;

    MatchScore {
        technical_score,
        functional_score,
        overall_score,
        mandatory_satisfied: mandatory_satisfied(requirement, employee),
    }
}

/// True when `employee` has at least one partial soft-bucket match but fails
/// the mandatory gate — the candidate population for skill-development slots.
pub fn is_skill_development_candidate(employee: &Employee, requirement: &SkillRequirement) -> bool {
    let score = match_score(employee, requirement);
    !score.mandatory_satisfied && score.overall_score > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EmployeeStatus;

    fn employee(technical: &str, functional: &str) -> Employee {
        Employee {
            id: "e1".into(),
            name: "Test".into(),
            status: EmployeeStatus::Active,
            fte_capacity: 1.0,
            cost_per_period: 10.0,
            role: None,
            technical_skills: technical.into(),
            functional_skills: functional.into(),
            region: None,
            grade: None,
            gender: None,
            team: None,
            sub_team: None,
            pod: None,
            preferred_projects: vec![],
        }
    }

    #[test]
    fn literal_substring_match_is_case_insensitive() {
        assert!(matches("Python", "python, django"));
        assert!(!matches("golang", "python, django"));
    }

    #[test]
    fn star_alone_is_wildcard_regex() {
        assert!(matches("py*", "pytest-runner"));
    }

    #[test]
    fn explicit_regex_prefix() {
        assert!(matches("regex:^py", "python"));
        assert!(!matches("regex:^py", "cpython"));
    }

    #[test]
    fn invalid_regex_degrades_to_literal() {
        // unbalanced paren is invalid regex but contains a metachar, so it's
        // treated as regex first, then degrades to literal on compile failure.
        assert!(!matches("regex:(unclosed", "has(unclosed in it"));
        assert!(matches("regex:(unclosed", "text has (unclosed paren"));
    }

    #[test]
    fn mandatory_and_requires_all() {
        let req = SkillRequirement {
            mandatory_and: vec!["python".into(), "aws".into()].into(),
            ..Default::default()
        };
        let has_both = employee("python, aws, docker", "");
        let missing_one = employee("python, docker", "");
        assert!(mandatory_satisfied(&req, &has_both));
        assert!(!mandatory_satisfied(&req, &missing_one));
    }

    #[test]
    fn mandatory_or_requires_one() {
        let req = SkillRequirement {
            mandatory_or: vec!["java".into(), "kotlin".into()].into(),
            ..Default::default()
        };
        assert!(mandatory_satisfied(&req, &employee("java, spring", "")));
        assert!(!mandatory_satisfied(&req, &employee("python", "")));
    }

    #[test]
    fn empty_mandatory_or_is_vacuously_satisfied() {
        let req = SkillRequirement::none();
        assert!(mandatory_satisfied(&req, &employee("anything", "")));
    }

    #[test]
    fn overall_score_weighting() {
        let req = SkillRequirement {
            technical_and: vec!["python".into()].into(),
            functional_and: vec!["agile".into()].into(),
            ..Default::default()
        };
        let full_match = employee("python", "agile");
        let score = match_score(&full_match, &req);
        assert!((score.technical_score - 1.0).abs() < 1e-9);
        assert!((score.functional_score - 1.0).abs() < 1e-9);
        assert!((score.overall_score - 1.0).abs() < 1e-9);

        let technical_only = employee("python", "");
        let score2 = match_score(&technical_only, &req);
        assert!((score2.overall_score - 0.6).abs() < 1e-9);
    }

    #[test]
    fn skill_development_candidate_detection() {
        let req = SkillRequirement {
            mandatory_and: vec!["rust".into()].into(),
            technical_or: vec!["python".into()].into(),
            ..Default::default()
        };
        let partial = employee("python", "");
        assert!(is_skill_development_candidate(&partial, &req));

        let none_at_all = employee("cobol", "");
        assert!(!is_skill_development_candidate(&none_at_all, &req));
    }

    #[test]
    fn matches_is_idempotent() {
        for _ in 0..3 {
            assert_eq!(matches("py*", "python"), matches("py*", "python"));
        }
    }
}

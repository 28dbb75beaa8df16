//! The `Employee` record.

use serde::{Deserialize, Serialize};

/// Whether an employee participates in the solve at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Eligible for allocation.
    Active,
    /// Excluded from every decision variable.
    Inactive,
}

impl Default for EmployeeStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// A resource that can be allocated fractionally across projects and months.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Stable unique key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Active employees participate in the solve; inactive ones never do.
    #[serde(default)]
    pub status: EmployeeStatus,
    /// Monthly capacity, normally in `[0, 1]` (1.0 = full-time).
    pub fte_capacity: f64,
    /// Monetary cost of one month at full capacity.
    pub cost_per_period: f64,
    /// `DEV`/`QA`/`BA`/... ; inferred from skills via [`infer_role`] when absent.
    pub role: Option<String>,
    /// Comma-separated, lowercase technical skill bag.
    #[serde(default)]
    pub technical_skills: String,
    /// Comma-separated, lowercase functional skill bag.
    #[serde(default)]
    pub functional_skills: String,
    /// Geographic region, used by the team-diversity bonus.
    #[serde(default)]
    pub region: Option<String>,
    /// Seniority grade, reporting-only unless diversity config references it.
    #[serde(default)]
    pub grade: Option<String>,
    /// Reporting-only categorical attribute.
    #[serde(default)]
    pub gender: Option<String>,
    /// Org team, used by team-alignment preference terms.
    #[serde(default)]
    pub team: Option<String>,
    /// Org sub-team.
    #[serde(default)]
    pub sub_team: Option<String>,
    /// Org pod.
    #[serde(default)]
    pub pod: Option<String>,
    /// Project ids this employee has expressed a preference for.
    #[serde(default)]
    pub preferred_projects: Vec<String>,
}

impl Employee {
    /// True when eligible to receive any decision variable.
    pub fn is_active(&self) -> bool {
        matches!(self.status, EmployeeStatus::Active)
    }

    /// Effective role: the explicit field, or an inference from skill text.
    pub fn effective_role(&self) -> String {
        self.role
            .clone()
            .unwrap_or_else(|| infer_role(&self.technical_skills, &self.functional_skills))
    }

    /// Lowercased skill bag used by the matcher for the given bucket name.
    pub fn skill_bag(&self, technical: bool) -> String {
        if technical {
            self.technical_skills.to_lowercase()
        } else {
            self.functional_skills.to_lowercase()
        }
    }

    /// True if `project_id` appears in `preferred_projects`.
    pub fn prefers(&self, project_id: &str) -> bool {
        self.preferred_projects.iter().any(|p| p == project_id)
    }
}

/// Infer a `DEV`/`QA`/`BA` role from free-text skill bags when the employee
/// record carries no explicit `role`.
pub fn infer_role(technical_skills: &str, functional_skills: &str) -> String {
    let text = format!(
        "{} {}",
        technical_skills.to_lowercase(),
        functional_skills.to_lowercase()
    );
    const QA_KEYWORDS: &[&str] = &["qa", "quality", "test", "testing", "automation testing"];
    const BA_KEYWORDS: &[&str] = &["ba", "business analyst", "requirements", "business analysis"];
    if QA_KEYWORDS.iter().any(|k| text.contains(k)) {
        "QA".to_string()
    } else if BA_KEYWORDS.iter().any(|k| text.contains(k)) {
        "BA".to_string()
    } else {
        "DEV".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn infers_qa_from_keywords() {
        assert_eq!(infer_role("manual qa, selenium", ""), "QA");
    }

    #[test]
    fn infers_ba_from_keywords() {
        assert_eq!(infer_role("", "business analyst, requirements gathering"), "BA");
    }

    #[test]
    fn defaults_to_dev() {
        assert_eq!(infer_role("python, rust", "architecture"), "DEV");
    }

    #[test]
    fn explicit_role_wins_over_inference() {
        let mut e = employee("qa automation", "");
        e.role = Some("DEV".into());
        assert_eq!(e.effective_role(), "DEV");
    }

    #[test]
    fn inactive_employee_is_not_active() {
        let mut e = employee("python", "");
        e.status = EmployeeStatus::Inactive;
        assert!(!e.is_active());
    }

    #[test]
    fn preference_lookup() {
        let mut e = employee("python", "");
        e.preferred_projects = vec!["p1".into(), "p2".into()];
        assert!(e.prefers("p1"));
        assert!(!e.prefers("p3"));
    }
}

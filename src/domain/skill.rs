//! Skill expressions: the AND/OR pattern buckets attached to a project.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A single literal-or-regex skill pattern.
pub type Pattern = SmallVec<[String; 4]>;

/// The six pattern buckets a project's skill requirement is built from.
///
/// `mandatory_*` gate whether an employee may be assigned at all;
/// `technical_*`/`functional_*` only affect the soft match score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillRequirement {
    /// All of these must match (hard).
    #[serde(default)]
    pub mandatory_and: Pattern,
    /// At least one of these must match; empty is vacuously satisfied (hard).
    #[serde(default)]
    pub mandatory_or: Pattern,
    /// Technical-skill AND bucket (soft).
    #[serde(default)]
    pub technical_and: Pattern,
    /// Technical-skill OR bucket (soft).
    #[serde(default)]
    pub technical_or: Pattern,
    /// Functional-skill AND bucket (soft).
    #[serde(default)]
    pub functional_and: Pattern,
    /// Functional-skill OR bucket (soft).
    #[serde(default)]
    pub functional_or: Pattern,
}

impl SkillRequirement {
    /// A requirement with no constraints at all; every employee qualifies.
    pub fn none() -> Self {
        Self::default()
    }

    /// Build a requirement from the simple spreadsheet-bridge string grammar:
    /// comma- or `&`-separated mandatory-AND patterns, with `|` separating an
    /// OR bucket appended after the AND clause (`a,b|c` => and=[a,b], or=[c]).
    pub fn from_simple_string(spec: &str) -> Self {
        let spec = spec.trim();
        if spec.is_empty() {
            return Self::none();
        }
        let (and_part, or_part) = match spec.split_once('|') {
            Some((a, o)) => (a, Some(o)),
            None => (spec, None),
        };
        let mandatory_and: Pattern = and_part
            .split([',', '&'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        let mandatory_or: Pattern = or_part
            .map(|o| {
                o.split([',', '&'])
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();
        Self {
            mandatory_and,
            mandatory_or,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_string_and_only() {
        let req = SkillRequirement::from_simple_string("python,django");
        assert_eq!(&req.mandatory_and[..], &["python", "django"]);
        assert!(req.mandatory_or.is_empty());
    }

    #[test]
    fn simple_string_with_or() {
        let req = SkillRequirement::from_simple_string("python|java,kotlin");
        assert_eq!(&req.mandatory_and[..], &["python"]);
        assert_eq!(&req.mandatory_or[..], &["java", "kotlin"]);
    }

    #[test]
    fn ampersand_is_comma_synonym() {
        let req = SkillRequirement::from_simple_string("python&aws");
        assert_eq!(&req.mandatory_and[..], &["python", "aws"]);
    }

    #[test]
    fn blank_is_unconstrained() {
        let req = SkillRequirement::from_simple_string("   ");
        assert!(req.mandatory_and.is_empty());
        assert!(req.mandatory_or.is_empty());
    }
}

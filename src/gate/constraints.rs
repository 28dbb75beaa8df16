//! Constraint violation record, surfaced in [`super::report::SolverReport`].

use serde::{Deserialize, Serialize};

/// A constraint violation in solution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Which constraint was violated
    pub constraint_name: String,
    /// Severity (0.0 = marginal, 1.0 = complete violation)
    pub severity: f64,
    /// Human-readable explanation
    pub explanation: String,
    /// Affected entities
    pub affected_entities: Vec<String>,
}

impl Violation {
    /// Create a new violation
    pub fn new(
        constraint_name: impl Into<String>,
        severity: f64,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            constraint_name: constraint_name.into(),
            severity: severity.clamp(0.0, 1.0),
            explanation: explanation.into(),
            affected_entities: Vec::new(),
        }
    }

    /// Add affected entity
    pub fn with_affected(mut self, entity: impl Into<String>) -> Self {
        self.affected_entities.push(entity.into());
        self
    }

    /// Add multiple affected entities
    pub fn with_affected_all(mut self, entities: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for e in entities {
            self.affected_entities.push(e.into());
        }
        self
    }

    /// Check if this is a severe violation
    pub fn is_severe(&self) -> bool {
        self.severity >= 0.8
    }
}

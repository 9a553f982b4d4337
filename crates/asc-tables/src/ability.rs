//! Ability classification rules.
//!
//! Rules are an ordered list rather than a map: when several patterns are
//! substrings of the same ability id, the first rule in list order wins, so
//! the order is part of the table's versioned content.

use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};
use crate::vocab::AbilityCategory;

/// A single `pattern -> category` rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRule {
    /// Normalized ability id or id fragment (lowercase, underscores).
    pub pattern: String,
    /// Category assigned on match.
    pub category: AbilityCategory,
}

/// Ordered classification rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityClassificationTable {
    rules: Vec<ClassificationRule>,
}

impl AbilityClassificationTable {
    /// Build and validate a table from rules in priority order.
    pub fn new(rules: Vec<ClassificationRule>) -> TableResult<Self> {
        let table = Self::from_rules(rules);
        table.validate()?;
        Ok(table)
    }

    /// Wrap rules without validating them.
    pub(crate) fn from_rules(rules: Vec<ClassificationRule>) -> Self {
        Self { rules }
    }

    /// Build and validate a table from `(pattern, category)` pairs.
    pub fn from_pairs(pairs: &[(&str, AbilityCategory)]) -> TableResult<Self> {
        Self::new(
            pairs
                .iter()
                .map(|&(pattern, category)| ClassificationRule {
                    pattern: pattern.to_string(),
                    category,
                })
                .collect(),
        )
    }

    /// The rules in priority order.
    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Check that every pattern is non-empty and already normalized.
    ///
    /// An unnormalized pattern could never match a normalized id.
    pub fn validate(&self) -> TableResult<()> {
        for (index, rule) in self.rules.iter().enumerate() {
            let p = &rule.pattern;
            if p.is_empty() || *p != p.to_lowercase() || p.contains(' ') {
                return Err(TableError::InvalidPattern {
                    index,
                    pattern: p.clone(),
                });
            }
        }
        Ok(())
    }
}

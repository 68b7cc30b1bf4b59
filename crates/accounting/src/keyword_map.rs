//! Name-to-category classification by substring keyword.

use serde::{Deserialize, Serialize};

use tallygen_core::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule<T> {
    pub keyword: String,
    pub value: T,
}

/// Ordered keyword rules with a fallback.
///
/// `resolve` returns the value of the first rule whose keyword occurs in the
/// name (case-sensitive), or the default when none does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMap<T> {
    rules: Vec<KeywordRule<T>>,
    default: T,
}

impl<T> KeywordMap<T> {
    pub fn new(default: T) -> Self {
        Self {
            rules: Vec::new(),
            default,
        }
    }

    pub fn rule(mut self, keyword: impl Into<String>, value: T) -> Self {
        self.rules.push(KeywordRule {
            keyword: keyword.into(),
            value,
        });
        self
    }

    pub fn resolve(&self, name: &str) -> &T {
        self.rules
            .iter()
            .find(|r| name.contains(r.keyword.as_str()))
            .map(|r| &r.value)
            .unwrap_or(&self.default)
    }

    /// All values the map can resolve to, rules first.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rules.iter().map(|r| &r.value).chain(core::iter::once(&self.default))
    }

    /// An empty keyword would match every name and shadow later rules.
    pub fn validate(&self) -> DomainResult<()> {
        if self.rules.iter().any(|r| r.keyword.is_empty()) {
            return Err(DomainError::validation("keyword rules cannot be empty"));
        }
        Ok(())
    }
}

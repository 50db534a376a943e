//! Tryout search predicates and category aggregation.

use std::collections::BTreeSet;

use crate::error::CoreError;
use crate::validation::MIN_DURATION_MINUTES;

/// Conjunction of optional tryout predicates.
///
/// Every supplied predicate must hold. Duration bounds are inclusive.
/// An empty filter matches every tryout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TryoutFilter {
    pub category: Option<String>,
    pub min_duration: Option<i32>,
    pub max_duration: Option<i32>,
}

impl TryoutFilter {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.min_duration.is_none() && self.max_duration.is_none()
    }

    /// Reject bounds below [`MIN_DURATION_MINUTES`] and inverted ranges.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (name, bound) in [
            ("minDuration", self.min_duration),
            ("maxDuration", self.max_duration),
        ] {
            if let Some(value) = bound {
                if value < MIN_DURATION_MINUTES {
                    return Err(CoreError::Validation(format!(
                        "{name} must be >= {MIN_DURATION_MINUTES}, got {value}"
                    )));
                }
            }
        }
        if let (Some(min), Some(max)) = (self.min_duration, self.max_duration) {
            if min > max {
                return Err(CoreError::Validation(format!(
                    "minDuration ({min}) must not exceed maxDuration ({max})"
                )));
            }
        }
        Ok(())
    }

    /// Evaluate the filter against a tryout's category and duration.
    pub fn matches(&self, category: &str, duration: i32) -> bool {
        self.category.as_deref().map_or(true, |c| c == category)
            && self.min_duration.map_or(true, |min| duration >= min)
            && self.max_duration.map_or(true, |max| duration <= max)
    }
}

/// Collapse category values into a sorted, duplicate-free list.
pub fn distinct_categories<I, S>(categories: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    categories
        .into_iter()
        .map(Into::into)
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

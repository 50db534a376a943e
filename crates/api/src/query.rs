//! Shared query parameter types for API handlers.

use serde::Deserialize;
use tryout_core::filter::TryoutFilter;

/// Tryout search parameters (`?category=&minDuration=&maxDuration=`).
///
/// A blank `category` is treated as absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TryoutFilterParams {
    pub category: Option<String>,
    pub min_duration: Option<i32>,
    pub max_duration: Option<i32>,
}

impl From<TryoutFilterParams> for TryoutFilter {
    fn from(params: TryoutFilterParams) -> Self {
        TryoutFilter {
            category: params
                .category
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            min_duration: params.min_duration,
            max_duration: params.max_duration,
        }
    }
}

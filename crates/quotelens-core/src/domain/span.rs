use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Lookback span for historical-series requests, in whole years.
///
/// Rendered as the provider range parameter (`"10y"`); the sampling
/// granularity is always one trading day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistorySpan(u32);

impl HistorySpan {
    pub fn years(years: u32) -> Result<Self, ValidationError> {
        if years == 0 {
            return Err(ValidationError::EmptySpan);
        }
        Ok(Self(years))
    }

    pub const fn year_count(self) -> u32 {
        self.0
    }

    /// Provider `range` query value, e.g. `"10y"`.
    pub fn as_range_param(self) -> String {
        format!("{}y", self.0)
    }
}

impl Display for HistorySpan {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_range_param())
    }
}

use serde::{Deserialize, Serialize};

use crate::Symbol;

/// Minimum number of valid closes required for any derived computation.
pub const MIN_SERIES_POINTS: usize = 2;

/// Single observed closing price with its trading-day label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading-day label, `YYYY-MM-DD`.
    pub label: String,
    pub close: f64,
}

impl PricePoint {
    pub fn new(label: impl Into<String>, close: f64) -> Self {
        Self {
            label: label.into(),
            close,
        }
    }
}

/// Chronological closing-price series for one symbol.
///
/// Providers drop entries whose close is missing or non-numeric before
/// constructing the series; every retained point carries a usable close.
/// Missing upstream entries are never interpolated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub symbol: Symbol,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(symbol: Symbol, points: Vec<PricePoint>) -> Self {
        Self { symbol, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the series carries enough history for growth estimation.
    pub fn has_enough_history(&self) -> bool {
        self.points.len() >= MIN_SERIES_POINTS
    }

    pub fn first_close(&self) -> Option<f64> {
        self.points.first().map(|point| point.close)
    }

    pub fn last_close(&self) -> Option<f64> {
        self.points.last().map(|point| point.close)
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|point| point.label.as_str())
    }

    pub fn closes(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|point| point.close)
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::round_to_cents;
use crate::Symbol;

/// Raw quote numbers as reported by the quote provider.
///
/// Fields the provider omits or reports as non-numeric stay `None`; the
/// board derives change figures only from what is actually present.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteObservation {
    pub symbol: Symbol,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub current: Option<f64>,
    pub prev_close: Option<f64>,
}

/// One quote-board row: provider numbers plus derived change figures and
/// the shared batch timestamp label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRow {
    pub symbol: String,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub prev_close: Option<f64>,
    pub change: Option<f64>,
    pub percent_change: Option<f64>,
    pub timestamp: String,
}

impl QuoteRow {
    pub fn from_observation(observation: QuoteObservation, timestamp: impl Into<String>) -> Self {
        let change = match (observation.current, observation.prev_close) {
            (Some(current), Some(prev_close)) => Some(round_to_cents(current - prev_close)),
            _ => None,
        };

        let percent_change = change.and_then(|change| {
            observation.prev_close.map(|prev_close| {
                if prev_close == 0.0 {
                    0.0
                } else {
                    round_to_cents(change / prev_close * 100.0)
                }
            })
        });

        Self {
            symbol: observation.symbol.as_str().to_owned(),
            open: observation.open,
            high: observation.high,
            low: observation.low,
            close: observation.current,
            prev_close: observation.prev_close,
            change,
            percent_change,
            timestamp: timestamp.into(),
        }
    }

    /// Row emitted when the provider fetch failed for a symbol.
    pub fn unavailable(symbol: &Symbol, timestamp: impl Into<String>) -> Self {
        Self {
            symbol: symbol.as_str().to_owned(),
            open: None,
            high: None,
            low: None,
            close: None,
            prev_close: None,
            change: None,
            percent_change: None,
            timestamp: timestamp.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(current: Option<f64>, prev_close: Option<f64>) -> QuoteObservation {
        QuoteObservation {
            symbol: Symbol::parse("KO").expect("valid symbol"),
            open: Some(61.0),
            high: Some(62.5),
            low: Some(60.8),
            current,
            prev_close,
        }
    }

    #[test]
    fn derives_change_and_percent_change() {
        let row = QuoteRow::from_observation(observation(Some(62.0), Some(60.0)), "09:30:00 AM");
        assert_eq!(row.change, Some(2.0));
        assert_eq!(row.percent_change, Some(3.33));
    }

    #[test]
    fn zero_prev_close_reports_zero_percent_change() {
        let row = QuoteRow::from_observation(observation(Some(5.0), Some(0.0)), "09:30:00 AM");
        assert_eq!(row.change, Some(5.0));
        assert_eq!(row.percent_change, Some(0.0));
    }

    #[test]
    fn missing_price_leaves_change_absent() {
        let row = QuoteRow::from_observation(observation(None, Some(60.0)), "09:30:00 AM");
        assert_eq!(row.change, None);
        assert_eq!(row.percent_change, None);
        assert_eq!(row.prev_close, Some(60.0));
    }
}

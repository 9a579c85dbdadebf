mod quote;
mod series;
mod span;
mod symbol;

pub use quote::{QuoteObservation, QuoteRow};
pub use series::{PricePoint, PriceSeries, MIN_SERIES_POINTS};
pub use span::HistorySpan;
pub use symbol::Symbol;

/// Round a currency figure to cents, half away from zero.
///
/// Applied uniformly to projected values, quote change fields, and chart
/// closes so that repeated runs compare bit-for-bit.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

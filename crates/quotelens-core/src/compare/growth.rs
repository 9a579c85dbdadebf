use crate::PriceSeries;

/// Endpoint-anchored compound annual growth rate.
///
/// The estimate uses only the first and last observed closes, not a
/// regression over the whole series; that anchoring is part of the engine's
/// contract and must not be "improved". A zero first close yields a rate of
/// zero instead of dividing. Callers are responsible for gating on
/// [`PriceSeries::has_enough_history`]; a series with fewer than two points
/// also falls back to zero.
pub fn annual_growth_rate(series: &PriceSeries, years: u32) -> f64 {
    let (Some(first), Some(last)) = (series.first_close(), series.last_close()) else {
        return 0.0;
    };

    if first == 0.0 || years == 0 {
        return 0.0;
    }

    (last / first).powf(1.0 / f64::from(years)) - 1.0
}

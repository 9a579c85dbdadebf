use crate::PriceSeries;

/// Rescale a closing series into the value of a lump-sum investment.
///
/// `value[i] = close[i] / close[0] * principal`, so the first element equals
/// the principal exactly and date alignment is preserved. The sequence is
/// lazy and restartable; calling again yields the same values. Callers must
/// guarantee a nonzero first close (the aggregator skips normalization for
/// zero-first-close series).
pub fn normalized_values(series: &PriceSeries, principal: f64) -> impl Iterator<Item = f64> + '_ {
    let first = series.first_close().unwrap_or(1.0);
    series.closes().map(move |close| close / first * principal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PricePoint, Symbol};

    fn series(closes: &[f64]) -> PriceSeries {
        let points = closes
            .iter()
            .enumerate()
            .map(|(day, close)| PricePoint::new(format!("2023-03-{:02}", day + 1), *close))
            .collect();
        PriceSeries::new(Symbol::parse("NORM").expect("valid symbol"), points)
    }

    #[test]
    fn first_value_equals_the_principal_exactly() {
        let series = series(&[37.41, 41.02, 36.5]);
        let first = normalized_values(&series, 10_000.0)
            .next()
            .expect("non-empty series");
        assert_eq!(first, 10_000.0);
    }

    #[test]
    fn values_scale_linearly_with_the_closes() {
        let series = series(&[50.0, 75.0, 100.0]);
        let values: Vec<f64> = normalized_values(&series, 1_000.0).collect();
        assert_eq!(values, vec![1_000.0, 1_500.0, 2_000.0]);
    }

    #[test]
    fn sequence_is_restartable() {
        let series = series(&[50.0, 60.0]);
        let once: Vec<f64> = normalized_values(&series, 500.0).collect();
        let twice: Vec<f64> = normalized_values(&series, 500.0).collect();
        assert_eq!(once, twice);
    }
}

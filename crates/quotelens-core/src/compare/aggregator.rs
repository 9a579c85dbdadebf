use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::compare::{annual_growth_rate, normalized_values, project};
use crate::data_source::{HistorySource, SourceError};
use crate::domain::round_to_cents;
use crate::pacing::RequestPacer;
use crate::{HistorySpan, PriceSeries, Symbol, ValidationError};

/// Sentinel rendered for computed fields when a symbol has no usable data.
const UNAVAILABLE: &str = "N/A";

/// Validated comparison inputs: requested symbols in order (duplicates are
/// processed independently), the initial lump-sum investment, and the
/// holding period.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRequest {
    pub symbols: Vec<String>,
    pub investment: f64,
    pub span: HistorySpan,
}

impl ComparisonRequest {
    pub fn new(
        symbols: Vec<String>,
        investment: f64,
        span: HistorySpan,
    ) -> Result<Self, ValidationError> {
        if symbols.is_empty() {
            return Err(ValidationError::EmptySymbolList);
        }
        Ok(Self {
            symbols,
            investment,
            span,
        })
    }

    /// Parse the raw string inputs of the public `compare_investment`
    /// operation. All validation happens here, before any upstream fetch.
    pub fn parse(symbols: &str, investment: &str, years: &str) -> Result<Self, ValidationError> {
        if symbols.trim().is_empty() {
            return Err(ValidationError::EmptySymbolList);
        }

        let symbols: Vec<String> = symbols
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_ascii_uppercase)
            .collect();
        if symbols.is_empty() {
            return Err(ValidationError::EmptySymbolList);
        }

        let investment_value: f64 =
            investment
                .trim()
                .parse()
                .map_err(|_| ValidationError::InvalidInvestment {
                    value: investment.to_owned(),
                })?;
        if !investment_value.is_finite() {
            return Err(ValidationError::InvalidInvestment {
                value: investment.to_owned(),
            });
        }

        let year_count: u32 = years
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidYears {
                value: years.to_owned(),
            })?;
        let span = HistorySpan::years(year_count).map_err(|_| ValidationError::InvalidYears {
            value: years.to_owned(),
        })?;

        Self::new(symbols, investment_value, span)
    }
}

/// Projected end value, or the unavailable sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectedValue {
    Amount(f64),
    Unavailable,
}

impl Serialize for ProjectedValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Amount(value) => serializer.serialize_f64(*value),
            Self::Unavailable => serializer.serialize_str(UNAVAILABLE),
        }
    }
}

/// One comparison-table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub symbol: String,
    pub start_investment: f64,
    pub annual_yield: String,
    pub end_value_no_drip: ProjectedValue,
    pub end_value_with_drip: ProjectedValue,
}

impl ComparisonRow {
    fn projected(
        symbol: &str,
        start_investment: f64,
        fixed_yield: f64,
        end_value_no_drip: f64,
        end_value_with_drip: f64,
    ) -> Self {
        Self {
            symbol: symbol.to_owned(),
            start_investment,
            annual_yield: format!("{:.1}%", fixed_yield * 100.0),
            end_value_no_drip: ProjectedValue::Amount(end_value_no_drip),
            end_value_with_drip: ProjectedValue::Amount(end_value_with_drip),
        }
    }

    fn unavailable(symbol: &str, start_investment: f64) -> Self {
        Self {
            symbol: symbol.to_owned(),
            start_investment,
            annual_yield: UNAVAILABLE.to_owned(),
            end_value_no_drip: ProjectedValue::Unavailable,
            end_value_with_drip: ProjectedValue::Unavailable,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        self.end_value_no_drip == ProjectedValue::Unavailable
    }
}

/// Rescaled series for the overlay chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedSeries {
    pub symbol: String,
    pub labels: Vec<String>,
    pub prices: Vec<f64>,
}

impl NormalizedSeries {
    fn from_series(symbol: &str, series: &PriceSeries, principal: f64) -> Self {
        Self {
            symbol: symbol.to_owned(),
            labels: series.labels().map(str::to_owned).collect(),
            prices: normalized_values(series, principal).collect(),
        }
    }
}

/// Full comparison result: one table row per requested symbol, one chart
/// series per symbol that produced a usable, rescalable history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResponse {
    pub comparison_table: Vec<ComparisonRow>,
    pub comparison_chart_data: Vec<NormalizedSeries>,
}

/// Orchestrates the per-symbol comparison pipeline.
///
/// Symbols are processed sequentially in request order with a pacing floor
/// between upstream fetches. One symbol's failure never aborts the batch:
/// it degrades to an unavailable row and the loop moves on.
pub struct ComparisonAggregator {
    history: Arc<dyn HistorySource>,
    pacer: RequestPacer,
    fixed_yield: f64,
}

impl ComparisonAggregator {
    pub fn new(history: Arc<dyn HistorySource>, pacer: RequestPacer, fixed_yield: f64) -> Self {
        Self {
            history,
            pacer,
            fixed_yield,
        }
    }

    /// Public string-input operation: validate, then compare.
    ///
    /// Returns a validation error before any upstream fetch when the symbol
    /// list is empty, the investment does not parse as a decimal number, or
    /// the holding period is not a positive whole number of years.
    pub async fn compare_investment(
        &self,
        symbols: &str,
        investment: &str,
        years: &str,
    ) -> Result<ComparisonResponse, ValidationError> {
        let request = ComparisonRequest::parse(symbols, investment, years)?;
        Ok(self.compare(&request).await)
    }

    pub async fn compare(&self, request: &ComparisonRequest) -> ComparisonResponse {
        let mut comparison_table = Vec::with_capacity(request.symbols.len());
        let mut comparison_chart_data = Vec::new();

        for raw_symbol in &request.symbols {
            let fetched = match Symbol::parse(raw_symbol) {
                Ok(symbol) => {
                    self.pacer.pace().await;
                    self.history.history(&symbol, request.span).await
                }
                Err(error) => Err(SourceError::invalid_request(error.to_string())),
            };

            // Upstream failure, a provider-reported error, or fewer than two
            // usable closes all degrade to the same unavailable row.
            let series = match fetched {
                Ok(series) if series.has_enough_history() => series,
                Ok(_) | Err(_) => {
                    comparison_table
                        .push(ComparisonRow::unavailable(raw_symbol, request.investment));
                    continue;
                }
            };

            let years = request.span.year_count();
            let rate = annual_growth_rate(&series, years);
            let end_no_drip = round_to_cents(project(request.investment, rate, years, 0.0));
            let end_with_drip = round_to_cents(project(
                request.investment,
                rate,
                years,
                self.fixed_yield,
            ));

            comparison_table.push(ComparisonRow::projected(
                raw_symbol,
                request.investment,
                self.fixed_yield,
                end_no_drip,
                end_with_drip,
            ));

            // A zero first close still yields a rate-0 row above, but the
            // series cannot be rescaled, so the chart entry is omitted.
            if series.first_close().is_some_and(|close| close != 0.0) {
                comparison_chart_data.push(NormalizedSeries::from_series(
                    raw_symbol,
                    &series,
                    request.investment,
                ));
            }
        }

        ComparisonResponse {
            comparison_table,
            comparison_chart_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_source::SourceFuture;
    use crate::{PricePoint, ProviderId};
    use std::collections::HashMap;

    struct StubHistory {
        closes_by_symbol: HashMap<String, Vec<f64>>,
    }

    impl StubHistory {
        fn with_closes(entries: &[(&str, &[f64])]) -> Self {
            Self {
                closes_by_symbol: entries
                    .iter()
                    .map(|(symbol, closes)| ((*symbol).to_owned(), closes.to_vec()))
                    .collect(),
            }
        }
    }

    impl HistorySource for StubHistory {
        fn id(&self) -> ProviderId {
            ProviderId::Yahoo
        }

        fn history<'a>(
            &'a self,
            symbol: &'a Symbol,
            _span: HistorySpan,
        ) -> SourceFuture<'a, PriceSeries> {
            Box::pin(async move {
                let closes = self
                    .closes_by_symbol
                    .get(symbol.as_str())
                    .ok_or_else(|| SourceError::unavailable("no data for symbol"))?;
                let points = closes
                    .iter()
                    .enumerate()
                    .map(|(day, close)| PricePoint::new(format!("2014-01-{:02}", day + 1), *close))
                    .collect();
                Ok(PriceSeries::new(symbol.clone(), points))
            })
        }
    }

    fn aggregator(entries: &[(&str, &[f64])]) -> ComparisonAggregator {
        ComparisonAggregator::new(
            Arc::new(StubHistory::with_closes(entries)),
            RequestPacer::disabled(),
            0.02,
        )
    }

    #[test]
    fn parse_rejects_blank_symbol_list() {
        let err = ComparisonRequest::parse("  ", "10000", "10").expect_err("must fail");
        assert!(matches!(err, ValidationError::EmptySymbolList));

        let err = ComparisonRequest::parse(" , ,", "10000", "10").expect_err("must fail");
        assert!(matches!(err, ValidationError::EmptySymbolList));
    }

    #[test]
    fn parse_rejects_bad_investment_and_years() {
        let err = ComparisonRequest::parse("AAPL", "abc", "10").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidInvestment { .. }));

        let err = ComparisonRequest::parse("AAPL", "10000", "0").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidYears { .. }));

        let err = ComparisonRequest::parse("AAPL", "10000", "ten").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidYears { .. }));
    }

    #[test]
    fn parse_normalizes_symbols_preserving_order() {
        let request =
            ComparisonRequest::parse(" msft, aapl ,msft", "2500.50", "3").expect("must parse");
        assert_eq!(request.symbols, vec!["MSFT", "AAPL", "MSFT"]);
        assert_eq!(request.investment, 2500.5);
        assert_eq!(request.span.year_count(), 3);
    }

    #[test]
    fn projected_value_serializes_as_number_or_sentinel() {
        let amount = serde_json::to_value(ProjectedValue::Amount(12_100.0)).expect("serializes");
        assert_eq!(amount, serde_json::json!(12_100.0));

        let unavailable = serde_json::to_value(ProjectedValue::Unavailable).expect("serializes");
        assert_eq!(unavailable, serde_json::json!("N/A"));
    }

    #[tokio::test]
    async fn zero_first_close_keeps_the_row_but_omits_the_chart_entry() {
        let aggregator = aggregator(&[("ZERO", &[0.0, 10.0, 20.0])]);
        let request = ComparisonRequest::parse("ZERO", "10000", "2").expect("valid request");

        let response = aggregator.compare(&request).await;

        assert_eq!(response.comparison_table.len(), 1);
        let row = &response.comparison_table[0];
        assert!(!row.is_unavailable());
        assert_eq!(row.end_value_no_drip, ProjectedValue::Amount(10_000.0));
        assert!(response.comparison_chart_data.is_empty());
    }

    #[tokio::test]
    async fn unparseable_symbol_degrades_to_an_unavailable_row() {
        let aggregator = aggregator(&[("OK", &[10.0, 11.0])]);
        let request = ComparisonRequest::new(
            vec![String::from("BAD$SYM"), String::from("OK")],
            1_000.0,
            HistorySpan::years(1).expect("valid span"),
        )
        .expect("valid request");

        let response = aggregator.compare(&request).await;

        assert_eq!(response.comparison_table.len(), 2);
        assert!(response.comparison_table[0].is_unavailable());
        assert!(!response.comparison_table[1].is_unavailable());
        assert_eq!(response.comparison_chart_data.len(), 1);
    }

    #[tokio::test]
    async fn yield_display_uses_one_decimal_percent() {
        let aggregator = aggregator(&[("KO", &[60.0, 66.0])]);
        let request = ComparisonRequest::parse("KO", "1000", "1").expect("valid request");

        let response = aggregator.compare(&request).await;
        assert_eq!(response.comparison_table[0].annual_yield, "2.0%");
    }
}

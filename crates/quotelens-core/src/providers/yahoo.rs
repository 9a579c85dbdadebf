use std::sync::Arc;

use serde::Deserialize;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::data_source::{HistorySource, SourceError, SourceFuture};
use crate::domain::round_to_cents;
use crate::http_client::{HttpClient, HttpRequest, NoopHttpClient};
use crate::{HistorySpan, PricePoint, PriceSeries, ProviderId, Symbol};

const CHART_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const DAILY_INTERVAL: &str = "1d";

/// Yahoo Finance historical-series adapter.
///
/// Fetches daily closes from the unauthenticated chart endpoint. Entries
/// without a usable close are dropped, never interpolated; a chart-level
/// `error` payload is reported as unavailable data.
#[derive(Clone)]
pub struct YahooHistory {
    http_client: Arc<dyn HttpClient>,
    use_real_api: bool,
}

impl Default for YahooHistory {
    fn default() -> Self {
        Self {
            http_client: Arc::new(NoopHttpClient),
            use_real_api: false,
        }
    }
}

impl YahooHistory {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        let use_real_api = !http_client.is_mock();
        Self {
            http_client,
            use_real_api,
        }
    }

    fn is_real_client(&self) -> bool {
        self.use_real_api
    }

    async fn fetch_real_history(
        &self,
        symbol: &Symbol,
        span: HistorySpan,
    ) -> Result<PriceSeries, SourceError> {
        let request = HttpRequest::get(chart_endpoint(symbol, span))
            .with_header("user-agent", "Mozilla/5.0")
            .with_timeout_ms(10_000);

        let response = self.http_client.execute(request).await.map_err(|error| {
            SourceError::unavailable(format!("yahoo transport error: {}", error.message()))
        })?;

        if !response.is_success() {
            return Err(SourceError::unavailable(format!(
                "yahoo returned status {}",
                response.status
            )));
        }

        parse_chart_response(symbol, &response.body)
    }

    /// Deterministic offline series used with mock transports.
    fn fake_history(&self, symbol: &Symbol, span: HistorySpan) -> PriceSeries {
        let seed = symbol_seed(symbol);
        let base = 40.0 + (seed % 600) as f64 / 10.0;
        let count = span.year_count() as usize * 12 + 1;
        let now = OffsetDateTime::now_utc();

        let points = (0..count)
            .map(|index| {
                let age_days = 30 * (count - 1 - index) as i64;
                let ts = now - time::Duration::days(age_days);
                let close = round_to_cents(base * (1.0 + index as f64 * 0.01));
                PricePoint::new(format_date_label(ts), close)
            })
            .collect();

        PriceSeries::new(symbol.clone(), points)
    }
}

impl HistorySource for YahooHistory {
    fn id(&self) -> ProviderId {
        ProviderId::Yahoo
    }

    fn history<'a>(
        &'a self,
        symbol: &'a Symbol,
        span: HistorySpan,
    ) -> SourceFuture<'a, PriceSeries> {
        Box::pin(async move {
            if self.is_real_client() {
                self.fetch_real_history(symbol, span).await
            } else {
                Ok(self.fake_history(symbol, span))
            }
        })
    }
}

fn chart_endpoint(symbol: &Symbol, span: HistorySpan) -> String {
    format!(
        "{}/{}?range={}&interval={}",
        CHART_BASE_URL,
        urlencoding::encode(symbol.as_str()),
        span.as_range_param(),
        DAILY_INTERVAL
    )
}

fn parse_chart_response(symbol: &Symbol, body: &str) -> Result<PriceSeries, SourceError> {
    let chart_response: YahooChartResponse = serde_json::from_str(body)
        .map_err(|error| SourceError::internal(format!("failed to parse yahoo chart: {error}")))?;

    if let Some(error) = &chart_response.chart.error {
        if !error.is_null() {
            return Err(SourceError::unavailable(format!(
                "yahoo chart error: {error}"
            )));
        }
    }

    let result = chart_response
        .chart
        .result
        .as_deref()
        .and_then(<[YahooChartResult]>::first)
        .ok_or_else(|| SourceError::unavailable("no chart data in yahoo response"))?;

    let timestamps = result.timestamp.as_deref().unwrap_or_default();
    let closes = result
        .indicators
        .quote
        .first()
        .map(|block| block.close.as_slice())
        .unwrap_or_default();

    let points = timestamps
        .iter()
        .zip(closes)
        .filter_map(|(&ts, close)| {
            let close = (*close).filter(|value| value.is_finite())?;
            let when = OffsetDateTime::from_unix_timestamp(ts).ok()?;
            Some(PricePoint::new(
                format_date_label(when),
                round_to_cents(close),
            ))
        })
        .collect();

    Ok(PriceSeries::new(symbol.clone(), points))
}

fn format_date_label(when: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day]");
    when.format(&format)
        .unwrap_or_else(|_| when.date().to_string())
}

fn symbol_seed(symbol: &Symbol) -> u64 {
    symbol.as_str().bytes().fold(0_u64, |acc, byte| {
        acc.wrapping_mul(33).wrapping_add(u64::from(byte))
    })
}

#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChart,
}

#[derive(Debug, Deserialize)]
struct YahooChart {
    #[serde(default)]
    result: Option<Vec<YahooChartResult>>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct YahooChartResult {
    #[serde(default)]
    timestamp: Option<Vec<i64>>,
    #[serde(default)]
    indicators: YahooIndicators,
}

#[derive(Debug, Default, Deserialize)]
struct YahooIndicators {
    #[serde(default)]
    quote: Vec<YahooQuoteBlock>,
}

#[derive(Debug, Deserialize)]
struct YahooQuoteBlock {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

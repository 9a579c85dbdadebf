//! Behavior-driven tests for provider adapters.
//!
//! These tests verify HOW the system handles provider payloads: dropped
//! invalid entries, provider-declared errors, tolerant quote parsing, and
//! transport failures surfacing as unavailable data.

use quotelens_core::{
    data_source::{HistorySource, QuoteSource},
    http_client::{HttpClient, HttpError, HttpRequest, HttpResponse},
    ComparisonAggregator, FinnhubQuotes, HistorySpan, RequestPacer, SourceErrorKind, Symbol,
    YahooHistory,
};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

/// Canned transport that reports itself as real so adapters exercise their
/// live request path.
struct CannedHttpClient {
    response: Result<HttpResponse, HttpError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl CannedHttpClient {
    fn with_body(body: &str) -> Self {
        Self {
            response: Ok(HttpResponse::ok_json(body)),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn with_status(status: u16) -> Self {
        Self {
            response: Ok(HttpResponse {
                status,
                body: String::new(),
            }),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            response: Err(HttpError::new("connection refused")),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn recorded_urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .iter()
            .map(|request| request.url.clone())
            .collect()
    }
}

impl HttpClient for CannedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}

fn symbol(value: &str) -> Symbol {
    Symbol::parse(value).expect("valid symbol")
}

fn one_year() -> HistorySpan {
    HistorySpan::years(1).expect("valid span")
}

// =============================================================================
// History Provider: Payload Handling
// =============================================================================

#[tokio::test]
async fn when_yahoo_reports_missing_closes_they_are_dropped_not_interpolated() {
    // Given: a chart payload with a null close in the middle
    let body = r#"{
        "chart": {
            "result": [{
                "timestamp": [1704067200, 1704153600, 1704240000, 1704326400],
                "indicators": { "quote": [{ "close": [188.5, null, 190.25, 191.0] }] }
            }],
            "error": null
        }
    }"#;
    let adapter = YahooHistory::with_http_client(Arc::new(CannedHttpClient::with_body(body)));

    // When: the history is fetched
    let series = adapter
        .history(&symbol("AAPL"), one_year())
        .await
        .expect("history should parse");

    // Then: only the three observed closes remain, in order
    assert_eq!(series.len(), 3);
    assert_eq!(series.closes().collect::<Vec<_>>(), vec![188.5, 190.25, 191.0]);
    assert_eq!(
        series.labels().collect::<Vec<_>>(),
        vec!["2024-01-01", "2024-01-03", "2024-01-04"]
    );
}

#[tokio::test]
async fn when_yahoo_declares_an_error_the_series_is_unavailable() {
    // Given: a chart payload carrying a provider-level error object
    let body = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;
    let adapter = YahooHistory::with_http_client(Arc::new(CannedHttpClient::with_body(body)));

    // When: the history is fetched
    let error = adapter
        .history(&symbol("ZZZ"), one_year())
        .await
        .expect_err("must fail");

    // Then: the error is classified as unavailable data, not a crash
    assert_eq!(error.kind(), SourceErrorKind::Unavailable);
}

#[tokio::test]
async fn when_the_transport_fails_the_series_is_unavailable() {
    let adapter = YahooHistory::with_http_client(Arc::new(CannedHttpClient::failing()));

    let error = adapter
        .history(&symbol("MSFT"), one_year())
        .await
        .expect_err("must fail");

    assert_eq!(error.kind(), SourceErrorKind::Unavailable);
}

#[tokio::test]
async fn history_requests_encode_span_and_daily_interval() {
    let client = Arc::new(CannedHttpClient::with_body(
        r#"{"chart":{"result":[{"timestamp":[],"indicators":{"quote":[{"close":[]}]}}],"error":null}}"#,
    ));
    let adapter = YahooHistory::with_http_client(client.clone());
    let span = HistorySpan::years(5).expect("valid span");

    let series = adapter
        .history(&symbol("TSLA"), span)
        .await
        .expect("empty series still parses");
    assert!(series.is_empty());

    let urls = client.recorded_urls();
    assert_eq!(urls.len(), 1, "exactly one upstream call, no retries");
    assert!(urls[0].contains("range=5y"));
    assert!(urls[0].contains("interval=1d"));
}

// =============================================================================
// Quote Provider: Tolerant Parsing
// =============================================================================

#[tokio::test]
async fn when_finnhub_omits_fields_the_observation_keeps_what_is_numeric() {
    // Given: a quote payload with a string where a number belongs
    let body = r#"{"c": 61.25, "o": 60.9, "h": "sixty-two", "pc": 60.0}"#;
    let adapter =
        FinnhubQuotes::with_http_client(Arc::new(CannedHttpClient::with_body(body)), "test-key");

    // When: the quote is fetched
    let observation = adapter
        .quote(&symbol("KO"))
        .await
        .expect("quote should parse");

    // Then: numeric fields survive, the rest are absent
    assert_eq!(observation.current, Some(61.25));
    assert_eq!(observation.open, Some(60.9));
    assert_eq!(observation.high, None);
    assert_eq!(observation.low, None);
    assert_eq!(observation.prev_close, Some(60.0));
}

#[tokio::test]
async fn when_finnhub_rate_limits_the_error_says_so() {
    let adapter =
        FinnhubQuotes::with_http_client(Arc::new(CannedHttpClient::with_status(429)), "test-key");

    let error = adapter
        .quote(&symbol("GS"))
        .await
        .expect_err("must fail");

    assert_eq!(error.kind(), SourceErrorKind::RateLimited);
}

// =============================================================================
// Offline Mode
// =============================================================================

#[tokio::test]
async fn offline_providers_feed_a_full_comparison_without_any_network() {
    // Given: an aggregator over the deterministic offline history provider
    let aggregator = ComparisonAggregator::new(
        Arc::new(YahooHistory::default()),
        RequestPacer::disabled(),
        0.02,
    );

    // When: a two-symbol comparison runs
    let response = aggregator
        .compare_investment("AAPL,MSFT", "10000", "3")
        .await
        .expect("valid inputs");

    // Then: both symbols produce projected rows and chart series
    assert_eq!(response.comparison_table.len(), 2);
    assert_eq!(response.comparison_chart_data.len(), 2);
    assert!(response.comparison_table.iter().all(|row| !row.is_unavailable()));
}

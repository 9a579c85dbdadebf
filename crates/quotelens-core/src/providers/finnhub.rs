use std::sync::Arc;

use serde_json::Value;

use crate::data_source::{QuoteSource, SourceError, SourceFuture};
use crate::http_client::{HttpClient, HttpRequest, NoopHttpClient};
use crate::{ProviderId, QuoteObservation, Symbol};

const QUOTE_BASE_URL: &str = "https://finnhub.io/api/v1";

/// Finnhub quote adapter.
///
/// Serves one current snapshot per symbol. Provider fields that are absent
/// or non-numeric surface as `None`; the quote-board layer decides what an
/// unusable snapshot looks like to the caller.
#[derive(Clone)]
pub struct FinnhubQuotes {
    http_client: Arc<dyn HttpClient>,
    api_key: String,
    use_real_api: bool,
}

impl Default for FinnhubQuotes {
    fn default() -> Self {
        Self {
            http_client: Arc::new(NoopHttpClient),
            api_key: std::env::var("QUOTELENS_FINNHUB_API_KEY")
                .unwrap_or_else(|_| String::from("demo")),
            use_real_api: false,
        }
    }
}

impl FinnhubQuotes {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>, api_key: impl Into<String>) -> Self {
        let use_real_api = !http_client.is_mock();
        Self {
            http_client,
            api_key: api_key.into(),
            use_real_api,
        }
    }

    fn is_real_client(&self) -> bool {
        self.use_real_api
    }

    async fn fetch_real_quote(&self, symbol: &Symbol) -> Result<QuoteObservation, SourceError> {
        let endpoint = quote_endpoint(symbol, &self.api_key);
        let request = HttpRequest::get(endpoint).with_timeout_ms(10_000);

        let response = self.http_client.execute(request).await.map_err(|error| {
            SourceError::unavailable(format!("finnhub transport error: {}", error.message()))
        })?;

        if response.status == 429 {
            return Err(SourceError::rate_limited("finnhub rate limit exceeded"));
        }

        if !response.is_success() {
            return Err(SourceError::unavailable(format!(
                "finnhub returned status {}",
                response.status
            )));
        }

        parse_quote_response(symbol, &response.body)
    }

    /// Deterministic offline snapshot used with mock transports.
    fn fake_quote(&self, symbol: &Symbol) -> QuoteObservation {
        let seed = symbol_seed(symbol);
        let price = 90.0 + (seed % 500) as f64 / 10.0;
        QuoteObservation {
            symbol: symbol.clone(),
            open: Some(price - 0.6),
            high: Some(price + 1.2),
            low: Some(price - 1.1),
            current: Some(price),
            prev_close: Some(price - 0.4),
        }
    }
}

impl QuoteSource for FinnhubQuotes {
    fn id(&self) -> ProviderId {
        ProviderId::Finnhub
    }

    fn quote<'a>(&'a self, symbol: &'a Symbol) -> SourceFuture<'a, QuoteObservation> {
        Box::pin(async move {
            if self.is_real_client() {
                self.fetch_real_quote(symbol).await
            } else {
                Ok(self.fake_quote(symbol))
            }
        })
    }
}

fn quote_endpoint(symbol: &Symbol, api_key: &str) -> String {
    format!(
        "{}/quote?symbol={}&token={}",
        QUOTE_BASE_URL,
        urlencoding::encode(symbol.as_str()),
        urlencoding::encode(api_key)
    )
}

fn parse_quote_response(symbol: &Symbol, body: &str) -> Result<QuoteObservation, SourceError> {
    let payload: Value = serde_json::from_str(body)
        .map_err(|error| SourceError::internal(format!("failed to parse finnhub quote: {error}")))?;

    Ok(QuoteObservation {
        symbol: symbol.clone(),
        open: number_field(&payload, "o"),
        high: number_field(&payload, "h"),
        low: number_field(&payload, "l"),
        current: number_field(&payload, "c"),
        prev_close: number_field(&payload, "pc"),
    })
}

/// Returns the field only when the provider reported an actual number.
fn number_field(payload: &Value, key: &str) -> Option<f64> {
    payload.get(key).and_then(Value::as_f64)
}

fn symbol_seed(symbol: &Symbol) -> u64 {
    symbol.as_str().bytes().fold(0_u64, |acc, byte| {
        acc.wrapping_mul(33).wrapping_add(u64::from(byte))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::{HttpError, HttpResponse};
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Mutex;

    struct RecordingHttpClient {
        response: Result<HttpResponse, HttpError>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl RecordingHttpClient {
        fn with_body(body: &str) -> Self {
            Self {
                response: Ok(HttpResponse::ok_json(body)),
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

    impl HttpClient for RecordingHttpClient {
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

    #[test]
    fn parses_numeric_fields_and_skips_non_numeric_ones() {
        let body = r#"{"c": 196.45, "o": 194.2, "h": 197.0, "l": "n/a", "pc": null}"#;
        let observation = parse_quote_response(&symbol("AAPL"), body).expect("parse succeeds");

        assert_eq!(observation.current, Some(196.45));
        assert_eq!(observation.open, Some(194.2));
        assert_eq!(observation.high, Some(197.0));
        assert_eq!(observation.low, None);
        assert_eq!(observation.prev_close, None);
    }

    #[test]
    fn error_payload_yields_empty_observation() {
        let body = r#"{"error": "API limit reached"}"#;
        let observation = parse_quote_response(&symbol("AAPL"), body).expect("parse succeeds");

        assert_eq!(observation.current, None);
        assert_eq!(observation.prev_close, None);
    }

    #[tokio::test]
    async fn real_request_appends_symbol_and_token() {
        let client = Arc::new(RecordingHttpClient::with_body(r#"{"c": 100.0, "pc": 99.0}"#));
        let adapter = FinnhubQuotes::with_http_client(client.clone(), "secret-key");

        let observation = adapter
            .quote(&symbol("TSLA"))
            .await
            .expect("quote should succeed");
        assert_eq!(observation.current, Some(100.0));

        let urls = client.recorded_urls();
        assert_eq!(urls.len(), 1);
        assert!(urls[0].contains("/quote?symbol=TSLA"));
        assert!(urls[0].contains("token=secret-key"));
    }

    #[tokio::test]
    async fn mock_transport_serves_deterministic_snapshot() {
        let adapter = FinnhubQuotes::default();

        let first = adapter.quote(&symbol("JPM")).await.expect("fake quote");
        let second = adapter.quote(&symbol("JPM")).await.expect("fake quote");

        assert_eq!(first, second);
        assert!(first.current.is_some());
    }
}

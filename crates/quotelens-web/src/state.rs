use std::sync::Arc;

use quotelens_core::{
    ComparisonAggregator, FinnhubQuotes, HistorySource, HttpClient, QuoteBoard, QuoteSource,
    QuotelensConfig, ReqwestHttpClient, RequestPacer, Symbol, ValidationError, YahooHistory,
};

/// Shared per-process services behind the HTTP handlers.
pub struct AppState {
    pub board: QuoteBoard,
    pub aggregator: ComparisonAggregator,
    pub history: Arc<dyn HistorySource>,
    pub board_symbols: Vec<Symbol>,
}

impl AppState {
    /// Wire providers and services from explicit configuration.
    ///
    /// With `offline` set the providers serve deterministic data and pacing
    /// is disabled; useful for local development and tests.
    pub fn from_config(config: &QuotelensConfig, offline: bool) -> Result<Self, ValidationError> {
        let pacer = if offline {
            RequestPacer::disabled()
        } else {
            config.pacer()
        };

        let (quotes, history): (Arc<dyn QuoteSource>, Arc<dyn HistorySource>) = if offline {
            (
                Arc::new(FinnhubQuotes::default()),
                Arc::new(YahooHistory::default()),
            )
        } else {
            let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());
            (
                Arc::new(FinnhubQuotes::with_http_client(
                    http.clone(),
                    config.finnhub_api_key.as_str(),
                )),
                Arc::new(YahooHistory::with_http_client(http)),
            )
        };

        let board_symbols = config
            .board_symbols
            .iter()
            .map(|raw| Symbol::parse(raw))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            board: QuoteBoard::new(quotes, pacer.clone()),
            aggregator: ComparisonAggregator::new(history.clone(), pacer, config.fixed_yield),
            history,
            board_symbols,
        })
    }
}

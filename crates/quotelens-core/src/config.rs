use std::time::Duration;

use crate::pacing::RequestPacer;

/// Approximated annual dividend-reinvestment yield used when no reinvestment
/// data is available. Display-level constant, not a dividend simulation.
pub const DEFAULT_FIXED_YIELD: f64 = 0.02;

/// Explicit runtime configuration for the quotelens services.
///
/// Everything the original deployment kept as process-wide globals lives
/// here so surfaces can be built against mock providers in isolation.
#[derive(Debug, Clone, PartialEq)]
pub struct QuotelensConfig {
    /// Finnhub API key for the quote provider.
    pub finnhub_api_key: String,
    /// Symbols shown on the quote board when none are requested.
    pub board_symbols: Vec<String>,
    /// Flat annual yield bonus applied by the with-reinvestment projection.
    pub fixed_yield: f64,
    /// Minimum interval between consecutive upstream requests.
    pub pacing_floor: Duration,
}

impl Default for QuotelensConfig {
    fn default() -> Self {
        Self {
            finnhub_api_key: String::from("demo"),
            board_symbols: default_board_symbols(),
            fixed_yield: DEFAULT_FIXED_YIELD,
            pacing_floor: RequestPacer::DEFAULT_MIN_INTERVAL,
        }
    }
}

impl QuotelensConfig {
    /// Configuration with the API key taken from `QUOTELENS_FINNHUB_API_KEY`
    /// when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = std::env::var("QUOTELENS_FINNHUB_API_KEY") {
            if !key.trim().is_empty() {
                config.finnhub_api_key = key;
            }
        }
        config
    }

    pub fn pacer(&self) -> RequestPacer {
        RequestPacer::with_min_interval(self.pacing_floor)
    }
}

fn default_board_symbols() -> Vec<String> {
    [
        "GOOGL", "IBM", "MSFT", "AAPL", "AMZN", "TSLA", "NVDA", "META", "NFLX", "INTC", "SBUX",
        "KO", "PEP", "NKE", "DIS", "V", "JPM", "GS",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}

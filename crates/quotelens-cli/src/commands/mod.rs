mod chart;
mod compare;
mod quote;

use std::sync::Arc;
use std::time::Instant;

use quotelens_core::{
    ComparisonAggregator, Envelope, EnvelopeError, EnvelopeMeta, FinnhubQuotes, HistorySource,
    HttpClient, ProviderId, QuoteBoard, QuoteSource, QuotelensConfig, ReqwestHttpClient,
    RequestPacer, YahooHistory,
};
use serde_json::Value;
use uuid::Uuid;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
    pub source: ProviderId,
}

impl CommandResult {
    pub fn ok(data: Value, source: ProviderId) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
            source,
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_errors(mut self, errors: Vec<EnvelopeError>) -> Self {
        self.errors.extend(errors);
        self
    }
}

/// Provider-backed services shared by the commands.
pub struct Services {
    pub board: QuoteBoard,
    pub aggregator: ComparisonAggregator,
    pub history: Arc<dyn HistorySource>,
}

impl Services {
    fn build(config: &QuotelensConfig, offline: bool) -> Self {
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

        Self {
            board: QuoteBoard::new(quotes, pacer.clone()),
            aggregator: ComparisonAggregator::new(history.clone(), pacer, config.fixed_yield),
            history,
        }
    }
}

pub async fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let config = QuotelensConfig::from_env();
    let services = Services::build(&config, cli.offline);

    let started = Instant::now();
    let command_result = match &cli.command {
        Command::Quote(args) => quote::run(args, &services, &config).await?,
        Command::Chart(args) => chart::run(args, &services).await?,
        Command::Compare(args) => compare::run(args, &services).await?,
    };
    let latency_ms = started.elapsed().as_millis() as u64;

    let CommandResult {
        data,
        warnings,
        errors,
        source,
    } = command_result;

    let mut meta = EnvelopeMeta::new(Uuid::new_v4().to_string(), source, latency_ms);

    if cli.offline {
        meta.push_warning("offline mode serves deterministic data, not live market prices");
    }

    for warning in warnings {
        meta.push_warning(warning);
    }

    Envelope::with_errors(meta, data, errors).map_err(CliError::from)
}

use serde::Serialize;

use quotelens_core::{EnvelopeError, HistorySource, HistorySpan, PriceSeries, ProviderId, Symbol};

use crate::cli::ChartArgs;
use crate::error::CliError;

use super::{CommandResult, Services};

#[derive(Debug, Serialize)]
struct ChartResponseData {
    symbol: String,
    labels: Vec<String>,
    prices: Vec<f64>,
}

impl ChartResponseData {
    fn from_series(series: &PriceSeries) -> Self {
        Self {
            symbol: series.symbol.as_str().to_owned(),
            labels: series.labels().map(str::to_owned).collect(),
            prices: series.closes().collect(),
        }
    }

    fn empty(symbol: &Symbol) -> Self {
        Self {
            symbol: symbol.as_str().to_owned(),
            labels: Vec::new(),
            prices: Vec::new(),
        }
    }
}

pub async fn run(args: &ChartArgs, services: &Services) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let span = HistorySpan::years(args.years)?;

    match services.history.history(&symbol, span).await {
        Ok(series) => {
            let data = serde_json::to_value(ChartResponseData::from_series(&series))?;
            Ok(CommandResult::ok(data, ProviderId::Yahoo))
        }
        Err(failure) => {
            let data = serde_json::to_value(ChartResponseData::empty(&symbol))?;
            let error = EnvelopeError::new(failure.code(), failure.message())
                .map_err(CliError::from)?
                .with_source(ProviderId::Yahoo);
            Ok(CommandResult::ok(data, ProviderId::Yahoo).with_errors(vec![error]))
        }
    }
}

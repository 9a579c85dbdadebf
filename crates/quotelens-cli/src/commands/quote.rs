use serde::Serialize;

use quotelens_core::{ProviderId, QuoteRow, QuotelensConfig, Symbol};

use crate::cli::QuoteArgs;
use crate::error::CliError;

use super::{CommandResult, Services};

#[derive(Debug, Serialize)]
struct QuoteResponseData {
    quotes: Vec<QuoteRow>,
}

pub async fn run(
    args: &QuoteArgs,
    services: &Services,
    config: &QuotelensConfig,
) -> Result<CommandResult, CliError> {
    let requested: &[String] = if args.symbols.is_empty() {
        &config.board_symbols
    } else {
        &args.symbols
    };

    let symbols = requested
        .iter()
        .map(|raw| Symbol::parse(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let quotes = services.board.snapshot(&symbols).await;

    let failed: Vec<String> = quotes
        .iter()
        .filter(|row| row.close.is_none())
        .map(|row| row.symbol.clone())
        .collect();

    let mut result = CommandResult::ok(
        serde_json::to_value(QuoteResponseData { quotes })?,
        ProviderId::Finnhub,
    );
    if !failed.is_empty() {
        result = result.with_warning(format!(
            "no quote data for {} symbol(s): {}",
            failed.len(),
            failed.join(",")
        ));
    }

    Ok(result)
}

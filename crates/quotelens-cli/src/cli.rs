//! CLI argument definitions for quotelens.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `quote` | Fetch the current-quote board |
//! | `chart` | Fetch historical daily closes for one symbol |
//! | `compare` | Compare hypothetical investment outcomes across symbols |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--offline` | `false` | Serve deterministic offline data, no network |

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Equity quote board and historical investment comparison CLI.
///
/// Fetches current quotes from Finnhub and daily history from the Yahoo
/// Finance chart endpoint, and projects hypothetical investment outcomes
/// across symbols with unified JSON output.
#[derive(Debug, Parser)]
#[command(
    name = "quotelens",
    author,
    version,
    about = "Equity quote board and investment comparison CLI"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Serve deterministic offline data instead of calling providers.
    ///
    /// Useful for demos and CI runs without API keys; pacing is disabled.
    #[arg(long, global = true, default_value_t = false)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table format for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the current-quote board.
    ///
    /// Without arguments the configured watchlist is used. Every row of one
    /// run carries the same batch timestamp.
    ///
    /// # Examples
    ///
    ///   quotelens quote
    ///   quotelens quote AAPL MSFT --pretty
    Quote(QuoteArgs),

    /// Fetch historical daily closes for one symbol.
    ///
    /// # Examples
    ///
    ///   quotelens chart AAPL --years 1
    ///   quotelens chart NVDA --years 10 --pretty
    Chart(ChartArgs),

    /// Compare hypothetical investment outcomes across symbols.
    ///
    /// Projects the ending value of a lump-sum investment per symbol, with
    /// and without an approximated dividend-reinvestment yield, and emits
    /// normalized series for a comparison chart.
    ///
    /// # Examples
    ///
    ///   quotelens compare AAPL,MSFT,KO --investment 10000 --years 10
    Compare(CompareArgs),
}

/// Arguments for the `quote` command.
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Market symbols to quote; defaults to the configured watchlist.
    #[arg(num_args = 0..)]
    pub symbols: Vec<String>,
}

/// Arguments for the `chart` command.
#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Market symbol to fetch history for.
    pub symbol: String,

    /// Lookback span in whole years.
    #[arg(long, default_value_t = 1)]
    pub years: u32,
}

/// Arguments for the `compare` command.
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Comma-separated symbol list, e.g. "AAPL,MSFT,KO".
    pub symbols: String,

    /// Initial investment amount.
    #[arg(long, default_value = "10000")]
    pub investment: String,

    /// Holding period in whole years.
    #[arg(long, default_value = "10")]
    pub years: String,
}

//! Provider adapters.
//!
//! `FinnhubQuotes` serves current quote snapshots, `YahooHistory` serves
//! daily historical closes. Both run against a real transport or fall back
//! to deterministic offline payloads when the transport is a mock.

mod finnhub;
mod yahoo;

pub use finnhub::FinnhubQuotes;
pub use yahoo::YahooHistory;

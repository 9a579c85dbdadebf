//! Core contracts for quotelens.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - Provider adapters for quote and historical-series data
//! - The historical return comparison engine
//! - Response envelope and structured errors

pub mod board;
pub mod compare;
pub mod config;
pub mod data_source;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod http_client;
pub mod pacing;
pub mod providers;
pub mod source;

pub use board::QuoteBoard;
pub use compare::{
    ComparisonAggregator, ComparisonRequest, ComparisonResponse, ComparisonRow, NormalizedSeries,
    ProjectedValue,
};
pub use compare::{annual_growth_rate, normalized_values, project};
pub use config::{QuotelensConfig, DEFAULT_FIXED_YIELD};
pub use data_source::{HistorySource, QuoteSource, SourceError, SourceErrorKind};
pub use domain::{
    round_to_cents, HistorySpan, PricePoint, PriceSeries, QuoteObservation, QuoteRow, Symbol,
    MIN_SERIES_POINTS,
};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};
pub use error::{CoreError, ValidationError};
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient};
pub use pacing::RequestPacer;
pub use providers::{FinnhubQuotes, YahooHistory};
pub use source::ProviderId;

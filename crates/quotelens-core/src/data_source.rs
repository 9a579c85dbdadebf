use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{HistorySpan, PriceSeries, QuoteObservation, Symbol};

/// Adapter-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    Unavailable,
    RateLimited,
    InvalidRequest,
    Internal,
}

/// Structured source error surfaced by provider adapters.
///
/// Upstream failures are isolated per symbol by the callers; an error here
/// never aborts a whole batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
    retryable: bool,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::RateLimited,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::RateLimited => "source.rate_limited",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::Internal => "source.internal",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

pub type SourceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, SourceError>> + Send + 'a>>;

/// Quote provider contract: one current snapshot per symbol.
pub trait QuoteSource: Send + Sync {
    fn id(&self) -> crate::ProviderId;

    fn quote<'a>(&'a self, symbol: &'a Symbol) -> SourceFuture<'a, QuoteObservation>;
}

/// Historical-series provider contract: daily closes over a span of whole
/// years. Implementations drop entries without a usable close; a present
/// provider-level error field is reported as `Unavailable`.
pub trait HistorySource: Send + Sync {
    fn id(&self) -> crate::ProviderId;

    fn history<'a>(&'a self, symbol: &'a Symbol, span: HistorySpan)
        -> SourceFuture<'a, PriceSeries>;
}

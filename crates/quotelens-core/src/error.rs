use thiserror::Error;

/// Validation and contract errors exposed by `quotelens-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("at least one stock symbol must be provided")]
    EmptySymbolList,
    #[error("invalid investment amount '{value}', expected a decimal number")]
    InvalidInvestment { value: String },
    #[error("invalid holding period '{value}', expected a positive whole number of years")]
    InvalidYears { value: String },

    #[error("invalid source '{value}', expected one of finnhub, yahoo")]
    InvalidSource { value: String },

    #[error("history span must cover at least one year")]
    EmptySpan,

    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

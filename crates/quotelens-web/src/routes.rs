//! JSON API routes.
//!
//! - `GET /health` — liveness probe
//! - `GET /api/quotes` — current-quote board for the configured watchlist
//! - `GET /api/chart-data?symbol=&years=` — historical daily closes
//! - `GET /api/calculate_comparison?symbols=&investment=&years=` —
//!   investment comparison table plus normalized chart series

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use quotelens_core::{
    ComparisonResponse, HistorySource, HistorySpan, PriceSeries, QuoteRow, Symbol, ValidationError,
};

use crate::error::{bad_request, upstream_failure, ApiError};
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/quotes", get(quotes))
        .route("/api/chart-data", get(chart_data))
        .route("/api/calculate_comparison", get(calculate_comparison))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

async fn quotes(State(state): State<Arc<AppState>>) -> Json<Vec<QuoteRow>> {
    Json(state.board.snapshot(&state.board_symbols).await)
}

#[derive(Debug, Deserialize)]
struct ChartParams {
    #[serde(default = "default_chart_symbol")]
    symbol: String,
    #[serde(default = "default_chart_years")]
    years: String,
}

fn default_chart_symbol() -> String {
    String::from("AAPL")
}

fn default_chart_years() -> String {
    String::from("1")
}

#[derive(Debug, Serialize)]
struct ChartResponse {
    symbol: String,
    labels: Vec<String>,
    prices: Vec<f64>,
}

impl ChartResponse {
    fn from_series(series: &PriceSeries) -> Self {
        Self {
            symbol: series.symbol.as_str().to_owned(),
            labels: series.labels().map(str::to_owned).collect(),
            prices: series.closes().collect(),
        }
    }
}

async fn chart_data(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChartParams>,
) -> Result<Json<ChartResponse>, ApiError> {
    let symbol = Symbol::parse(&params.symbol).map_err(|error| bad_request(&error))?;
    let years: u32 = params.years.trim().parse().map_err(|_| {
        bad_request(&ValidationError::InvalidYears {
            value: params.years.clone(),
        })
    })?;
    let span = HistorySpan::years(years).map_err(|error| bad_request(&error))?;

    let series = state
        .history
        .history(&symbol, span)
        .await
        .map_err(|error| upstream_failure(&error))?;

    Ok(Json(ChartResponse::from_series(&series)))
}

#[derive(Debug, Deserialize)]
struct ComparisonParams {
    #[serde(default)]
    symbols: String,
    #[serde(default = "default_investment")]
    investment: String,
    #[serde(default = "default_comparison_years")]
    years: String,
}

fn default_investment() -> String {
    String::from("10000")
}

fn default_comparison_years() -> String {
    String::from("10")
}

async fn calculate_comparison(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ComparisonParams>,
) -> Result<Json<ComparisonResponse>, ApiError> {
    let response = state
        .aggregator
        .compare_investment(&params.symbols, &params.investment, &params.years)
        .await
        .map_err(|error| bad_request(&error))?;

    Ok(Json(response))
}

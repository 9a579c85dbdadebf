//! Historical return comparison engine.
//!
//! Given per-symbol daily closing series, an initial investment, and a
//! holding period, derives an endpoint-anchored compound annual growth rate,
//! projects ending values with and without a flat dividend-reinvestment
//! yield bonus, and rescales each series so symbols of different price
//! levels overlay on one chart.

mod aggregator;
mod growth;
mod normalize;
mod projection;

pub use aggregator::{
    ComparisonAggregator, ComparisonRequest, ComparisonResponse, ComparisonRow, NormalizedSeries,
    ProjectedValue,
};
pub use growth::annual_growth_rate;
pub use normalize::normalized_values;
pub use projection::project;

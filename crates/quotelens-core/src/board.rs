use std::sync::Arc;

use time::macros::format_description;
use time::OffsetDateTime;

use crate::data_source::QuoteSource;
use crate::pacing::RequestPacer;
use crate::{QuoteRow, Symbol};

/// Current-quote board over a fixed symbol list.
///
/// Every row in one snapshot carries the same timestamp label, captured
/// before the first fetch, so a rendered board never mixes fetch times.
/// A failed provider call degrades to an empty row for that symbol; the
/// rest of the batch proceeds.
pub struct QuoteBoard {
    source: Arc<dyn QuoteSource>,
    pacer: RequestPacer,
}

impl QuoteBoard {
    pub fn new(source: Arc<dyn QuoteSource>, pacer: RequestPacer) -> Self {
        Self { source, pacer }
    }

    pub async fn snapshot(&self, symbols: &[Symbol]) -> Vec<QuoteRow> {
        let batch_label = batch_time_label(OffsetDateTime::now_utc());
        let mut rows = Vec::with_capacity(symbols.len());

        for symbol in symbols {
            self.pacer.pace().await;
            let row = match self.source.quote(symbol).await {
                Ok(observation) => QuoteRow::from_observation(observation, &batch_label),
                Err(_) => QuoteRow::unavailable(symbol, &batch_label),
            };
            rows.push(row);
        }

        rows
    }
}

/// 12-hour clock label shared by every row of one snapshot.
fn batch_time_label(when: OffsetDateTime) -> String {
    let format = format_description!("[hour repr:12]:[minute]:[second] [period case:upper]");
    when.format(&format)
        .unwrap_or_else(|_| when.time().to_string())
}

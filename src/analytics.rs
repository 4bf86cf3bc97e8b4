use crate::catalog::{ClickSource, FixtureCatalog};
use crate::errors::AggregationError;
use crate::models::{AnalyticsResult, ProductClickStat, TimeRange};
use chrono::Utc;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::watch;
use tracing::debug;

/// Aggregates per-product WhatsApp clicks over a time range and publishes
/// every state transition (loading, completed, failed) as a whole
/// [`AnalyticsResult`] on a watch channel.
///
/// Each run claims a monotonic ticket; a run that is no longer the newest
/// when it resolves returns its record to its caller but leaves the channel
/// untouched, so a slow stale response cannot overwrite a fresher one.
pub struct StatsAggregator {
    source: Arc<dyn ClickSource>,
    tx: watch::Sender<AnalyticsResult>,
    seq: AtomicU64,
    delay: Duration,
}

impl StatsAggregator {
    pub fn new(delay: Duration) -> Self {
        Self::with_source(delay, Arc::new(FixtureCatalog))
    }

    pub fn with_source(delay: Duration, source: Arc<dyn ClickSource>) -> Self {
        let (tx, _rx) = watch::channel(AnalyticsResult::empty());
        Self {
            source,
            tx,
            seq: AtomicU64::new(0),
            delay,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<AnalyticsResult> {
        self.tx.subscribe()
    }

    /// Latest published record, without triggering a run.
    pub fn snapshot(&self) -> AnalyticsResult {
        self.tx.borrow().clone()
    }

    /// Run a full aggregation for `range`: publish a loading record, suspend
    /// for the simulated fetch delay, then publish the outcome.
    pub async fn compute(&self, range: TimeRange) -> AnalyticsResult {
        let ticket = self.begin();
        tokio::time::sleep(self.delay).await;
        self.finish(ticket, range)
    }

    fn begin(&self) -> u64 {
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let loading = {
            let prev = self.tx.borrow();
            AnalyticsResult {
                is_loading: true,
                error: None,
                generated_at: Utc::now(),
                ..prev.clone()
            }
        };
        self.tx.send_replace(loading);
        ticket
    }

    fn finish(&self, ticket: u64, range: TimeRange) -> AnalyticsResult {
        let record = match self.aggregate(range) {
            Ok((stats, total_clicks)) => AnalyticsResult {
                stats,
                total_clicks,
                is_loading: false,
                error: None,
                generated_at: Utc::now(),
            },
            Err(err) => {
                let prev = self.tx.borrow().clone();
                AnalyticsResult {
                    is_loading: false,
                    error: Some(err),
                    generated_at: Utc::now(),
                    ..prev
                }
            }
        };

        if self.seq.load(Ordering::SeqCst) == ticket {
            self.tx.send_replace(record.clone());
        } else {
            debug!(ticket, range = range.as_str(), "discarding superseded analytics run");
        }

        record
    }

    fn aggregate(
        &self,
        range: TimeRange,
    ) -> Result<(Vec<ProductClickStat>, u64), AggregationError> {
        let products = self.source.load()?;
        let multiplier = range.multiplier();

        let mut stats = Vec::with_capacity(products.len());
        let mut total_clicks = 0u64;
        for product in products {
            // total is the sum of the rounded values, not a rounded sum
            let clicks = (product.base_clicks as f64 * multiplier).round() as u64;
            total_clicks = total_clicks.saturating_add(clicks);
            stats.push(ProductClickStat {
                product_id: product.id,
                product_name: product.name,
                clicks,
            });
        }

        Ok((stats, total_clicks))
    }
}

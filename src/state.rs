use crate::analytics::StatsAggregator;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<StatsAggregator>,
}

impl AppState {
    pub fn new(aggregator: StatsAggregator) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
        }
    }
}

use crate::errors::AggregationError;
use crate::models::Product;

/// Source of per-product WhatsApp click counts.
///
/// The shipped source is the fixed catalog below; a real deployment would put
/// the click feed behind this seam instead.
pub trait ClickSource: Send + Sync {
    fn load(&self) -> Result<Vec<Product>, AggregationError>;
}

/// Hard-coded storefront catalog standing in for the click feed, ordered by
/// base click count.
pub struct FixtureCatalog;

const FIXTURE: &[(u32, &str, u64)] = &[
    (1, "Handwoven Market Tote", 45),
    (2, "Ceramic Pour-Over Set", 38),
    (3, "Cold Brew Sampler", 32),
    (4, "Olive Wood Serving Board", 29),
    (5, "Stonewashed Linen Apron", 24),
];

impl ClickSource for FixtureCatalog {
    fn load(&self) -> Result<Vec<Product>, AggregationError> {
        Ok(FIXTURE
            .iter()
            .map(|&(id, name, base_clicks)| Product {
                id,
                name: name.to_string(),
                base_clicks,
            })
            .collect())
    }
}

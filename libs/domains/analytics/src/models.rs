use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Global revenue total across every payment record
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RevenueSummary {
    /// Sum of the `price` field over all payments; 0 when none exist
    pub revenue: f64,
}

/// Per-category order statistics.
///
/// One row per catalog category that at least one sold line item joined
/// into; items whose id no longer matches a catalog record contribute
/// nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryOrderStats {
    /// Catalog category label
    pub category: String,
    /// Number of sold line items in the category
    pub quantity: i64,
    /// Sum of the joined items' prices
    pub revenue: f64,
}

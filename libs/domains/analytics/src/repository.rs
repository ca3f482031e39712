use async_trait::async_trait;

use crate::error::AnalyticsResult;
use crate::models::CategoryOrderStats;

/// Repository trait for the aggregation reports
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// Sum of `price` across every payment record; 0 when none exist
    async fn revenue_total(&self) -> AnalyticsResult<f64>;

    /// Per-category line-item counts and revenue over all payments
    async fn order_stats_by_category(&self) -> AnalyticsResult<Vec<CategoryOrderStats>>;
}

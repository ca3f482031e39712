//! Analytics Service - thin read-only layer over the aggregation repository

use std::sync::Arc;
use tracing::instrument;

use crate::error::AnalyticsResult;
use crate::models::{CategoryOrderStats, RevenueSummary};
use crate::repository::AnalyticsRepository;

/// Analytics service exposing the two reports
pub struct AnalyticsService<R: AnalyticsRepository> {
    repository: Arc<R>,
}

impl<R: AnalyticsRepository> AnalyticsService<R> {
    /// Create a new AnalyticsService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Global revenue total
    #[instrument(skip(self))]
    pub async fn revenue_summary(&self) -> AnalyticsResult<RevenueSummary> {
        let revenue = self.repository.revenue_total().await?;
        Ok(RevenueSummary { revenue })
    }

    /// Per-category order statistics
    #[instrument(skip(self))]
    pub async fn order_stats(&self) -> AnalyticsResult<Vec<CategoryOrderStats>> {
        self.repository.order_stats_by_category().await
    }
}

impl<R: AnalyticsRepository> Clone for AnalyticsService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockAnalyticsRepository;

    #[tokio::test]
    async fn test_revenue_summary_wraps_total() {
        let mut repo = MockAnalyticsRepository::new();
        repo.expect_revenue_total().returning(|| Ok(35.5));

        let service = AnalyticsService::new(repo);
        let summary = service.revenue_summary().await.unwrap();
        assert_eq!(summary, RevenueSummary { revenue: 35.5 });
    }

    #[tokio::test]
    async fn test_revenue_summary_zero_without_payments() {
        let mut repo = MockAnalyticsRepository::new();
        repo.expect_revenue_total().returning(|| Ok(0.0));

        let service = AnalyticsService::new(repo);
        assert_eq!(service.revenue_summary().await.unwrap().revenue, 0.0);
    }
}

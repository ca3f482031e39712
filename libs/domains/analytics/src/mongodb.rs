//! MongoDB implementation of AnalyticsRepository
//!
//! Both reports run as aggregation pipelines over the payments collection;
//! the category breakdown `$lookup`s into the medicines collection and
//! keeps inner-join semantics via the second `$unwind`.

use async_trait::async_trait;
use mongodb::{
    bson::{doc, from_document, Bson, Document},
    Collection, Database,
};
use tracing::instrument;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::CategoryOrderStats;
use crate::repository::AnalyticsRepository;

/// MongoDB implementation of the AnalyticsRepository
pub struct MongoAnalyticsRepository {
    payments: Collection<Document>,
}

impl MongoAnalyticsRepository {
    /// Create a new MongoAnalyticsRepository
    pub fn new(db: &Database) -> Self {
        Self {
            payments: db.collection::<Document>("payments"),
        }
    }

    /// Pipeline summing `price` over every payment into a single row
    fn revenue_pipeline() -> Vec<Document> {
        vec![doc! {
            "$group": {
                "_id": null,
                "revenue": { "$sum": "$price" }
            }
        }]
    }

    /// Pipeline expanding each payment's line items, joining them against
    /// the medicines collection, and grouping by category.
    ///
    /// The `$unwind` after the `$lookup` drops line items whose id no
    /// longer matches a catalog record.
    fn order_stats_pipeline() -> Vec<Document> {
        vec![
            doc! { "$unwind": "$medicine_item_ids" },
            doc! {
                "$lookup": {
                    "from": "medicines",
                    "localField": "medicine_item_ids",
                    "foreignField": "_id",
                    "as": "item"
                }
            },
            doc! { "$unwind": "$item" },
            doc! {
                "$group": {
                    "_id": "$item.category",
                    "quantity": { "$sum": 1 },
                    "revenue": { "$sum": "$item.price" }
                }
            },
            doc! {
                "$project": {
                    "_id": 0,
                    "category": "$_id",
                    "quantity": 1,
                    "revenue": 1
                }
            },
        ]
    }

    /// Pull the revenue scalar out of the single `$group` row.
    ///
    /// `$sum` yields an i32/i64 when every addend is integral, so all
    /// numeric shapes are accepted. No row at all means no payments.
    fn parse_revenue(row: Option<&Document>) -> AnalyticsResult<f64> {
        let Some(row) = row else {
            return Ok(0.0);
        };

        match row.get("revenue") {
            Some(Bson::Double(v)) => Ok(*v),
            Some(Bson::Int32(v)) => Ok(f64::from(*v)),
            Some(Bson::Int64(v)) => Ok(*v as f64),
            other => Err(AnalyticsError::Decode(format!(
                "unexpected revenue value: {:?}",
                other
            ))),
        }
    }
}

#[async_trait]
impl AnalyticsRepository for MongoAnalyticsRepository {
    #[instrument(skip(self))]
    async fn revenue_total(&self) -> AnalyticsResult<f64> {
        use futures_util::TryStreamExt;

        let cursor = self.payments.aggregate(Self::revenue_pipeline()).await?;
        let rows: Vec<Document> = cursor.try_collect().await?;

        Self::parse_revenue(rows.first())
    }

    #[instrument(skip(self))]
    async fn order_stats_by_category(&self) -> AnalyticsResult<Vec<CategoryOrderStats>> {
        use futures_util::TryStreamExt;

        let cursor = self.payments.aggregate(Self::order_stats_pipeline()).await?;
        let rows: Vec<Document> = cursor.try_collect().await?;

        rows.into_iter()
            .map(|row| {
                from_document::<CategoryOrderStats>(row)
                    .map_err(|e| AnalyticsError::Decode(e.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revenue_pipeline_sums_price() {
        let pipeline = MongoAnalyticsRepository::revenue_pipeline();
        assert_eq!(pipeline.len(), 1);

        let group = pipeline[0].get_document("$group").unwrap();
        assert_eq!(group.get("_id"), Some(&Bson::Null));
        assert_eq!(
            group.get_document("revenue").unwrap().get_str("$sum"),
            Ok("$price")
        );
    }

    #[test]
    fn test_order_stats_pipeline_keeps_inner_join_semantics() {
        let pipeline = MongoAnalyticsRepository::order_stats_pipeline();

        // Unwind of the joined array must follow the lookup, so that
        // non-matching item ids drop out instead of producing null rows.
        assert_eq!(pipeline[0].get_str("$unwind"), Ok("$medicine_item_ids"));
        let lookup = pipeline[1].get_document("$lookup").unwrap();
        assert_eq!(lookup.get_str("from"), Ok("medicines"));
        assert_eq!(lookup.get_str("foreignField"), Ok("_id"));
        assert_eq!(pipeline[2].get_str("$unwind"), Ok("$item"));

        let group = pipeline[3].get_document("$group").unwrap();
        assert_eq!(group.get("_id"), Some(&Bson::String("$item.category".into())));
    }

    #[test]
    fn test_parse_revenue_no_payments_is_zero() {
        assert_eq!(MongoAnalyticsRepository::parse_revenue(None).unwrap(), 0.0);
    }

    #[test]
    fn test_parse_revenue_reads_double() {
        let row = doc! { "_id": null, "revenue": 35.5 };
        assert_eq!(
            MongoAnalyticsRepository::parse_revenue(Some(&row)).unwrap(),
            35.5
        );
    }

    #[test]
    fn test_parse_revenue_reads_integral_sum() {
        let row = doc! { "_id": null, "revenue": 12i32 };
        assert_eq!(
            MongoAnalyticsRepository::parse_revenue(Some(&row)).unwrap(),
            12.0
        );
    }

    #[test]
    fn test_category_row_decodes() {
        let row = doc! { "category": "pain", "quantity": 2i64, "revenue": 12.0 };
        let stats: CategoryOrderStats = from_document(row).unwrap();
        assert_eq!(
            stats,
            CategoryOrderStats {
                category: "pain".to_string(),
                quantity: 2,
                revenue: 12.0
            }
        );
    }
}

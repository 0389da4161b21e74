//! Analytics Repository
//!
//! Dashboard aggregation, computed store-side in one batched query.

use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::models::{AnalyticsSummary, CategoryCount, StatusCount};

use super::{BaseRepository, RepoResult};

#[derive(Clone)]
pub struct AnalyticsRepository {
    base: BaseRepository,
}

#[derive(Debug, Deserialize)]
struct OverviewRaw {
    total: i64,
    resolved_count: i64,
    avg_resolution_hours: f64,
}

impl AnalyticsRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Compute the full dashboard summary.
    ///
    /// A resolved issue only counts toward the average when both timestamps
    /// are present and `resolved_at >= created_at`; anything else is
    /// excluded from numerator and denominator alike. Zero qualifying
    /// issues yields 0.0, never NaN.
    pub async fn summary(&self) -> RepoResult<AnalyticsSummary> {
        let mut result = self
            .base
            .db()
            .query(
                r#"
                -- Resolved issues with a usable timestamp pair
                LET $qualified = (
                    SELECT created_at, resolved_at FROM issue
                    WHERE status = 'RESOLVED'
                        AND resolved_at != NONE
                        AND created_at != NONE
                        AND resolved_at >= created_at
                );
                LET $hours = (
                    SELECT VALUE (resolved_at - created_at) / 3600000.0 FROM $qualified
                );

                RETURN {
                    total: count((SELECT VALUE id FROM issue)),
                    resolved_count: count($hours),
                    avg_resolution_hours: IF count($hours) > 0
                        THEN math::mean($hours)
                        ELSE 0.0
                    END
                };

                SELECT category, count() AS count FROM issue
                    GROUP BY category
                    ORDER BY count DESC;

                SELECT status, count() AS count FROM issue
                    GROUP BY status;
                "#,
            )
            .await?;

        let overview: Option<OverviewRaw> = result.take(2)?;
        let overview = overview.unwrap_or(OverviewRaw {
            total: 0,
            resolved_count: 0,
            avg_resolution_hours: 0.0,
        });

        let category_trend: Vec<CategoryCount> = result.take(3)?;
        let status_counts: Vec<StatusCount> = result.take(4)?;

        Ok(AnalyticsSummary {
            total_issues: overview.total,
            resolved_count: overview.resolved_count,
            avg_resolution_hours: overview.avg_resolution_hours,
            category_trend,
            status_counts,
        })
    }
}

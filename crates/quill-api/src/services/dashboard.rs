//! Dashboard statistics aggregation.
//!
//! Purely derived from the post collection; `now` is injected by the caller
//! so the aggregation itself never reads an ambient clock.

use chrono::{DateTime, Duration, Utc};
use quill_core::models::dashboard::HISTOGRAM_DAYS;
use quill_core::models::{ActivityEntry, DashboardStats, PostTimestamps};
use quill_core::AppError;
use quill_db::PostStore;
use std::sync::Arc;

/// Number of posts in the most-recent-posts widget.
const RECENT_POSTS_LIMIT: i64 = 5;
/// Number of entries in the activity feed.
const ACTIVITY_LIMIT: i64 = 10;
/// Every activity entry is attributed to the single admin.
const ACTIVITY_ACTOR: &str = "Admin";

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Read-only dashboard snapshot computation.
#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn PostStore>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// Compute the dashboard snapshot for the given instant.
    ///
    /// The four underlying queries have no ordering dependency and run
    /// concurrently; assembly waits for all of them. Idempotent for a fixed
    /// `now` and store state.
    #[tracing::instrument(skip(self), fields(operation = "compute_dashboard"))]
    pub async fn compute(&self, now: DateTime<Utc>) -> Result<DashboardStats, AppError> {
        let window_start = now - Duration::days(HISTOGRAM_DAYS as i64 - 1);

        let (total_posts, week_created, recent_posts, activity_rows) = tokio::try_join!(
            self.store.count(),
            self.store.created_between(window_start, now),
            self.store.recent_by_created(RECENT_POSTS_LIMIT),
            self.store.recent_by_updated(ACTIVITY_LIMIT),
        )?;

        Ok(DashboardStats {
            total_posts,
            // Reserved placeholder for a feature this service does not implement.
            comments_count: 0,
            histogram: build_histogram(now, &week_created),
            recent_posts,
            activity: activity_entries(activity_rows),
        })
    }
}

/// Bucket creation timestamps into a 7-day histogram.
///
/// `day_offset = floor((now - created_at) / 1 day)`; offsets in `[0, 7)` land
/// in bucket `6 - offset`, so index 0 is the oldest day of the window and
/// index 6 is today. Out-of-window timestamps (including future ones) are
/// dropped. The result is chronological regardless of input order.
pub(crate) fn build_histogram(now: DateTime<Utc>, created: &[DateTime<Utc>]) -> Vec<u32> {
    let mut buckets = vec![0u32; HISTOGRAM_DAYS];
    for timestamp in created {
        let millis = (now - *timestamp).num_milliseconds();
        let offset = millis.div_euclid(MILLIS_PER_DAY);
        if (0..HISTOGRAM_DAYS as i64).contains(&offset) {
            buckets[(HISTOGRAM_DAYS as i64 - 1 - offset) as usize] += 1;
        }
    }
    buckets
}

/// Map timestamp projections to activity entries. A post counts as "created"
/// only while its timestamps are exactly equal; any update breaks equality.
pub(crate) fn activity_entries(rows: Vec<PostTimestamps>) -> Vec<ActivityEntry> {
    rows.into_iter()
        .map(|row| {
            let action = if row.created_at == row.updated_at {
                "created post"
            } else {
                "updated post"
            };
            ActivityEntry {
                actor: ACTIVITY_ACTOR.to_string(),
                action: action.to_string(),
                title: row.title,
                date: row.updated_at,
            }
        })
        .collect()
}

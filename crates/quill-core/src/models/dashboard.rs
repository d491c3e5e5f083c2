use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of day buckets in the dashboard creation histogram.
pub const HISTOGRAM_DAYS: usize = 7;

/// Projection of a post onto its title and creation time, for the
/// most-recent-posts widget.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentPost {
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// Projection of a post onto its title and both timestamps, used to derive
/// the activity feed.
#[derive(Debug, Clone)]
pub struct PostTimestamps {
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One entry in the recent-activity feed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub actor: String,
    /// "created post" when the post was never updated, else "updated post"
    pub action: String,
    pub title: String,
    pub date: DateTime<Utc>,
}

/// Read-only dashboard snapshot, derived from the post collection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_posts: i64,
    /// Reserved placeholder; always 0. Callers must not infer meaning from it.
    pub comments_count: i64,
    /// Creation counts per day; index 0 = 6 days ago, index 6 = today.
    /// Always exactly 7 entries.
    pub histogram: Vec<u32>,
    pub recent_posts: Vec<RecentPost>,
    pub activity: Vec<ActivityEntry>,
}

//! Domain models
//!
//! Wire-facing types serialize in camelCase to match the public API contract.

pub mod dashboard;
pub mod post;

pub use dashboard::{ActivityEntry, DashboardStats, PostTimestamps, RecentPost};
pub use post::{Attachment, NewPost, Post, PostPatch};

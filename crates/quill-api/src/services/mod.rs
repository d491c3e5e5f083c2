//! Domain services: post persistence with attachment lifecycle, and the
//! dashboard statistics aggregator.

pub mod dashboard;
pub mod post_service;

pub use dashboard::DashboardService;
pub use post_service::{PostService, RawUpload, UpdatePost};

//! Application state for dependency injection into handlers.

use crate::auth::AdminAuth;
use crate::services::{DashboardService, PostService};
use quill_core::Config;

/// Main application state shared by all handlers behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub dashboard: DashboardService,
    pub auth: AdminAuth,
    pub config: Config,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}

//! OpenAPI documentation definition.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Quill API",
        version = "0.1.0",
        description = "Blog content management API: post CRUD with image attachments in external object storage, shared-secret admin sessions, and dashboard statistics. All endpoints are versioned under /api/v1/."
    ),
    paths(
        crate::handlers::post_create::create_post,
        crate::handlers::post_list::get_all_posts,
        crate::handlers::post_get::get_post_by_id,
        crate::handlers::post_update::update_post,
        crate::handlers::post_delete::delete_post,
        crate::handlers::admin::admin_login,
        crate::handlers::admin::admin_logout,
        crate::handlers::admin::get_admin_data,
        crate::handlers::dashboard::get_dashboard_stats,
    ),
    components(schemas(
        quill_core::models::Post,
        quill_core::models::Attachment,
        quill_core::models::DashboardStats,
        quill_core::models::RecentPost,
        quill_core::models::ActivityEntry,
        crate::handlers::MessageResponse,
        crate::handlers::PostResponse,
        crate::handlers::PostListResponse,
        crate::handlers::admin::LoginRequest,
        crate::handlers::admin::AdminInfoResponse,
        crate::handlers::dashboard::StatsResponse,
        crate::error::ErrorResponse,
    )),
    tags(
        (name = "blog", description = "Blog post management"),
        (name = "admin", description = "Admin session and dashboard")
    )
)]
pub struct ApiDoc;

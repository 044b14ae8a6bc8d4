use reqwest::Method;
use shared_types::{ActivityItem, AdminStats, AppError, CreateUserRequest, Role, User};

use crate::http;

pub async fn list_users() -> Result<Vec<User>, AppError> {
    http::get_json("/admin/users").await
}

pub async fn create_user(request: &CreateUserRequest) -> Result<User, AppError> {
    http::post_json("/admin/users", request).await
}

/// Change a user's role. The backend takes the role as a query parameter
/// and only accepts the `ROLE_`-prefixed form.
pub async fn update_user_role(user_id: i64, role: Role) -> Result<User, AppError> {
    let builder = http::request(Method::PUT, &format!("/admin/users/{user_id}/role"))
        .query(&[("role", role.wire_name())]);
    http::send_json(builder).await
}

/// Returns the backend's plain-text confirmation line.
pub async fn delete_user(user_id: i64) -> Result<String, AppError> {
    http::delete_text(&format!("/admin/users/{user_id}")).await
}

/// Platform-wide totals for the admin dashboard cards.
pub async fn admin_stats() -> Result<AdminStats, AppError> {
    http::get_json("/admin/stats").await
}

/// Recent signups, enrollments, and course submissions for the activity feed.
pub async fn recent_activity() -> Result<Vec<ActivityItem>, AppError> {
    http::get_json("/admin/activity").await
}

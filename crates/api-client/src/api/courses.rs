use shared_types::{AppError, Course, CoursePayload};

use crate::http;

/// All courses, approved or not. The catalog and admin screens filter
/// client-side; the backend has no search endpoint.
pub async fn list_courses() -> Result<Vec<Course>, AppError> {
    http::get_json("/courses").await
}

pub async fn get_course(course_id: i64) -> Result<Course, AppError> {
    http::get_json(&format!("/courses/{course_id}")).await
}

pub async fn create_course(payload: &CoursePayload) -> Result<Course, AppError> {
    http::post_json("/courses", payload).await
}

/// Full-payload update. Approval and rejection go through here too, with
/// the `approved` flag flipped on an otherwise unchanged payload.
pub async fn update_course(course_id: i64, payload: &CoursePayload) -> Result<Course, AppError> {
    http::put_json(&format!("/courses/{course_id}"), payload).await
}

/// Returns the backend's plain-text confirmation line.
pub async fn delete_course(course_id: i64) -> Result<String, AppError> {
    http::delete_text(&format!("/courses/{course_id}")).await
}

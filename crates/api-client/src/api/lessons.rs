use shared_types::{AppError, Lesson, LessonPayload};

use crate::http;

/// Lessons of a course in position order.
pub async fn list_by_course(course_id: i64) -> Result<Vec<Lesson>, AppError> {
    http::get_json(&format!("/lessons/course/{course_id}")).await
}

pub async fn get_lesson(lesson_id: i64) -> Result<Lesson, AppError> {
    http::get_json(&format!("/lessons/{lesson_id}")).await
}

pub async fn create_lesson(course_id: i64, payload: &LessonPayload) -> Result<Lesson, AppError> {
    http::post_json(&format!("/lessons/course/{course_id}"), payload).await
}

pub async fn update_lesson(lesson_id: i64, payload: &LessonPayload) -> Result<Lesson, AppError> {
    http::put_json(&format!("/lessons/{lesson_id}"), payload).await
}

/// Returns the backend's plain-text confirmation line.
pub async fn delete_lesson(lesson_id: i64) -> Result<String, AppError> {
    http::delete_text(&format!("/lessons/{lesson_id}")).await
}

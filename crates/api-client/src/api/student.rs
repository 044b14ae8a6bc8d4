use shared_types::{
    ActionResponse, AppError, Course, CourseProgress, CourseWithProgress, LearningStats,
};

use crate::http;

/// Enroll the signed-in student. An "already enrolled" rejection comes
/// back as a `BadRequest` carrying the backend's message.
pub async fn enroll(course_id: i64) -> Result<ActionResponse, AppError> {
    http::post_empty(&format!("/student/enroll/{course_id}")).await
}

/// Courses the signed-in student is enrolled in.
pub async fn my_courses() -> Result<Vec<Course>, AppError> {
    http::get_json("/student/my-courses").await
}

/// One course bundled with its lessons and the student's per-lesson
/// completion state.
pub async fn course_details(course_id: i64) -> Result<CourseWithProgress, AppError> {
    http::get_json(&format!("/student/course/{course_id}")).await
}

pub async fn complete_lesson(course_id: i64, lesson_id: i64) -> Result<ActionResponse, AppError> {
    http::post_empty(&format!(
        "/student/course/{course_id}/lesson/{lesson_id}/complete"
    ))
    .await
}

/// Aggregate learning statistics for the my-learning screen.
pub async fn learning_stats() -> Result<LearningStats, AppError> {
    http::get_json("/student/stats").await
}

/// Completion percentage and per-lesson checklist for one course.
pub async fn course_progress(course_id: i64) -> Result<CourseProgress, AppError> {
    http::get_json(&format!("/student/course/{course_id}/progress")).await
}

/// Approved courses the student has not enrolled in yet.
pub async fn available_courses() -> Result<Vec<Course>, AppError> {
    http::get_json("/student/courses/available").await
}

use shared_types::{
    AppError, CoursePayload, CourseSummary, EnrolledStudent, InstructorCourseStats, Lesson,
    LessonPayload,
};

use crate::http;

/// Submit a new course. It lands unapproved and stays hidden from
/// students until an admin signs off.
pub async fn create_course(payload: &CoursePayload) -> Result<CourseSummary, AppError> {
    http::post_json("/instructor/courses", payload).await
}

/// Courses owned by one instructor, in the backend's flat summary shape.
pub async fn list_courses(instructor_id: i64) -> Result<Vec<CourseSummary>, AppError> {
    http::get_json(&format!("/instructor/{instructor_id}/courses")).await
}

pub async fn get_course(course_id: i64) -> Result<CourseSummary, AppError> {
    http::get_json(&format!("/instructor/courses/{course_id}")).await
}

/// Enrollment count, lesson count, and revenue for one course.
pub async fn course_stats(course_id: i64) -> Result<InstructorCourseStats, AppError> {
    http::get_json(&format!("/instructor/courses/{course_id}/stats")).await
}

/// Lessons of a course. Failures degrade to an empty list so the course
/// detail screen still renders the course itself.
pub async fn list_lessons(course_id: i64) -> Vec<Lesson> {
    match http::get_json(&format!("/instructor/courses/{course_id}/lessons")).await {
        Ok(lessons) => lessons,
        Err(e) => {
            tracing::warn!(course_id, error = %e, "Lesson list unavailable, rendering without it");
            Vec::new()
        }
    }
}

pub async fn add_lesson(course_id: i64, payload: &LessonPayload) -> Result<Lesson, AppError> {
    http::post_json(&format!("/instructor/courses/{course_id}/lessons"), payload).await
}

/// Returns the backend's plain-text confirmation line.
pub async fn delete_lesson(lesson_id: i64) -> Result<String, AppError> {
    http::delete_text(&format!("/instructor/lessons/{lesson_id}")).await
}

/// Students enrolled in a course. Failures degrade to an empty list; the
/// page reports "no students yet" rather than an error.
pub async fn enrolled_students(course_id: i64) -> Vec<EnrolledStudent> {
    match http::get_json(&format!("/instructor/courses/{course_id}/students")).await {
        Ok(students) => students,
        Err(e) => {
            tracing::warn!(course_id, error = %e, "Student roster unavailable, treating as empty");
            Vec::new()
        }
    }
}

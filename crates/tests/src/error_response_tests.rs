use pretty_assertions::assert_eq;
use shared_types::{AppError, AppErrorKind};

#[test]
fn test_framework_default_error_body_uses_error_field() {
    // Unhandled routes answer with the framework's stock error document,
    // which has an `error` field but no `message`.
    let body = r#"{"timestamp":"2025-04-12T09:30:00.000+00:00","status":404,"error":"Not Found","path":"/api/student/courses/99/details"}"#;
    let err = AppError::from_response_body(404, body);

    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "Not Found");
}

#[test]
fn test_message_field_wins_over_error_field() {
    let body = r#"{"timestamp":"2025-04-12T09:30:00.000+00:00","status":400,"error":"Bad Request","message":"Course title is required","path":"/api/instructor/courses"}"#;
    let err = AppError::from_response_body(400, body);

    assert_eq!(err.message, "Course title is required");
}

#[test]
fn test_enrollment_rejection_reaches_the_toast_verbatim() {
    let body = r#"{"success":false,"message":"You are already enrolled in this course"}"#;
    let err = AppError::from_response_body(400, body);

    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.user_message(), "You are already enrolled in this course");
}

#[test]
fn test_json_without_known_fields_falls_back_to_status_line() {
    let err = AppError::from_response_body(400, r#"{"success":false}"#);
    assert_eq!(err.message, "Request failed with status 400");
}

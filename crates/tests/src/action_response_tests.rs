use pretty_assertions::assert_eq;
use shared_types::{ActionResponse, MediaUploadResponse};

#[test]
fn test_enroll_acknowledgement_carries_course_id() {
    let json = r#"{"success":true,"message":"✅ Enrolled successfully in course","courseId":12}"#;
    let resp: ActionResponse = serde_json::from_str(json).unwrap();

    assert!(resp.success);
    assert_eq!(resp.message, "✅ Enrolled successfully in course");
    assert_eq!(resp.course_id, Some(12));
}

#[test]
fn test_lesson_complete_acknowledgement() {
    let json = r#"{"success":true,"message":"✅ Lesson marked as completed"}"#;
    let resp: ActionResponse = serde_json::from_str(json).unwrap();

    assert!(resp.success);
    assert_eq!(resp.message, "✅ Lesson marked as completed");
    assert_eq!(resp.course_id, None);
}

#[test]
fn test_media_upload_body_defaults_optional_fields() {
    // Older upload endpoint builds answered with just the URL.
    let json = r#"{"fileUrl":"/uploads/42/intro.mp4"}"#;
    let resp: MediaUploadResponse = serde_json::from_str(json).unwrap();

    assert_eq!(resp.file_url, "/uploads/42/intro.mp4");
    assert_eq!(resp.message, "");
    assert_eq!(resp.file_name, "");
}

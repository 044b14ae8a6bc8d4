use serde::{Deserialize, Serialize};

/// Request DTO for the admin create-user screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Prefixed role name, e.g. `ROLE_INSTRUCTOR`.
    pub role: String,
}

/// Course create/update body shared by the admin and instructor screens.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoursePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub approved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor_id: Option<i64>,
}

impl CoursePayload {
    /// Build an update body from an existing course, preserving the fields
    /// the approval workflow must not lose.
    pub fn from_course(course: &crate::Course) -> Self {
        Self {
            id: Some(course.id),
            title: course.title.clone(),
            description: course.description.clone(),
            cover_image_url: course.cover_image_url.clone(),
            approved: course.approved,
            price: course.price,
            category: course.category.clone(),
            level: course.level.clone(),
            duration: course.duration.clone(),
            instructor_id: course.instructor.as_ref().map(|u| u.id),
        }
    }
}

/// Lesson create/update body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LessonPayload {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(default)]
    pub position: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i32>,
}

/// `{ success, message, courseId? }` acknowledgement the student endpoints
/// return for enroll and lesson-complete actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<i64>,
}

/// Media upload acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaUploadResponse {
    #[serde(default)]
    pub message: String,
    pub file_url: String,
    #[serde(default)]
    pub file_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_payload_skips_unset_optionals() {
        let payload = CoursePayload {
            title: "Rust for the Web".into(),
            description: "WASM front ends".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&payload).unwrap();

        assert!(json.contains("\"title\":\"Rust for the Web\""));
        assert!(!json.contains("coverImageUrl"));
        assert!(!json.contains("instructorId"));
        assert!(json.contains("\"approved\":false"));
    }

    #[test]
    fn course_payload_from_course_preserves_approval() {
        let course: crate::Course = serde_json::from_str(
            r#"{"id":12,"title":"Rust for the Web","approved":true,"price":49.0,
                "instructor":{"id":7,"username":"ada","email":"ada@bytelms.dev"}}"#,
        )
        .unwrap();

        let payload = CoursePayload::from_course(&course);
        assert!(payload.approved);
        assert_eq!(payload.instructor_id, Some(7));
        assert_eq!(payload.price, Some(49.0));
    }

    #[test]
    fn lesson_payload_serializes_camel_case() {
        let payload = LessonPayload {
            title: "Intro".into(),
            content: "Welcome".into(),
            position: 2,
            duration_seconds: Some(300),
            ..Default::default()
        };
        let json = serde_json::to_string(&payload).unwrap();

        assert!(json.contains("\"durationSeconds\":300"));
        assert!(json.contains("\"position\":2"));
    }

    #[test]
    fn action_response_deserializes_failure_shape() {
        let json = r#"{"success":false,"message":"Already enrolled in this course"}"#;
        let resp: ActionResponse = serde_json::from_str(json).unwrap();

        assert!(!resp.success);
        assert!(resp.course_id.is_none());
    }

    #[test]
    fn media_upload_response_deserializes() {
        let json = r#"{"message":"File uploaded successfully","fileUrl":"/media/12/intro.mp4","fileName":"intro.mp4"}"#;
        let resp: MediaUploadResponse = serde_json::from_str(json).unwrap();

        assert_eq!(resp.file_url, "/media/12/intro.mp4");
        assert_eq!(resp.file_name, "intro.mp4");
    }
}

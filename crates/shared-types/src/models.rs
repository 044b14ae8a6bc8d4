use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Account role controlling which dashboard and routes a user may access.
///
/// The backend stores roles with a `ROLE_` prefix (`ROLE_ADMIN`); the client
/// works with the stripped form everywhere and accepts either on parse.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Role {
    Admin,
    Instructor,
    #[default]
    Student,
}

impl Role {
    /// Parse from a JWT claim, stored session value, or backend role name.
    /// Unknown values default to Student.
    pub fn from_str_or_default(s: &str) -> Self {
        let normalized = s.trim().to_uppercase();
        match normalized.strip_prefix("ROLE_").unwrap_or(&normalized) {
            "ADMIN" => Role::Admin,
            "INSTRUCTOR" => Role::Instructor,
            _ => Role::Student,
        }
    }

    /// Canonical stripped form used in browser storage and route guards.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Instructor => "INSTRUCTOR",
            Role::Student => "STUDENT",
        }
    }

    /// Prefixed form the backend expects in signup payloads and role updates.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Role::Admin => "ROLE_ADMIN",
            Role::Instructor => "ROLE_INSTRUCTOR",
            Role::Student => "ROLE_STUDENT",
        }
    }
}

/// Role record as nested inside a backend `User` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
}

impl RoleRecord {
    pub fn role(&self) -> Role {
        Role::from_str_or_default(&self.name)
    }
}

/// A user account. The backend never serializes the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleRecord>,
}

impl User {
    pub fn role(&self) -> Role {
        self.role
            .as_ref()
            .map(|r| r.role())
            .unwrap_or(Role::Student)
    }
}

/// A course as the backend serializes it, including the eager-loaded
/// instructor and lesson list where the endpoint provides them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
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
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_students: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lessons: Option<Vec<Lesson>>,
    #[serde(default)]
    pub enrollment_count: i64,
}

impl Course {
    /// Display name for the instructor column, tolerating endpoints that
    /// omit the nested user.
    pub fn instructor_name(&self) -> &str {
        self.instructor
            .as_ref()
            .map(|u| u.username.as_str())
            .unwrap_or("Unknown")
    }
}

/// Flat course shape returned by the instructor endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub approved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor_name: Option<String>,
}

/// A lesson within a course. `course_id` links back to the parent when the
/// lesson is fetched on its own rather than embedded in a course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(default)]
    pub position: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<i64>,
}

/// Flat roster row for the instructor's enrolled-students table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnrolledStudent {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrolled_at: Option<NaiveDateTime>,
    /// 0-100 completion percentage, absent until the student opens the course.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
}

impl EnrolledStudent {
    pub fn display_name(&self) -> String {
        if self.username.is_empty() {
            format!("Student {}", self.id)
        } else {
            self.username.clone()
        }
    }
}

/// A student's enrollment in a course. `progress` is a 0-100 percentage
/// the backend recomputes on each lesson completion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<Course>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrolled_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
}

/// Per-lesson completion record for a student.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LessonProgress {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson: Option<Lesson>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_accessed_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_prefixed_and_stripped_forms() {
        assert_eq!(Role::from_str_or_default("ROLE_ADMIN"), Role::Admin);
        assert_eq!(Role::from_str_or_default("ADMIN"), Role::Admin);
        assert_eq!(Role::from_str_or_default("admin"), Role::Admin);
        assert_eq!(Role::from_str_or_default("Role_Instructor"), Role::Instructor);
        assert_eq!(Role::from_str_or_default("STUDENT"), Role::Student);
    }

    #[test]
    fn role_unknown_falls_back_to_student() {
        assert_eq!(Role::from_str_or_default(""), Role::Student);
        assert_eq!(Role::from_str_or_default("TEACHER"), Role::Student);
        assert_eq!(Role::from_str_or_default("superuser"), Role::Student);
    }

    #[test]
    fn role_as_str_reparses_to_same_role() {
        for role in [Role::Admin, Role::Instructor, Role::Student] {
            assert_eq!(Role::from_str_or_default(role.as_str()), role);
            assert_eq!(Role::from_str_or_default(role.wire_name()), role);
        }
    }

    #[test]
    fn user_deserializes_with_nested_role() {
        let json = r#"{"id":7,"username":"ada","email":"ada@bytelms.dev","role":{"id":2,"name":"ROLE_INSTRUCTOR"}}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, 7);
        assert_eq!(user.username, "ada");
        assert_eq!(user.role(), Role::Instructor);
    }

    #[test]
    fn user_without_role_defaults_to_student() {
        let json = r#"{"id":3,"username":"sam","email":"sam@bytelms.dev"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role(), Role::Student);
    }

    #[test]
    fn course_deserializes_from_backend_json() {
        let json = r#"{
            "id": 12,
            "title": "Rust for the Web",
            "description": "WASM front ends",
            "coverImageUrl": "https://cdn.bytelms.dev/rust.png",
            "approved": true,
            "price": 49.0,
            "createdAt": "2025-03-01T09:30:00",
            "level": "Beginner",
            "rating": 4.5,
            "totalStudents": 120,
            "duration": "6 weeks",
            "instructor": {"id": 7, "username": "ada", "email": "ada@bytelms.dev"},
            "lessons": [{"id": 1, "title": "Intro", "position": 0}],
            "enrollmentCount": 34
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();

        assert_eq!(course.id, 12);
        assert!(course.approved);
        assert_eq!(course.instructor_name(), "ada");
        assert_eq!(course.lessons.as_ref().map(Vec::len), Some(1));
        assert_eq!(course.enrollment_count, 34);
    }

    #[test]
    fn course_tolerates_sparse_json() {
        let json = r#"{"id":1,"title":"Bare"}"#;
        let course: Course = serde_json::from_str(json).unwrap();

        assert!(!course.approved);
        assert_eq!(course.description, "");
        assert_eq!(course.instructor_name(), "Unknown");
        assert_eq!(course.enrollment_count, 0);
    }

    #[test]
    fn course_summary_round_trips_camel_case() {
        let json = r#"{"id":5,"title":"Algorithms","description":"","coverImageUrl":null,"approved":false,"instructorId":7,"instructorName":"ada"}"#;
        let summary: CourseSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.instructor_id, Some(7));

        let out = serde_json::to_string(&summary).unwrap();
        assert!(out.contains("\"instructorId\":7"));
        assert!(out.contains("\"instructorName\":\"ada\""));
    }

    #[test]
    fn enrollment_deserializes_with_trimmed_nested_entities() {
        let json = r#"{
            "id": 9,
            "student": {"id": 3, "username": "sam", "email": "sam@bytelms.dev"},
            "course": {"id": 12, "title": "Rust for the Web"},
            "enrolledAt": "2025-04-02T11:00:00",
            "progress": 40.0
        }"#;
        let enrollment: Enrollment = serde_json::from_str(json).unwrap();

        assert_eq!(enrollment.progress, Some(40.0));
        assert_eq!(enrollment.course.as_ref().map(|c| c.id), Some(12));
    }

    #[test]
    fn lesson_progress_deserializes() {
        let json = r#"{"id":4,"lesson":{"id":1,"title":"Intro","position":0},"completed":true,"completedAt":"2025-04-03T08:00:00","timeSpent":25}"#;
        let progress: LessonProgress = serde_json::from_str(json).unwrap();

        assert!(progress.completed);
        assert_eq!(progress.time_spent, Some(25));
    }
}

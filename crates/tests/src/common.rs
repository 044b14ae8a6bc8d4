use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{json, Value};

/// Forge an unsigned JWT shaped like the backend's: the subject is the
/// email, `role` is the stripped name ("STUDENT", not "ROLE_STUDENT"),
/// and the timestamps are epoch seconds with a 24 hour validity window.
pub fn make_token(email: &str, role: &str, exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS512"}"#);
    let claims = json!({
        "sub": email,
        "role": role,
        "iat": exp - 24 * 3600,
        "exp": exp,
    });
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    format!("{header}.{payload}.signature")
}

/// The nested instructor record as course and enrollment payloads embed
/// it, role object included.
pub fn instructor_json() -> Value {
    json!({
        "id": 7,
        "username": "ada",
        "email": "ada@bytelms.dev",
        "role": {"id": 2, "name": "ROLE_INSTRUCTOR"}
    })
}

/// A course document with every field the backend serializes, including
/// the eager-loaded instructor.
pub fn course_json(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "Build production APIs from scratch",
        "coverImageUrl": "https://cdn.bytelms.dev/covers/backend.png",
        "approved": true,
        "price": 59.0,
        "createdAt": "2025-02-11T09:30:00",
        "updatedAt": "2025-03-01T18:45:00",
        "level": "Intermediate",
        "rating": 4.6,
        "totalStudents": 210,
        "duration": "8 weeks",
        "category": "Programming",
        "instructor": instructor_json(),
    })
}

/// A lesson as embedded in a course detail payload.
pub fn lesson_json(id: i64, title: &str, position: i32) -> Value {
    json!({
        "id": id,
        "title": title,
        "content": "Walk through the module and complete the exercise.",
        "mediaUrl": format!("/uploads/lesson-{id}.mp4"),
        "position": position,
        "durationSeconds": 720
    })
}

/// An enrollment row. The nested student and course are the trimmed
/// copies the backend sends, without their own enrollment lists.
pub fn enrollment_json(id: i64, progress: f64) -> Value {
    json!({
        "id": id,
        "student": {
            "id": 3,
            "username": "sam",
            "email": "sam@bytelms.dev",
            "role": {"id": 1, "name": "ROLE_STUDENT"}
        },
        "course": course_json(12, "Backend Engineering in Practice"),
        "enrolledAt": "2025-04-02T11:00:00",
        "progress": progress
    })
}

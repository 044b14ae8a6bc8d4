use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{Course, Role};

use crate::common;

#[test]
fn test_full_course_document_parses_every_field() {
    let mut doc = common::course_json(12, "Backend Engineering in Practice");
    doc["lessons"] = json!([
        common::lesson_json(1, "Service layers", 0),
        common::lesson_json(2, "Persistence", 1),
    ]);

    let course: Course = serde_json::from_value(doc).unwrap();

    assert_eq!(course.id, 12);
    assert_eq!(course.title, "Backend Engineering in Practice");
    assert!(course.approved);
    assert_eq!(course.price, Some(59.0));
    assert_eq!(course.category.as_deref(), Some("Programming"));
    assert_eq!(course.level.as_deref(), Some("Intermediate"));
    assert_eq!(course.rating, Some(4.6));
    assert_eq!(course.total_students, Some(210));
    assert_eq!(course.duration.as_deref(), Some("8 weeks"));
    assert!(course.created_at.is_some());
    assert!(course.updated_at.is_some());

    assert_eq!(course.instructor_name(), "ada");
    let instructor = course.instructor.as_ref().unwrap();
    assert_eq!(instructor.role(), Role::Instructor);

    let lessons = course.lessons.as_ref().unwrap();
    assert_eq!(lessons.len(), 2);
    assert_eq!(lessons[0].media_url.as_deref(), Some("/uploads/lesson-1.mp4"));
    assert_eq!(lessons[0].duration_seconds, Some(720));
    assert_eq!(lessons[1].position, 1);
}

#[test]
fn test_course_list_tolerates_sparse_rows() {
    // Unapproved drafts come back with most columns still null.
    let doc = json!([
        common::course_json(1, "Complete Course"),
        {"id": 2, "title": "Untitled draft"},
    ]);

    let courses: Vec<Course> = serde_json::from_value(doc).unwrap();
    assert_eq!(courses.len(), 2);

    let draft = &courses[1];
    assert_eq!(draft.description, "");
    assert!(!draft.approved);
    assert_eq!(draft.category, None);
    assert_eq!(draft.instructor_name(), "Unknown");
    assert!(draft.lessons.is_none());
}

#[test]
fn test_unmodeled_keys_do_not_break_parsing() {
    let mut doc = common::course_json(3, "Forward Compatible");
    doc["slug"] = json!("forward-compatible");
    doc["language"] = json!("en");
    doc["certificateAvailable"] = json!(true);

    let course: Course = serde_json::from_value(doc).unwrap();
    assert_eq!(course.id, 3);
    assert_eq!(course.title, "Forward Compatible");
}

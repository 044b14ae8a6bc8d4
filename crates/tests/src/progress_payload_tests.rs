use std::collections::HashSet;

use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{CourseProgress, CourseWithProgress};

use crate::common;

#[test]
fn test_course_details_full_document() {
    let doc = json!({
        "course": common::course_json(12, "Backend Engineering in Practice"),
        "lessons": [
            common::lesson_json(1, "Service layers", 0),
            common::lesson_json(2, "Persistence", 1),
            common::lesson_json(3, "Deployment", 2),
        ],
        "enrollment": common::enrollment_json(9, 33.33),
        "completedLessons": 1,
        "totalLessons": 3,
        "progress": 33.33,
        "lessonProgresses": [
            {
                "id": 41,
                "student": {"id": 3, "username": "sam", "email": "sam@bytelms.dev"},
                "lesson": common::lesson_json(1, "Service layers", 0),
                "completed": true,
                "completedAt": "2025-04-03T08:00:00",
                "lastAccessedAt": "2025-04-03T08:05:00",
                "timeSpent": 25
            },
            {
                "id": 42,
                "lesson": common::lesson_json(2, "Persistence", 1),
                "completed": false
            }
        ]
    });

    let details: CourseWithProgress = serde_json::from_value(doc).unwrap();

    assert_eq!(details.course.id, 12);
    assert_eq!(details.lessons.len(), 3);
    assert_eq!(details.completed_lessons, 1);
    assert_eq!(details.total_lessons, 3);
    assert_eq!(details.progress, 33.33);
    assert_eq!(
        details.enrollment.as_ref().and_then(|e| e.progress),
        Some(33.33)
    );

    let first = &details.lesson_progresses[0];
    assert!(first.completed);
    assert_eq!(first.lesson.as_ref().map(|l| l.id), Some(1));
    assert_eq!(first.time_spent, Some(25));
    assert!(!details.lesson_progresses[1].completed);
}

#[test]
fn test_completed_lesson_ids_skip_detached_rows() {
    let doc = json!({
        "course": common::course_json(12, "Backend Engineering in Practice"),
        "lessons": [
            common::lesson_json(1, "Service layers", 0),
            common::lesson_json(2, "Persistence", 1),
        ],
        "completedLessons": 1,
        "totalLessons": 2,
        "progress": 50.0,
        "lessonProgresses": [
            {"id": 41, "lesson": common::lesson_json(1, "Service layers", 0), "completed": true},
            {"id": 42, "lesson": null, "completed": true},
            {"id": 43, "lesson": common::lesson_json(2, "Persistence", 1), "completed": false}
        ]
    });

    let details: CourseWithProgress = serde_json::from_value(doc).unwrap();

    // The lesson page keys completion chips off this set. A progress row
    // whose lesson was deleted must not poison it.
    let completed: HashSet<i64> = details
        .lesson_progresses
        .iter()
        .filter(|p| p.completed)
        .filter_map(|p| p.lesson.as_ref().map(|l| l.id))
        .collect();

    assert!(completed.contains(&1));
    assert!(!completed.contains(&2));
    assert_eq!(completed.len(), 1);
}

#[test]
fn test_progress_report_tolerates_missing_lesson_flags() {
    let doc = json!({
        "course": common::course_json(12, "Backend Engineering in Practice"),
        "enrollment": common::enrollment_json(9, 50.0),
        "totalLessons": 2,
        "completedLessons": 1,
        "progressPercentage": 50.0,
        "lessons": [
            {"id": 1, "title": "Service layers", "duration": "12 min", "orderIndex": 0, "isCompleted": true},
            {"id": 2, "title": "Persistence"}
        ]
    });

    let report: CourseProgress = serde_json::from_value(doc).unwrap();

    assert_eq!(report.progress_percentage, 50.0);
    assert_eq!(report.lessons[0].duration.as_deref(), Some("12 min"));
    assert!(report.lessons[0].is_completed);

    let bare = &report.lessons[1];
    assert!(!bare.is_completed, "missing isCompleted defaults to false");
    assert_eq!(bare.duration, None);
    assert_eq!(bare.order_index, 0);
}

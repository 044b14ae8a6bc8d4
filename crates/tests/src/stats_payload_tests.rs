use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{ActivityItem, InstructorCourseStats, LearningStats};

use crate::common;

#[test]
fn test_admin_activity_feed_parses() {
    let doc = json!([
        {
            "id": 1,
            "type": "course",
            "message": "New course \"Backend Engineering in Practice\" submitted for approval",
            "time": "2 hours ago",
            "icon": "📚"
        },
        {
            "id": 2,
            "type": "course",
            "message": "Course \"Rust for the Web\" was approved",
            "time": "5 hours ago",
            "icon": "✅"
        },
        {
            "id": 3,
            "type": "course",
            "message": "Course \"Intro to SQL\" was approved",
            "time": "1 day ago",
            "icon": "✅"
        }
    ]);

    let feed: Vec<ActivityItem> = serde_json::from_value(doc).unwrap();

    assert_eq!(feed.len(), 3);
    assert_eq!(feed[0].kind, "course");
    assert_eq!(feed[0].icon, "📚");
    assert_eq!(feed[1].icon, "✅");
    assert_eq!(feed[2].time, "1 day ago");
}

#[test]
fn test_instructor_course_stats_list() {
    let doc = json!([
        {
            "course": common::course_json(12, "Backend Engineering in Practice"),
            "enrollmentCount": 34,
            "totalLessons": 12,
            "totalRevenue": 2006.0
        },
        {
            "course": common::course_json(15, "Intro to SQL"),
            "enrollmentCount": 210,
            "totalLessons": 8,
            "totalRevenue": 0.0
        }
    ]);

    let stats: Vec<InstructorCourseStats> = serde_json::from_value(doc).unwrap();

    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].course.title, "Backend Engineering in Practice");
    assert_eq!(stats[0].enrollment_count, 34);
    assert_eq!(stats[0].total_lessons, 12);
    assert_eq!(stats[0].total_revenue, 2006.0);

    // Free courses report revenue, it is just zero.
    assert_eq!(stats[1].total_revenue, 0.0);
    assert_eq!(stats[1].enrollment_count, 210);
}

#[test]
fn test_learning_stats_for_fresh_account() {
    // A student who has never enrolled gets an all-zero document. The
    // analytics page divides by total_courses, so the defaults matter.
    let stats: LearningStats = serde_json::from_str("{}").unwrap();

    assert_eq!(stats.total_courses, 0);
    assert_eq!(stats.completed_courses, 0);
    assert_eq!(stats.learning_streak, 0);
    assert_eq!(stats.total_enrollments, 0);
}

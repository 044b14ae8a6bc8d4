use serde::{Deserialize, Serialize};

use crate::{Course, Enrollment, Lesson, LessonProgress};

/// Platform-wide counters for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default)]
    pub total_users: i64,
    #[serde(default)]
    pub total_courses: i64,
    #[serde(default)]
    pub pending_courses: i64,
    #[serde(default)]
    pub total_students: i64,
    #[serde(default)]
    pub total_instructors: i64,
    #[serde(default)]
    pub total_admins: i64,
    #[serde(default)]
    pub total_revenue: i64,
}

/// One row of the admin recent-activity feed. `time` is pre-formatted by
/// the backend ("2 hours ago").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityItem {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub icon: String,
}

/// Per-course rollup for the instructor screens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstructorCourseStats {
    pub course: Course,
    #[serde(default)]
    pub enrollment_count: i64,
    #[serde(default)]
    pub total_lessons: i64,
    #[serde(default)]
    pub total_revenue: f64,
}

/// Aggregate learning counters for the student "my learning" page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LearningStats {
    #[serde(default)]
    pub total_courses: i64,
    #[serde(default)]
    pub completed_courses: i64,
    #[serde(default)]
    pub in_progress_courses: i64,
    #[serde(default)]
    pub total_learning_hours: i64,
    #[serde(default)]
    pub learning_streak: i64,
    #[serde(default)]
    pub total_enrollments: i64,
}

/// Everything the student course page needs in one payload: the course, its
/// lessons, the caller's enrollment, and completion counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseWithProgress {
    pub course: Course,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment: Option<Enrollment>,
    #[serde(default)]
    pub completed_lessons: i64,
    #[serde(default)]
    pub total_lessons: i64,
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub lesson_progresses: Vec<LessonProgress>,
}

/// Progress report for a single enrolled course, with per-lesson
/// completion flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgress {
    pub course: Course,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment: Option<Enrollment>,
    #[serde(default)]
    pub total_lessons: i64,
    #[serde(default)]
    pub completed_lessons: i64,
    #[serde(default)]
    pub progress_percentage: f64,
    #[serde(default)]
    pub lessons: Vec<ProgressLesson>,
}

/// Lesson line item inside [`CourseProgress`]. The keys differ from
/// [`Lesson`] because the backend flattens these by hand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressLesson {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default)]
    pub is_completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_stats_deserializes_backend_keys() {
        let json = r#"{
            "totalUsers": 150,
            "totalCourses": 23,
            "pendingCourses": 4,
            "totalStudents": 120,
            "totalInstructors": 25,
            "totalAdmins": 5,
            "totalRevenue": 284500
        }"#;
        let stats: AdminStats = serde_json::from_str(json).unwrap();

        assert_eq!(stats.total_users, 150);
        assert_eq!(stats.pending_courses, 4);
        assert_eq!(stats.total_revenue, 284500);
    }

    #[test]
    fn admin_stats_missing_keys_default_to_zero() {
        let stats: AdminStats = serde_json::from_str("{}").unwrap();
        assert_eq!(stats.total_users, 0);
        assert_eq!(stats.total_revenue, 0);
    }

    #[test]
    fn activity_item_maps_reserved_type_key() {
        let json = r#"{"id":12,"type":"course","message":"Course \"Rust\" was approved","time":"2 hours ago","icon":"check"}"#;
        let item: ActivityItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.kind, "course");
        assert_eq!(item.time, "2 hours ago");

        let out = serde_json::to_string(&item).unwrap();
        assert!(out.contains("\"type\":\"course\""));
    }

    #[test]
    fn learning_stats_deserializes() {
        let json = r#"{
            "totalCourses": 5,
            "completedCourses": 2,
            "inProgressCourses": 1,
            "totalLearningHours": 320,
            "learningStreak": 4,
            "totalEnrollments": 5
        }"#;
        let stats: LearningStats = serde_json::from_str(json).unwrap();

        assert_eq!(stats.completed_courses, 2);
        assert_eq!(stats.learning_streak, 4);
    }

    #[test]
    fn course_with_progress_deserializes() {
        let json = r#"{
            "course": {"id": 12, "title": "Rust for the Web"},
            "lessons": [{"id": 1, "title": "Intro", "position": 0}],
            "enrollment": {"id": 9, "progress": 50.0},
            "completedLessons": 1,
            "totalLessons": 2,
            "progress": 50.0,
            "lessonProgresses": [{"id": 4, "completed": true}]
        }"#;
        let payload: CourseWithProgress = serde_json::from_str(json).unwrap();

        assert_eq!(payload.course.id, 12);
        assert_eq!(payload.lessons.len(), 1);
        assert_eq!(payload.completed_lessons, 1);
        assert!(payload.lesson_progresses[0].completed);
    }

    #[test]
    fn course_progress_lesson_line_items() {
        let json = r#"{
            "course": {"id": 12, "title": "Rust for the Web"},
            "totalLessons": 2,
            "completedLessons": 1,
            "progressPercentage": 50.0,
            "lessons": [
                {"id": 1, "title": "Intro", "orderIndex": 0, "isCompleted": true},
                {"id": 2, "title": "Setup", "orderIndex": 1, "isCompleted": false}
            ]
        }"#;
        let progress: CourseProgress = serde_json::from_str(json).unwrap();

        assert_eq!(progress.lessons.len(), 2);
        assert!(progress.lessons[0].is_completed);
        assert!(!progress.lessons[1].is_completed);
        assert_eq!(progress.progress_percentage, 50.0);
    }
}

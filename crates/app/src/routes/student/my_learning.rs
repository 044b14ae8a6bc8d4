use dioxus::prelude::*;
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
    PageSubtitle, PageTitle, Skeleton,
};

use api_client::api::student as student_api;
use shared_types::Course;

use crate::components::stat_card::StatCard;
use crate::routes::Route;

/// Learning analytics: aggregate stats plus a per-course progress board.
#[component]
pub fn MyLearningPage() -> Element {
    let stats = use_resource(move || async move { student_api::learning_stats().await });
    let courses = use_resource(move || async move { student_api::my_courses().await });

    let stats_strip = match &*stats.read() {
        Some(Ok(stats)) => {
            // A student with no courses has a 0% rate, not a division by zero.
            let completion_rate = if stats.total_courses > 0 {
                ((stats.completed_courses as f64 / stats.total_courses as f64) * 100.0).round()
                    as i64
            } else {
                0
            };
            rsx! {
                div { class: "stat-grid",
                    StatCard {
                        label: "Learning Hours",
                        value: format!("{}h", stats.total_learning_hours),
                    }
                    StatCard { label: "Completion Rate", value: format!("{completion_rate}%") }
                    StatCard {
                        label: "Learning Streak",
                        value: format!("{} days", stats.learning_streak),
                    }
                    StatCard { label: "In Progress", value: stats.in_progress_courses.to_string() }
                }
            }
        }
        Some(Err(e)) => rsx! {
            div { class: "page-error", "{e.user_message()}" }
        },
        None => rsx! {
            div { class: "loading",
                Skeleton {}
            }
        },
    };

    let achievements = match &*stats.read() {
        Some(Ok(stats)) => rsx! {
            div { class: "achievement-row",
                span { "Courses Completed" }
                strong { "{stats.completed_courses}" }
            }
            div { class: "achievement-row",
                span { "Certificates Earned" }
                strong { "{stats.completed_courses}" }
            }
            div { class: "achievement-row",
                span { "Total Enrollments" }
                strong { "{stats.total_enrollments}" }
            }
        },
        _ => rsx! {
            Skeleton {}
        },
    };

    let progress_board = match &*courses.read() {
        Some(Ok(courses)) if courses.is_empty() => rsx! {
            div { class: "empty-state",
                h3 { "No courses enrolled" }
                p { "Start your learning journey by enrolling in courses." }
                Link {
                    to: Route::CourseCatalog {},
                    class: "button",
                    "data-style": "primary",
                    "Browse Courses"
                }
            }
        },
        Some(Ok(courses)) => rsx! {
            div { class: "learning-progress-list",
                for course in courses.clone() {
                    CourseProgressRow { key: "{course.id}", course }
                }
            }
        },
        Some(Err(e)) => rsx! {
            div { class: "page-error", "{e.user_message()}" }
        },
        None => rsx! {
            div { class: "loading",
                Skeleton {}
                Skeleton {}
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./student.css") }

        div { class: "page-stack",
            PageHeader {
                div {
                    PageTitle { "My Learning Analytics" }
                    PageSubtitle {
                        "Track your progress, monitor your growth, and achieve your learning goals"
                    }
                }
            }

            {stats_strip}

            div { class: "learning-grid",
                Card {
                    CardHeader {
                        CardTitle { "Course Progress" }
                        CardDescription { "Your progress across all enrolled courses" }
                    }
                    CardContent { {progress_board} }
                }
                Card {
                    CardHeader {
                        CardTitle { "Achievements" }
                    }
                    CardContent { {achievements} }
                }
            }
        }
    }
}

/// One board row. The completion chip loads independently so the board
/// renders as soon as the course list is in.
#[component]
fn CourseProgressRow(course: Course) -> Element {
    let course_id = course.id;
    let progress = use_resource(move || async move { student_api::course_progress(course_id).await });

    let chip = match &*progress.read() {
        Some(Ok(report)) => {
            let pct = report.progress_percentage;
            let pct_label = pct.round() as i64;
            let variant = if pct >= 80.0 {
                BadgeVariant::Success
            } else if pct >= 50.0 {
                BadgeVariant::Primary
            } else if pct >= 25.0 {
                BadgeVariant::Warning
            } else {
                BadgeVariant::Destructive
            };
            rsx! {
                Badge { variant: variant, "{pct_label}%" }
            }
        }
        _ => rsx! {},
    };

    rsx! {
        div { class: "learning-progress-row",
            div { class: "learning-progress-main",
                h3 { "{course.title}" }
                p { "{course.instructor_name()}" }
            }
            div { class: "learning-progress-side",
                {chip}
                Link {
                    to: Route::CourseViewer { id: course_id },
                    class: "learning-continue-link",
                    "Continue"
                }
            }
        }
    }
}

use dioxus::prelude::*;
use shared_ui::{PageActions, PageHeader, PageTitle, Progress, ProgressIndicator, Skeleton};

use api_client::api::student as student_api;
use shared_types::Course;

use crate::routes::Route;

/// Student landing page: every enrolled course with its completion bar.
#[component]
pub fn StudentDashboardPage() -> Element {
    let data = use_resource(move || async move { student_api::my_courses().await });

    let body = match &*data.read() {
        Some(Ok(courses)) => {
            if courses.is_empty() {
                rsx! {
                    div { class: "empty-state",
                        h3 { "You have not enrolled in any courses yet." }
                        p { "Browse the catalog to find your first course" }
                        Link {
                            to: Route::CourseCatalog {},
                            class: "button",
                            "data-style": "primary",
                            "Browse Courses"
                        }
                    }
                }
            } else {
                rsx! {
                    div { class: "student-course-grid",
                        for course in courses.clone() {
                            EnrolledCourseCard { key: "{course.id}", course }
                        }
                    }
                }
            }
        }
        Some(Err(e)) => rsx! {
            div { class: "page-error", "{e.user_message()}" }
        },
        None => rsx! {
            div { class: "loading",
                Skeleton {}
                Skeleton {}
                Skeleton {}
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./student.css") }

        div { class: "page-stack",
            PageHeader {
                PageTitle { "My Courses" }
                PageActions {
                    Link {
                        to: Route::CourseCatalog {},
                        class: "button",
                        "data-style": "secondary",
                        "Browse Courses"
                    }
                }
            }

            {body}
        }
    }
}

/// Card for one enrolled course. Completion is fetched per card so a slow
/// progress endpoint never blocks the course list itself.
#[component]
fn EnrolledCourseCard(course: Course) -> Element {
    let course_id = course.id;
    let progress = use_resource(move || async move { student_api::course_progress(course_id).await });

    let pct = match &*progress.read() {
        Some(Ok(report)) => Some(report.progress_percentage),
        _ => None,
    };
    let description = if course.description.is_empty() {
        "No description".to_string()
    } else {
        course.description.clone()
    };

    rsx! {
        div { class: "student-course-card",
            h3 { "{course.title}" }
            p { class: "student-course-description", "{description}" }
            div { class: "student-course-instructor", "Instructor: {course.instructor_name()}" }
            if let Some(pct) = pct {
                {
                    let pct_label = pct.round() as i64;
                    rsx! {
                        div { class: "student-course-progress",
                            Progress { value: Some(pct), ProgressIndicator {} }
                            span { "{pct_label}%" }
                        }
                    }
                }
            }
            div { class: "student-course-footer",
                Link {
                    to: Route::CourseViewer { id: course.id },
                    class: "button",
                    "data-style": "primary",
                    "Continue Learning"
                }
            }
        }
    }
}

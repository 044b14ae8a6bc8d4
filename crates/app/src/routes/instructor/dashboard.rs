use dioxus::prelude::*;
use shared_ui::{Badge, BadgeVariant, PageActions, PageHeader, PageTitle, Skeleton};

use api_client::api::instructor as instructor_api;
use shared_types::CourseSummary;

use crate::auth;
use crate::routes::Route;

/// Instructor landing page: the course portfolio at a glance.
#[component]
pub fn InstructorDashboardPage() -> Element {
    let data = use_resource(move || async move {
        let instructor_id = auth::resolve_user_id().await?;
        instructor_api::list_courses(instructor_id).await
    });

    let body = match &*data.read() {
        Some(Ok(courses)) => {
            if courses.is_empty() {
                rsx! {
                    div { class: "empty-state",
                        h3 { "You haven't created any courses yet." }
                        p { "Your published and pending courses will appear here." }
                        Link {
                            to: Route::CreateCourse {},
                            class: "button",
                            "data-style": "primary",
                            "+ New Course"
                        }
                    }
                }
            } else {
                rsx! {
                    div { class: "instructor-course-grid",
                        for course in courses.clone() {
                            InstructorCourseCard { key: "{course.id}", course }
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
        document::Link { rel: "stylesheet", href: asset!("./instructor.css") }

        div { class: "page-stack",
            PageHeader {
                PageTitle { "Instructor Dashboard" }
                PageActions {
                    Link {
                        to: Route::CreateCourse {},
                        class: "button",
                        "data-style": "primary",
                        "+ New Course"
                    }
                }
            }

            {body}
        }
    }
}

/// One portfolio card, shared by the dashboard and the My Courses page.
#[component]
pub fn InstructorCourseCard(course: CourseSummary) -> Element {
    let description = if course.description.is_empty() {
        "No description".to_string()
    } else {
        course.description.clone()
    };

    rsx! {
        div { class: "instructor-course-card",
            h3 { "{course.title}" }
            p { class: "instructor-course-description", "{description}" }
            div { class: "instructor-course-footer",
                if course.approved {
                    Badge { variant: BadgeVariant::Success, "Published" }
                } else {
                    Badge { variant: BadgeVariant::Warning, "Pending" }
                }
                Link {
                    to: Route::CourseDetail { id: course.id },
                    class: "instructor-manage-link",
                    "Manage \u{2192}"
                }
            }
        }
    }
}

use dioxus::prelude::*;
use shared_ui::{PageActions, PageHeader, PageSubtitle, PageTitle, Skeleton};

use api_client::api::instructor as instructor_api;

use super::dashboard::InstructorCourseCard;
use crate::auth;
use crate::routes::Route;

#[component]
pub fn MyCoursesPage() -> Element {
    let data = use_resource(move || async move {
        let instructor_id = auth::resolve_user_id().await?;
        instructor_api::list_courses(instructor_id).await
    });

    let body = match &*data.read() {
        Some(Ok(courses)) => {
            if courses.is_empty() {
                rsx! {
                    div { class: "empty-state",
                        div { class: "empty-state-icon", "\u{1f4da}" }
                        h3 { "No courses found" }
                        p { "Start by creating your first course" }
                        Link {
                            to: Route::CreateCourse {},
                            class: "button",
                            "data-style": "primary",
                            "Create Your First Course"
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
                div {
                    PageTitle { "My Courses" }
                    PageSubtitle { "Manage and view all your created courses" }
                }
                PageActions {
                    Link {
                        to: Route::CreateCourse {},
                        class: "button",
                        "data-style": "primary",
                        "Create New Course"
                    }
                }
            }

            {body}
        }
    }
}

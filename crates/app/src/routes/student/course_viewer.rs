use std::collections::HashSet;

use dioxus::prelude::*;
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, PageHeader, PageSubtitle, PageTitle, Progress, ProgressIndicator, Skeleton,
    ToastOptions,
};

use api_client::api::student as student_api;
use shared_types::{AppErrorKind, Lesson};

use crate::routes::Route;

/// Course home for an enrolled student: overall completion plus the lesson
/// list with mark-complete actions.
#[component]
pub fn CourseViewerPage(id: i64) -> Element {
    let toast = use_toast();

    let mut data = use_resource(move || async move { student_api::course_details(id).await });

    let handle_complete = move |lesson_id: i64| {
        spawn(async move {
            match student_api::complete_lesson(id, lesson_id).await {
                Ok(response) => {
                    toast.success(response.message, ToastOptions::new());
                    data.restart();
                }
                Err(e) => toast.error(e.user_message(), ToastOptions::new()),
            }
        });
    };

    let body = match &*data.read() {
        Some(Ok(details)) => {
            let completed_ids: HashSet<i64> = details
                .lesson_progresses
                .iter()
                .filter(|progress| progress.completed)
                .filter_map(|progress| progress.lesson.as_ref().map(|lesson| lesson.id))
                .collect();
            let pct_label = details.progress.round() as i64;

            rsx! {
                PageHeader {
                    div {
                        PageTitle { "{details.course.title}" }
                        PageSubtitle {
                            "{details.completed_lessons} of {details.total_lessons} lessons completed"
                        }
                    }
                }

                div { class: "course-progress-banner",
                    Progress { value: Some(details.progress), ProgressIndicator {} }
                    span { "{pct_label}%" }
                }

                Card {
                    CardHeader {
                        CardTitle { "Course Lessons" }
                    }
                    CardContent {
                        if details.lessons.is_empty() {
                            div { class: "empty-state",
                                p { "No lessons available." }
                            }
                        } else {
                            div { class: "lesson-list",
                                for (index , lesson) in details.lessons.clone().into_iter().enumerate() {
                                    ViewerLessonRow {
                                        key: "{lesson.id}",
                                        index,
                                        course_id: id,
                                        completed: completed_ids.contains(&lesson.id),
                                        on_complete: handle_complete,
                                        lesson,
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        Some(Err(e)) if e.kind == AppErrorKind::NotFound => rsx! {
            div { class: "empty-state",
                h3 { "Course not found" }
                p { "The course may have been removed or you are not enrolled in it." }
                Link {
                    to: Route::StudentDashboard {},
                    class: "button",
                    "data-style": "primary",
                    "Back to My Courses"
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
                Skeleton {}
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./student.css") }

        div { class: "page-stack", {body} }
    }
}

#[component]
fn ViewerLessonRow(
    index: usize,
    course_id: i64,
    lesson: Lesson,
    completed: bool,
    on_complete: EventHandler<i64>,
) -> Element {
    let lesson_id = lesson.id;
    let number = index + 1;
    let duration = format_duration(lesson.duration_seconds);

    rsx! {
        div { class: "lesson-row",
            div { class: "lesson-row-main",
                span { class: "lesson-number", "{number}" }
                div {
                    h3 { "{lesson.title}" }
                    p { class: "lesson-meta", "{duration}" }
                }
                if completed {
                    Badge { variant: BadgeVariant::Success, "Completed" }
                }
            }
            div { class: "lesson-row-actions",
                Link {
                    to: Route::LessonView {
                        course_id,
                        lesson_id,
                    },
                    Button { variant: ButtonVariant::Ghost, "View Lesson" }
                }
                if !completed {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_complete.call(lesson_id),
                        "Mark Complete"
                    }
                }
            }
        }
    }
}

fn format_duration(seconds: Option<i32>) -> String {
    match seconds {
        Some(s) if s > 0 => format!("{} min", s / 60),
        _ => "0 min".to_string(),
    }
}

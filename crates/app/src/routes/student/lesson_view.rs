use dioxus::prelude::*;
use shared_ui::{
    use_toast, Button, Card, CardContent, CardHeader, CardTitle, Skeleton, ToastOptions,
};

use api_client::api::lessons as lessons_api;
use api_client::api::student as student_api;
use shared_types::AppErrorKind;

use crate::routes::Route;

/// Single-lesson reader: content, attached media, and a mark-complete action.
#[component]
pub fn LessonViewPage(course_id: i64, lesson_id: i64) -> Element {
    let toast = use_toast();

    let data = use_resource(move || async move { lessons_api::get_lesson(lesson_id).await });

    let handle_complete = move |_| {
        spawn(async move {
            match student_api::complete_lesson(course_id, lesson_id).await {
                Ok(response) => toast.success(response.message, ToastOptions::new()),
                Err(e) => toast.error(e.user_message(), ToastOptions::new()),
            }
        });
    };

    let body = match &*data.read() {
        Some(Ok(lesson)) => {
            let content = lesson
                .content
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| "No content available for this lesson.".to_string());
            let media = match lesson.media_url.as_deref() {
                None => rsx! {
                    div { class: "media-missing",
                        p { "No media attached to this lesson" }
                    }
                },
                Some(url) => {
                    let ext = url.rsplit('.').next().unwrap_or("").to_lowercase();
                    match ext.as_str() {
                        "jpg" | "jpeg" | "png" | "gif" | "webp" => rsx! {
                            div { class: "media-panel",
                                h3 { "Attached Image" }
                                img { src: "{url}", alt: "Lesson media" }
                                a {
                                    href: "{url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "Open image in new tab"
                                }
                            }
                        },
                        "mp4" | "webm" | "mov" | "avi" => rsx! {
                            div { class: "media-panel",
                                h3 { "Attached Video" }
                                video { src: "{url}", controls: true, preload: "metadata" }
                                a {
                                    href: "{url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "Download video"
                                }
                            }
                        },
                        "pdf" => rsx! {
                            div { class: "media-panel",
                                h3 { "Attached Document" }
                                a {
                                    href: "{url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "Open PDF Document"
                                }
                            }
                        },
                        _ => rsx! {
                            div { class: "media-panel",
                                h3 { "Attached File" }
                                a {
                                    href: "{url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "Download File"
                                }
                            }
                        },
                    }
                }
            };

            rsx! {
                Card {
                    CardContent {
                        h1 { class: "lesson-view-title", "{lesson.title}" }
                        p { class: "lesson-view-content", "{content}" }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Lesson Media" }
                    }
                    CardContent { {media} }
                }

                div { class: "lesson-view-actions",
                    Button { onclick: handle_complete, "Mark Complete" }
                    Link {
                        to: Route::CourseViewer { id: course_id },
                        class: "button",
                        "data-style": "secondary",
                        "Back to Course"
                    }
                }
            }
        }
        Some(Err(e)) if e.kind == AppErrorKind::NotFound => rsx! {
            div { class: "empty-state",
                h3 { "Lesson not found" }
                Link {
                    to: Route::CourseViewer { id: course_id },
                    class: "button",
                    "data-style": "primary",
                    "Back to Course"
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

        div { class: "page-stack", {body} }
    }
}

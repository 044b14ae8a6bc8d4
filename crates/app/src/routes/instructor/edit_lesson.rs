use dioxus::prelude::*;
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Form, Input,
    PageHeader, PageSubtitle, PageTitle, Skeleton, Textarea, ToastOptions,
};

use api_client::api::lessons as lessons_api;
use shared_types::{AppErrorKind, LessonPayload};

use crate::routes::Route;

/// Edit form for an existing lesson, prefilled once the record loads.
#[component]
pub fn EditLessonPage(lesson_id: i64) -> Element {
    let toast = use_toast();

    let data = use_resource(move || async move { lessons_api::get_lesson(lesson_id).await });

    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut media_url = use_signal(String::new);
    let mut position = use_signal(|| "1".to_string());
    let mut duration_minutes = use_signal(|| "0".to_string());
    let mut submitting = use_signal(|| false);

    // Prefill exactly once per loaded lesson.
    let mut hydrated_id = use_signal(|| Option::<i64>::None);
    use_effect(move || {
        let loaded = data.read();
        let Some(Ok(lesson)) = &*loaded else {
            return;
        };
        if *hydrated_id.read() == Some(lesson.id) {
            return;
        }
        hydrated_id.set(Some(lesson.id));
        title.set(lesson.title.clone());
        content.set(lesson.content.clone().unwrap_or_default());
        media_url.set(lesson.media_url.clone().unwrap_or_default());
        position.set(lesson.position.to_string());
        duration_minutes.set(lesson.duration_seconds.map(|s| s / 60).unwrap_or(0).to_string());
    });

    let handle_submit = move |_evt: FormEvent| {
        if *submitting.read() {
            return;
        }
        submitting.set(true);

        spawn(async move {
            let media = media_url.read().trim().to_string();
            let minutes: i32 = duration_minutes.read().parse().unwrap_or(0);
            let payload = LessonPayload {
                title: title.read().trim().to_string(),
                content: content.read().trim().to_string(),
                media_url: (!media.is_empty()).then_some(media),
                position: position.read().parse().unwrap_or(1),
                duration_seconds: Some(minutes * 60),
            };

            let result = lessons_api::update_lesson(lesson_id, &payload).await;
            submitting.set(false);

            match result {
                Ok(updated) => {
                    toast.success("Lesson updated successfully".to_string(), ToastOptions::new());
                    let back = match updated.course_id {
                        Some(id) => Route::CourseDetail { id },
                        None => Route::MyCourses {},
                    };
                    navigator().push(back);
                }
                Err(e) => {
                    toast.error(e.user_message(), ToastOptions::new());
                }
            }
        });
    };

    let body = match &*data.read() {
        Some(Ok(lesson)) => {
            let cancel_route = match lesson.course_id {
                Some(id) => Route::CourseDetail { id },
                None => Route::MyCourses {},
            };

            rsx! {
                Card {
                    Form { onsubmit: handle_submit,
                        CardHeader {
                            CardTitle { "Lesson Details" }
                        }
                        CardContent {
                            div { class: "form-row",
                                Input {
                                    label: "Lesson Title *",
                                    placeholder: "Enter lesson title",
                                    value: title.read().clone(),
                                    required: true,
                                    on_input: move |evt: FormEvent| title.set(evt.value()),
                                }
                            }
                            div { class: "form-row",
                                Textarea {
                                    label: "Lesson Content *",
                                    placeholder: "Enter lesson content or description...",
                                    rows: 6,
                                    value: content.read().clone(),
                                    required: true,
                                    on_input: move |evt: FormEvent| content.set(evt.value()),
                                }
                            }
                            div { class: "form-row",
                                Input {
                                    label: "Position *",
                                    input_type: "number",
                                    value: position.read().clone(),
                                    required: true,
                                    on_input: move |evt: FormEvent| position.set(evt.value()),
                                }
                                Input {
                                    label: "Duration (minutes) *",
                                    input_type: "number",
                                    value: duration_minutes.read().clone(),
                                    required: true,
                                    on_input: move |evt: FormEvent| duration_minutes.set(evt.value()),
                                }
                            }
                            div { class: "form-row",
                                div {
                                    Input {
                                        label: "Media URL (Video/Audio/PDF)",
                                        input_type: "url",
                                        placeholder: "https://example.com/video.mp4",
                                        value: media_url.read().clone(),
                                        on_input: move |evt: FormEvent| media_url.set(evt.value()),
                                    }
                                    p { class: "form-hint",
                                        "Optional: Add video, audio, or PDF content URL"
                                    }
                                }
                            }
                        }
                        div { class: "form-actions",
                            button {
                                r#type: "submit",
                                class: "button",
                                "data-style": "primary",
                                disabled: *submitting.read(),
                                if *submitting.read() { "Saving Changes..." } else { "Save Changes" }
                            }
                            Link { to: cancel_route,
                                Button { variant: ButtonVariant::Secondary, "Cancel" }
                            }
                        }
                    }
                }
            }
        }
        Some(Err(e)) if e.kind == AppErrorKind::NotFound => rsx! {
            div { class: "empty-state",
                h3 { "Lesson not found" }
                Link {
                    to: Route::MyCourses {},
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
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./instructor.css") }
        div { class: "page-stack",
            PageHeader {
                div {
                    PageTitle { "Edit Lesson" }
                    PageSubtitle { "Update the lesson content and settings" }
                }
            }

            {body}
        }
    }
}

use dioxus::prelude::*;
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Form, Input,
    PageHeader, PageSubtitle, PageTitle, Textarea, ToastOptions,
};

use api_client::api::instructor as instructor_api;
use shared_types::LessonPayload;

use crate::routes::Route;

/// Lesson creation form. Duration is entered in minutes and stored in
/// seconds on the wire.
#[component]
pub fn AddLessonPage(course_id: i64) -> Element {
    let toast = use_toast();

    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut media_url = use_signal(String::new);
    let mut position = use_signal(|| "1".to_string());
    let mut duration_minutes = use_signal(|| "0".to_string());
    let mut submitting = use_signal(|| false);

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

            let result = instructor_api::add_lesson(course_id, &payload).await;
            submitting.set(false);

            match result {
                Ok(_) => {
                    toast.success("Lesson added successfully!".to_string(), ToastOptions::new());
                    navigator().push(Route::CourseDetail { id: course_id });
                }
                Err(e) => {
                    toast.error(e.user_message(), ToastOptions::new());
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./instructor.css") }
        div { class: "page-stack",
            PageHeader {
                div {
                    PageTitle { "Add New Lesson" }
                    PageSubtitle { "Create a new lesson for your course" }
                }
            }

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
                            if *submitting.read() { "Adding Lesson..." } else { "Add Lesson" }
                        }
                        Link { to: Route::CourseDetail { id: course_id },
                            Button { variant: ButtonVariant::Secondary, "Cancel" }
                        }
                    }
                }
            }
        }
    }
}

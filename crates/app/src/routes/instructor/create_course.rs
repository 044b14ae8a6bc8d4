use dioxus::prelude::*;
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Form, Input,
    PageHeader, PageSubtitle, PageTitle, Textarea, ToastOptions,
};

use api_client::api::instructor as instructor_api;
use shared_types::CoursePayload;

use crate::auth;
use crate::routes::Route;

/// Full-page course creation form. New courses land unapproved and wait
/// in the admin review queue.
#[component]
pub fn CreateCoursePage() -> Element {
    let toast = use_toast();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut cover_image_url = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_evt: FormEvent| {
        if *submitting.read() {
            return;
        }
        submitting.set(true);

        spawn(async move {
            let result = match auth::resolve_user_id().await {
                Ok(instructor_id) => {
                    let cover = cover_image_url.read().trim().to_string();
                    let payload = CoursePayload {
                        title: title.read().trim().to_string(),
                        description: description.read().trim().to_string(),
                        price: Some(price.read().parse().unwrap_or(0.0)),
                        cover_image_url: (!cover.is_empty()).then_some(cover),
                        approved: false,
                        instructor_id: Some(instructor_id),
                        ..Default::default()
                    };
                    instructor_api::create_course(&payload).await
                }
                Err(e) => Err(e),
            };
            submitting.set(false);

            match result {
                Ok(_) => {
                    toast.success(
                        "Course created successfully! Waiting for admin approval.".to_string(),
                        ToastOptions::new(),
                    );
                    navigator().push(Route::InstructorDashboard {});
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
                    PageTitle { "Create New Course" }
                    PageSubtitle { "Fill in the details to create your new course" }
                }
            }

            Card {
                Form { onsubmit: handle_submit,
                    CardHeader {
                        CardTitle { "Course Details" }
                    }
                    CardContent {
                        div { class: "form-row",
                            Input {
                                label: "Course Title *",
                                placeholder: "Enter course title",
                                value: title.read().clone(),
                                required: true,
                                on_input: move |evt: FormEvent| title.set(evt.value()),
                            }
                        }
                        div { class: "form-row",
                            Textarea {
                                label: "Description *",
                                placeholder: "Describe your course in detail...",
                                rows: 4,
                                value: description.read().clone(),
                                required: true,
                                on_input: move |evt: FormEvent| description.set(evt.value()),
                            }
                        }
                        div { class: "form-row",
                            Input {
                                label: "Price (INR) *",
                                input_type: "number",
                                placeholder: "Enter course price",
                                value: price.read().clone(),
                                required: true,
                                on_input: move |evt: FormEvent| price.set(evt.value()),
                            }
                        }
                        div { class: "form-row",
                            div {
                                Input {
                                    label: "Cover Image URL",
                                    input_type: "url",
                                    placeholder: "https://example.com/image.jpg",
                                    value: cover_image_url.read().clone(),
                                    on_input: move |evt: FormEvent| cover_image_url.set(evt.value()),
                                }
                                p { class: "form-hint",
                                    "Optional: Provide a URL for your course cover image"
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
                            if *submitting.read() { "Creating Course..." } else { "Create Course" }
                        }
                        Link { to: Route::InstructorDashboard {},
                            Button { variant: ButtonVariant::Secondary, "Cancel" }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use shared_ui::{
    use_toast, Button, ButtonVariant, DialogActions, DialogContent, DialogRoot, DialogTitle,
    FormSelect, Input, Textarea, ToastOptions,
};

use api_client::api::courses as course_api;
use shared_types::{Course, CoursePayload};

/// Controls whether the dialog creates a new course or edits an existing one.
#[derive(Clone, Copy, PartialEq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Unified create/edit course dialog for the admin course screen.
///
/// - `initial`: None for create, Some(course) for edit (pre-populates fields)
/// - `open`: whether the dialog is visible
/// - `on_close`: called when the user dismisses the dialog
/// - `on_saved`: called after a successful save (caller should `data.restart()`)
#[component]
pub fn CourseFormDialog(
    mode: FormMode,
    initial: Option<Course>,
    open: bool,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let toast = use_toast();

    // --- Form field signals ---
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut cover_image_url = use_signal(String::new);
    let mut price = use_signal(|| "0".to_string());
    let mut category = use_signal(|| "Programming".to_string());
    let mut level = use_signal(|| "BEGINNER".to_string());
    let mut duration = use_signal(|| "0".to_string());

    // --- Hydration: sync signals when a different course is opened ---
    let mut hydrated_id = use_signal(|| Option::<i64>::None);
    let initial_for_hydration = initial.clone();

    use_effect(move || {
        if !open {
            return;
        }
        match initial_for_hydration.as_ref() {
            Some(course) => {
                if *hydrated_id.read() != Some(course.id) {
                    hydrated_id.set(Some(course.id));
                    title.set(course.title.clone());
                    description.set(course.description.clone());
                    cover_image_url.set(course.cover_image_url.clone().unwrap_or_default());
                    price.set(course.price.unwrap_or(0.0).to_string());
                    category.set(
                        course
                            .category
                            .clone()
                            .unwrap_or_else(|| "Programming".to_string()),
                    );
                    level.set(course.level.clone().unwrap_or_else(|| "BEGINNER".to_string()));
                    duration.set(course.duration.clone().unwrap_or_else(|| "0".to_string()));
                }
            }
            None => {
                // Reset for a fresh create
                if hydrated_id.read().is_some() {
                    hydrated_id.set(None);
                    title.set(String::new());
                    description.set(String::new());
                    cover_image_url.set(String::new());
                    price.set("0".to_string());
                    category.set("Programming".to_string());
                    level.set("BEGINNER".to_string());
                    duration.set("0".to_string());
                }
            }
        }
    });

    // --- Submit ---
    let mut in_flight = use_signal(|| false);

    let initial_for_save = initial.clone();
    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        if *in_flight.read() {
            return;
        }

        // The backend requires an owner on every course; admin-created ones
        // belong to the seed instructor account.
        let mut payload = match initial_for_save.as_ref() {
            Some(course) => CoursePayload::from_course(course),
            None => CoursePayload {
                approved: true,
                instructor_id: Some(1),
                ..Default::default()
            },
        };
        payload.title = title.read().clone();
        payload.description = description.read().clone();
        let cover = cover_image_url.read().clone();
        payload.cover_image_url = (!cover.is_empty()).then_some(cover);
        payload.price = Some(price.read().parse().unwrap_or(0.0));
        payload.category = Some(category.read().clone());
        payload.level = Some(level.read().clone());
        payload.duration = Some(duration.read().clone());

        let course_id = initial_for_save.as_ref().map(|c| c.id);
        spawn(async move {
            in_flight.set(true);
            let result = match course_id {
                Some(id) => course_api::update_course(id, &payload).await,
                None => course_api::create_course(&payload).await,
            };
            match result {
                Ok(_) => {
                    on_saved.call(());
                    on_close.call(());
                    let msg = match mode {
                        FormMode::Create => "Course created successfully",
                        FormMode::Edit => "Course updated successfully",
                    };
                    toast.success(msg.to_string(), ToastOptions::new());
                }
                Err(e) => {
                    toast.error(e.user_message(), ToastOptions::new());
                }
            }
            in_flight.set(false);
        });
    };

    // --- Render ---
    let dialog_title = match mode {
        FormMode::Create => "Add New Course",
        FormMode::Edit => "Edit Course",
    };
    let submit_label = match mode {
        FormMode::Create => "Add Course",
        FormMode::Edit => "Update Course",
    };

    rsx! {
        DialogRoot {
            open,
            on_open_change: move |v: bool| {
                if !v {
                    on_close.call(());
                }
            },
            DialogContent {
                DialogTitle { "{dialog_title}" }
                form { onsubmit: handle_save,
                    div { class: "course-form-fields",
                        Input {
                            label: "Course Title *",
                            placeholder: "Enter course title",
                            value: title.read().clone(),
                            on_input: move |e: FormEvent| title.set(e.value()),
                            required: true,
                        }
                        Textarea {
                            label: "Description *",
                            placeholder: "Enter course description",
                            value: description.read().clone(),
                            on_input: move |e: FormEvent| description.set(e.value()),
                            rows: 3,
                            required: true,
                        }
                        div { class: "course-form-row",
                            Input {
                                label: "Price (\u{20b9}) *",
                                input_type: "number",
                                placeholder: "0",
                                value: price.read().clone(),
                                on_input: move |e: FormEvent| price.set(e.value()),
                                required: true,
                            }
                            Input {
                                label: "Duration (hours) *",
                                input_type: "number",
                                placeholder: "0",
                                value: duration.read().clone(),
                                on_input: move |e: FormEvent| duration.set(e.value()),
                                required: true,
                            }
                            FormSelect {
                                label: "Level *",
                                value: level.read().clone(),
                                onchange: move |e: FormEvent| level.set(e.value()),
                                option { value: "BEGINNER", "Beginner" }
                                option { value: "INTERMEDIATE", "Intermediate" }
                                option { value: "ADVANCED", "Advanced" }
                            }
                        }
                        FormSelect {
                            label: "Category *",
                            value: category.read().clone(),
                            onchange: move |e: FormEvent| category.set(e.value()),
                            option { value: "Programming", "Programming" }
                            option { value: "Design", "Design" }
                            option { value: "Business", "Business" }
                            option { value: "Marketing", "Marketing" }
                            option { value: "Data Science", "Data Science" }
                            option { value: "Personal Development", "Personal Development" }
                        }
                        Input {
                            label: "Cover Image URL",
                            input_type: "url",
                            placeholder: "https://example.com/image.jpg",
                            value: cover_image_url.read().clone(),
                            on_input: move |e: FormEvent| cover_image_url.set(e.value()),
                        }
                    }
                    DialogActions {
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "button",
                            "data-style": "primary",
                            disabled: *in_flight.read(),
                            if *in_flight.read() { "Saving..." } else { "{submit_label}" }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Badge, BadgeVariant, Button,
    ButtonVariant, PageActions, PageHeader, PageSubtitle, PageTitle, Skeleton, TabContent,
    TabList, TabTrigger, Tabs, ToastOptions,
};

use api_client::api::courses as course_api;
use shared_types::{Course, CoursePayload};

use super::course_form::{CourseFormDialog, FormMode};
use crate::components::stat_card::StatCard;

/// Review queue for instructor-submitted courses plus full course CRUD.
/// Approval and rejection are a full-payload update with the `approved`
/// flag flipped.
#[component]
pub fn CourseApprovalPage() -> Element {
    let toast = use_toast();

    let mut delete_target = use_signal(|| Option::<Course>::None);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Course>::None);

    let mut data = use_resource(move || async move { course_api::list_courses().await });

    let set_approval = move |course: Course, approved: bool| {
        let mut payload = CoursePayload::from_course(&course);
        payload.approved = approved;
        spawn(async move {
            match course_api::update_course(course.id, &payload).await {
                Ok(_) => {
                    data.restart();
                    let msg = if approved {
                        "Course approved"
                    } else {
                        "Course rejected"
                    };
                    toast.success(msg.to_string(), ToastOptions::new());
                }
                Err(e) => {
                    toast.error(e.user_message(), ToastOptions::new());
                }
            }
        });
    };

    let handle_delete = move |_| {
        let Some(course) = delete_target.read().clone() else {
            return;
        };
        spawn(async move {
            match course_api::delete_course(course.id).await {
                Ok(message) => {
                    data.restart();
                    toast.success(message, ToastOptions::new());
                }
                Err(e) => {
                    toast.error(e.user_message(), ToastOptions::new());
                }
            }
            delete_target.set(None);
        });
    };

    let open_edit = move |course: Course| {
        editing.set(Some(course));
        show_form.set(true);
    };
    let open_create = move |_| {
        editing.set(None);
        show_form.set(true);
    };

    let form_mode = if editing.read().is_some() {
        FormMode::Edit
    } else {
        FormMode::Create
    };
    let form_initial = editing.read().clone();

    let body = match &*data.read() {
        Some(Ok(courses)) => {
            let pending: Vec<Course> = courses.iter().filter(|c| !c.approved).cloned().collect();
            let approved: Vec<Course> = courses.iter().filter(|c| c.approved).cloned().collect();
            let with_lessons = courses
                .iter()
                .filter(|c| c.lessons.as_ref().is_some_and(|l| !l.is_empty()))
                .count();

            rsx! {
                div { class: "stat-grid",
                    StatCard { label: "Total Courses", value: courses.len().to_string() }
                    StatCard { label: "Pending Approval", value: pending.len().to_string() }
                    StatCard { label: "Approved", value: approved.len().to_string() }
                    StatCard { label: "With Lessons", value: with_lessons.to_string() }
                }

                Tabs { default_value: "pending", horizontal: true,
                    TabList {
                        TabTrigger { value: "pending", index: 0usize,
                            "Pending Approval ({pending.len()})"
                        }
                        TabTrigger { value: "approved", index: 1usize,
                            "Approved Courses ({approved.len()})"
                        }
                    }
                    TabContent { value: "pending", index: 0usize,
                        CourseGrid {
                            courses: pending,
                            empty_title: "No Pending Courses",
                            empty_message: "All courses have been reviewed and approved.",
                            on_approve: move |course: Course| set_approval(course, true),
                            on_reject: move |course: Course| set_approval(course, false),
                            on_edit: open_edit,
                            on_delete: move |course: Course| delete_target.set(Some(course)),
                        }
                    }
                    TabContent { value: "approved", index: 1usize,
                        CourseGrid {
                            courses: approved,
                            empty_title: "No Approved Courses",
                            empty_message: "No courses have been approved yet.",
                            on_approve: move |course: Course| set_approval(course, true),
                            on_reject: move |course: Course| set_approval(course, false),
                            on_edit: open_edit,
                            on_delete: move |course: Course| delete_target.set(Some(course)),
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
        document::Link { rel: "stylesheet", href: asset!("./courses.css") }

        div { class: "page-stack",
            PageHeader {
                div {
                    PageTitle { "Course Management" }
                    PageSubtitle { "Approve, manage, and monitor all courses" }
                }
                PageActions {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: open_create,
                        "Add Course"
                    }
                }
            }

            {body}

            AlertDialogRoot {
                open: delete_target.read().is_some(),
                on_open_change: move |open: bool| {
                    if !open {
                        delete_target.set(None);
                    }
                },
                AlertDialogContent {
                    AlertDialogTitle { "Delete Course" }
                    AlertDialogDescription {
                        "Are you sure you want to delete this course?"
                    }
                    AlertDialogActions {
                        AlertDialogCancel { "Cancel" }
                        AlertDialogAction {
                            on_click: handle_delete,
                            "Delete"
                        }
                    }
                }
            }

            CourseFormDialog {
                mode: form_mode,
                initial: form_initial,
                open: show_form(),
                on_close: move |_| show_form.set(false),
                on_saved: move |_| data.restart(),
            }
        }
    }
}

/// Card grid for one approval tab, with the tab's empty state.
#[component]
fn CourseGrid(
    courses: Vec<Course>,
    empty_title: String,
    empty_message: String,
    on_approve: EventHandler<Course>,
    on_reject: EventHandler<Course>,
    on_edit: EventHandler<Course>,
    on_delete: EventHandler<Course>,
) -> Element {
    if courses.is_empty() {
        return rsx! {
            div { class: "empty-state",
                h3 { "{empty_title}" }
                p { "{empty_message}" }
            }
        };
    }

    rsx! {
        div { class: "approval-grid",
            for course in courses {
                ApprovalCard {
                    key: "{course.id}",
                    course: course.clone(),
                    on_approve: move |c: Course| on_approve.call(c),
                    on_reject: move |c: Course| on_reject.call(c),
                    on_edit: move |c: Course| on_edit.call(c),
                    on_delete: move |c: Course| on_delete.call(c),
                }
            }
        }
    }
}

#[component]
fn ApprovalCard(
    course: Course,
    on_approve: EventHandler<Course>,
    on_reject: EventHandler<Course>,
    on_edit: EventHandler<Course>,
    on_delete: EventHandler<Course>,
) -> Element {
    let price = course.price.unwrap_or(0.0);
    let duration = course.duration.clone().unwrap_or_else(|| "0".to_string());
    let level = course.level.clone().unwrap_or_else(|| "Beginner".to_string());
    let students = course.total_students.unwrap_or(0);

    let for_approve = course.clone();
    let for_reject = course.clone();
    let for_edit = course.clone();
    let for_delete = course.clone();

    rsx! {
        div { class: "approval-card",
            header {
                class: "approval-card-header",
                "data-approved": "{course.approved}",
                div { class: "approval-card-title-row",
                    h3 { "{course.title}" }
                    if course.approved {
                        Badge { variant: BadgeVariant::Success, "Approved" }
                    } else {
                        Badge { variant: BadgeVariant::Warning, "Pending Review" }
                    }
                }
                p { class: "approval-card-instructor", "By {course.instructor_name()}" }
            }

            div { class: "approval-card-body",
                p { class: "approval-card-description", "{course.description}" }

                div { class: "approval-card-metrics",
                    div { class: "approval-metric",
                        span { class: "approval-metric-label", "Price" }
                        span { class: "approval-metric-value", "\u{20b9}{price}" }
                    }
                    div { class: "approval-metric",
                        span { class: "approval-metric-label", "Duration" }
                        span { class: "approval-metric-value", "{duration}h" }
                    }
                    div { class: "approval-metric",
                        span { class: "approval-metric-label", "Level" }
                        span { class: "approval-metric-value", "{level}" }
                    }
                    div { class: "approval-metric",
                        span { class: "approval-metric-label", "Students" }
                        span { class: "approval-metric-value", "{students}" }
                    }
                }

                div { class: "approval-card-actions",
                    if !course.approved {
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| on_approve.call(for_approve.clone()),
                            "Approve"
                        }
                        Button {
                            variant: ButtonVariant::Destructive,
                            onclick: move |_| on_reject.call(for_reject.clone()),
                            "Reject"
                        }
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_edit.call(for_edit.clone()),
                        "Edit"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_delete.call(for_delete.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Badge, BadgeVariant, Button,
    ButtonVariant, Card, CardContent, CardHeader, CardTitle, PageActions, PageHeader, PageSubtitle,
    PageTitle, Skeleton, ToastOptions,
};

use api_client::api::instructor as instructor_api;
use shared_types::{AppError, AppErrorKind, CourseSummary, Lesson};

use crate::components::stat_card::StatCard;
use crate::routes::Route;

/// Management hub for one course: info, rollup stats, quick links, and the
/// lesson list with edit/delete controls.
#[component]
pub fn CourseDetailPage(id: i64) -> Element {
    let toast = use_toast();
    let mut delete_target = use_signal(|| Option::<Lesson>::None);

    let mut data = use_resource(move || async move {
        let course = instructor_api::get_course(id).await?;
        let lessons = instructor_api::list_lessons(id).await;
        Ok::<(CourseSummary, Vec<Lesson>), AppError>((course, lessons))
    });
    let mut stats = use_resource(move || async move { instructor_api::course_stats(id).await });

    let handle_delete = move |_| {
        let Some(lesson) = delete_target.read().clone() else {
            return;
        };
        spawn(async move {
            match instructor_api::delete_lesson(lesson.id).await {
                Ok(message) => {
                    toast.success(message, ToastOptions::new());
                    data.restart();
                    stats.restart();
                }
                Err(e) => {
                    toast.error(e.user_message(), ToastOptions::new());
                }
            }
            delete_target.set(None);
        });
    };

    // The rollup is an enrichment; the page stands without it.
    let stats_strip = match &*stats.read() {
        Some(Ok(rollup)) => rsx! {
            div { class: "stat-grid",
                StatCard { label: "Enrolled Students", value: rollup.enrollment_count.to_string() }
                StatCard { label: "Total Lessons", value: rollup.total_lessons.to_string() }
                StatCard { label: "Revenue", value: format!("\u{20b9}{}", rollup.total_revenue) }
            }
        },
        _ => rsx! {},
    };

    let body = match &*data.read() {
        Some(Ok((course, lessons))) => {
            let description = if course.description.is_empty() {
                "No description provided".to_string()
            } else {
                course.description.clone()
            };

            rsx! {
                PageHeader {
                    div {
                        PageTitle { "{course.title}" }
                        PageSubtitle { "Manage your course content and settings" }
                    }
                    PageActions {
                        Link {
                            to: Route::AddLesson { id },
                            class: "button",
                            "data-style": "primary",
                            "Add Lessons"
                        }
                        Link {
                            to: Route::EnrolledStudents { id },
                            class: "button",
                            "data-style": "secondary",
                            "View Students"
                        }
                    }
                }

                {stats_strip}

                div { class: "course-detail-grid",
                    Card {
                        CardHeader {
                            CardTitle { "Course Information" }
                        }
                        CardContent {
                            div { class: "detail-field",
                                label { "Description" }
                                p { "{description}" }
                            }
                            div { class: "detail-field",
                                label { "Status" }
                                p {
                                    if course.approved {
                                        Badge { variant: BadgeVariant::Success, "Published" }
                                    } else {
                                        Badge { variant: BadgeVariant::Warning, "Pending Approval" }
                                    }
                                }
                            }
                        }
                    }

                    Card {
                        CardHeader {
                            CardTitle { "Quick Actions" }
                        }
                        CardContent {
                            div { class: "quick-actions",
                                Link {
                                    to: Route::AddLesson { id },
                                    class: "quick-action-link",
                                    "Add Lessons"
                                }
                                Link {
                                    to: Route::EnrolledStudents { id },
                                    class: "quick-action-link",
                                    "View Enrollments"
                                }
                                Link {
                                    to: Route::MediaUpload { id },
                                    class: "quick-action-link",
                                    "Upload Media"
                                }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Course Lessons" }
                        span { class: "lesson-count", "{lessons.len()} lessons" }
                    }
                    CardContent {
                        if lessons.is_empty() {
                            div { class: "empty-state",
                                h3 { "No lessons yet" }
                                p { "Start by adding lessons to your course" }
                                Link {
                                    to: Route::AddLesson { id },
                                    class: "button",
                                    "data-style": "primary",
                                    "Add First Lesson"
                                }
                            }
                        } else {
                            div { class: "lesson-list",
                                for (index , lesson) in lessons.clone().into_iter().enumerate() {
                                    LessonRow {
                                        key: "{lesson.id}",
                                        index,
                                        lesson,
                                        on_delete: move |lesson: Lesson| delete_target.set(Some(lesson)),
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
                Link {
                    to: Route::InstructorDashboard {},
                    class: "button",
                    "data-style": "primary",
                    "Back to Dashboard"
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
        document::Link { rel: "stylesheet", href: asset!("./instructor.css") }

        div { class: "page-stack",
            {body}

            AlertDialogRoot {
                open: delete_target.read().is_some(),
                on_open_change: move |open: bool| {
                    if !open {
                        delete_target.set(None);
                    }
                },
                AlertDialogContent {
                    AlertDialogTitle { "Delete Lesson" }
                    AlertDialogDescription { "Are you sure you want to delete this lesson?" }
                    AlertDialogActions {
                        AlertDialogCancel { "Cancel" }
                        AlertDialogAction {
                            on_click: handle_delete,
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}

/// One row in the lesson list: position circle, title, duration, preview.
#[component]
fn LessonRow(index: usize, lesson: Lesson, on_delete: EventHandler<Lesson>) -> Element {
    let number = index + 1;
    let duration = format_duration(lesson.duration_seconds);
    let meta = match &lesson.content {
        Some(content) if !content.is_empty() => {
            let preview: String = content.chars().take(50).collect();
            format!("{duration} \u{2022} {preview}...")
        }
        _ => duration,
    };
    let lesson_for_delete = lesson.clone();

    rsx! {
        div { class: "lesson-row",
            div { class: "lesson-row-main",
                div { class: "lesson-number", "{number}" }
                div {
                    h3 { "{lesson.title}" }
                    p { class: "lesson-meta", "{meta}" }
                }
            }
            div { class: "lesson-row-actions",
                Link { to: Route::EditLesson { lesson_id: lesson.id },
                    Button { variant: ButtonVariant::Ghost, "Edit" }
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| on_delete.call(lesson_for_delete.clone()),
                    "Delete"
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

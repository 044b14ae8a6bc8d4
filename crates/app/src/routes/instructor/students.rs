use dioxus::prelude::*;
use shared_ui::{
    use_toast, Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, PageHeader,
    PageSubtitle, PageTitle, Progress, ProgressIndicator, Skeleton, ToastOptions,
};

use api_client::api::instructor as instructor_api;
use shared_types::{AppError, CourseSummary, EnrolledStudent};

use crate::components::stat_card::StatCard;

/// Roster of students enrolled in one course, with progress rollups.
#[component]
pub fn EnrolledStudentsPage(id: i64) -> Element {
    let toast = use_toast();

    let data = use_resource(move || async move {
        let course = instructor_api::get_course(id).await?;
        let students = instructor_api::enrolled_students(id).await;
        Ok::<(CourseSummary, Vec<EnrolledStudent>), AppError>((course, students))
    });

    use_effect(move || {
        if let Some(Ok((_, students))) = &*data.read() {
            if students.is_empty() {
                toast.info("No students enrolled yet".to_string(), ToastOptions::new());
            }
        }
    });

    let body = match &*data.read() {
        Some(Ok((course, students))) => {
            let total = students.len();
            let avg_progress = if total > 0 {
                let sum: f64 = students.iter().map(|s| s.progress.unwrap_or(0.0)).sum();
                (sum / total as f64).round() as i64
            } else {
                0
            };
            let completed = students
                .iter()
                .filter(|s| s.progress.unwrap_or(0.0) >= 100.0)
                .count();
            let active = students
                .iter()
                .filter(|s| {
                    let p = s.progress.unwrap_or(0.0);
                    p > 0.0 && p < 100.0
                })
                .count();

            rsx! {
                PageHeader {
                    div {
                        PageTitle { "Enrolled Students" }
                        PageSubtitle { "{course.title} \u{2022} {total} students enrolled" }
                    }
                }

                div { class: "stat-grid",
                    StatCard { label: "Total Students", value: total.to_string() }
                    StatCard { label: "Avg. Progress", value: format!("{avg_progress}%") }
                    StatCard { label: "Completed", value: completed.to_string() }
                    StatCard { label: "Active", value: active.to_string() }
                }

                Card {
                    CardHeader {
                        CardTitle { "Student List" }
                    }
                    CardContent {
                        if students.is_empty() {
                            div { class: "empty-state",
                                h3 { "No students enrolled yet" }
                                p { "Students will appear here once they enroll in this course" }
                            }
                        } else {
                            DataTable {
                                DataTableHeader {
                                    DataTableColumn { "Student" }
                                    DataTableColumn { "Enrollment Date" }
                                    DataTableColumn { "Progress" }
                                    DataTableColumn { "Status" }
                                }
                                DataTableBody {
                                    for student in students.clone() {
                                        StudentRow { key: "{student.id}", student }
                                    }
                                }
                            }
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
        div { class: "page-stack", {body} }
    }
}

#[component]
fn StudentRow(student: EnrolledStudent) -> Element {
    let name = student.display_name();
    let email = student.email.clone().unwrap_or_else(|| "No email".to_string());
    let enrolled = student
        .enrolled_at
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let progress = student.progress.unwrap_or(0.0);
    let progress_pct = progress.round() as i64;

    let (status_variant, status_label) = if progress >= 100.0 {
        (BadgeVariant::Success, "Completed")
    } else if progress > 0.0 {
        (BadgeVariant::Primary, "In Progress")
    } else {
        (BadgeVariant::Secondary, "Not Started")
    };

    rsx! {
        DataTableRow {
            DataTableCell {
                div {
                    div { class: "student-cell-name", "{name}" }
                    div { class: "student-cell-email", "{email}" }
                }
            }
            DataTableCell { "{enrolled}" }
            DataTableCell {
                div { class: "student-progress",
                    Progress { value: Some(progress), ProgressIndicator {} }
                    span { "{progress_pct}%" }
                }
            }
            DataTableCell {
                Badge { variant: status_variant, "{status_label}" }
            }
        }
    }
}

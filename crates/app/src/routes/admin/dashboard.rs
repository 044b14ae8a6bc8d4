use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, PageHeader, PageTitle, Skeleton};

use api_client::api::admin as admin_api;
use shared_types::{ActivityItem, AdminStats, AppError};

use crate::components::stat_card::StatCard;
use crate::routes::Route;

/// Platform totals and the recent-activity feed.
#[component]
pub fn AdminDashboardPage() -> Element {
    let data = use_resource(move || async move {
        let stats = admin_api::admin_stats().await?;
        let activity = admin_api::recent_activity().await.unwrap_or_default();
        Ok::<(AdminStats, Vec<ActivityItem>), AppError>((stats, activity))
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "page-stack",
            PageHeader {
                PageTitle { "Admin Dashboard" }
            }

            match &*data.read() {
                Some(Ok((stats, activity))) => rsx! {
                    div { class: "stat-grid",
                        StatCard { label: "Total Users", value: stats.total_users.to_string() }
                        StatCard { label: "Total Courses", value: stats.total_courses.to_string() }
                        StatCard { label: "Pending Approvals", value: stats.pending_courses.to_string() }
                        StatCard { label: "Total Revenue", value: format!("\u{20b9}{}", stats.total_revenue) }
                    }

                    div { class: "admin-dashboard-columns",
                        Card {
                            CardHeader {
                                CardTitle { "Recent Activity" }
                            }
                            CardContent {
                                if activity.is_empty() {
                                    p { class: "admin-activity-empty", "No recent activity" }
                                } else {
                                    ul { class: "admin-activity-list",
                                        for item in activity.iter() {
                                            li {
                                                key: "{item.kind}-{item.id}",
                                                class: "admin-activity-item",
                                                span { class: "admin-activity-icon", "{item.icon}" }
                                                div { class: "admin-activity-body",
                                                    p { class: "admin-activity-message", "{item.message}" }
                                                    span { class: "admin-activity-time", "{item.time}" }
                                                }
                                            }
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
                                div { class: "admin-quick-actions",
                                    Link { to: Route::UserManagement {}, class: "admin-quick-action",
                                        "Manage Users"
                                    }
                                    Link { to: Route::CourseApproval {}, class: "admin-quick-action",
                                        "Review Pending Courses"
                                    }
                                }
                            }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    div { class: "page-error", "{e.user_message()}" }
                },
                None => rsx! {
                    div { class: "stat-grid",
                        Skeleton {}
                        Skeleton {}
                        Skeleton {}
                        Skeleton {}
                    }
                },
            }
        }
    }
}

use std::collections::BTreeSet;

use dioxus::prelude::*;
use shared_ui::{use_toast, Input, SearchBar, Skeleton, ToastOptions};

use api_client::api::student as student_api;
use shared_types::Course;

use crate::components::course_card::CourseCard;
use crate::routes::Route;

/// Browsable catalog of published courses with search, category, and level
/// filters. The backend already excludes courses the student is enrolled in,
/// so a successful enrollment just reloads the list.
#[component]
pub fn CourseCatalogPage() -> Element {
    let toast = use_toast();

    let mut search = use_signal(String::new);
    let mut category = use_signal(|| "all".to_string());
    let mut level = use_signal(|| "all".to_string());
    let mut enrolling = use_signal(|| None::<i64>);

    let mut available = use_resource(move || async move { student_api::available_courses().await });

    let handle_enroll = move |course_id: i64| {
        if enrolling.read().is_some() {
            return;
        }
        enrolling.set(Some(course_id));
        spawn(async move {
            match student_api::enroll(course_id).await {
                Ok(response) => {
                    toast.success(response.message, ToastOptions::new());
                    available.restart();
                }
                Err(e) => toast.error(e.user_message(), ToastOptions::new()),
            }
            enrolling.set(None);
        });
    };

    let body = match &*available.read() {
        Some(Ok(courses)) => {
            let query = search.read().to_lowercase();
            let selected_category = category.read().clone();
            let selected_level = level.read().clone();

            let filtered: Vec<Course> = courses
                .iter()
                .filter(|course| {
                    let matches_search = course.title.to_lowercase().contains(&query)
                        || course.description.to_lowercase().contains(&query)
                        || course.instructor_name().to_lowercase().contains(&query);
                    let matches_category = selected_category == "all"
                        || course.category.as_deref() == Some(selected_category.as_str());
                    let matches_level = selected_level == "all"
                        || course.level.as_deref() == Some(selected_level.as_str());
                    matches_search && matches_category && matches_level
                })
                .cloned()
                .collect();

            let categories: BTreeSet<String> =
                courses.iter().filter_map(|c| c.category.clone()).collect();
            let levels: BTreeSet<String> =
                courses.iter().filter_map(|c| c.level.clone()).collect();
            let filters_active =
                !query.is_empty() || selected_category != "all" || selected_level != "all";

            rsx! {
                SearchBar {
                    Input {
                        value: search.read().clone(),
                        placeholder: "Search courses, instructors, or topics...",
                        label: "",
                        on_input: move |evt: FormEvent| search.set(evt.value().to_string()),
                    }
                    div { class: "catalog-filter",
                        label { class: "input-label", "Category" }
                        select {
                            class: "input",
                            value: category.read().clone(),
                            onchange: move |e: FormEvent| category.set(e.value().to_string()),
                            option { value: "all", "All Categories" }
                            for item in categories {
                                option { value: "{item}", "{item}" }
                            }
                        }
                    }
                    div { class: "catalog-filter",
                        label { class: "input-label", "Difficulty Level" }
                        select {
                            class: "input",
                            value: level.read().clone(),
                            onchange: move |e: FormEvent| level.set(e.value().to_string()),
                            option { value: "all", "All Levels" }
                            for item in levels {
                                option { value: "{item}", "{item}" }
                            }
                        }
                    }
                    p { class: "catalog-result-count",
                        "Showing {filtered.len()} of {courses.len()} courses"
                    }
                }

                if filtered.is_empty() {
                    div { class: "empty-state",
                        h3 { "No courses found" }
                        if filters_active {
                            p { "Try adjusting your search or filters to find more courses." }
                            button {
                                class: "button",
                                "data-style": "primary",
                                onclick: move |_| {
                                    search.set(String::new());
                                    category.set("all".to_string());
                                    level.set("all".to_string());
                                },
                                "Clear Filters"
                            }
                        } else {
                            p { "No courses available at the moment. Please check back later." }
                        }
                    }
                } else {
                    div { class: "catalog-grid",
                        for course in filtered {
                            CourseCard {
                                key: "{course.id}",
                                enrolling: *enrolling.read() == Some(course.id),
                                on_view: move |course_id: i64| {
                                    navigator().push(Route::CourseViewer { id: course_id });
                                },
                                on_enroll: handle_enroll,
                                course,
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
        document::Link { rel: "stylesheet", href: asset!("./student.css") }

        div { class: "page-stack",
            div { class: "catalog-hero",
                h1 { "Explore Our Courses" }
                p {
                    "Discover new skills, advance your career, and join thousands of students "
                    "in their learning journey. Choose from our carefully curated courses."
                }
            }

            {body}
        }
    }
}

use dioxus::prelude::*;

use shared_types::Course;
use shared_ui::{Button, ButtonVariant};

/// Course tile used in the student catalog and dashboard grids.
///
/// The enroll button only renders when `on_enroll` is wired up, so enrolled
/// views reuse the same card without the action.
#[component]
pub fn CourseCard(
    course: Course,
    on_view: EventHandler<i64>,
    #[props(default)] on_enroll: Option<EventHandler<i64>>,
    #[props(default = false)] enrolling: bool,
) -> Element {
    let course_id = course.id;
    let price_label = match course.price {
        Some(price) if price > 0.0 => format!("\u{20b9}{price:.0}"),
        _ => "Free".to_string(),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./course_card.css") }

        div { class: "course-card",
            div { class: "course-card-cover",
                if let Some(url) = course.cover_image_url.as_ref() {
                    img { src: url.clone(), alt: course.title.clone() }
                } else {
                    span { class: "course-card-cover-fallback", "No image" }
                }
            }

            div { class: "course-card-body",
                h3 { class: "course-card-title", "{course.title}" }
                p { class: "course-card-description", "{course.description}" }
                p { class: "course-card-instructor",
                    "Instructor: {course.instructor_name()}"
                }
            }

            div { class: "course-card-footer",
                span { class: "course-card-price", "{price_label}" }
                div { class: "course-card-actions",
                    if let Some(enroll) = on_enroll {
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: enrolling,
                            onclick: move |_| enroll.call(course_id),
                            if enrolling { "Enrolling..." } else { "Enroll" }
                        }
                    }
                    Button {
                        onclick: move |_| on_view.call(course_id),
                        "View"
                    }
                }
            }
        }
    }
}

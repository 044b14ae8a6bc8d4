use dioxus::prelude::*;
use shared_ui::Skeleton;

use api_client::api::courses as course_api;
use api_client::session::Session;
use shared_types::Course;

use crate::auth;
use crate::components::course_card::CourseCard;
use crate::routes::Route;

/// Public landing page: hero, the first ten approved courses, and a few
/// marketing bands. Reachable signed in or out.
#[component]
pub fn Home() -> Element {
    let visitor = use_resource(move || async move { auth::restore_session().await });
    let session = visitor.read().as_ref().cloned().flatten();

    let catalog = use_resource(move || async move {
        course_api::list_courses().await.map(|courses| {
            courses
                .into_iter()
                .filter(|c| c.approved)
                .collect::<Vec<_>>()
        })
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        div { class: "home-page",
            HomeNav { session: session.clone() }

            section { class: "home-hero",
                h1 { class: "home-hero-title",
                    "Advance Your Career With"
                    span { class: "home-hero-accent", "Expert-Led Courses" }
                }
                p { class: "home-hero-subtitle",
                    "Learn from industry professionals and master new skills with our curated course collection."
                }
                div { class: "home-hero-actions",
                    Link {
                        to: Route::CourseCatalog {},
                        class: "home-cta-primary",
                        if session.is_some() { "Browse Courses" } else { "Start Learning" }
                    }
                    Link {
                        to: Route::CourseCatalog {},
                        class: "home-cta-secondary",
                        "View All Courses"
                    }
                }
            }

            section { class: "home-featured",
                div { class: "home-section-heading",
                    h2 { "Featured Courses" }
                    p { "Handpicked courses to boost your skills" }
                }

                match &*catalog.read() {
                    Some(Ok(courses)) => rsx! {
                        FeaturedCourses { courses: courses.clone(), signed_in: session.is_some() }
                    },
                    Some(Err(e)) => rsx! {
                        div { class: "page-error", "{e.user_message()}" }
                    },
                    None => rsx! {
                        div { class: "home-course-grid",
                            Skeleton {}
                            Skeleton {}
                            Skeleton {}
                        }
                    },
                }
            }

            StatsBand { course_count: approved_count(&catalog.read()) }

            section { class: "home-features",
                div { class: "home-section-heading",
                    h2 { "Why Learn With Us?" }
                }
                div { class: "home-feature-grid",
                    div { class: "home-feature",
                        div { class: "home-feature-icon", "\u{1f3af}" }
                        h3 { "Expert Instructors" }
                        p { "Learn from industry professionals with real-world experience" }
                    }
                    div { class: "home-feature",
                        div { class: "home-feature-icon", "\u{1f4da}" }
                        h3 { "Quality Content" }
                        p { "Well-structured courses with practical projects and exercises" }
                    }
                    div { class: "home-feature",
                        div { class: "home-feature-icon", "\u{1f4bc}" }
                        h3 { "Career Focused" }
                        p { "Skills that matter in today's competitive job market" }
                    }
                }
            }

            section { class: "home-cta-band",
                h2 { "Ready to Start Learning?" }
                p { "Join thousands of students advancing their careers" }
                Link {
                    to: if session.is_some() { Route::CourseCatalog {} } else { Route::Login {} },
                    class: "home-cta-invert",
                    if session.is_some() { "Continue Learning" } else { "Get Started Now" }
                }
            }
        }
    }
}

fn approved_count(
    state: &Option<Result<Vec<Course>, shared_types::AppError>>,
) -> usize {
    match state {
        Some(Ok(courses)) => courses.len(),
        _ => 0,
    }
}

/// Public top bar. Signed-in visitors get a link to their portal and a
/// logout button; everyone else gets login and signup.
#[component]
fn HomeNav(session: Option<Session>) -> Element {
    let mut auth = crate::auth::use_auth();

    let portal = session.as_ref().map(|s| {
        let label = match s.role {
            shared_types::Role::Admin => "Admin",
            shared_types::Role::Instructor => "Instructor",
            shared_types::Role::Student => "Student",
        };
        (label, auth::dashboard_route(s.role))
    });

    rsx! {
        nav { class: "home-nav",
            div { class: "home-nav-left",
                Link { to: Route::Home {}, class: "home-nav-brand", "ByteLMS" }
                Link { to: Route::Home {}, class: "home-nav-link", "Home" }
                Link { to: Route::CourseCatalog {}, class: "home-nav-link", "Courses" }
            }
            div { class: "home-nav-right",
                if let Some((label, destination)) = portal {
                    Link { to: destination, class: "home-nav-link", "{label}" }
                }
                if let Some(s) = session {
                    span { class: "home-nav-greeting",
                        "Hi, "
                        strong { "{s.username}" }
                    }
                    button {
                        class: "home-nav-logout",
                        onclick: move |_| {
                            auth::sign_out(&mut auth);
                            navigator().push(Route::Home {});
                        },
                        "Logout"
                    }
                } else {
                    Link { to: Route::Login {}, class: "home-nav-login", "Login" }
                    Link { to: Route::Signup {}, class: "home-nav-signup", "Sign up" }
                }
            }
        }
    }
}

#[component]
fn FeaturedCourses(courses: Vec<Course>, signed_in: bool) -> Element {
    let featured: Vec<Course> = courses.iter().take(10).cloned().collect();

    if featured.is_empty() {
        return rsx! {
            div { class: "empty-state",
                h3 { "No courses available" }
                p { "New courses coming soon!" }
            }
        };
    }

    rsx! {
        div { class: "home-course-grid",
            for course in featured {
                CourseCard {
                    key: "{course.id}",
                    course: course.clone(),
                    on_view: move |id| {
                        if signed_in {
                            navigator().push(Route::CourseViewer { id });
                        } else {
                            navigator().push(Route::Login {});
                        }
                    },
                }
            }
        }
        if courses.len() > 6 {
            div { class: "home-view-all",
                Link { to: Route::CourseCatalog {},
                    "View All Courses ({courses.len()})"
                }
            }
        }
    }
}

#[component]
fn StatsBand(course_count: usize) -> Element {
    rsx! {
        section { class: "home-stats",
            div { class: "home-stat",
                div { class: "home-stat-value", "{course_count}+" }
                div { class: "home-stat-label", "Courses" }
            }
            div { class: "home-stat",
                div { class: "home-stat-value", "10K+" }
                div { class: "home-stat-label", "Students" }
            }
            div { class: "home-stat",
                div { class: "home-stat-value", "100+" }
                div { class: "home-stat-label", "Instructors" }
            }
            div { class: "home-stat",
                div { class: "home-stat-value", "94%" }
                div { class: "home-stat-label", "Success Rate" }
            }
        }
    }
}

pub mod admin;
pub mod home;
pub mod instructor;
pub mod login;
pub mod not_found;
pub mod signup;
pub mod student;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdLayoutDashboard, LdSearch, LdUsers};
use dioxus_free_icons::Icon;

use api_client::session::Session;
use shared_types::Role;
use shared_ui::{
    Navbar, Separator, Sidebar, SidebarContent, SidebarFooter, SidebarGroup, SidebarGroupContent,
    SidebarGroupLabel, SidebarHeader, SidebarInset, SidebarMenu, SidebarMenuButton,
    SidebarMenuItem, SidebarProvider, SidebarSeparator, SidebarTrigger,
};

use crate::auth::{self, use_auth};

use home::Home;
use login::Login;
use not_found::NotFound;
use signup::Signup;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[layout(PublicOnly)]
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[end_layout]
    // ── Admin ──
    #[layout(AdminPortal)]
    #[route("/admin/dashboard")]
    AdminDashboard {},
    #[route("/admin/users")]
    UserManagement {},
    #[route("/admin/courses")]
    CourseApproval {},
    #[end_layout]
    // ── Instructor ──
    #[layout(InstructorPortal)]
    #[route("/instructor/dashboard")]
    InstructorDashboard {},
    #[route("/instructor/courses")]
    MyCourses {},
    #[route("/instructor/courses/new")]
    CreateCourse {},
    #[route("/instructor/courses/:id")]
    CourseDetail { id: i64 },
    #[route("/instructor/courses/:id/lessons/new")]
    AddLesson { id: i64 },
    #[route("/instructor/lessons/:lesson_id/edit")]
    EditLesson { lesson_id: i64 },
    #[route("/instructor/courses/:id/students")]
    EnrolledStudents { id: i64 },
    #[route("/instructor/courses/:id/media")]
    MediaUpload { id: i64 },
    #[end_layout]
    // ── Student ──
    #[layout(StudentPortal)]
    #[route("/student/dashboard")]
    StudentDashboard {},
    #[route("/courses")]
    CourseCatalog {},
    #[route("/student/learning")]
    MyLearning {},
    #[route("/student/course/:id")]
    CourseViewer { id: i64 },
    #[route("/student/course/:course_id/lesson/:lesson_id")]
    LessonView { course_id: i64, lesson_id: i64 },
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Where a guarded portal should send the visitor, if anywhere.
///
/// `None` keeps them on the page. A session with the wrong role is sent to
/// `/login`, which bounces signed-in users onward to their own dashboard.
fn guard_redirect(session: Option<&Session>, required: Role) -> Option<Route> {
    match session {
        Some(session) if session.role == required => None,
        _ => Some(Route::Login {}),
    }
}

/// Login and signup bounce signed-in users to their role dashboard.
fn public_redirect(session: Option<&Session>) -> Option<Route> {
    session.map(|s| auth::dashboard_route(s.role))
}

/// Keeps `/login` and `/signup` off-limits once signed in.
#[component]
fn PublicOnly() -> Element {
    let resource = use_resource(move || async move { auth::restore_session().await });
    let result = resource.read().as_ref().cloned();

    match result {
        Some(restored) => match public_redirect(restored.as_ref()) {
            Some(destination) => {
                navigator().push(destination);
                rsx! {
                    div { class: "route-guard-loading",
                        p { "Redirecting..." }
                    }
                }
            }
            None => rsx! { Outlet::<Route> {} },
        },
        None => {
            rsx! {
                div { class: "route-guard-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}

#[component]
fn AdminPortal() -> Element {
    rsx! { PortalLayout { role: Role::Admin } }
}

#[component]
fn InstructorPortal() -> Element {
    rsx! { PortalLayout { role: Role::Instructor } }
}

#[component]
fn StudentPortal() -> Element {
    rsx! { PortalLayout { role: Role::Student } }
}

/// Role guard wrapping each portal section.
///
/// Restores the stored session on first render, showing a loading shell
/// until the check completes. Visitors without a session for `role` are
/// redirected the way the backend would reject them.
#[component]
fn PortalLayout(role: Role) -> Element {
    let mut auth = use_auth();

    let resource = use_resource(move || async move { auth::restore_session().await });
    let result = resource.read().as_ref().cloned();

    match result {
        Some(restored) => match guard_redirect(restored.as_ref(), role) {
            Some(destination) => {
                navigator().push(destination);
                rsx! {
                    div { class: "route-guard-loading",
                        p { "Redirecting to login..." }
                    }
                }
            }
            None => {
                if let Some(session) = restored {
                    if !auth.is_authenticated() {
                        auth.set_session(session);
                    }
                }
                rsx! { PortalChrome { role } }
            }
        },
        None => {
            rsx! {
                div { class: "route-guard-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}

/// Portal shell with role sidebar and top navbar.
#[component]
fn PortalChrome(role: Role) -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();

    let (username, email) = auth
        .session
        .read()
        .as_ref()
        .map(|s| (s.username.clone(), s.email.clone()))
        .unwrap_or_default();

    let portal_label = match role {
        Role::Admin => "Admin Panel",
        Role::Instructor => "Instructor",
        Role::Student => "Student Portal",
    };

    let page_title = match &route {
        Route::AdminDashboard {} => "Admin Dashboard",
        Route::UserManagement {} => "User Management",
        Route::CourseApproval {} => "Course Management",
        Route::InstructorDashboard {} => "Instructor Dashboard",
        Route::MyCourses {} => "My Courses",
        Route::CreateCourse {} => "Create New Course",
        Route::CourseDetail { .. } => "Course Details",
        Route::AddLesson { .. } => "Add Lesson",
        Route::EditLesson { .. } => "Edit Lesson",
        Route::EnrolledStudents { .. } => "Enrolled Students",
        Route::MediaUpload { .. } => "Media Upload",
        Route::StudentDashboard {} => "Student Dashboard",
        Route::CourseCatalog {} => "Browse Courses",
        Route::MyLearning {} => "My Learning",
        Route::CourseViewer { .. } => "Course",
        Route::LessonView { .. } => "Lesson",
        _ => "",
    };

    let nav = match role {
        Role::Admin => rsx! { AdminNav { route: route.clone() } },
        Role::Instructor => rsx! { InstructorNav { route: route.clone() } },
        Role::Student => rsx! { StudentNav { route: route.clone() } },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider {
            Sidebar {
                SidebarHeader {
                    div {
                        class: "sidebar-brand",
                        span {
                            class: "sidebar-brand-name",
                            "ByteLMS"
                        }
                        span {
                            class: "sidebar-brand-portal",
                            "{portal_label}"
                        }
                    }
                }

                SidebarSeparator {}

                SidebarContent {
                    {nav}
                }

                SidebarFooter {
                    div {
                        class: "sidebar-user",
                        span { class: "sidebar-user-name", "{username}" }
                        span { class: "sidebar-user-email", "{email}" }
                    }
                    button {
                        class: "sidebar-signout",
                        onclick: move |_| {
                            auth::sign_out(&mut auth);
                            navigator().push(Route::Login {});
                        },
                        "Sign Out"
                    }
                }
            }

            SidebarInset {
                // Top navbar
                Navbar {
                    div {
                        class: "navbar-bar",

                        SidebarTrigger {
                            span { class: "navbar-trigger-icon", "\u{2630}" }
                        }

                        Separator { horizontal: false }

                        span {
                            class: "navbar-title",
                            "{page_title}"
                        }

                        // Spacer
                        div { class: "navbar-spacer" }

                        Link {
                            to: Route::Home {},
                            class: "navbar-home-link",
                            "Home"
                        }
                    }
                }

                // Page content
                div {
                    class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn AdminNav(route: Route) -> Element {
    rsx! {
        SidebarGroup {
            SidebarGroupLabel { "Administration" }
            SidebarGroupContent {
                SidebarMenu {
                    SidebarMenuItem {
                        Link { to: Route::AdminDashboard {},
                            SidebarMenuButton { active: matches!(route, Route::AdminDashboard {}),
                                Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                "Dashboard"
                            }
                        }
                    }
                    SidebarMenuItem {
                        Link { to: Route::UserManagement {},
                            SidebarMenuButton { active: matches!(route, Route::UserManagement {}),
                                Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                                "Manage Users"
                            }
                        }
                    }
                    SidebarMenuItem {
                        Link { to: Route::CourseApproval {},
                            SidebarMenuButton { active: matches!(route, Route::CourseApproval {}),
                                Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 }
                                "Manage Courses"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn InstructorNav(route: Route) -> Element {
    rsx! {
        SidebarGroup {
            SidebarGroupLabel { "Teaching" }
            SidebarGroupContent {
                SidebarMenu {
                    SidebarMenuItem {
                        Link { to: Route::InstructorDashboard {},
                            SidebarMenuButton { active: matches!(route, Route::InstructorDashboard {}),
                                Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                "Dashboard"
                            }
                        }
                    }
                    SidebarMenuItem {
                        Link { to: Route::MyCourses {},
                            SidebarMenuButton { active: matches!(route, Route::MyCourses {} | Route::CourseDetail { .. } | Route::AddLesson { .. } | Route::EditLesson { .. } | Route::EnrolledStudents { .. } | Route::MediaUpload { .. }),
                                Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 }
                                "My Courses"
                            }
                        }
                    }
                    SidebarMenuItem {
                        Link { to: Route::CreateCourse {},
                            SidebarMenuButton { active: matches!(route, Route::CreateCourse {}),
                                "Create Course"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StudentNav(route: Route) -> Element {
    rsx! {
        SidebarGroup {
            SidebarGroupLabel { "Learning" }
            SidebarGroupContent {
                SidebarMenu {
                    SidebarMenuItem {
                        Link { to: Route::StudentDashboard {},
                            SidebarMenuButton { active: matches!(route, Route::StudentDashboard {}),
                                Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                "Dashboard"
                            }
                        }
                    }
                    SidebarMenuItem {
                        Link { to: Route::CourseCatalog {},
                            SidebarMenuButton { active: matches!(route, Route::CourseCatalog {}),
                                Icon::<LdSearch> { icon: LdSearch, width: 18, height: 18 }
                                "Browse Courses"
                            }
                        }
                    }
                    SidebarMenuItem {
                        Link { to: Route::MyLearning {},
                            SidebarMenuButton { active: matches!(route, Route::MyLearning {} | Route::CourseViewer { .. } | Route::LessonView { .. }),
                                Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 }
                                "My Learning"
                            }
                        }
                    }
                }
            }
        }
    }
}

// ── Admin route components ──

#[component]
fn AdminDashboard() -> Element {
    admin::dashboard::AdminDashboardPage()
}

#[component]
fn UserManagement() -> Element {
    admin::users::UserManagementPage()
}

#[component]
fn CourseApproval() -> Element {
    admin::courses::CourseApprovalPage()
}

// ── Instructor route components ──

#[component]
fn InstructorDashboard() -> Element {
    instructor::dashboard::InstructorDashboardPage()
}

#[component]
fn MyCourses() -> Element {
    instructor::my_courses::MyCoursesPage()
}

#[component]
fn CreateCourse() -> Element {
    instructor::create_course::CreateCoursePage()
}

#[component]
fn CourseDetail(id: i64) -> Element {
    rsx! { instructor::course_detail::CourseDetailPage { id: id } }
}

#[component]
fn AddLesson(id: i64) -> Element {
    rsx! { instructor::add_lesson::AddLessonPage { course_id: id } }
}

#[component]
fn EditLesson(lesson_id: i64) -> Element {
    rsx! { instructor::edit_lesson::EditLessonPage { lesson_id: lesson_id } }
}

#[component]
fn EnrolledStudents(id: i64) -> Element {
    rsx! { instructor::students::EnrolledStudentsPage { id: id } }
}

#[component]
fn MediaUpload(id: i64) -> Element {
    rsx! { instructor::media::MediaUploadPage { id: id } }
}

// ── Student route components ──

#[component]
fn StudentDashboard() -> Element {
    student::dashboard::StudentDashboardPage()
}

#[component]
fn CourseCatalog() -> Element {
    student::catalog::CourseCatalogPage()
}

#[component]
fn MyLearning() -> Element {
    student::my_learning::MyLearningPage()
}

#[component]
fn CourseViewer(id: i64) -> Element {
    rsx! { student::course_viewer::CourseViewerPage { id: id } }
}

#[component]
fn LessonView(course_id: i64, lesson_id: i64) -> Element {
    rsx! { student::lesson_view::LessonViewPage { course_id: course_id, lesson_id: lesson_id } }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> Session {
        Session {
            token: "header.payload.signature".to_string(),
            role,
            email: "user@lms.dev".to_string(),
            username: "user".to_string(),
            user_id: None,
        }
    }

    #[test]
    fn guard_allows_matching_role() {
        let s = session(Role::Instructor);
        assert_eq!(guard_redirect(Some(&s), Role::Instructor), None);
    }

    #[test]
    fn guard_sends_anonymous_visitors_to_login() {
        assert_eq!(guard_redirect(None, Role::Admin), Some(Route::Login {}));
    }

    #[test]
    fn guard_sends_wrong_role_to_login() {
        let s = session(Role::Student);
        assert_eq!(
            guard_redirect(Some(&s), Role::Admin),
            Some(Route::Login {})
        );
    }

    #[test]
    fn public_pages_bounce_signed_in_users_to_their_dashboard() {
        assert_eq!(public_redirect(None), None);
        let admin = session(Role::Admin);
        assert_eq!(
            public_redirect(Some(&admin)),
            Some(Route::AdminDashboard {})
        );
        let student = session(Role::Student);
        assert_eq!(
            public_redirect(Some(&student)),
            Some(Route::StudentDashboard {})
        );
    }

    /// Every navigable route paired with the URL it renders as. The
    /// catch-all sits outside the table; it has no canonical URL.
    fn route_table() -> Vec<(Route, &'static str)> {
        vec![
            (Route::Home {}, "/"),
            (Route::Login {}, "/login"),
            (Route::Signup {}, "/signup"),
            (Route::AdminDashboard {}, "/admin/dashboard"),
            (Route::UserManagement {}, "/admin/users"),
            (Route::CourseApproval {}, "/admin/courses"),
            (Route::InstructorDashboard {}, "/instructor/dashboard"),
            (Route::MyCourses {}, "/instructor/courses"),
            // "new" is not an id; the static segment must win over
            // CourseDetail when this parses.
            (Route::CreateCourse {}, "/instructor/courses/new"),
            (Route::CourseDetail { id: 7 }, "/instructor/courses/7"),
            (Route::AddLesson { id: 7 }, "/instructor/courses/7/lessons/new"),
            (Route::EditLesson { lesson_id: 21 }, "/instructor/lessons/21/edit"),
            (Route::EnrolledStudents { id: 7 }, "/instructor/courses/7/students"),
            (Route::MediaUpload { id: 7 }, "/instructor/courses/7/media"),
            (Route::StudentDashboard {}, "/student/dashboard"),
            (Route::CourseCatalog {}, "/courses"),
            (Route::MyLearning {}, "/student/learning"),
            (Route::CourseViewer { id: 3 }, "/student/course/3"),
            (
                Route::LessonView { course_id: 3, lesson_id: 12 },
                "/student/course/3/lesson/12",
            ),
        ]
    }

    #[test]
    fn every_route_renders_its_path() {
        for (route, path) in route_table() {
            assert_eq!(route.to_string(), path);
        }
    }

    #[test]
    fn every_path_parses_back_to_its_route() {
        for (route, path) in route_table() {
            assert_eq!(path.parse::<Route>().unwrap(), route, "{path}");
        }
    }

    #[test]
    fn unknown_urls_fall_through_to_not_found() {
        let route = "/totally/unknown/path".parse::<Route>().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
    }
}

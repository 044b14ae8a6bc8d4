mod course_form;
pub mod courses;
pub mod dashboard;
pub mod users;

pub mod add_lesson;
pub mod course_detail;
pub mod create_course;
pub mod dashboard;
pub mod edit_lesson;
pub mod media;
pub mod my_courses;
pub mod students;

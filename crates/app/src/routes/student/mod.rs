pub mod catalog;
pub mod course_viewer;
pub mod dashboard;
pub mod lesson_view;
pub mod my_learning;

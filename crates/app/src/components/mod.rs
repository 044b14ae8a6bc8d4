pub mod course_card;
pub mod stat_card;

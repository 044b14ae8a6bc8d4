pub mod admin;

pub mod auth;

pub mod courses;

pub mod instructor;

pub mod lessons;

pub mod media;

pub mod student;

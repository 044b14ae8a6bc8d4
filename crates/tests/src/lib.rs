#[cfg(test)]
mod common;

#[cfg(test)]
mod login_flow_tests;

#[cfg(test)]
mod course_payload_tests;

#[cfg(test)]
mod progress_payload_tests;

#[cfg(test)]
mod stats_payload_tests;

#[cfg(test)]
mod action_response_tests;

#[cfg(test)]
mod error_response_tests;

#[cfg(test)]
mod ui_render_tests;

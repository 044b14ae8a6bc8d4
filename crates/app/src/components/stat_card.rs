use dioxus::prelude::*;

/// Small labelled figure used on the dashboard stat rows. Styling comes
/// from the global stylesheet so every portal renders them alike.
#[component]
pub fn StatCard(label: String, value: String) -> Element {
    rsx! {
        div { class: "stat-card",
            div { class: "stat-card-label", "{label}" }
            div { class: "stat-card-value", "{value}" }
        }
    }
}

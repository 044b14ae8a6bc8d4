use dioxus::prelude::*;

/// Filter bar above catalog and roster tables. Lays out inputs, selects, and
/// action buttons in a flex row.
#[component]
pub fn SearchBar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            {children}
        }
    }
}

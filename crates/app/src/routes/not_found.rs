use dioxus::prelude::*;

use crate::routes::Route;

/// Unknown paths bounce straight back to the landing page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::debug!(%path, "unknown route, redirecting home");
    navigator().push(Route::Home {});

    rsx! {
        div { class: "route-guard-loading",
            p { "Redirecting..." }
        }
    }
}

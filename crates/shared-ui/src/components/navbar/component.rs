use dioxus::prelude::*;
use dioxus_primitives::navbar as prim;

/// Top navigation bar shown on every page, holding the brand link and the
/// session controls.
#[component]
pub fn Navbar(mut props: prim::NavbarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "navbar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Navbar { ..props }
    }
}

#[component]
pub fn NavbarNav(mut props: prim::NavbarNavProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "navbar-nav", None, false));

    rsx! {
        prim::NavbarNav { ..props }
    }
}

#[component]
pub fn NavbarTrigger(mut props: prim::NavbarTriggerProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "navbar-trigger", None, false));

    rsx! {
        prim::NavbarTrigger { ..props }
    }
}

#[component]
pub fn NavbarContent(mut props: prim::NavbarContentProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "navbar-content", None, false));

    rsx! {
        prim::NavbarContent { ..props }
    }
}

#[component]
pub fn NavbarItem(mut props: prim::NavbarItemProps) -> Element {
    if props.class.is_none() {
        props.class = Some("navbar-item".to_string());
    }

    rsx! {
        prim::NavbarItem { ..props }
    }
}

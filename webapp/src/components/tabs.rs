use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

#[component]
pub fn Tabs(children: Element) -> Element {
    rsx! {
        nav { class: "tabs", {children} }
    }
}

// a tab is only a link; whether it is highlighted is the caller's call,
// made from the current path
#[derive(Clone, PartialEq, Props)]
pub struct TabProps {
    to: Route,
    label: &'static str,
    active: bool,
}

#[component]
pub fn Tab(props: TabProps) -> Element {
    rsx! {
        Link {
            class: if props.active { "tab active" } else { "tab" },
            to: props.to,
            "{props.label}"
        }
    }
}

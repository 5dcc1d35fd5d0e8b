use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{Route, stores::AUTH};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: String,
    target: Route,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let name = props.name;
    let target = props.target;

    let current_path: Route = use_route();
    rsx! {
        Link {
            class: if current_path.is_child_of(&target) || current_path == (target) { "nav-link active" } else { "nav-link" },
            to: target,
            "{name}"
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let user_name = AUTH.read().user.as_ref().map(|user| user.name.clone());

    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                nav { class: "nav-links",
                    NavBarButton {
                        name: "Home".to_owned(),
                        target: Route::RecentlyUpdated {},
                    }
                }

                if let Some(name) = user_name {
                    span { class: "nav-user", "{name}" }
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        Outlet::<Route> {}
    }
}

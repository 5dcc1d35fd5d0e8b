use dioxus::prelude::*;

// page frame with a title bar and right-aligned actions
#[derive(Clone, PartialEq, Props)]
pub struct SceneProps {
    title: String,
    #[props(default)]
    actions: Option<Element>,
    children: Element,
}

#[component]
pub fn Scene(props: SceneProps) -> Element {
    let title = props.title;

    rsx! {
        div { class: "container scene",
            div { class: "scene-header",
                span { class: "scene-title", "{title}" }
                if let Some(actions) = props.actions {
                    div { class: "scene-actions", {actions} }
                }
            }
            {props.children}
        }
    }
}

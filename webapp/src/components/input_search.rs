use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

use crate::Route;

#[derive(Clone, PartialEq, Props)]
pub struct InputSearchProps {
    // which screen the search came from, for logging and element ids
    source: &'static str,
    label: &'static str,
    #[props(default)]
    label_hidden: bool,
}

#[component]
pub fn InputSearch(props: InputSearchProps) -> Element {
    let source = props.source;
    let label = props.label;
    let input_id = format!("search-{source}");

    rsx! {
        form {
            class: "input-search",
            onsubmit: move |event| {
                let query = match event.values().get("query") {
                    Some(val) => val.as_value(),
                    None => String::from(""),
                };

                let query = query.trim().to_owned();
                if query.is_empty() {
                    return;
                }

                debug!({ source, query = query.as_str() }, "submitting search");
                navigator().push(Route::SearchResults { query });
            },
            label {
                class: if props.label_hidden { "visually-hidden" } else { "input-label" },
                r#for: "{input_id}",
                "{label}"
            }
            input {
                id: "{input_id}",
                class: "form-input",
                name: "query",
                r#type: "search",
                placeholder: "{label}…",
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::error;

use crate::{
    Route,
    stores::{self, COLLECTIONS},
};
use api::collection::Collection;

#[component]
pub fn NewDocumentMenu() -> Element {
    let mut open_signal = use_signal(|| false);
    let status_signal = use_signal(|| None::<String>);

    use_future(move || async move {
        stores::load_collections().await;
    });

    let collections = COLLECTIONS.read().clone();

    rsx! {
        div { class: "menu",
            button {
                class: "btn btn-primary",
                onclick: move |_| {
                    let open = open_signal();
                    open_signal.set(!open);
                },
                "New doc"
            }

            if open_signal() {
                div { class: "menu-items",
                    if collections.is_empty() {
                        span { class: "menu-empty", "No collections to add to" }
                    }
                    for collection in collections.iter() {
                        NewDocumentItem {
                            key: "{collection.uuid}",
                            collection: collection.clone(),
                            open_signal,
                            status_signal,
                        }
                    }
                }
            }

            if let Some(status) = status_signal() {
                span { class: "menu-error", "{status}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct NewDocumentItemProps {
    collection: Collection,
    open_signal: Signal<bool>,
    status_signal: Signal<Option<String>>,
}

#[component]
fn NewDocumentItem(props: NewDocumentItemProps) -> Element {
    let mut open_signal = props.open_signal;
    let mut status_signal = props.status_signal;
    let collection = props.collection;
    let collection_uuid = collection.uuid;

    rsx! {
        button {
            class: "menu-item",
            onclick: move |_| async move {
                open_signal.set(false);

                match stores::create_document(collection_uuid).await {
                    Ok(document_uuid) => {
                        status_signal.set(None);
                        navigator().push(Route::DocumentDetail { document_uuid });
                    }
                    Err(err) => {
                        error!("failed to create document in {collection_uuid}: {err}");
                        status_signal.set(Some(String::from("Could not create document")));
                    }
                }
            },
            span {
                class: "color-dot",
                style: "background-color: {collection.color};",
            }
            "{collection.name}"
        }
    }
}

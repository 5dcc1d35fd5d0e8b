use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

use crate::{
    Route,
    stores::{self, COLLECTIONS, CONFIG, DOCUMENTS},
    util::relative_time,
};
use api::{
    collection::Collection,
    document::{Document, DocumentUuid},
};
use common::feed::{FeedQuery, FeedState};

// one server-side feed, fetched a page at a time
//
// the list owns its paging and loading state; the documents it receives
// go into the shared collection and the rows come from the collection's
// view of the feed. callers key this by the query so a new feed starts
// from scratch
#[derive(Clone, PartialEq, Props)]
pub struct PaginatedDocumentListProps {
    query: FeedQuery,
    #[props(default)]
    show_collection: bool,
}

#[component]
pub fn PaginatedDocumentList(props: PaginatedDocumentListProps) -> Element {
    let show_collection = props.show_collection;

    let page_size = CONFIG.read().page_size;
    let query = props.query.clone();
    let feed = use_signal(|| FeedState::new(query, page_size));

    // the first page is whatever FeedState says comes next, i.e. offset 0
    let mut page_signal = use_signal(|| feed.peek().next_page());

    let feed_future = use_resource(move || async move {
        let Some(page) = page_signal() else {
            return anyhow::Result::<usize>::Ok(0);
        };

        let query = feed.peek().query().clone();
        let documents = stores::fetch_feed_page(&query, page).await?;
        let uuids: Vec<DocumentUuid> = documents.iter().map(|doc| doc.uuid).collect();

        stores::merge_documents(documents);

        let mut feed = feed;
        if !feed.write().receive(page, &uuids) {
            debug!("dropping stale page at offset {} for {}", page.offset, query.key());
        }

        Ok(uuids.len())
    });

    let now = Utc::now();
    let (rows, exhausted) = {
        let state = feed.read();
        let documents = DOCUMENTS.read();

        let rows: Vec<Document> = match documents.view(state.query()) {
            Some(view) => view.into_iter().cloned().collect(),
            None => state
                .documents()
                .iter()
                .filter_map(|uuid| documents.get(*uuid))
                .filter(|doc| doc.is_active())
                .cloned()
                .collect(),
        };

        (rows, state.is_exhausted())
    };
    let has_rows = !rows.is_empty();

    rsx! {
        div { class: "document-list",
            for document in rows.iter() {
                DocumentRow {
                    key: "{document.uuid}",
                    document: document.clone(),
                    show_collection,
                    now,
                }
            }

            match &*feed_future.read() {
                Some(Err(err)) => rsx! {
                    div { class: "error-state", "Error: {err}" }
                },
                None => rsx! {
                    for _ in 0..3 {
                        div { class: "document-row",
                            div {
                                class: "skeleton",
                                style: "width: 60%; height: 20px; margin-bottom: var(--space-1);",
                            }
                            div { class: "skeleton", style: "width: 30%; height: 14px;" }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    if !has_rows && exhausted {
                        div { class: "empty-state", "No documents yet." }
                    } else if !exhausted {
                        button {
                            class: "btn btn-link",
                            onclick: move |_| {
                                let next = feed.peek().next_page();
                                page_signal.set(next);
                            },
                            "Load more"
                        }
                    }
                },
            }
        }
    }
}

fn collection_for(document: &Document, show_collection: bool) -> Option<Collection> {
    if !show_collection {
        return None;
    }

    COLLECTIONS
        .read()
        .iter()
        .find(|collection| collection.uuid == document.collection_uuid)
        .cloned()
}

#[derive(Clone, PartialEq, Props)]
struct DocumentRowProps {
    document: Document,
    show_collection: bool,
    now: DateTime<Utc>,
}

#[component]
fn DocumentRow(props: DocumentRowProps) -> Element {
    let document = props.document;
    let collection = collection_for(&document, props.show_collection);
    let updated = relative_time(document.updated_at, props.now);

    let title = if document.title.trim().is_empty() {
        String::from("Untitled")
    } else {
        document.title.clone()
    };

    rsx! {
        Link {
            class: "document-row",
            to: Route::DocumentDetail {
                document_uuid: document.uuid,
            },
            h3 { class: "document-title", "{title}" }
            p { class: "document-meta",
                if let Some(collection) = collection {
                    span {
                        span {
                            class: "color-dot",
                            style: "background-color: {collection.color};",
                        }
                        "in {collection.name} · "
                    }
                }
                "updated {updated}"
            }
        }
    }
}

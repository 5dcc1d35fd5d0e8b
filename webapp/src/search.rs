use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    Route,
    components::{
        document_list::PaginatedDocumentList, input_search::InputSearch, scene::Scene,
    },
    stores::DOCUMENTS,
};
use common::feed::FeedQuery;

// at most this many cached title matches are shown above the server results
const QUICK_MATCHES: usize = 5;

#[component]
pub fn SearchResults(query: String) -> Element {
    let feed = FeedQuery::search(&query);

    let quick_matches: Vec<(i64, String)> = DOCUMENTS
        .read()
        .search(&query)
        .into_iter()
        .take(QUICK_MATCHES)
        .map(|doc| (doc.uuid, doc.title.clone()))
        .collect();

    let actions = rsx! {
        InputSearch { source: "search", label: "Search documents", label_hidden: true }
    };

    rsx! {
        Scene { title: String::from("Search"), actions,
            h1 { class: "heading", "Results for “{query}”" }

            if !quick_matches.is_empty() {
                p { class: "help-text",
                    "Already open: "
                    for (document_uuid, title) in quick_matches.iter() {
                        Link {
                            key: "{document_uuid}",
                            class: "btn btn-link",
                            to: Route::DocumentDetail {
                                document_uuid: *document_uuid,
                            },
                            "{title}"
                        }
                    }
                }
            }

            PaginatedDocumentList { key: "{feed.key()}", query: feed.clone(), show_collection: true }
        }
    }
}

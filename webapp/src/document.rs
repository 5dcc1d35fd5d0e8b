use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::warn;

use crate::{Route, components::scene::Scene, stores, util::local_time};
use api::document::*;

#[component]
pub fn DocumentDetail(document_uuid: DocumentUuid) -> Element {
    let document_future = use_resource(move || async move {
        let resp = get_document(&GetDocumentReq { document_uuid }).await?;
        stores::merge_documents(vec![resp.document.clone()]);

        // opening a document is what puts it in the recently viewed feed
        match mark_viewed(&MarkViewedReq { document_uuid }).await {
            Ok(viewed) => stores::merge_documents(vec![viewed.document]),
            Err(err) => warn!("failed to mark {document_uuid} as viewed: {err}"),
        }

        anyhow::Result::<GetDocumentResp>::Ok(resp)
    });

    let actions = rsx! {
        Link { to: Route::RecentlyUpdated {}, class: "btn btn-link", "Back to home" }
    };

    rsx! {
        Scene { title: String::from("Document"), actions,
            match &*document_future.read() {
                Some(Ok(resp)) => {
                    let title = if resp.document.title.trim().is_empty() {
                        String::from("Untitled")
                    } else {
                        resp.document.title.clone()
                    };
                    let updated = local_time(resp.document.updated_at);

                    rsx! {
                        h1 { class: "heading", "{title}" }
                        p { class: "help-text", "Last updated {updated}" }
                        div { class: "document-text", "{resp.text}" }
                    }
                }
                Some(Err(err)) => rsx! {
                    div { class: "error-state", "Error: {err}" }
                },
                None => rsx! {
                    div {
                        class: "skeleton",
                        style: "width: 50%; height: 36px; margin-bottom: var(--space-3);",
                    }
                    div { class: "skeleton", style: "width: 100%; height: 200px;" }
                },
            }
        }
    }
}

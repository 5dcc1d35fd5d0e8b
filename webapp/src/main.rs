#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

use api::document::DocumentUuid;

mod stores;
mod util;

mod components;
use components::navigation::NavBar;

mod home;
use home::{CreatedByMe, Home, RecentlyUpdated, RecentlyViewed};

mod document;
use document::DocumentDetail;

mod search;
use search::SearchResults;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// the home tabs are plain routes under /home, so the url alone decides
// which feed is showing
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[redirect("/", || Route::RecentlyUpdated {})]
    #[layout(NavBar)]
        #[nest("/home")]
            #[layout(Home)]
                #[route("/")]
                RecentlyUpdated {},
                #[route("/recent")]
                RecentlyViewed {},
                #[route("/created")]
                CreatedByMe {},
            #[end_layout]
        #[end_nest]
        #[route("/search/:query")]
        SearchResults { query: String },
        #[route("/doc/:document_uuid")]
        DocumentDetail { document_uuid: DocumentUuid },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    // once per page load, before any screen reads the watermark
    use_hook(stores::start_session);

    use_future(move || async move {
        stores::load_auth().await;
    });

    rsx! {
        style { "{util::style::APP_STYLES}" }
        Router::<Route> {}
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "container empty-state",
            h3 { "Page not found" }
            p { "Nothing lives at /{path}" }
            Link { to: Route::RecentlyUpdated {}, class: "btn btn-primary", "Back to home" }
        }
    }
}

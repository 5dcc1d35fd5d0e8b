use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    Route,
    components::{
        document_list::PaginatedDocumentList,
        input_search::InputSearch,
        language_prompt::LanguagePrompt,
        new_document_menu::NewDocumentMenu,
        scene::Scene,
        tabs::{Tab, Tabs},
    },
    stores::{AUTH, CONFIG, DOCUMENTS, FeedRequest, UI, browser_store},
    util::seeded_rng,
};
use common::{
    greeting::Greeting,
    home::{HelpLine, HomeInputs, HomeScreen},
    session::SessionWatermark,
    tab::HomeTab,
};

fn tab_route(tab: HomeTab) -> Route {
    match tab {
        HomeTab::RecentlyUpdated => Route::RecentlyUpdated {},
        HomeTab::RecentlyViewed => Route::RecentlyViewed {},
        HomeTab::CreatedByUser => Route::CreatedByMe {},
    }
}

// the home screen, laid out around whichever tab the route selects
//
// the tip and the previous-session watermark are read once when the
// screen mounts; switching tabs re-renders this layout without remounting it.
// the feed list is only mounted once render has asked for it, which it never
// does without a signed-in user and team
#[component]
pub fn Home() -> Element {
    let screen = use_hook(|| HomeScreen::new(&CONFIG.peek(), &mut seeded_rng()));
    let previous_session = use_hook(|| SessionWatermark::previous(&browser_store()));

    let route: Route = use_route();
    let path = route.to_string();

    let mut feed = FeedRequest::default();
    let view = {
        let auth = AUTH.read();
        let documents = DOCUMENTS.read();
        let language_prompt_dismissed = UI.read().language_prompt_dismissed;

        let inputs = HomeInputs {
            auth: &auth,
            previous_session: &previous_session,
            documents: &documents,
            hour: Greeting::current_hour(),
            path: &path,
            language_prompt_dismissed,
        };
        screen.render(&inputs, &mut feed)
    };

    // nothing at all until we know who is looking
    let Some(view) = view else {
        return rsx! {};
    };

    let heading = view.heading();
    let help = match view.help {
        HelpLine::Activity(message) => rsx! { "{message}" },
        HelpLine::Tip(tip) => rsx! {
            span { class: "badge badge-yellow", "Tip" }
            " {tip}"
        },
    };

    let list = feed.query.map(|query| {
        rsx! {
            PaginatedDocumentList { key: "{query.key()}", query: query.clone(), show_collection: true }
        }
    });

    let actions = rsx! {
        InputSearch { source: "dashboard", label: "Search documents", label_hidden: true }
        NewDocumentMenu {}
    };

    rsx! {
        Scene { title: String::from("Home"), actions,
            if view.show_language_prompt {
                LanguagePrompt {}
            }
            h1 { class: "heading", "{heading}" }
            p { class: "help-text", style: "margin-top: -12px;", {help} }
            Tabs {
                for tab in HomeTab::ALL {
                    Tab {
                        key: "{tab.path()}",
                        to: tab_route(tab),
                        label: tab.label(),
                        active: tab.is_active_for(&path),
                    }
                }
            }
            {list}
        }
    }
}

// the tab routes only select the tab, the Home layout renders the feed
#[component]
pub fn RecentlyUpdated() -> Element {
    rsx! {}
}

#[component]
pub fn RecentlyViewed() -> Element {
    rsx! {}
}

#[component]
pub fn CreatedByMe() -> Element {
    rsx! {}
}

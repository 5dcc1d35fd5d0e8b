use dioxus::prelude::*;

use crate::stores::{self, AUTH};
use common::locale::{DEFAULT_LOCALE, suggested_locale};

// offers to switch to the browser's language
//
// renders nothing unless the browser asks for a locale we ship and the
// user is still on the default one
#[component]
pub fn LanguagePrompt() -> Element {
    let user_language = AUTH
        .read()
        .user
        .as_ref()
        .map(|user| user.language.clone())
        .unwrap_or_else(|| DEFAULT_LOCALE.to_owned());

    let browser_language = web_sys::window().and_then(|window| window.navigator().language());

    let Some(locale) = suggested_locale(&user_language, browser_language.as_deref()) else {
        return rsx! {};
    };

    rsx! {
        div { class: "notice",
            span { "Documents are available in your language {locale.name}, would you like to change?" }
            button {
                class: "btn btn-link",
                onclick: move |_| async move {
                    stores::change_language(locale.tag).await;
                },
                "Change language"
            }
            button {
                class: "btn btn-link",
                onclick: move |_| stores::dismiss_language_prompt(),
                "Dismiss"
            }
        }
    }
}

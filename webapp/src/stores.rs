use chrono::Utc;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use api::{auth::*, collection::*, document::*};
use common::{
    collection::DocumentCollection,
    config::{HomeConfig, load_config},
    feed::{FeedKind, FeedQuery},
    home::DocumentService,
    session::SessionWatermark,
    sticky::StickyKey,
};

use crate::util::storage::BrowserStore;

const CONFIG_TOML: &str = include_str!("../home.toml");

// global stores
//
// components subscribe by reading these and drop the subscription when
// they unmount, so nothing here needs explicit teardown
pub static CONFIG: GlobalSignal<HomeConfig> = Signal::global(|| load_config(CONFIG_TOML));
pub static AUTH: GlobalSignal<AuthInfo> = Signal::global(AuthInfo::default);
pub static DOCUMENTS: GlobalSignal<DocumentCollection> = Signal::global(DocumentCollection::new);
pub static COLLECTIONS: GlobalSignal<Vec<Collection>> = Signal::global(Vec::new);
pub static UI: GlobalSignal<UiState> = Signal::global(|| UI_STATE.get(&browser_store()));

// ui flags that survive a reload
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UiState {
    pub language_prompt_dismissed: bool,
}

const UI_STATE: StickyKey<UiState> = StickyKey::new("ui");

pub fn browser_store() -> BrowserStore {
    BrowserStore::new(&CONFIG.peek().storage_prefix)
}

pub fn start_session() {
    let mut store = browser_store();

    match SessionWatermark::rotate(&mut store, Utc::now()) {
        Ok(previous) => debug!({ previous = previous.as_str() }, "session started"),
        Err(err) => error!("failed to record session start: {err}"),
    }
}

pub async fn load_auth() {
    match get_auth_info(&GetAuthInfoReq {}).await {
        Ok(resp) => {
            debug!({ signed_in = resp.auth.identity().is_some() }, "loaded auth info");
            *AUTH.write() = resp.auth;
        }
        Err(err) => error!("failed to load auth info: {err}"),
    }
}

pub async fn load_collections() {
    match list_collections(&ListCollectionsReq {}).await {
        Ok(resp) => *COLLECTIONS.write() = resp.collections,
        Err(err) => error!("failed to list collections: {err}"),
    }
}

pub fn merge_documents(documents: Vec<Document>) {
    DOCUMENTS.write().upsert_all(documents);
}

// the feed the home screen asked for on its last render
//
// the list mounted for it pages through fetch_feed_page and is keyed by the
// query, so re-rendering with the same request does not fetch again
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedRequest {
    pub query: Option<FeedQuery>,
}

impl DocumentService for FeedRequest {
    fn fetch(&mut self, query: FeedQuery) {
        self.query = Some(query);
    }
}

// one page of any feed, dispatched to the matching endpoint
pub async fn fetch_feed_page(query: &FeedQuery, page: Pagination) -> anyhow::Result<Vec<Document>> {
    let documents = match &query.kind {
        FeedKind::RecentlyUpdated => {
            list_recently_updated(&ListRecentlyUpdatedReq { page })
                .await?
                .documents
        }
        FeedKind::RecentlyViewed => {
            list_recently_viewed(&ListRecentlyViewedReq { page })
                .await?
                .documents
        }
        FeedKind::Owned => {
            let user = query
                .user
                .clone()
                .ok_or_else(|| anyhow::Error::msg("owned feed requested without a user"))?;

            list_owned(&ListOwnedReq { user, page }).await?.documents
        }
        FeedKind::Search(search) => {
            search_documents(&SearchDocumentsReq {
                query: search.clone(),
                page,
            })
            .await?
            .documents
        }
    };

    debug!(
        feed = %query.key(),
        offset = page.offset,
        count = documents.len(),
        "fetched feed page"
    );
    Ok(documents)
}

pub async fn create_document(collection_uuid: CollectionUuid) -> anyhow::Result<DocumentUuid> {
    let resp = api::document::create_document(&CreateDocumentReq {
        collection_uuid,
        title: String::new(),
    })
    .await?;

    let document_uuid = resp.document.uuid;
    merge_documents(vec![resp.document]);
    Ok(document_uuid)
}

pub fn dismiss_language_prompt() {
    UI.write().language_prompt_dismissed = true;

    let state = UI.peek().clone();
    if let Err(err) = UI_STATE.set(&mut browser_store(), &state) {
        error!("failed to persist ui state: {err}");
    }
}

pub async fn change_language(language: &str) {
    match update_user_language(&UpdateUserLanguageReq {
        language: language.to_owned(),
    })
    .await
    {
        Ok(resp) => {
            AUTH.write().user = Some(resp.user);
            dismiss_language_prompt();
        }
        Err(err) => error!("failed to change language to {language}: {err}"),
    }
}

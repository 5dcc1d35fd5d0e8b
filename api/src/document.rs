use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{auth::UserId, collection::CollectionUuid, endpoint};

// structs and types

pub type DocumentUuid = i64;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Document {
    pub uuid: DocumentUuid,
    pub title: String,
    pub collection_uuid: CollectionUuid,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    // only filled in for documents the current user has opened
    #[serde(default)]
    pub last_viewed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Document {
    // archived and deleted documents stay searchable on the server,
    // but never show up in the client-side views
    pub fn is_active(&self) -> bool {
        self.archived_at.is_none() && self.deleted_at.is_none()
    }
}

// a window into a server-side list
//
// the server answers with at most limit entries starting at offset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Pagination {
    pub offset: u32,
    pub limit: u32,
}

impl Pagination {
    pub fn first(limit: u32) -> Self {
        Pagination { offset: 0, limit }
    }

    pub fn next(&self, received: usize) -> Self {
        let received = u32::try_from(received).unwrap_or(u32::MAX);

        Pagination {
            offset: self.offset.saturating_add(received),
            limit: self.limit,
        }
    }
}

// messages

// documents in the team, most recently updated first
endpoint!(ListRecentlyUpdated);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListRecentlyUpdatedReq {
    pub page: Pagination,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListRecentlyUpdatedResp {
    pub documents: Vec<Document>,
}

// documents the current user has opened, most recently viewed first
endpoint!(ListRecentlyViewed);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListRecentlyViewedReq {
    pub page: Pagination,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListRecentlyViewedResp {
    pub documents: Vec<Document>,
}

// documents created by a particular user
endpoint!(ListOwned);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListOwnedReq {
    pub user: UserId,
    pub page: Pagination,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListOwnedResp {
    pub documents: Vec<Document>,
}

// full text search, ranked by the server
endpoint!(SearchDocuments);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SearchDocumentsReq {
    pub query: String,
    pub page: Pagination,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SearchDocumentsResp {
    pub documents: Vec<Document>,
}

// create an empty document in a collection
//
// the creator and timestamps are set by the server
endpoint!(CreateDocument);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateDocumentReq {
    pub collection_uuid: CollectionUuid,
    pub title: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateDocumentResp {
    pub document: Document,
}

// fetch a document along with its text
endpoint!(GetDocument);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GetDocumentReq {
    pub document_uuid: DocumentUuid,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GetDocumentResp {
    pub document: Document,
    pub text: String,
}

// record that the current user opened a document
endpoint!(MarkViewed);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MarkViewedReq {
    pub document_uuid: DocumentUuid,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MarkViewedResp {
    pub document: Document,
}

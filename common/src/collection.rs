use std::{cmp::Reverse, collections::HashMap};

use api::{
    auth::UserId,
    document::{Document, DocumentUuid},
};

use crate::{
    activity,
    feed::{FeedKind, FeedQuery},
    session::SessionTimestamp,
};

// client-side cache of every document the feeds have returned so far
//
// the views are recomputed on every call, there is no index to keep in sync
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentCollection {
    documents: HashMap<DocumentUuid, Document>,
}

impl DocumentCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, uuid: DocumentUuid) -> Option<&Document> {
        self.documents.get(&uuid)
    }

    // the newer copy wins, but a view timestamp is never lost just because
    // the incoming copy came from a feed that does not report it
    pub fn upsert(&mut self, incoming: Document) {
        match self.documents.get_mut(&incoming.uuid) {
            Some(existing) => {
                let last_viewed_at = existing.last_viewed_at.max(incoming.last_viewed_at);

                if incoming.updated_at >= existing.updated_at {
                    *existing = incoming;
                }
                existing.last_viewed_at = last_viewed_at;
            }
            None => {
                self.documents.insert(incoming.uuid, incoming);
            }
        }
    }

    pub fn upsert_all<I>(&mut self, documents: I)
    where
        I: IntoIterator<Item = Document>,
    {
        for doc in documents {
            self.upsert(doc);
        }
    }

    // default ordering: active documents, most recently updated first
    pub fn all(&self) -> Vec<&Document> {
        let mut docs: Vec<&Document> = self.documents.values().filter(|d| d.is_active()).collect();
        docs.sort_by_key(|d| Reverse((d.updated_at, d.uuid)));
        docs
    }

    pub fn recently_updated(&self) -> Vec<&Document> {
        self.all()
    }

    pub fn recently_viewed(&self) -> Vec<&Document> {
        let mut docs: Vec<&Document> = self
            .documents
            .values()
            .filter(|d| d.is_active() && d.last_viewed_at.is_some())
            .collect();
        docs.sort_by_key(|d| Reverse((d.last_viewed_at, d.uuid)));
        docs
    }

    pub fn created_by_user(&self, user: &UserId) -> Vec<&Document> {
        self.all()
            .into_iter()
            .filter(|d| &d.created_by == user)
            .collect()
    }

    pub fn updated_since(&self, since: &SessionTimestamp) -> Vec<&Document> {
        activity::updated_since(since, self.all())
    }

    // the cached view behind a feed, so documents created or opened locally
    // show up before the server is asked again
    //
    // search results are ranked by the server and have no local view
    pub fn view(&self, query: &FeedQuery) -> Option<Vec<&Document>> {
        match (&query.kind, &query.user) {
            (FeedKind::RecentlyUpdated, _) => Some(self.recently_updated()),
            (FeedKind::RecentlyViewed, _) => Some(self.recently_viewed()),
            (FeedKind::Owned, Some(user)) => Some(self.created_by_user(user)),
            (FeedKind::Owned, None) => Some(Vec::new()),
            (FeedKind::Search(_), _) => None,
        }
    }

    // case-insensitive title match, used to show cached hits while the
    // server search is still loading
    pub fn search(&self, query: &str) -> Vec<&Document> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.all()
            .into_iter()
            .filter(|d| d.title.to_lowercase().contains(&query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 4, 10, minute, 0).unwrap()
    }

    fn doc(uuid: i64, owner: &str, minute: u32) -> Document {
        Document {
            uuid,
            title: format!("Doc {uuid}"),
            collection_uuid: 1,
            created_by: owner.to_owned(),
            created_at: at(0),
            updated_at: at(minute),
            last_viewed_at: None,
            archived_at: None,
            deleted_at: None,
        }
    }

    fn uuids(docs: Vec<&Document>) -> Vec<i64> {
        docs.iter().map(|d| d.uuid).collect()
    }

    fn sample() -> DocumentCollection {
        let mut coll = DocumentCollection::new();
        coll.upsert_all(vec![
            doc(1, "alice", 10),
            doc(2, "bob", 30),
            doc(3, "alice", 20),
            doc(4, "bob", 20),
        ]);
        coll
    }

    #[test]
    fn all_is_newest_first() {
        assert_eq!(uuids(sample().all()), vec![2, 4, 3, 1]);
    }

    #[test]
    fn hides_archived_and_deleted() {
        let mut coll = sample();

        let mut archived = doc(5, "alice", 40);
        archived.archived_at = Some(at(41));
        let mut deleted = doc(6, "alice", 45);
        deleted.deleted_at = Some(at(46));
        coll.upsert_all(vec![archived, deleted]);

        assert!(coll.get(5).is_some() && coll.get(6).is_some());
        assert_eq!(uuids(coll.all()), vec![2, 4, 3, 1]);
        assert!(coll.updated_since(&SessionTimestamp::from_datetime(at(35))).is_empty());
    }

    #[test]
    fn created_by_user_only_returns_theirs() {
        let coll = sample();
        assert_eq!(uuids(coll.created_by_user(&String::from("alice"))), vec![3, 1]);
        assert!(coll.created_by_user(&String::from("carol")).is_empty());
    }

    #[test]
    fn updated_since_uses_default_order() {
        let coll = sample();
        let since = SessionTimestamp::from_datetime(at(15));
        assert_eq!(uuids(coll.updated_since(&since)), vec![2, 4, 3]);
        assert!(coll.updated_since(&SessionTimestamp::default()).is_empty());
    }

    #[test]
    fn recently_viewed_orders_by_view() {
        let mut coll = sample();

        let mut first = doc(1, "alice", 10);
        first.last_viewed_at = Some(at(50));
        let mut second = doc(2, "bob", 30);
        second.last_viewed_at = Some(at(40));
        coll.upsert_all(vec![first, second]);

        assert_eq!(uuids(coll.recently_viewed()), vec![1, 2]);
    }

    #[test]
    fn upsert_keeps_newer_and_view_time() {
        let mut coll = DocumentCollection::new();

        let mut viewed = doc(1, "alice", 10);
        viewed.last_viewed_at = Some(at(12));
        coll.upsert(viewed);

        let mut renamed = doc(1, "alice", 20);
        renamed.title = String::from("Renamed");
        coll.upsert(renamed);

        let stale = doc(1, "alice", 5);
        coll.upsert(stale);

        let stored = coll.get(1).unwrap();
        assert_eq!(stored.title, "Renamed");
        assert_eq!(stored.updated_at, at(20));
        assert_eq!(stored.last_viewed_at, Some(at(12)));
    }

    #[test]
    fn search_matches_titles() {
        let mut coll = sample();
        let mut plan = doc(9, "bob", 1);
        plan.title = String::from("Quarterly Plan");
        coll.upsert(plan);

        assert_eq!(uuids(coll.search("plan")), vec![9]);
        assert!(coll.search("  ").is_empty());
    }

    #[test]
    fn feed_views() {
        let coll = sample();
        let alice = String::from("alice");

        let updated = coll.view(&FeedQuery::recently_updated()).unwrap();
        assert_eq!(uuids(updated), vec![2, 4, 3, 1]);

        let owned = coll.view(&FeedQuery::owned_by(&alice)).unwrap();
        assert_eq!(uuids(owned), vec![3, 1]);

        assert!(coll.view(&FeedQuery::recently_viewed()).unwrap().is_empty());
        assert!(coll.view(&FeedQuery::search("doc")).is_none());
    }
}

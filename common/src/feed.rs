use api::{auth::UserId, document::DocumentUuid};

pub use api::document::Pagination;

pub const DEFAULT_PAGE_SIZE: u32 = 25;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedKind {
    RecentlyUpdated,
    RecentlyViewed,
    Owned,
    Search(String),
}

// everything needed to ask the server for one page of a feed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedQuery {
    pub kind: FeedKind,
    pub user: Option<UserId>,
}

impl FeedQuery {
    pub fn recently_updated() -> Self {
        FeedQuery {
            kind: FeedKind::RecentlyUpdated,
            user: None,
        }
    }

    pub fn recently_viewed() -> Self {
        FeedQuery {
            kind: FeedKind::RecentlyViewed,
            user: None,
        }
    }

    pub fn owned_by(user: &UserId) -> Self {
        FeedQuery {
            kind: FeedKind::Owned,
            user: Some(user.clone()),
        }
    }

    pub fn search(query: &str) -> Self {
        FeedQuery {
            kind: FeedKind::Search(query.trim().to_owned()),
            user: None,
        }
    }

    // stable identity for keyed rendering, so switching feeds starts a fresh list
    pub fn key(&self) -> String {
        match (&self.kind, &self.user) {
            (FeedKind::RecentlyUpdated, _) => String::from("updated"),
            (FeedKind::RecentlyViewed, _) => String::from("recent"),
            (FeedKind::Owned, Some(user)) => format!("created-{user}"),
            (FeedKind::Owned, None) => String::from("created"),
            (FeedKind::Search(query), _) => format!("search-{query}"),
        }
    }
}

// paging state of a single feed
//
// the list component owns one of these; it only tracks which documents
// belong to the feed, the documents themselves live in the collection
#[derive(Clone, Debug, PartialEq)]
pub struct FeedState {
    query: FeedQuery,
    limit: u32,
    documents: Vec<DocumentUuid>,
    exhausted: bool,
}

impl FeedState {
    pub fn new(query: FeedQuery, limit: u32) -> Self {
        FeedState {
            query,
            limit: limit.max(1),
            documents: Vec::new(),
            exhausted: false,
        }
    }

    pub fn query(&self) -> &FeedQuery {
        &self.query
    }

    pub fn documents(&self) -> &[DocumentUuid] {
        &self.documents
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    // None once the server has returned a short page
    pub fn next_page(&self) -> Option<Pagination> {
        if self.exhausted {
            return None;
        }

        Some(Pagination::first(self.limit).next(self.documents.len()))
    }

    // returns false when the page no longer lines up with what we have,
    // i.e. a late response for a page we already received
    pub fn receive(&mut self, page: Pagination, received: &[DocumentUuid]) -> bool {
        if Some(page) != self.next_page() {
            return false;
        }

        for uuid in received {
            if !self.documents.contains(uuid) {
                self.documents.push(*uuid);
            }
        }

        if received.len() < page.limit as usize {
            self.exhausted = true;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_advances_by_received() {
        let page = Pagination::first(25);
        assert_eq!(page.offset, 0);
        assert_eq!(page.next(25), Pagination { offset: 25, limit: 25 });
        assert_eq!(page.next(3).offset, 3);
    }

    #[test]
    fn pages_until_short() {
        let mut state = FeedState::new(FeedQuery::recently_updated(), 2);

        let first = state.next_page().unwrap();
        assert_eq!(first, Pagination { offset: 0, limit: 2 });
        assert!(state.receive(first, &[1, 2]));

        let second = state.next_page().unwrap();
        assert_eq!(second.offset, 2);
        assert!(state.receive(second, &[3]));

        assert!(state.is_exhausted());
        assert_eq!(state.next_page(), None);
        assert_eq!(state.documents(), &[1, 2, 3]);
    }

    #[test]
    fn empty_first_page_exhausts() {
        let mut state = FeedState::new(FeedQuery::recently_viewed(), 25);
        let first = state.next_page().unwrap();
        assert!(state.receive(first, &[]));
        assert!(state.is_exhausted());
        assert!(state.documents().is_empty());
    }

    #[test]
    fn ignores_stale_pages() {
        let mut state = FeedState::new(FeedQuery::recently_updated(), 2);
        let first = state.next_page().unwrap();
        assert!(state.receive(first, &[1, 2]));
        assert!(!state.receive(first, &[1, 2]));
        assert_eq!(state.documents(), &[1, 2]);
    }

    #[test]
    fn keys_differ_per_feed() {
        let alice = String::from("alice");
        assert_eq!(FeedQuery::owned_by(&alice).key(), "created-alice");
        assert_ne!(FeedQuery::recently_updated().key(), FeedQuery::recently_viewed().key());
        assert_eq!(FeedQuery::search("  plans ").kind, FeedKind::Search(String::from("plans")));
    }
}

use api::auth::UserId;

use crate::feed::FeedQuery;

pub const HOME_PATH: &str = "/home";

// the three document feeds on the home screen
//
// the active tab is always derived from the current path, never stored
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeTab {
    RecentlyUpdated,
    RecentlyViewed,
    CreatedByUser,
}

impl HomeTab {
    pub const ALL: [HomeTab; 3] = [
        HomeTab::RecentlyUpdated,
        HomeTab::RecentlyViewed,
        HomeTab::CreatedByUser,
    ];

    // prefix matching in the same order the routes are declared, with
    // anything unrecognised falling through to the default tab
    pub fn from_path(path: &str) -> Self {
        let sub = normalize(path)
            .strip_prefix(HOME_PATH)
            .unwrap_or_default();

        if is_under(sub, "/recent") {
            HomeTab::RecentlyViewed
        } else if is_under(sub, "/created") {
            HomeTab::CreatedByUser
        } else {
            HomeTab::RecentlyUpdated
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            HomeTab::RecentlyUpdated => "/home",
            HomeTab::RecentlyViewed => "/home/recent",
            HomeTab::CreatedByUser => "/home/created",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HomeTab::RecentlyUpdated => "Recently updated",
            HomeTab::RecentlyViewed => "Recently viewed",
            HomeTab::CreatedByUser => "Created by me",
        }
    }

    // exact tabs only highlight on their own path
    pub fn exact(&self) -> bool {
        !matches!(self, HomeTab::CreatedByUser)
    }

    pub fn is_active_for(&self, path: &str) -> bool {
        let path = normalize(path);

        if self.exact() {
            path == self.path()
        } else {
            is_under(path, self.path())
        }
    }

    pub fn feed(&self, user: &UserId) -> FeedQuery {
        match self {
            HomeTab::RecentlyUpdated => FeedQuery::recently_updated(),
            HomeTab::RecentlyViewed => FeedQuery::recently_viewed(),
            HomeTab::CreatedByUser => FeedQuery::owned_by(user),
        }
    }
}

// drop query, fragment and trailing slashes
fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');

    if trimmed.is_empty() { "/" } else { trimmed }
}

fn is_under(path: &str, base: &str) -> bool {
    match path.strip_prefix(base) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::FeedKind;

    #[test]
    fn routes() {
        assert_eq!(HomeTab::from_path("/home"), HomeTab::RecentlyUpdated);
        assert_eq!(HomeTab::from_path("/home/"), HomeTab::RecentlyUpdated);
        assert_eq!(HomeTab::from_path("/home/recent"), HomeTab::RecentlyViewed);
        assert_eq!(HomeTab::from_path("/home/recent/"), HomeTab::RecentlyViewed);
        assert_eq!(HomeTab::from_path("/home/created"), HomeTab::CreatedByUser);
        assert_eq!(HomeTab::from_path("/home/created/drafts"), HomeTab::CreatedByUser);
        assert_eq!(HomeTab::from_path("/home/created?sort=title"), HomeTab::CreatedByUser);
    }

    #[test]
    fn unknown_paths_default() {
        assert_eq!(HomeTab::from_path("/home/recently"), HomeTab::RecentlyUpdated);
        assert_eq!(HomeTab::from_path("/home/whatever"), HomeTab::RecentlyUpdated);
        assert_eq!(HomeTab::from_path(""), HomeTab::RecentlyUpdated);
    }

    #[test]
    fn paths_round_trip() {
        for tab in HomeTab::ALL {
            assert_eq!(HomeTab::from_path(tab.path()), tab);
        }
    }

    #[test]
    fn highlighting() {
        assert!(HomeTab::RecentlyUpdated.is_active_for("/home"));
        assert!(!HomeTab::RecentlyUpdated.is_active_for("/home/recent"));
        assert!(HomeTab::RecentlyViewed.is_active_for("/home/recent/"));
        assert!(!HomeTab::RecentlyViewed.is_active_for("/home/recent/x"));
        assert!(HomeTab::CreatedByUser.is_active_for("/home/created/x"));
    }

    #[test]
    fn feeds() {
        let alice = String::from("alice");

        assert_eq!(HomeTab::RecentlyUpdated.feed(&alice), FeedQuery::recently_updated());
        assert_eq!(HomeTab::RecentlyViewed.feed(&alice).user, None);

        let owned = HomeTab::CreatedByUser.feed(&alice);
        assert_eq!(owned.kind, FeedKind::Owned);
        assert_eq!(owned.user.as_deref(), Some("alice"));
    }
}

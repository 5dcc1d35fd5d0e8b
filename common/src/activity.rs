use api::document::Document;

use crate::session::SessionTimestamp;

pub const DEFAULT_RECENT_CAP: usize = 10;

// documents updated strictly after the previous session, in input order
//
// a missing watermark means a first visit, which reports nothing rather
// than everything
pub fn updated_since<'a, I>(since: &SessionTimestamp, documents: I) -> Vec<&'a Document>
where
    I: IntoIterator<Item = &'a Document>,
{
    let Some(since) = since.parse() else {
        return Vec::new();
    };

    documents
        .into_iter()
        .filter(|doc| doc.updated_at > since)
        .collect()
}

// what the help line under the greeting should say
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActivityLabel {
    // nothing new, show the tip instead
    Tip,
    Exact(usize),
    Capped(usize),
}

impl ActivityLabel {
    pub fn for_count(count: usize, cap: usize) -> Self {
        match count {
            0 => ActivityLabel::Tip,
            n if n > cap => ActivityLabel::Capped(cap),
            n => ActivityLabel::Exact(n),
        }
    }

    pub fn count_text(&self) -> Option<String> {
        match self {
            ActivityLabel::Tip => None,
            ActivityLabel::Exact(n) => Some(n.to_string()),
            ActivityLabel::Capped(cap) => Some(format!("{cap}+")),
        }
    }

    pub fn message(&self) -> Option<String> {
        self.count_text()
            .map(|count| format!("{count} docs were updated since you were last here"))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 4, 10, minute, 0).unwrap()
    }

    fn doc(uuid: i64, minute: u32) -> Document {
        Document {
            uuid,
            title: format!("doc {uuid}"),
            collection_uuid: 1,
            created_by: String::from("alice"),
            created_at: at(0),
            updated_at: at(minute),
            last_viewed_at: None,
            archived_at: None,
            deleted_at: None,
        }
    }

    #[test]
    fn empty_watermark_reports_nothing() {
        let docs = vec![doc(1, 5), doc(2, 50)];
        assert!(updated_since(&SessionTimestamp::default(), &docs).is_empty());
        assert!(updated_since(&SessionTimestamp::default(), &Vec::new()).is_empty());
    }

    #[test]
    fn strictly_after() {
        let docs = vec![doc(1, 10), doc(2, 20), doc(3, 30), doc(4, 20)];
        let since = SessionTimestamp::from_datetime(at(20));

        let recent: Vec<i64> = updated_since(&since, &docs).iter().map(|d| d.uuid).collect();
        assert_eq!(recent, vec![3]);
    }

    #[test]
    fn keeps_input_order() {
        let docs = vec![doc(7, 40), doc(3, 50), doc(9, 45)];
        let since = SessionTimestamp::from_datetime(at(1));

        let recent: Vec<i64> = updated_since(&since, &docs).iter().map(|d| d.uuid).collect();
        assert_eq!(recent, vec![7, 3, 9]);
    }

    #[test]
    fn labels() {
        assert_eq!(ActivityLabel::for_count(0, 10), ActivityLabel::Tip);
        assert_eq!(ActivityLabel::for_count(0, 10).message(), None);

        for n in 1..=10 {
            assert_eq!(ActivityLabel::for_count(n, 10).count_text(), Some(n.to_string()));
        }

        assert_eq!(ActivityLabel::for_count(11, 10).count_text().unwrap(), "10+");
        assert_eq!(ActivityLabel::for_count(500, 10).count_text().unwrap(), "10+");
    }

    #[test]
    fn message_text() {
        assert_eq!(
            ActivityLabel::for_count(3, 10).message().unwrap(),
            "3 docs were updated since you were last here"
        );
        assert_eq!(
            ActivityLabel::for_count(12, 10).message().unwrap(),
            "10+ docs were updated since you were last here"
        );
    }
}

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::sticky::{KeyValueStore, StickyKey};

// watermark of the previous visit, read by the home screen
pub const PREVIOUS_SESSION: StickyKey<SessionTimestamp> = StickyKey::new("previous-session");

// start of the visit in progress; becomes the previous session on the next start
pub const CURRENT_SESSION: StickyKey<SessionTimestamp> = StickyKey::new("current-session");

// an rfc3339 timestamp as it sits in storage
//
// the empty string is the "never visited" value
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SessionTimestamp(String);

impl SessionTimestamp {
    pub fn new(raw: impl Into<String>) -> Self {
        SessionTimestamp(raw.into())
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        SessionTimestamp(dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // None for both the empty value and anything we cannot read
    pub fn parse(&self) -> Option<DateTime<Utc>> {
        if self.is_empty() {
            return None;
        }

        match DateTime::parse_from_rfc3339(self.0.trim()) {
            Ok(dt) => Some(dt.with_timezone(&Utc)),
            Err(err) => {
                warn!("ignoring unreadable session timestamp {:?}: {err}", self.0);
                None
            }
        }
    }
}

pub struct SessionWatermark;

impl SessionWatermark {
    // called once per application start
    //
    // shifts the last start into PREVIOUS_SESSION and records now as the
    // current start, returning the watermark the home screen should use
    pub fn rotate<S>(store: &mut S, now: DateTime<Utc>) -> anyhow::Result<SessionTimestamp>
    where
        S: KeyValueStore + ?Sized,
    {
        let current = CURRENT_SESSION.get(store);

        if current.parse().is_some() {
            PREVIOUS_SESSION.set(store, &current)?;
        } else if !current.is_empty() {
            // the last start is unknown, an older watermark would overcount
            PREVIOUS_SESSION.clear(store);
        }

        CURRENT_SESSION.set(store, &SessionTimestamp::from_datetime(now))?;

        let mut previous = PREVIOUS_SESSION.get(store);
        if !previous.is_empty() && previous.parse().is_none() {
            PREVIOUS_SESSION.clear(store);
            previous = SessionTimestamp::default();
        }

        debug!({ previous = previous.as_str() }, "rotated session watermark");
        Ok(previous)
    }

    pub fn previous<S>(store: &S) -> SessionTimestamp
    where
        S: KeyValueStore + ?Sized,
    {
        PREVIOUS_SESSION.get(store)
    }
}

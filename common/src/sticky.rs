use std::{collections::HashMap, marker::PhantomData};

use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

// string key-value storage that survives reloads
//
// in the browser this is LocalStorage, in tests it is a HashMap
pub trait KeyValueStore {
    fn get_raw(&self, key: &str) -> Option<String>;

    fn set_raw(&mut self, key: &str, value: String) -> anyhow::Result<()>;

    fn remove(&mut self, key: &str);
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_raw(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

// a typed slot in a KeyValueStore
//
// values are stored as json, and anything missing or undecodable reads
// back as T::default() so callers never see a storage error on get
pub struct StickyKey<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> StickyKey<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub const fn new(name: &'static str) -> Self {
        StickyKey {
            name,
            _marker: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get<S>(&self, store: &S) -> T
    where
        S: KeyValueStore + ?Sized,
    {
        let Some(raw) = store.get_raw(self.name) else {
            return T::default();
        };

        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!("discarding stored value for {}: {err}", self.name);
            T::default()
        })
    }

    pub fn set<S>(&self, store: &mut S, value: &T) -> anyhow::Result<()>
    where
        S: KeyValueStore + ?Sized,
    {
        store.set_raw(self.name, serde_json::to_string(value)?)
    }

    pub fn clear<S>(&self, store: &mut S)
    where
        S: KeyValueStore + ?Sized,
    {
        store.remove(self.name)
    }
}

use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use common::sticky::KeyValueStore;

// LocalStorage with every key namespaced under a prefix
pub struct BrowserStore {
    prefix: String,
}

impl BrowserStore {
    pub fn new(prefix: &str) -> Self {
        BrowserStore {
            prefix: prefix.to_owned(),
        }
    }

    fn key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl KeyValueStore for BrowserStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        let key = self.key(key);

        LocalStorage::raw().get_item(&key).unwrap_or_else(|err| {
            console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
            None
        })
    }

    fn set_raw(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        let key = self.key(key);

        LocalStorage::raw().set_item(&key, &value).map_err(|err| {
            console_error!(format!("Failed to set local storage {key}: {err:?}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }

    fn remove(&mut self, key: &str) {
        LocalStorage::delete(self.key(key))
    }
}

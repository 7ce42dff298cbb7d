//! # Browser local storage backend
//!
//! [`WebStore`] is the [`LocalStore`](crate::LocalStore) implementation used
//! on the **web platform**. It keeps the session token and the per-user
//! viewed-notification set in `window.localStorage`, so both survive page
//! reloads.
//!
//! `WebStore` is a zero-size struct that re-resolves the storage handle on
//! every operation; the browser hands the same object back each time, so
//! there is nothing worth caching.
//!
//! All methods silently swallow errors (returning `None` for reads, doing
//! nothing for writes). A browser with storage disabled degrades to "no
//! local data" — the session falls back to the cookie and notifications
//! simply start unread — rather than crashing the UI.

use crate::local::LocalStore;

/// localStorage-backed store for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebStore;

impl WebStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl LocalStore for WebStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

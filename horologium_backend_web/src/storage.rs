// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `localStorage`-backed selection persistence.

use alloc::format;
use alloc::string::String;

use horologium_core::preference::{PREFERENCE_KEY, PreferenceStore};
use web_sys::Storage;

/// Errors from writing the selection to `localStorage`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The page has no `localStorage` (e.g. disabled by the user).
    #[error("localStorage is not available")]
    Unavailable,
    /// The browser rejected the write (e.g. quota exceeded).
    #[error("localStorage write failed: {0}")]
    Write(String),
}

/// Keeps the selected time system under [`PREFERENCE_KEY`] in the window's
/// `localStorage`.
///
/// Reads degrade to "nothing stored" when storage is unavailable.
pub struct LocalStoragePreferences {
    storage: Option<Storage>,
    key: &'static str,
}

impl core::fmt::Debug for LocalStoragePreferences {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LocalStoragePreferences")
            .field("available", &self.storage.is_some())
            .field("key", &self.key)
            .finish()
    }
}

impl Default for LocalStoragePreferences {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStoragePreferences {
    /// Opens the current window's `localStorage` under [`PREFERENCE_KEY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_key(PREFERENCE_KEY)
    }

    /// Opens the current window's `localStorage` under a custom key.
    #[must_use]
    pub fn with_key(key: &'static str) -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage, key }
    }

    /// Returns whether `localStorage` could be opened.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }
}

impl PreferenceStore for LocalStoragePreferences {
    type Error = StorageError;

    fn load(&mut self) -> Option<String> {
        self.storage.as_ref()?.get_item(self.key).ok().flatten()
    }

    fn save(&mut self, id: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(self.key, id)
            .map_err(|err| StorageError::Write(format!("{err:?}")))
    }
}

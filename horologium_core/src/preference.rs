// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persistence of the selected time system.
//!
//! The only persisted state is one string: the id of the last selected
//! provider. Hosts read it once at startup and write it on every successful
//! switch. Values that no longer name a registered provider are ignored by
//! [`Session`](crate::session::Session).

use alloc::string::String;
use core::convert::Infallible;

/// Storage key under which hosts with a key-value store keep the selection.
pub const PREFERENCE_KEY: &str = "horologium.selected-system";

/// Where the selected time system id is kept between runs.
pub trait PreferenceStore {
    /// Error produced when a write fails.
    type Error: core::error::Error;

    /// Returns the stored id, if any.
    ///
    /// Read failures are reported as an absent value.
    fn load(&mut self) -> Option<String>;

    /// Stores `id` as the current selection.
    fn save(&mut self, id: &str) -> Result<(), Self::Error>;
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for &mut P {
    type Error = P::Error;

    fn load(&mut self) -> Option<String> {
        (**self).load()
    }

    fn save(&mut self, id: &str) -> Result<(), Self::Error> {
        (**self).save(id)
    }
}

/// In-memory preference store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryPreferences {
    selected: Option<String>,
}

impl MemoryPreferences {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: None }
    }

    /// Creates a store already holding `id`.
    #[must_use]
    pub fn with_selected(id: impl Into<String>) -> Self {
        Self {
            selected: Some(id.into()),
        }
    }

    /// Returns the stored id without consuming it.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

impl PreferenceStore for MemoryPreferences {
    type Error = Infallible;

    fn load(&mut self) -> Option<String> {
        self.selected.clone()
    }

    fn save(&mut self, id: &str) -> Result<(), Infallible> {
        self.selected = Some(id.into());
        Ok(())
    }
}

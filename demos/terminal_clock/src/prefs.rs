// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection persistence in a JSON file under the user config directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use horologium_core::preference::PreferenceStore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from writing the preference file.
#[derive(Debug, Error)]
pub(crate) enum FilePreferencesError {
    /// The file or its directory could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The document could not be encoded.
    #[error("failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    selected: Option<String>,
}

/// A [`PreferenceStore`] backed by a small JSON document.
#[derive(Clone, Debug)]
pub(crate) struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/horologium/preferences.json`, when the platform has a
    /// config directory.
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("horologium").join("preferences.json"))
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> FilePreferencesError {
        FilePreferencesError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PreferenceStore for FilePreferences {
    type Error = FilePreferencesError;

    fn load(&mut self) -> Option<String> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "cannot read preferences");
                return None;
            }
        };
        match serde_json::from_slice::<PreferenceFile>(&contents) {
            Ok(file) => file.selected,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "ignoring malformed preferences");
                None
            }
        }
    }

    fn save(&mut self, id: &str) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }
        let file = PreferenceFile {
            selected: Some(id.to_owned()),
        };
        let serialized = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, serialized).map_err(|err| self.io_error(err))?;
        Ok(())
    }
}

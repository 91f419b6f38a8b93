//! Localized strings.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;

/// Message keys looked up by this crate.
pub mod keys {
    /// Type label for video attachments.
    pub const VIDEO: &str = "video";
    /// Type label for image attachments.
    pub const PHOTO: &str = "photo";
    /// Type label for voice messages.
    pub const VOICE_MESSAGE: &str = "voiceMessage";
    /// Type label for other audio.
    pub const AUDIO: &str = "audio";
    /// Author name for the local user.
    pub const YOU: &str = "you";
    /// Alternative text for quote thumbnails.
    pub const QUOTE_THUMBNAIL_ALT: &str = "quoteThumbnailAlt";
}

/// Looks up localized strings by key.
pub trait Localizer {
    /// Returns the localized string for `key`.
    fn lookup(&self, key: &str) -> String;
}

/// Built-in English strings.
const ENGLISH: &[(&str, &str)] = &[
    (keys::VIDEO, "Video"),
    (keys::PHOTO, "Photo"),
    (keys::VOICE_MESSAGE, "Voice Message"),
    (keys::AUDIO, "Audio"),
    (keys::YOU, "You"),
    (
        keys::QUOTE_THUMBNAIL_ALT,
        "Thumbnail of image from quoted message",
    ),
];

/// Entry of a `messages.json` file.
#[derive(Debug, Deserialize)]
struct MessageEntry {
    message: String,
}

/// In-memory message catalog.
///
/// Unknown keys resolve to the key itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    /// Creates a catalog with no messages.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a catalog with the built-in English strings.
    #[must_use]
    pub fn english() -> Self {
        let mut catalog = Self::empty();
        for (key, message) in ENGLISH {
            catalog.insert(*key, *message);
        }
        catalog
    }

    /// Creates an English catalog overlaid with the messages in `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut catalog = Self::english();
        catalog.load_file(path)?;
        Ok(catalog)
    }

    /// Adds or replaces a message.
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(key.into(), message.into());
    }

    /// Returns the message for `key` if the catalog has one.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Number of messages in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if the catalog has no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Merges messages from a `messages.json` document.
    ///
    /// The document maps keys to `{"message": "..."}` objects; other fields
    /// are ignored. Returns the number of messages merged.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not in that layout.
    pub fn merge_json(&mut self, json: &str) -> Result<usize> {
        let entries: HashMap<String, MessageEntry> = serde_json::from_str(json)?;
        let count = entries.len();
        for (key, entry) in entries {
            self.messages.insert(key, entry.message);
        }
        Ok(count)
    }

    /// Merges messages from a `messages.json` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let contents = std::fs::read_to_string(path)?;
        let count = self.merge_json(&contents)?;
        debug!(path = %path.display(), count, "loaded message catalog");
        Ok(count)
    }
}

impl Localizer for Catalog {
    fn lookup(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }
}

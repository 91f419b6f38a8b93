//! Persisted settings.

use std::path::{Path, PathBuf};

use replyquote_mime::{ContentType, StandardRecognizer};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::i18n::Catalog;

/// Settings that persist across sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// `messages.json` merged over the built-in English strings.
    pub locale_path: Option<PathBuf>,
    /// Video essences accepted on top of the built-in table.
    pub extra_video_types: Vec<String>,
    /// Image essences accepted on top of the built-in table.
    pub extra_image_types: Vec<String>,
}

impl Settings {
    /// Default settings location: `<config dir>/replyquote/settings.json`.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("replyquote")
            .join("settings.json")
    }

    /// Loads settings from the default location.
    ///
    /// # Errors
    ///
    /// See [`Settings::load_from`].
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Loads settings from `path`. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if an extra
    /// type is not a valid `type/subtype`.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&contents)?;
        settings.validate()?;
        debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Saves settings to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        info!("Settings saved to {:?}", path);
        Ok(())
    }

    /// Checks that every extra type parses as `type/subtype`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first invalid entry.
    pub fn validate(&self) -> Result<()> {
        for (kind, essence) in self
            .extra_video_types
            .iter()
            .map(|e| ("video", e))
            .chain(self.extra_image_types.iter().map(|e| ("image", e)))
        {
            ContentType::parse(essence)
                .map_err(|e| Error::Config(format!("extra {kind} type {essence:?}: {e}")))?;
        }
        Ok(())
    }

    /// Builds the recognizer these settings describe.
    #[must_use]
    pub fn recognizer(&self) -> StandardRecognizer {
        let recognizer = self
            .extra_video_types
            .iter()
            .fold(StandardRecognizer::new(), StandardRecognizer::with_video_type);
        self.extra_image_types
            .iter()
            .fold(recognizer, StandardRecognizer::with_image_type)
    }

    /// Builds the message catalog these settings describe.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured locale file cannot be loaded.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.locale_path {
            Some(path) => Catalog::from_file(path),
            None => Ok(Catalog::english()),
        }
    }
}

//! MIME content type handling.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;

/// MIME content type with parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType {
    /// Main type (e.g., "image", "video", "audio").
    pub main_type: String,
    /// Subtype (e.g., "png", "mp4", "ogg").
    pub sub_type: String,
    /// Parameters (e.g., codecs=opus).
    pub parameters: BTreeMap<String, String>,
}

impl ContentType {
    /// Creates a new content type.
    ///
    /// Both parts are lower-cased, matching what [`ContentType::parse`] produces.
    #[must_use]
    pub fn new(main_type: impl Into<String>, sub_type: impl Into<String>) -> Self {
        Self {
            main_type: main_type.into().to_ascii_lowercase(),
            sub_type: sub_type.into().to_ascii_lowercase(),
            parameters: BTreeMap::new(),
        }
    }

    /// Returns `type/subtype` without parameters.
    #[must_use]
    pub fn essence(&self) -> String {
        format!("{}/{}", self.main_type, self.sub_type)
    }

    /// Checks if this is an audio content type.
    #[must_use]
    pub fn is_audio(&self) -> bool {
        self.main_type == "audio"
    }

    /// Parses a content type string.
    ///
    /// Format: `type/subtype; param1=value1; param2=value2`
    ///
    /// # Errors
    ///
    /// Returns an error if the main type or subtype is missing or empty.
    pub fn parse(s: &str) -> Result<Self> {
        let mut parts = s.split(';');

        // Parse type/subtype
        let type_str = parts.next().unwrap_or_default().trim();
        if type_str.is_empty() {
            return Err(Error::InvalidContentType("Empty content type".to_string()));
        }

        let (main_type, sub_type) = type_str
            .split_once('/')
            .ok_or_else(|| Error::InvalidContentType(format!("Missing subtype in {type_str:?}")))?;

        let main_type = main_type.trim();
        let sub_type = sub_type.trim();
        if main_type.is_empty() {
            return Err(Error::InvalidContentType(format!(
                "Missing main type in {type_str:?}"
            )));
        }
        if sub_type.is_empty() || sub_type.contains('/') {
            return Err(Error::InvalidContentType(format!(
                "Invalid subtype in {type_str:?}"
            )));
        }

        let mut content_type = Self::new(main_type, sub_type);

        // Parse parameters
        for param in parts {
            let param = param.trim();
            if let Some((key, value)) = param.split_once('=') {
                let key = key.trim().to_ascii_lowercase();
                let value = value.trim().trim_matches('"').to_string();
                content_type.parameters.insert(key, value);
            }
        }

        Ok(content_type)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let main = &self.main_type;
        let sub = &self.sub_type;
        write!(f, "{main}/{sub}")?;

        for (key, value) in &self.parameters {
            // Quote value if it contains special characters
            if value.contains(|c: char| c.is_whitespace() || "()<>@,;:\\\"/[]?=".contains(c)) {
                write!(f, "; {key}=\"{value}\"")?;
            } else {
                write!(f, "; {key}={value}")?;
            }
        }

        Ok(())
    }
}

impl std::str::FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

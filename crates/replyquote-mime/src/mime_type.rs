//! Raw MIME identifiers as carried by attachments.

use crate::content_type::ContentType;
use crate::error::Result;
use std::fmt;

/// A MIME type identifier exactly as an attachment reported it.
///
/// The raw string is preserved; comparisons against known types go through
/// [`MimeType::essence`], which lower-cases and strips parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct MimeType(String);

impl MimeType {
    /// Wraps a raw MIME string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the raw string is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses the raw string into a [`ContentType`].
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a well-formed `type/subtype`.
    pub fn parse(&self) -> Result<ContentType> {
        ContentType::parse(&self.0)
    }

    /// Returns the lower-cased `type/subtype`, or `None` when malformed.
    #[must_use]
    pub fn essence(&self) -> Option<String> {
        self.parse().ok().map(|ct| ct.essence())
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MimeType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MimeType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MimeType {
    fn from(value: String) -> Self {
        Self(value)
    }
}

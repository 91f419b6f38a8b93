//! Media type recognition.
//!
//! A recognizer answers three independent questions about a MIME type. They
//! are allowed to overlap; callers that need a single answer decide the order
//! in which to ask.

use crate::content_type::ContentType;
use crate::mime_type::MimeType;

/// Video types the preview renderer can play inline.
pub const PLAYABLE_VIDEO_TYPES: &[&str] = &["video/mp4", "video/ogg", "video/webm"];

/// Image types the preview renderer can display inline.
pub const DISPLAYABLE_IMAGE_TYPES: &[&str] = &[
    "image/bmp",
    "image/gif",
    "image/jpeg",
    "image/svg+xml",
    "image/webp",
    "image/x-xbitmap",
    // ICO
    "image/vnd.microsoft.icon",
    "image/ico",
    "image/icon",
    "image/x-icon",
    // PNG
    "image/apng",
    "image/png",
];

/// Recognizes the media families a MIME type belongs to.
pub trait MediaRecognizer {
    /// Returns true if the type is a video the renderer can play.
    fn is_playable_video(&self, mime: &MimeType) -> bool;

    /// Returns true if the type is an image the renderer can display.
    fn is_displayable_image(&self, mime: &MimeType) -> bool;

    /// Returns true if the type denotes audio of any kind.
    fn is_audio(&self, mime: &MimeType) -> bool;
}

static STANDARD: StandardRecognizer = StandardRecognizer::new();

/// Recognizer backed by the built-in type tables.
///
/// Extra essences can be accepted on top of the tables; they never remove a
/// built-in type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandardRecognizer {
    extra_video_types: Vec<String>,
    extra_image_types: Vec<String>,
}

impl StandardRecognizer {
    /// Creates a recognizer that accepts only the built-in tables.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            extra_video_types: Vec::new(),
            extra_image_types: Vec::new(),
        }
    }

    /// Returns a shared recognizer with no extra types.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Also accepts `content_type` as a playable video type.
    ///
    /// Parameters are ignored; only the essence is compared.
    #[must_use]
    pub fn with_video_type(mut self, content_type: impl AsRef<str>) -> Self {
        self.extra_video_types
            .push(Self::normalize(content_type.as_ref()));
        self
    }

    /// Also accepts `content_type` as a displayable image type.
    ///
    /// Parameters are ignored; only the essence is compared.
    #[must_use]
    pub fn with_image_type(mut self, content_type: impl AsRef<str>) -> Self {
        self.extra_image_types
            .push(Self::normalize(content_type.as_ref()));
        self
    }

    /// Reduces a configured type to the essence attachments are compared by.
    fn normalize(content_type: &str) -> String {
        ContentType::parse(content_type).map_or_else(
            |_| content_type.trim().to_ascii_lowercase(),
            |ct| ct.essence(),
        )
    }

    fn matches(essence: Option<String>, table: &[&str], extra: &[String]) -> bool {
        essence.is_some_and(|essence| {
            table.contains(&essence.as_str()) || extra.iter().any(|e| *e == essence)
        })
    }
}

impl MediaRecognizer for StandardRecognizer {
    fn is_playable_video(&self, mime: &MimeType) -> bool {
        Self::matches(mime.essence(), PLAYABLE_VIDEO_TYPES, &self.extra_video_types)
    }

    fn is_displayable_image(&self, mime: &MimeType) -> bool {
        Self::matches(
            mime.essence(),
            DISPLAYABLE_IMAGE_TYPES,
            &self.extra_image_types,
        )
    }

    fn is_audio(&self, mime: &MimeType) -> bool {
        // A bare "audio/" has no subtype but is still audio
        mime.parse().map_or_else(
            |_| {
                mime.as_str()
                    .trim_start()
                    .to_ascii_lowercase()
                    .starts_with("audio/")
            },
            |ct| ct.is_audio(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mime(s: &str) -> MimeType {
        MimeType::from(s)
    }

    #[test]
    fn test_playable_video() {
        let r = StandardRecognizer::standard();
        assert!(r.is_playable_video(&mime("video/mp4")));
        assert!(r.is_playable_video(&mime("video/webm")));
        assert!(r.is_playable_video(&mime("VIDEO/OGG")));
        assert!(!r.is_playable_video(&mime("video/quicktime")));
        assert!(!r.is_playable_video(&mime("image/png")));
    }

    #[test]
    fn test_displayable_image() {
        let r = StandardRecognizer::standard();
        for essence in DISPLAYABLE_IMAGE_TYPES {
            assert!(r.is_displayable_image(&mime(essence)), "{essence}");
        }
        assert!(r.is_displayable_image(&mime("image/png; name=a.png")));
        assert!(!r.is_displayable_image(&mime("image/tiff")));
        assert!(!r.is_displayable_image(&mime("image/heic")));
    }

    #[test]
    fn test_audio_is_by_main_type() {
        let r = StandardRecognizer::standard();
        assert!(r.is_audio(&mime("audio/ogg")));
        assert!(r.is_audio(&mime("audio/x-anything")));
        assert!(r.is_audio(&mime("Audio/AAC")));
        assert!(!r.is_audio(&mime("video/mp4")));
        assert!(!r.is_audio(&mime("audio")));
        assert!(!r.is_audio(&mime("")));
    }

    #[test]
    fn test_bare_audio_prefix_is_audio() {
        let r = StandardRecognizer::standard();
        assert!(r.is_audio(&mime("audio/")));
        assert!(r.is_audio(&mime("AUDIO/")));
        assert!(!r.is_audio(&mime("xaudio/")));
    }

    #[test]
    fn test_extra_types() {
        let r = StandardRecognizer::new()
            .with_video_type(" Video/QuickTime ")
            .with_image_type("image/heic");
        assert!(r.is_playable_video(&mime("video/quicktime")));
        assert!(r.is_displayable_image(&mime("image/heic")));
        assert!(r.is_playable_video(&mime("video/mp4")));
        assert!(!StandardRecognizer::standard().is_playable_video(&mime("video/quicktime")));
    }

    #[test]
    fn test_extra_types_compare_by_essence() {
        let r = StandardRecognizer::new()
            .with_video_type("video/quicktime; codecs=avc1")
            .with_image_type("image / heic");
        assert!(r.is_playable_video(&mime("video/quicktime")));
        assert!(r.is_playable_video(&mime("video/quicktime; codecs=hvc1")));
        assert!(r.is_displayable_image(&mime("image/heic")));
    }

    #[test]
    fn test_malformed_matches_nothing() {
        let r = StandardRecognizer::standard();
        for raw in ["", "png", "image/", "/png"] {
            let m = mime(raw);
            assert!(!r.is_playable_video(&m));
            assert!(!r.is_displayable_image(&m));
            assert!(!r.is_audio(&m));
        }
    }
}

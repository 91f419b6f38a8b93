//! Attachment classification.

use replyquote_mime::{MediaRecognizer, MimeType, StandardRecognizer};
use serde::{Deserialize, Serialize};

use crate::quote::AttachmentRef;

/// Presentation category of a quoted attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Video the renderer can play.
    Video,
    /// Image the renderer can display.
    Image,
    /// Audio recorded as a voice message.
    AudioVoice,
    /// Any other audio.
    Audio,
    /// Everything else, shown as a file.
    Generic,
}

impl Category {
    /// Categories in the order they are tried. The first match wins.
    pub const PRIORITY: [Self; 5] = [
        Self::Video,
        Self::Image,
        Self::AudioVoice,
        Self::Audio,
        Self::Generic,
    ];

    fn matches<R>(self, recognizer: &R, content_type: &MimeType, is_voice_message: bool) -> bool
    where
        R: MediaRecognizer + ?Sized,
    {
        match self {
            Self::Video => recognizer.is_playable_video(content_type),
            Self::Image => recognizer.is_displayable_image(content_type),
            Self::AudioVoice => is_voice_message && recognizer.is_audio(content_type),
            Self::Audio => recognizer.is_audio(content_type),
            Self::Generic => true,
        }
    }

    /// Stable string token for this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Image => "image",
            Self::AudioVoice => "audioVoice",
            Self::Audio => "audio",
            Self::Generic => "generic",
        }
    }

    /// Returns true for categories that can show a thumbnail.
    #[must_use]
    pub const fn is_visual(&self) -> bool {
        matches!(self, Self::Video | Self::Image)
    }

    /// Returns true for both audio categories.
    #[must_use]
    pub const fn is_audio(&self) -> bool {
        matches!(self, Self::AudioVoice | Self::Audio)
    }
}

/// Classifies a MIME type with the standard recognizer.
#[must_use]
pub fn classify(content_type: &MimeType, is_voice_message: bool) -> Category {
    classify_with(StandardRecognizer::standard(), content_type, is_voice_message)
}

/// Classifies a MIME type with the given recognizer.
///
/// Categories are tried in [`Category::PRIORITY`] order, so a type that more
/// than one recognizer predicate accepts resolves to the earliest category.
/// Unrecognized and malformed types are [`Category::Generic`].
#[must_use]
pub fn classify_with<R>(recognizer: &R, content_type: &MimeType, is_voice_message: bool) -> Category
where
    R: MediaRecognizer + ?Sized,
{
    Category::PRIORITY
        .into_iter()
        .find(|category| category.matches(recognizer, content_type, is_voice_message))
        .unwrap_or(Category::Generic)
}

impl AttachmentRef {
    /// Category of this attachment under the standard recognizer.
    #[must_use]
    pub fn category(&self) -> Category {
        classify(&self.content_type, self.is_voice_message)
    }

    /// Category of this attachment under the given recognizer.
    #[must_use]
    pub fn category_with<R>(&self, recognizer: &R) -> Category
    where
        R: MediaRecognizer + ?Sized,
    {
        classify_with(recognizer, &self.content_type, self.is_voice_message)
    }
}

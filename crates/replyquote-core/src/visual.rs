//! Thumbnail and icon selection.

use replyquote_mime::{MediaRecognizer, StandardRecognizer};
use serde::Serialize;

use crate::classify::Category;
use crate::quote::AttachmentRef;

/// Icon tokens shared with styling layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum Icon {
    /// Overlay drawn on top of a video thumbnail.
    Play,
    /// Video without a loaded thumbnail.
    Movie,
    /// Image without a loaded thumbnail.
    Image,
    /// Any audio.
    Microphone,
    /// Generic file block.
    GenericFile,
}

impl Icon {
    /// Stable token for this icon.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Movie => "movie",
            Self::Image => "image",
            Self::Microphone => "microphone",
            Self::GenericFile => "generic-file",
        }
    }
}

impl From<Icon> for &'static str {
    fn from(value: Icon) -> Self {
        value.as_str()
    }
}

/// What to show in the visual slot of a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum VisualDecision {
    /// A loaded thumbnail, optionally with an icon drawn over it.
    Thumbnail {
        /// Renderable URL of the thumbnail.
        url: String,
        /// Icon drawn over the thumbnail.
        overlay: Option<Icon>,
    },
    /// A static icon standing in for the attachment.
    PlaceholderIcon {
        /// Icon to draw.
        icon: Icon,
    },
    /// Nothing in the visual slot; the body shows a generic file block.
    None,
}

impl VisualDecision {
    /// Decides the visual slot from an already computed category.
    ///
    /// `thumbnail_url` is only consulted for video and image.
    #[must_use]
    pub fn for_category(category: Category, thumbnail_url: Option<&str>) -> Self {
        match (category, thumbnail_url) {
            (Category::Video, Some(url)) => Self::Thumbnail {
                url: url.to_string(),
                overlay: Some(Icon::Play),
            },
            (Category::Video, None) => Self::PlaceholderIcon { icon: Icon::Movie },
            (Category::Image, Some(url)) => Self::Thumbnail {
                url: url.to_string(),
                overlay: None,
            },
            (Category::Image, None) => Self::PlaceholderIcon { icon: Icon::Image },
            (Category::AudioVoice | Category::Audio, _) => Self::PlaceholderIcon {
                icon: Icon::Microphone,
            },
            (Category::Generic, _) => Self::None,
        }
    }

    /// Returns the thumbnail URL if this decision shows one.
    #[must_use]
    pub fn thumbnail_url(&self) -> Option<&str> {
        match self {
            Self::Thumbnail { url, .. } => Some(url.as_str()),
            Self::PlaceholderIcon { .. } | Self::None => None,
        }
    }

    /// Returns the icon drawn in the slot, overlay or placeholder.
    #[must_use]
    pub const fn icon(&self) -> Option<Icon> {
        match self {
            Self::Thumbnail { overlay, .. } => *overlay,
            Self::PlaceholderIcon { icon } => Some(*icon),
            Self::None => None,
        }
    }
}

/// Resolves the visual slot for an attachment with the standard recognizer.
#[must_use]
pub fn resolve_visual(attachment: &AttachmentRef) -> VisualDecision {
    resolve_visual_with(StandardRecognizer::standard(), attachment)
}

/// Resolves the visual slot for an attachment with the given recognizer.
#[must_use]
pub fn resolve_visual_with<R>(recognizer: &R, attachment: &AttachmentRef) -> VisualDecision
where
    R: MediaRecognizer + ?Sized,
{
    VisualDecision::for_category(
        attachment.category_with(recognizer),
        attachment.thumbnail_url(),
    )
}

/// File name block shown for generic attachments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericFile {
    /// File name, shown as plain text.
    pub file_name: String,
    /// Icon shown next to the name.
    pub icon: Icon,
}

impl GenericFile {
    /// Creates the block for `file_name`.
    #[must_use]
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            icon: Icon::GenericFile,
        }
    }
}

/// Returns true if the attachment is shown as a generic file block.
#[must_use]
pub fn should_show_generic_file(attachment: Option<&AttachmentRef>) -> bool {
    should_show_generic_file_with(StandardRecognizer::standard(), attachment)
}

/// Returns true if the attachment is shown as a generic file block under the
/// given recognizer.
#[must_use]
pub fn should_show_generic_file_with<R>(recognizer: &R, attachment: Option<&AttachmentRef>) -> bool
where
    R: MediaRecognizer + ?Sized,
{
    attachment.is_some_and(|a| a.category_with(recognizer) == Category::Generic)
}

//! Type labels for quotes without text.

use crate::classify::Category;
use crate::i18n::{Localizer, keys};

/// Localization key of a type label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    /// "Video".
    Video,
    /// "Photo".
    Photo,
    /// "Voice Message".
    VoiceMessage,
    /// "Audio".
    Audio,
}

impl LabelKey {
    /// The message key to look up.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Video => keys::VIDEO,
            Self::Photo => keys::PHOTO,
            Self::VoiceMessage => keys::VOICE_MESSAGE,
            Self::Audio => keys::AUDIO,
        }
    }
}

impl Category {
    /// Label key for this category. Generic attachments have none; their file
    /// name already says what they are.
    #[must_use]
    pub const fn label_key(&self) -> Option<LabelKey> {
        match self {
            Self::Video => Some(LabelKey::Video),
            Self::Image => Some(LabelKey::Photo),
            Self::AudioVoice => Some(LabelKey::VoiceMessage),
            Self::Audio => Some(LabelKey::Audio),
            Self::Generic => None,
        }
    }
}

/// Returns the localized type label for `category`.
///
/// Only meaningful for quotes with empty text.
#[must_use]
pub fn select_label<L>(category: Category, localizer: &L) -> Option<String>
where
    L: Localizer + ?Sized,
{
    category
        .label_key()
        .map(|key| localizer.lookup(key.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;

    #[test]
    fn test_label_keys() {
        assert_eq!(Category::Video.label_key(), Some(LabelKey::Video));
        assert_eq!(Category::Image.label_key(), Some(LabelKey::Photo));
        assert_eq!(
            Category::AudioVoice.label_key(),
            Some(LabelKey::VoiceMessage)
        );
        assert_eq!(Category::Audio.label_key(), Some(LabelKey::Audio));
        assert_eq!(Category::Generic.label_key(), None);
    }

    #[test]
    fn test_key_tokens() {
        assert_eq!(LabelKey::Video.as_str(), "video");
        assert_eq!(LabelKey::Photo.as_str(), "photo");
        assert_eq!(LabelKey::VoiceMessage.as_str(), "voiceMessage");
        assert_eq!(LabelKey::Audio.as_str(), "audio");
    }

    #[test]
    fn test_select_label_localizes() {
        let mut catalog = Catalog::english();
        catalog.insert("voiceMessage", "Sprachnachricht");
        assert_eq!(
            select_label(Category::AudioVoice, &catalog).as_deref(),
            Some("Sprachnachricht")
        );
        assert_eq!(
            select_label(Category::Image, &catalog).as_deref(),
            Some("Photo")
        );
    }

    #[test]
    fn test_generic_has_no_label() {
        assert_eq!(select_label(Category::Generic, &Catalog::english()), None);
    }
}

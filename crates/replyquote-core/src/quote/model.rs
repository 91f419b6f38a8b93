//! Quote data models.

use std::fmt;
use std::sync::Arc;

use replyquote_mime::MimeType;
use serde::{Deserialize, Serialize};

/// Zero-argument callback supplied by the caller.
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// Which side of the conversation the quoting message sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Received message.
    #[default]
    Incoming,
    /// Sent message.
    Outgoing,
}

impl Direction {
    /// Returns true for incoming messages.
    #[must_use]
    pub const fn is_incoming(self) -> bool {
        matches!(self, Self::Incoming)
    }
}

/// Colour tag assigned to a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum AuthorColor {
    /// Red.
    Red,
    /// Deep orange.
    DeepOrange,
    /// Brown.
    Brown,
    /// Pink.
    Pink,
    /// Purple.
    Purple,
    /// Indigo.
    Indigo,
    /// Blue.
    Blue,
    /// Teal.
    Teal,
    /// Green.
    Green,
    /// Light green.
    LightGreen,
    /// Blue grey.
    BlueGrey,
    /// Grey, also used for unknown tags.
    #[default]
    Grey,
}

impl AuthorColor {
    /// Parse from the tag string. Unknown tags map to [`AuthorColor::Grey`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "red" => Self::Red,
            "deep_orange" => Self::DeepOrange,
            "brown" => Self::Brown,
            "pink" => Self::Pink,
            "purple" => Self::Purple,
            "indigo" => Self::Indigo,
            "blue" => Self::Blue,
            "teal" => Self::Teal,
            "green" => Self::Green,
            "light_green" => Self::LightGreen,
            "blue_grey" => Self::BlueGrey,
            _ => Self::Grey,
        }
    }

    /// Convert to the tag string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::DeepOrange => "deep_orange",
            Self::Brown => "brown",
            Self::Pink => "pink",
            Self::Purple => "purple",
            Self::Indigo => "indigo",
            Self::Blue => "blue",
            Self::Teal => "teal",
            Self::Green => "green",
            Self::LightGreen => "light_green",
            Self::BlueGrey => "blue_grey",
            Self::Grey => "grey",
        }
    }
}

impl From<String> for AuthorColor {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<AuthorColor> for &'static str {
    fn from(value: AuthorColor) -> Self {
        value.as_str()
    }
}

impl std::str::FromStr for AuthorColor {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Author of the quoted message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Phone number identifying the contact.
    pub phone_number: String,
    /// Name the contact chose for their own profile.
    #[serde(default)]
    pub profile_name: Option<String>,
    /// Name saved in the local address book.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Contact colour tag.
    #[serde(default)]
    pub color: AuthorColor,
    /// Whether the quoted message was sent by the local user.
    #[serde(default)]
    pub is_self: bool,
}

impl Author {
    /// Creates a contact author identified by phone number.
    #[must_use]
    pub fn contact(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            ..Self::default()
        }
    }

    /// Creates an author representing the local user.
    #[must_use]
    pub fn me(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            is_self: true,
            ..Self::default()
        }
    }

    /// Sets the address book name.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Sets the profile name.
    #[must_use]
    pub fn with_profile_name(mut self, name: impl Into<String>) -> Self {
        self.profile_name = Some(name.into());
        self
    }

    /// Sets the colour tag.
    #[must_use]
    pub const fn with_color(mut self, color: AuthorColor) -> Self {
        self.color = color;
        self
    }
}

/// Thumbnail of a visual attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailRef {
    /// MIME type of the thumbnail image.
    pub content_type: MimeType,
    /// Local renderable URL, filled in once the thumbnail has been loaded.
    #[serde(default)]
    pub resolved_url: Option<String>,
}

impl ThumbnailRef {
    /// Creates a thumbnail that is still loading.
    #[must_use]
    pub fn pending(content_type: impl Into<MimeType>) -> Self {
        Self {
            content_type: content_type.into(),
            resolved_url: None,
        }
    }

    /// Creates a thumbnail with a loaded URL.
    #[must_use]
    pub fn resolved(content_type: impl Into<MimeType>, url: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            resolved_url: Some(url.into()),
        }
    }

    /// Returns the URL to display, if one has been loaded.
    ///
    /// An empty URL cannot be rendered and counts as not loaded.
    #[must_use]
    pub fn object_url(&self) -> Option<&str> {
        self.resolved_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Attachment of the quoted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentRef {
    /// MIME type of the attachment.
    pub content_type: MimeType,
    /// Original file name.
    #[serde(default)]
    pub file_name: String,
    /// Whether an audio attachment was recorded as a voice message.
    #[serde(default)]
    pub is_voice_message: bool,
    /// Thumbnail for visual attachments.
    #[serde(default)]
    pub thumbnail: Option<ThumbnailRef>,
}

impl AttachmentRef {
    /// Creates an attachment without a thumbnail.
    #[must_use]
    pub fn new(content_type: impl Into<MimeType>, file_name: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            file_name: file_name.into(),
            is_voice_message: false,
            thumbnail: None,
        }
    }

    /// Marks the attachment as a voice message.
    #[must_use]
    pub const fn voice_message(mut self) -> Self {
        self.is_voice_message = true;
        self
    }

    /// Sets the thumbnail.
    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail: ThumbnailRef) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    /// Returns the loaded thumbnail URL, if any.
    #[must_use]
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail.as_ref().and_then(ThumbnailRef::object_url)
    }
}

/// Callbacks attached to a quote.
#[derive(Clone, Default)]
pub struct QuoteHandlers {
    /// Runs when the quote itself is pressed.
    pub on_activate: Option<Callback>,
    /// Runs when the dismiss control is pressed.
    pub on_dismiss: Option<Callback>,
}

impl QuoteHandlers {
    /// Returns true if the quote reacts to being pressed.
    #[must_use]
    pub const fn is_clickable(&self) -> bool {
        self.on_activate.is_some()
    }

    /// Returns true if the quote offers a dismiss control.
    #[must_use]
    pub const fn is_dismissible(&self) -> bool {
        self.on_dismiss.is_some()
    }
}

impl fmt::Debug for QuoteHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuoteHandlers")
            .field("on_activate", &self.on_activate.is_some())
            .field("on_dismiss", &self.on_dismiss.is_some())
            .finish()
    }
}

/// A quoted message as supplied for one render.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRef {
    /// Quoted text. Empty when the quote only references an attachment.
    #[serde(default)]
    pub text: String,
    /// Quoted attachment.
    #[serde(default)]
    pub attachment: Option<AttachmentRef>,
    /// Author of the quoted message.
    pub author: Author,
    /// Direction of the message containing the quote.
    #[serde(default)]
    pub direction: Direction,
    /// Layout hint: other content is shown above the quote.
    #[serde(default)]
    pub has_content_above: bool,
    /// Caller callbacks.
    #[serde(skip)]
    pub handlers: QuoteHandlers,
}

impl QuoteRef {
    /// Creates an empty quote by `author`.
    #[must_use]
    pub fn new(author: Author) -> Self {
        Self {
            author,
            ..Self::default()
        }
    }

    /// Sets the quoted text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the quoted attachment.
    #[must_use]
    pub fn with_attachment(mut self, attachment: AttachmentRef) -> Self {
        self.attachment = Some(attachment);
        self
    }

    /// Sets the direction.
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Marks that other content is shown above the quote.
    #[must_use]
    pub const fn with_content_above(mut self) -> Self {
        self.has_content_above = true;
        self
    }

    /// Sets the activation callback.
    #[must_use]
    pub fn on_activate(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.handlers.on_activate = Some(Arc::new(callback));
        self
    }

    /// Sets the dismiss callback.
    #[must_use]
    pub fn on_dismiss(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.handlers.on_dismiss = Some(Arc::new(callback));
        self
    }
}

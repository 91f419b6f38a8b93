//! # replyquote-mime
//!
//! MIME type parsing and media recognition for chat attachment previews.
//!
//! ## Features
//!
//! - **Content types**: Parse `type/subtype; param=value` strings
//! - **MIME identifiers**: A lossless [`MimeType`] wrapper around the raw string
//!   an attachment carries, with a normalized essence for comparisons
//! - **Media recognition**: Decide whether a type is a playable video, a
//!   displayable image, or audio
//!
//! ## Quick Start
//!
//! ```ignore
//! use replyquote_mime::{MediaRecognizer, MimeType, StandardRecognizer};
//!
//! let mime = MimeType::from("Image/PNG");
//! let recognizer = StandardRecognizer::standard();
//!
//! assert!(recognizer.is_displayable_image(&mime));
//! assert!(!recognizer.is_playable_video(&mime));
//! ```
//!
//! ### Accepting extra types
//!
//! ```ignore
//! use replyquote_mime::StandardRecognizer;
//!
//! let recognizer = StandardRecognizer::new()
//!     .with_video_type("video/quicktime")
//!     .with_image_type("image/heic");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod content_type;
mod error;
mod mime_type;
mod recognizer;

pub use content_type::ContentType;
pub use error::{Error, Result};
pub use mime_type::MimeType;
pub use recognizer::{
    DISPLAYABLE_IMAGE_TYPES, MediaRecognizer, PLAYABLE_VIDEO_TYPES, StandardRecognizer,
};

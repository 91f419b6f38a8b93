//! # replyquote-core
//!
//! Decision logic for rendering a quoted message (a reply reference) inside a
//! chat conversation.
//!
//! This crate provides:
//! - Quote data models and the validity gate
//! - Attachment classification into presentation categories
//! - Thumbnail versus placeholder icon selection
//! - Localized type labels and author attribution
//! - A [`Composer`] that turns a [`QuoteRef`] into a [`RenderPlan`]
//! - A default [`Catalog`] localizer and persisted [`Settings`]
//!
//! Nothing in the decision path performs I/O or fails; missing data always
//! degrades to a default presentation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod author;
pub mod classify;
pub mod compose;
mod error;
pub mod i18n;
pub mod label;
pub mod quote;
pub mod settings;
pub mod style;
pub mod visual;

pub use author::{AuthorBlock, ContactName, ContactNameResolver};
pub use classify::{Category, classify, classify_with};
pub use compose::{BodyBlock, Composer, PressOutcome, PressTarget, QuotePlan, RenderPlan};
pub use error::{Error, Result};
pub use i18n::{Catalog, Localizer};
pub use label::{LabelKey, select_label};
pub use quote::{
    AttachmentRef, Author, AuthorColor, Callback, Direction, QuoteHandlers, QuoteRef,
    ThumbnailRef, is_valid,
};
pub use settings::Settings;
pub use style::{ContainerStyle, StyleToken};
pub use visual::{
    GenericFile, Icon, VisualDecision, resolve_visual, resolve_visual_with,
    should_show_generic_file, should_show_generic_file_with,
};

pub use replyquote_mime::{MediaRecognizer, MimeType, StandardRecognizer};

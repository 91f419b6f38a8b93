//! Render decisions for quoted messages.
//!
//! The [`Composer`] wires the validity gate, classifier, thumbnail resolver
//! and label selector together and returns a [`RenderPlan`].

mod plan;

pub use plan::{BodyBlock, PressOutcome, PressTarget, QuotePlan, RenderPlan};

use replyquote_mime::{MediaRecognizer, StandardRecognizer};
use tracing::{debug, trace};

use crate::author::{AuthorBlock, ContactName, ContactNameResolver};
use crate::classify::Category;
use crate::i18n::{Localizer, keys};
use crate::label::select_label;
use crate::quote::QuoteRef;
use crate::style::ContainerStyle;
use crate::visual::{GenericFile, VisualDecision};

/// Composes quotes into render plans.
///
/// Holds the collaborators; composing itself is pure and may be repeated
/// with the same input for the same result.
#[derive(Clone, Copy)]
pub struct Composer<'a> {
    localizer: &'a dyn Localizer,
    contacts: &'a dyn ContactNameResolver,
    recognizer: &'a dyn MediaRecognizer,
}

impl<'a> Composer<'a> {
    /// Creates a composer with the default contact formatting and the
    /// standard recognizer.
    #[must_use]
    pub fn new(localizer: &'a dyn Localizer) -> Self {
        Self {
            localizer,
            contacts: &ContactName,
            recognizer: StandardRecognizer::standard(),
        }
    }

    /// Uses `contacts` to name non-self authors.
    #[must_use]
    pub fn with_contacts(mut self, contacts: &'a dyn ContactNameResolver) -> Self {
        self.contacts = contacts;
        self
    }

    /// Uses `recognizer` to classify attachments.
    #[must_use]
    pub fn with_recognizer(mut self, recognizer: &'a dyn MediaRecognizer) -> Self {
        self.recognizer = recognizer;
        self
    }

    /// Decides what to render for `quote`.
    #[must_use]
    pub fn compose(&self, quote: &QuoteRef) -> RenderPlan {
        if !quote.is_valid() {
            trace!("quote has neither text nor attachment, rendering nothing");
            return RenderPlan::Empty;
        }

        let category = quote
            .attachment
            .as_ref()
            .map(|attachment| attachment.category_with(self.recognizer));

        let visual = quote.attachment.as_ref().zip(category).map(|(attachment, category)| {
            VisualDecision::for_category(category, attachment.thumbnail_url())
        });

        let thumbnail_alt = visual
            .as_ref()
            .and_then(VisualDecision::thumbnail_url)
            .map(|_| self.localizer.lookup(keys::QUOTE_THUMBNAIL_ALT));

        let body = self.body(quote, category);

        debug!(
            category = ?category,
            body = body.kind(),
            has_thumbnail = thumbnail_alt.is_some(),
            "composed quote"
        );

        RenderPlan::Quote(QuotePlan {
            style: ContainerStyle::for_quote(quote),
            author: AuthorBlock::for_author(&quote.author, self.localizer, self.contacts),
            body,
            category,
            visual,
            thumbnail_alt,
            dismissible: quote.handlers.is_dismissible(),
            handlers: quote.handlers.clone(),
        })
    }

    fn body(&self, quote: &QuoteRef, category: Option<Category>) -> BodyBlock {
        if !quote.text.is_empty() {
            return BodyBlock::Text(quote.text.clone());
        }

        match (quote.attachment.as_ref(), category) {
            (Some(attachment), Some(Category::Generic)) => {
                BodyBlock::GenericFile(GenericFile::new(attachment.file_name.clone()))
            }
            (_, Some(category)) => select_label(category, self.localizer)
                .map_or(BodyBlock::Nothing, BodyBlock::TypeLabel),
            (_, None) => BodyBlock::Nothing,
        }
    }
}

impl std::fmt::Debug for Composer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Composer").finish_non_exhaustive()
    }
}

//! Render plan types.

use serde::Serialize;
use tracing::trace;

use crate::author::AuthorBlock;
use crate::classify::Category;
use crate::quote::QuoteHandlers;
use crate::style::ContainerStyle;
use crate::visual::{GenericFile, VisualDecision};

/// Result of composing a quote.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RenderPlan {
    /// The quote has nothing to show.
    Empty,
    /// The quote renders.
    Quote(QuotePlan),
}

impl RenderPlan {
    /// Returns true if nothing renders.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the quote plan, if any.
    #[must_use]
    pub const fn as_quote(&self) -> Option<&QuotePlan> {
        match self {
            Self::Quote(plan) => Some(plan),
            Self::Empty => None,
        }
    }
}

/// Primary content under the author line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum BodyBlock {
    /// Quoted text, verbatim.
    Text(String),
    /// File name of a generic attachment.
    GenericFile(GenericFile),
    /// Localized attachment type label.
    TypeLabel(String),
    /// Nothing beyond the author line.
    Nothing,
}

impl BodyBlock {
    /// Short name of the variant, for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::GenericFile(_) => "genericFile",
            Self::TypeLabel(_) => "typeLabel",
            Self::Nothing => "nothing",
        }
    }
}

/// Everything a renderer needs to draw a quote.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotePlan {
    /// Container style variants.
    pub style: ContainerStyle,
    /// Author line.
    pub author: AuthorBlock,
    /// Text, file name or type label.
    pub body: BodyBlock,
    /// Attachment category, when there is an attachment.
    pub category: Option<Category>,
    /// Thumbnail or icon slot. `None` when there is no attachment.
    pub visual: Option<VisualDecision>,
    /// Alternative text for the thumbnail, when one is shown.
    pub thumbnail_alt: Option<String>,
    /// Whether the dismiss control is shown.
    pub dismissible: bool,
    #[serde(skip)]
    pub(crate) handlers: QuoteHandlers,
}

/// Part of a rendered quote that can be pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    /// The quote container.
    Quote,
    /// The dismiss control inside the container.
    Dismiss,
}

/// Which callbacks ran for a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PressOutcome {
    /// The activation callback ran.
    pub activated: bool,
    /// The dismiss callback ran.
    pub dismissed: bool,
}

impl QuotePlan {
    /// Returns true if pressing the container does something.
    #[must_use]
    pub const fn is_clickable(&self) -> bool {
        self.handlers.is_clickable()
    }

    /// Delivers a press to `target` and runs the matching callbacks.
    ///
    /// A press on the dismiss control runs the dismiss callback and stops
    /// there; it never reaches the container's activation callback. A press
    /// on a dismiss control the plan does not have does nothing.
    pub fn press(&self, target: PressTarget) -> PressOutcome {
        let mut outcome = PressOutcome::default();

        if target == PressTarget::Dismiss {
            let Some(on_dismiss) = &self.handlers.on_dismiss else {
                trace!("press on missing dismiss control ignored");
                return outcome;
            };
            on_dismiss();
            outcome.dismissed = true;
            return outcome;
        }

        if let Some(on_activate) = &self.handlers.on_activate {
            on_activate();
            outcome.activated = true;
        }
        outcome
    }
}

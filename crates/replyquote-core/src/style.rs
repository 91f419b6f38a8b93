//! Container style variants.
//!
//! Informational only: the tokens tell a styling layer which variant of the
//! quote container to draw. They play no part in classification.

use serde::{Serialize, Serializer};

use crate::quote::{AuthorColor, QuoteRef};

/// One style variant of the quote container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleToken {
    /// Quote inside a received message.
    Incoming,
    /// Quote inside a sent message.
    Outgoing,
    /// Sent message quoting a contact, tinted with their colour.
    OutgoingColor(AuthorColor),
    /// Sent message quoting the local user.
    OutgoingYou,
    /// Quote has no activation callback.
    NoClick,
    /// Other content is shown above the quote.
    WithContentAbove,
}

impl StyleToken {
    /// Stable token name, e.g. `outgoing-blue_grey`.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Incoming => "incoming".to_string(),
            Self::Outgoing => "outgoing".to_string(),
            Self::OutgoingColor(color) => format!("outgoing-{}", color.as_str()),
            Self::OutgoingYou => "outgoing-you".to_string(),
            Self::NoClick => "no-click".to_string(),
            Self::WithContentAbove => "with-content-above".to_string(),
        }
    }
}

/// Ordered style variants for a quote container.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContainerStyle {
    tokens: Vec<StyleToken>,
}

impl ContainerStyle {
    /// Derives the style from direction, authorship, clickability and layout.
    #[must_use]
    pub fn for_quote(quote: &QuoteRef) -> Self {
        let mut tokens = Vec::with_capacity(3);

        if quote.direction.is_incoming() {
            tokens.push(StyleToken::Incoming);
        } else {
            tokens.push(StyleToken::Outgoing);
            if quote.author.is_self {
                tokens.push(StyleToken::OutgoingYou);
            } else {
                tokens.push(StyleToken::OutgoingColor(quote.author.color));
            }
        }

        if !quote.handlers.is_clickable() {
            tokens.push(StyleToken::NoClick);
        }
        if quote.has_content_above {
            tokens.push(StyleToken::WithContentAbove);
        }

        Self { tokens }
    }

    /// The tokens in order.
    #[must_use]
    pub fn tokens(&self) -> &[StyleToken] {
        &self.tokens
    }

    /// Returns true if `token` is part of the style.
    #[must_use]
    pub fn contains(&self, token: StyleToken) -> bool {
        self.tokens.contains(&token)
    }

    /// Token names in order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.tokens.iter().map(StyleToken::name).collect()
    }
}

impl Serialize for ContainerStyle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.tokens.iter().map(StyleToken::name))
    }
}

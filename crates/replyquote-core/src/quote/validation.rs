//! Quote validity gate.

use super::model::QuoteRef;

/// Returns true if the quote has anything to show.
///
/// A quote is valid when it has non-empty text or an attachment. Invalid
/// quotes render nothing; they are not an error.
#[must_use]
pub fn is_valid(quote: &QuoteRef) -> bool {
    !quote.text.is_empty() || quote.attachment.is_some()
}

impl QuoteRef {
    /// Returns true if the quote has anything to show. See [`is_valid`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_valid(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::{AttachmentRef, Author};
    use proptest::prelude::*;

    fn author() -> Author {
        Author::contact("+15550100")
    }

    #[test]
    fn test_empty_quote_is_invalid() {
        assert!(!is_valid(&QuoteRef::new(author())));
    }

    #[test]
    fn test_text_only_is_valid() {
        assert!(is_valid(&QuoteRef::new(author()).with_text("hello")));
    }

    #[test]
    fn test_attachment_only_is_valid() {
        let quote = QuoteRef::new(author())
            .with_attachment(AttachmentRef::new("application/pdf", "report.pdf"));
        assert!(quote.is_valid());
    }

    #[test]
    fn test_whitespace_text_counts_as_text() {
        assert!(is_valid(&QuoteRef::new(author()).with_text(" ")));
    }

    proptest! {
        #[test]
        fn prop_non_empty_text_is_always_valid(
            text in ".{1,32}",
            with_attachment in any::<bool>(),
        ) {
            let mut quote = QuoteRef::new(author()).with_text(text);
            if with_attachment {
                quote = quote.with_attachment(AttachmentRef::new("image/png", "a.png"));
            }
            prop_assert!(is_valid(&quote));
        }
    }
}

//! Author attribution.

use serde::Serialize;

use crate::i18n::{Localizer, keys};
use crate::quote::{Author, AuthorColor};

/// Produces the name shown for a contact.
pub trait ContactNameResolver {
    /// Returns the text shown for a contact that is not the local user.
    fn resolve(
        &self,
        phone_number: &str,
        profile_name: Option<&str>,
        display_name: Option<&str>,
    ) -> String;
}

/// Default contact name formatting.
///
/// Shows the address book name when there is one, otherwise the phone number
/// followed by `~profile` when the contact has a profile name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactName;

impl ContactNameResolver for ContactName {
    fn resolve(
        &self,
        phone_number: &str,
        profile_name: Option<&str>,
        display_name: Option<&str>,
    ) -> String {
        if let Some(name) = display_name.filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        match profile_name.filter(|n| !n.is_empty()) {
            Some(profile) => format!("{phone_number} ~{profile}"),
            None => phone_number.to_string(),
        }
    }
}

/// Author line of a rendered quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorBlock {
    /// Text to show.
    pub name: String,
    /// Whether the author is the local user.
    pub is_self: bool,
    /// Colour tag, only for contacts.
    pub color: Option<AuthorColor>,
}

impl AuthorBlock {
    /// Builds the author line. The resolver is only consulted for contacts.
    #[must_use]
    pub fn for_author<L, C>(author: &Author, localizer: &L, contacts: &C) -> Self
    where
        L: Localizer + ?Sized,
        C: ContactNameResolver + ?Sized,
    {
        if author.is_self {
            return Self {
                name: localizer.lookup(keys::YOU),
                is_self: true,
                color: None,
            };
        }

        Self {
            name: contacts.resolve(
                &author.phone_number,
                author.profile_name.as_deref(),
                author.display_name.as_deref(),
            ),
            is_self: false,
            color: Some(author.color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;
    use std::cell::Cell;

    /// Resolver that counts how often it is asked.
    #[derive(Default)]
    struct Counting {
        calls: Cell<u32>,
    }

    impl ContactNameResolver for Counting {
        fn resolve(&self, phone_number: &str, _: Option<&str>, _: Option<&str>) -> String {
            self.calls.set(self.calls.get() + 1);
            format!("contact {phone_number}")
        }
    }

    #[test]
    fn test_contact_name_prefers_display_name() {
        let name = ContactName.resolve("+15550100", Some("Al"), Some("Alice Smith"));
        assert_eq!(name, "Alice Smith");
    }

    #[test]
    fn test_contact_name_with_profile() {
        let name = ContactName.resolve("+15550100", Some("Al"), None);
        assert_eq!(name, "+15550100 ~Al");
    }

    #[test]
    fn test_contact_name_phone_only() {
        assert_eq!(ContactName.resolve("+15550100", None, None), "+15550100");
        assert_eq!(
            ContactName.resolve("+15550100", Some(""), Some("")),
            "+15550100"
        );
    }

    #[test]
    fn test_self_author_uses_localized_you() {
        let contacts = Counting::default();
        let mut catalog = Catalog::english();
        catalog.insert("you", "Du");

        let block = AuthorBlock::for_author(
            &Author::me("+15550100").with_color(AuthorColor::Red),
            &catalog,
            &contacts,
        );
        assert_eq!(block.name, "Du");
        assert!(block.is_self);
        assert_eq!(block.color, None);
        assert_eq!(contacts.calls.get(), 0);
    }

    #[test]
    fn test_contact_author_uses_resolver() {
        let contacts = Counting::default();
        let author = Author::contact("+15550199").with_color(AuthorColor::Indigo);

        let block = AuthorBlock::for_author(&author, &Catalog::english(), &contacts);
        assert_eq!(block.name, "contact +15550199");
        assert!(!block.is_self);
        assert_eq!(block.color, Some(AuthorColor::Indigo));
        assert_eq!(contacts.calls.get(), 1);
    }
}

//! Quoted message input.

mod model;
mod validation;

pub use model::{
    AttachmentRef, Author, AuthorColor, Callback, Direction, QuoteHandlers, QuoteRef,
    ThumbnailRef,
};
pub use validation::is_valid;

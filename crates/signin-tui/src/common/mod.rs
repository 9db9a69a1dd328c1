//! Helpers shared across feature slices.

pub mod text;

pub use text::{pop_grapheme, sanitize_for_field, truncate_start_with_ellipsis};

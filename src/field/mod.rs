//! Minimal host text field.
//!
//! Owns the buffer and cursor, applies edits, and wires them to the
//! controller and tokenizer: every edit emits the (text, start, removed,
//! inserted) change notification, and committing a suggestion replaces the
//! current token with its terminated form. No rendering lives here; the
//! field only turns key events into edits and answers popup queries.

pub mod text_field;

pub use text_field::SocialTextField;

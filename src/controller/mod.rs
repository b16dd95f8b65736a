//! Input controller.
//!
//! Watches the host field's text-change notifications, switches the active
//! suggestion source when a trigger symbol is typed, and keeps the
//! tokenizer's symbol set in sync with the capability flags.

pub mod social;
pub mod source;

pub use social::{SocialController, SocialView};
pub use source::ActiveSource;

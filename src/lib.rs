//! Symbol-aware token input for hashtag and mention suggestions.
//!
//! A multi-token text field normally splits its content on commas. This crate
//! splits on trigger symbols (`#` and `@`) instead, and switches the active
//! suggestion source whenever one of those symbols is typed, so the host
//! popup can offer hashtags after a `#` and mentions after an `@`.
//!
//! ## Module Structure
//!
//! - **token**: the symbol-aware tokenizer (token start/end queries and
//!   token termination) plus styled text with span preservation
//! - **controller**: capability flags, enabled-symbol set, and the active
//!   suggestion source switched on text-change notifications
//! - **suggest**: pluggable list-backed suggestion sources
//! - **field**: a minimal host text field wiring the pieces together

pub mod config;
pub mod controller;
pub mod error;
pub mod field;
pub mod suggest;
pub mod token;

pub use config::SocialConfig;
pub use controller::{ActiveSource, SocialController, SocialView};
pub use error::EditError;
pub use field::SocialTextField;
pub use suggest::{SuggestionList, SuggestionSource};
pub use token::{StyleSpan, StyledText, SymbolTokenizer, HASHTAG, MENTION};

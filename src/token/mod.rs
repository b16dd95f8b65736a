//! Symbol-aware tokenizer.
//!
//! Answers three queries over an immutable text buffer and a cursor given as
//! a char offset: where the current token starts, where it ends, and what to
//! insert when a suggestion for it is committed. The tokenizer holds nothing
//! but a snapshot of the enabled trigger symbols, so every query is pure and
//! safe to run re-entrantly.

pub mod styled;
pub mod tokenizer;

pub use styled::{StyleSpan, StyledText};
pub use tokenizer::{SymbolTokenizer, HASHTAG, MENTION};

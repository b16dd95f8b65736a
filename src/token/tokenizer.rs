use std::collections::HashSet;

use super::styled::StyledText;

/// Trigger symbol for the hashtag suggestion source.
pub const HASHTAG: char = '#';

/// Trigger symbol for the mention suggestion source.
pub const MENTION: char = '@';

/// Token-boundary scanner that delimits tokens with trigger symbols instead
/// of commas.
///
/// Built from a snapshot of the enabled symbols and immutable afterwards; any
/// change to the enabled set requires building a fresh tokenizer. All cursor
/// arguments and returned indices are char offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTokenizer {
    symbols: HashSet<char>,
}

impl SymbolTokenizer {
    pub fn new(symbols: HashSet<char>) -> Self {
        Self { symbols }
    }

    pub fn symbols(&self) -> &HashSet<char> {
        &self.symbols
    }

    /// Where the token under `cursor` starts.
    ///
    /// Scans left until the preceding char is a configured symbol or the
    /// buffer starts, then skips forward over a run of plain spaces so that
    /// `"#  tag"` still starts at the `t`. The symbol itself is never part
    /// of the token. Result is in `[0, cursor]`.
    pub fn find_token_start(&self, text: &str, cursor: usize) -> usize {
        let chars: Vec<char> = text.chars().collect();
        let cursor = cursor.min(chars.len());
        let mut i = cursor;
        while i > 0 && !self.symbols.contains(&chars[i - 1]) {
            i -= 1;
        }
        while i < cursor && chars[i] == ' ' {
            i += 1;
        }
        i
    }

    /// Where the token under `cursor` ends: the index of the first configured
    /// symbol at or after `cursor`, or the char count of the buffer. Result
    /// is in `[cursor, len]`.
    pub fn find_token_end(&self, text: &str, cursor: usize) -> usize {
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        let mut i = cursor.min(len);
        while i < len {
            if self.symbols.contains(&chars[i]) {
                return i;
            }
            i += 1;
        }
        len
    }

    /// The text to insert when a finalized token is committed.
    ///
    /// Trailing spaces are skipped when inspecting the last char. If that
    /// char is a configured symbol the input comes back unchanged, since the
    /// symbol already acts as the boundary; otherwise a single space is
    /// appended. Style spans on the input carry over untouched.
    pub fn terminate_token(&self, text: &StyledText) -> StyledText {
        let chars: Vec<char> = text.as_str().chars().collect();
        let mut i = chars.len();
        while i > 0 && chars[i - 1] == ' ' {
            i -= 1;
        }
        if i > 0 && self.symbols.contains(&chars[i - 1]) {
            return text.clone();
        }
        text.with_trailing_space()
    }
}

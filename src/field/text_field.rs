use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::trace;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::config::SocialConfig;
use crate::controller::{ActiveSource, SocialController, SocialView};
use crate::error::EditError;
use crate::suggest::SuggestionSource;
use crate::token::StyledText;

/// Multi-token text field with hashtag and mention suggestion support.
///
/// The cursor is a char offset, `0 <= cursor <= char count`. All edits run
/// synchronously and notify the controller before returning.
pub struct SocialTextField {
    text: String,
    cursor: usize,
    controller: SocialController,
    hashtag_source: Option<Box<dyn SuggestionSource>>,
    mention_source: Option<Box<dyn SuggestionSource>>,
}

impl SocialTextField {
    pub fn new(config: SocialConfig) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            controller: SocialController::new(config),
            hashtag_source: None,
            mention_source: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn controller(&self) -> &SocialController {
        &self.controller
    }

    pub fn active_source(&self) -> ActiveSource {
        self.controller.active_source()
    }

    /// Install the list the popup queries after a `#`.
    pub fn set_hashtag_source(&mut self, source: impl SuggestionSource + 'static) {
        self.hashtag_source = Some(Box::new(source));
    }

    /// Install the list the popup queries after an `@`.
    pub fn set_mention_source(&mut self, source: impl SuggestionSource + 'static) {
        self.mention_source = Some(Box::new(source));
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_at(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Move the cursor, clamped to the buffer.
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.char_len());
    }

    pub fn insert_char(&mut self, c: char) {
        let start = self.cursor;
        let byte = self.byte_at(start);
        self.text.insert(byte, c);
        self.cursor += 1;
        self.controller.on_text_changed(&self.text, start, 0, 1);
    }

    pub fn insert_str(&mut self, s: &str) {
        let start = self.cursor;
        let byte = self.byte_at(start);
        self.text.insert_str(byte, s);
        let inserted = s.chars().count();
        self.cursor += inserted;
        self.controller.on_text_changed(&self.text, start, 0, inserted);
    }

    /// Delete the grapheme cluster before the cursor, so a multi-char emoji
    /// disappears in one keystroke.
    pub fn delete_backward(&mut self) {
        let cursor_byte = self.byte_at(self.cursor);
        let Some(cluster) = self.text[..cursor_byte].graphemes(true).next_back() else {
            return;
        };
        let removed = cluster.chars().count();
        let start_byte = cursor_byte - cluster.len();
        self.text.replace_range(start_byte..cursor_byte, "");
        self.cursor -= removed;
        self.controller
            .on_text_changed(&self.text, self.cursor, removed, 0);
    }

    /// Replace the char range `start..end` with `replacement` and leave the
    /// cursor after the inserted text.
    pub fn replace_range(
        &mut self,
        start: usize,
        end: usize,
        replacement: &str,
    ) -> Result<(), EditError> {
        let len = self.char_len();
        if start > end || end > len {
            return Err(EditError::RangeOutOfBounds { start, end, len });
        }
        let start_byte = self.byte_at(start);
        let end_byte = self.byte_at(end);
        self.text.replace_range(start_byte..end_byte, replacement);
        let inserted = replacement.chars().count();
        self.cursor = start + inserted;
        self.controller
            .on_text_changed(&self.text, start, end - start, inserted);
        Ok(())
    }

    /// Translate a key event into an edit. Control and alt chords belong to
    /// the host and are left alone.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return;
        }
        match key.code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.delete_backward(),
            KeyCode::Left => self.set_cursor(self.cursor.saturating_sub(1)),
            KeyCode::Right => self.set_cursor(self.cursor + 1),
            KeyCode::Home => self.set_cursor(0),
            KeyCode::End => self.set_cursor(self.char_len()),
            _ => {}
        }
    }

    /// Char range of the token under the cursor. The leading trigger symbol
    /// is not part of the token.
    pub fn token_bounds(&self) -> (usize, usize) {
        let tokenizer = self.controller.tokenizer();
        (
            tokenizer.find_token_start(&self.text, self.cursor),
            tokenizer.find_token_end(&self.text, self.cursor),
        )
    }

    /// Text of the token under the cursor.
    pub fn current_token(&self) -> &str {
        let (start, end) = self.token_bounds();
        &self.text[self.byte_at(start)..self.byte_at(end)]
    }

    /// The prefix the popup filters on: token start up to the cursor.
    pub fn completion_prefix(&self) -> &str {
        let (start, _) = self.token_bounds();
        &self.text[self.byte_at(start)..self.byte_at(self.cursor)]
    }

    /// Candidates from whichever source is active, filtered by the current
    /// completion prefix.
    pub fn suggestions(&self) -> Vec<String> {
        let source = match self.controller.active_source() {
            ActiveSource::Hashtag => self.hashtag_source.as_deref(),
            ActiveSource::Mention => self.mention_source.as_deref(),
            ActiveSource::None => None,
        };
        match source {
            Some(source) => source.candidates(self.completion_prefix()),
            None => Vec::new(),
        }
    }

    /// Accept `candidate` for the token under the cursor: the slice from
    /// token start to cursor is replaced with the terminated candidate and
    /// the cursor lands after it.
    pub fn commit_suggestion(&mut self, candidate: &str) -> Result<(), EditError> {
        if self.controller.active_source() == ActiveSource::None {
            return Err(EditError::NoActiveSource);
        }
        let tokenizer = self.controller.tokenizer();
        let start = tokenizer.find_token_start(&self.text, self.cursor);
        let terminated = tokenizer.terminate_token(&StyledText::plain(candidate));
        trace!("committing suggestion {:?} at char {}", candidate, start);
        self.replace_range(start, self.cursor, terminated.as_str())
    }

    /// Display-cell column of the token start, for positioning the popup
    /// under the token rather than the cursor.
    pub fn popup_anchor_col(&self) -> u16 {
        let (start, _) = self.token_bounds();
        self.text[..self.byte_at(start)].width() as u16
    }
}

impl SocialView for SocialTextField {
    fn is_hashtag_enabled(&self) -> bool {
        self.controller.is_hashtag_enabled()
    }

    fn is_mention_enabled(&self) -> bool {
        self.controller.is_mention_enabled()
    }

    fn set_hashtag_enabled(&mut self, enabled: bool) {
        self.controller.set_hashtag_enabled(enabled);
    }

    fn set_mention_enabled(&mut self, enabled: bool) {
        self.controller.set_mention_enabled(enabled);
    }
}

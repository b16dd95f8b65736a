use std::collections::HashSet;

use log::debug;

use super::source::ActiveSource;
use crate::config::SocialConfig;
use crate::token::{SymbolTokenizer, HASHTAG, MENTION};

/// Capability surface for hashtag and mention support.
///
/// The host widget exposes this so integrators can toggle either trigger
/// symbol at runtime.
pub trait SocialView {
    fn is_hashtag_enabled(&self) -> bool;
    fn is_mention_enabled(&self) -> bool;
    fn set_hashtag_enabled(&mut self, enabled: bool);
    fn set_mention_enabled(&mut self, enabled: bool);
}

/// Reacts to text-change notifications and owns the active suggestion source.
///
/// Runs synchronously on the host's event thread; nothing here blocks and
/// nothing is shared across threads.
pub struct SocialController {
    config: SocialConfig,
    enabled_symbols: HashSet<char>,
    tokenizer: SymbolTokenizer,
    active_source: ActiveSource,
}

impl SocialController {
    /// Seed the enabled-symbol set from the capability flags and install a
    /// tokenizer configured with it.
    pub fn new(config: SocialConfig) -> Self {
        let mut enabled_symbols = HashSet::new();
        if config.hashtag_enabled {
            enabled_symbols.insert(HASHTAG);
        }
        if config.mention_enabled {
            enabled_symbols.insert(MENTION);
        }
        let tokenizer = SymbolTokenizer::new(enabled_symbols.clone());
        Self {
            config,
            enabled_symbols,
            tokenizer,
            active_source: ActiveSource::None,
        }
    }

    pub fn tokenizer(&self) -> &SymbolTokenizer {
        &self.tokenizer
    }

    pub fn active_source(&self) -> ActiveSource {
        self.active_source
    }

    /// Text-change notification: the host's (text, start, removed, inserted)
    /// triple after an edit has been applied.
    ///
    /// Only the single char at `start` in the new text is inspected; cursor
    /// movement and deletions never switch the source. An out-of-range
    /// `start` indicates a host inconsistency and is silently ignored.
    pub fn on_text_changed(&mut self, text: &str, start: usize, _removed: usize, _inserted: usize) {
        let Some(changed) = text.chars().nth(start) else {
            return;
        };
        match changed {
            HASHTAG if self.active_source != ActiveSource::Hashtag => {
                debug!("switching suggestion source to hashtag");
                self.active_source = ActiveSource::Hashtag;
            }
            MENTION if self.active_source != ActiveSource::Mention => {
                debug!("switching suggestion source to mention");
                self.active_source = ActiveSource::Mention;
            }
            _ => {}
        }
    }

    fn enable_symbol(&mut self, symbol: char, enable: bool) {
        if enable {
            self.enabled_symbols.insert(symbol);
        } else {
            self.enabled_symbols.remove(&symbol);
        }
        // The tokenizer is immutable once built; snapshot the new set rather
        // than mutating it out from under an in-flight query.
        self.tokenizer = SymbolTokenizer::new(self.enabled_symbols.clone());
    }
}

impl SocialView for SocialController {
    fn is_hashtag_enabled(&self) -> bool {
        self.config.hashtag_enabled
    }

    fn is_mention_enabled(&self) -> bool {
        self.config.mention_enabled
    }

    fn set_hashtag_enabled(&mut self, enabled: bool) {
        self.config.hashtag_enabled = enabled;
        self.enable_symbol(HASHTAG, enabled);
    }

    fn set_mention_enabled(&mut self, enabled: bool) {
        self.config.mention_enabled = enabled;
        self.enable_symbol(MENTION, enabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> SocialController {
        SocialController::new(SocialConfig::new(true, true))
    }

    #[test]
    fn test_seeds_symbols_from_config() {
        let both = controller();
        assert!(both.tokenizer().symbols().contains(&HASHTAG));
        assert!(both.tokenizer().symbols().contains(&MENTION));

        let neither = SocialController::new(SocialConfig::default());
        assert!(neither.tokenizer().symbols().is_empty());
    }

    #[test]
    fn test_typing_hashtag_switches_source() {
        let mut c = controller();
        c.on_text_changed("hello #", 6, 0, 1);
        assert_eq!(c.active_source(), ActiveSource::Hashtag);
    }

    #[test]
    fn test_typing_mention_switches_source() {
        let mut c = controller();
        c.on_text_changed("hello @", 6, 0, 1);
        assert_eq!(c.active_source(), ActiveSource::Mention);
    }

    #[test]
    fn test_plain_char_keeps_previous_source() {
        let mut c = controller();
        c.on_text_changed("#", 0, 0, 1);
        c.on_text_changed("#t", 1, 0, 1);
        assert_eq!(c.active_source(), ActiveSource::Hashtag);
    }

    #[test]
    fn test_out_of_range_start_is_ignored() {
        let mut c = controller();
        c.on_text_changed("", 0, 1, 0);
        c.on_text_changed("ab", 2, 0, 1);
        assert_eq!(c.active_source(), ActiveSource::None);
    }

    #[test]
    fn test_disabling_hashtag_removes_symbol() {
        let mut c = controller();
        c.set_hashtag_enabled(false);
        assert!(!c.is_hashtag_enabled());
        assert!(!c.tokenizer().symbols().contains(&HASHTAG));
        // `#` is no longer a boundary, so the scan runs past it.
        assert_eq!(c.tokenizer().find_token_start("ab #cd", 6), 0);
    }

    #[test]
    fn test_reenabling_restores_symbol() {
        let mut c = controller();
        c.set_mention_enabled(false);
        c.set_mention_enabled(true);
        assert!(c.tokenizer().symbols().contains(&MENTION));
    }
}

/// Capability flags the controller reads at construction.
///
/// Both default to off; the host opts in to each trigger symbol separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SocialConfig {
    /// Treat `#` as a trigger symbol and offer hashtag suggestions.
    pub hashtag_enabled: bool,

    /// Treat `@` as a trigger symbol and offer mention suggestions.
    pub mention_enabled: bool,
}

impl SocialConfig {
    pub fn new(hashtag_enabled: bool, mention_enabled: bool) -> Self {
        Self {
            hashtag_enabled,
            mention_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_disabled() {
        let config = SocialConfig::default();
        assert!(!config.hashtag_enabled);
        assert!(!config.mention_enabled);
    }
}

/// Which suggestion list the host popup should query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveSource {
    /// No trigger symbol has been typed yet.
    #[default]
    None,
    Hashtag,
    Mention,
}

use ratatui::style::Style;

/// Style run covering the char range `start..end` of a [`StyledText`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSpan {
    pub start: usize,
    pub end: usize,
    pub style: Style,
}

/// Text with style runs attached.
///
/// The tokenizer never inspects the spans; it only keeps them intact when it
/// appends the terminating space, so the host field can re-insert a committed
/// token without losing its formatting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledText {
    text: String,
    spans: Vec<StyleSpan>,
}

impl StyledText {
    /// Text without any style runs.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    pub fn styled(text: impl Into<String>, spans: Vec<StyleSpan>) -> Self {
        Self {
            text: text.into(),
            spans,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[StyleSpan] {
        &self.spans
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Same text with one trailing space appended; spans keep covering the
    /// same char ranges.
    pub(crate) fn with_trailing_space(&self) -> Self {
        let mut text = self.text.clone();
        text.push(' ');
        Self {
            text,
            spans: self.spans.clone(),
        }
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

use serde::Serialize;

/// Style classes shared by the reading-view tree and the live decorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StyleClass {
    /// Wrapper produced by the static partitioner. Never used for live ranges.
    Container,
    /// Visible, de-emphasized comment text.
    Comment,
    /// Collapsed marker token.
    Hidden,
}

impl StyleClass {
    pub const fn class_name(self) -> &'static str {
        match self {
            StyleClass::Container => "cm-slash-comment-container",
            StyleClass::Comment => "cm-slash-comment",
            StyleClass::Hidden => "cm-slash-hide",
        }
    }

    pub fn from_class_name(name: &str) -> Option<Self> {
        [Self::Container, Self::Comment, Self::Hidden]
            .into_iter()
            .find(|c| c.class_name() == name)
    }
}

impl std::fmt::Display for StyleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Default rules for the three classes, embedded in standalone HTML output.
pub const STYLESHEET: &str = "\
.cm-slash-comment-container { opacity: 0.5; }
.cm-slash-comment { color: var(--text-faint, #888); font-style: italic; }
.cm-slash-hide { display: none; }
";

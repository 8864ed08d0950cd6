/// Element tag names the engine distinguishes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    P,
    Li,
    /// Heading level 1–6.
    H(u8),
    Blockquote,
    Th,
    Td,
    Div,
    Span,
    Em,
    Strong,
    Del,
    Code,
    A,
    Img,
    Ul,
    Ol,
    Pre,
    Table,
    Thead,
    Tr,
    Hr,
    Br,
    Other(String),
}

impl Tag {
    /// Block kinds the partitioner scans: paragraph, list item, heading,
    /// blockquote, table cells and generic containers.
    pub const ELIGIBLE: [&'static str; 12] = [
        "p",
        "li",
        "h1",
        "h2",
        "h3",
        "h4",
        "h5",
        "h6",
        "blockquote",
        "th",
        "td",
        "div",
    ];

    pub fn name(&self) -> &str {
        match self {
            Tag::P => "p",
            Tag::Li => "li",
            Tag::H(1) => "h1",
            Tag::H(2) => "h2",
            Tag::H(3) => "h3",
            Tag::H(4) => "h4",
            Tag::H(5) => "h5",
            Tag::H(_) => "h6",
            Tag::Blockquote => "blockquote",
            Tag::Th => "th",
            Tag::Td => "td",
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::Em => "em",
            Tag::Strong => "strong",
            Tag::Del => "del",
            Tag::Code => "code",
            Tag::A => "a",
            Tag::Img => "img",
            Tag::Ul => "ul",
            Tag::Ol => "ol",
            Tag::Pre => "pre",
            Tag::Table => "table",
            Tag::Thead => "thead",
            Tag::Tr => "tr",
            Tag::Hr => "hr",
            Tag::Br => "br",
            Tag::Other(name) => name,
        }
    }

    pub fn is_eligible(&self) -> bool {
        Self::ELIGIBLE.contains(&self.name())
    }

    pub fn is_line_break(&self) -> bool {
        matches!(self, Tag::Br)
    }

    /// Elements serialized without children or a closing tag.
    pub fn is_void(&self) -> bool {
        matches!(self, Tag::Br | Tag::Hr | Tag::Img)
    }

    /// Block-level elements; the HTML writer ends a line after each one.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            Tag::P
                | Tag::Li
                | Tag::H(_)
                | Tag::Blockquote
                | Tag::Div
                | Tag::Ul
                | Tag::Ol
                | Tag::Pre
                | Tag::Table
                | Tag::Thead
                | Tag::Tr
                | Tag::Hr
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eligible_allowlist() {
        for tag in [
            Tag::P,
            Tag::Li,
            Tag::H(1),
            Tag::H(6),
            Tag::Blockquote,
            Tag::Th,
            Tag::Td,
            Tag::Div,
        ] {
            assert!(tag.is_eligible(), "{tag:?} should be eligible");
        }
        for tag in [Tag::Span, Tag::Em, Tag::Pre, Tag::Code, Tag::Ul, Tag::Table] {
            assert!(!tag.is_eligible(), "{tag:?} should not be eligible");
        }
    }

    #[test]
    fn eligible_names_match_allowlist() {
        let tags = [
            Tag::P,
            Tag::Li,
            Tag::H(1),
            Tag::H(2),
            Tag::H(3),
            Tag::H(4),
            Tag::H(5),
            Tag::H(6),
            Tag::Blockquote,
            Tag::Th,
            Tag::Td,
            Tag::Div,
        ];
        let names: Vec<&str> = tags.iter().map(Tag::name).collect();
        assert_eq!(names, Tag::ELIGIBLE);
    }
}

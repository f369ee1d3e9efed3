//! Recognition of XML tag tokens
//!
//! Tokenizers that keep markup emit each tag as a single token (`<p>`,
//! `</p>`, `<sent id="3">`, `<br/>`). Only the tag shape and element name
//! matter for segmentation.

use regex::Regex;
use std::sync::OnceLock;

/// Which form of tag a token is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `<name ...>`
    Start,
    /// `</name>`
    End,
    /// `<name .../>`
    Empty,
}

/// A parsed tag token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmlTag<'a> {
    /// Element name
    pub name: &'a str,
    /// Tag form
    pub kind: TagKind,
}

fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| {
        Regex::new(r#"^<\s*(/)?\s*([A-Za-z_:][-A-Za-z0-9_.:]*)(?:\s+[^<>]*?)?\s*(/)?\s*>$"#)
            .expect("tag pattern is valid")
    })
}

impl<'a> XmlTag<'a> {
    /// Parse a token as a tag, returning `None` for anything else
    pub fn parse(token: &'a str) -> Option<Self> {
        let caps = tag_regex().captures(token)?;
        let name = caps.get(2)?.as_str();
        let kind = match (caps.get(1).is_some(), caps.get(3).is_some()) {
            (true, _) => TagKind::End,
            (false, true) => TagKind::Empty,
            (false, false) => TagKind::Start,
        };
        Some(Self { name, kind })
    }

    /// Opening tag of `element` (attributes allowed)
    pub fn is_start_of(&self, element: &str) -> bool {
        self.kind == TagKind::Start && self.name == element
    }

    /// Closing tag of `element`
    pub fn is_end_of(&self, element: &str) -> bool {
        self.kind == TagKind::End && self.name == element
    }
}

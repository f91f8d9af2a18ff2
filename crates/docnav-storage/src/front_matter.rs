//! YAML front matter parsing for markdown documents.
//!
//! Front matter is an optional `---` delimited YAML block at the very start
//! of a markdown file:
//!
//! ```text
//! ---
//! id: api-query
//! title: Query Reference
//! sidebar_label: Query
//! ---
//! ```

use regex::Regex;
use serde::Deserialize;

/// Fields recognized in document front matter.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct FrontMatter {
    pub id: Option<String>,
    pub title: Option<String>,
    pub sidebar_label: Option<String>,
}

/// Splits markdown content into front matter and body.
pub(crate) struct FrontMatterParser {
    block_regex: Regex,
}

impl FrontMatterParser {
    /// Create a new parser.
    ///
    /// # Panics
    ///
    /// Panics if the internal regex fails to compile.
    /// This should never happen as the pattern is a compile-time constant.
    pub fn new() -> Self {
        Self {
            block_regex: Regex::new(r"(?s)\A---[ \t]*\r?\n(?:(.*?)\r?\n)?---[ \t]*(?:\r?\n|\z)")
                .unwrap(),
        }
    }

    /// Split content into the raw front matter block (if any) and the body.
    pub fn split<'a>(&self, content: &'a str) -> (Option<&'a str>, &'a str) {
        match self.block_regex.captures(content) {
            Some(caps) => {
                let block = caps.get(1).map_or("", |m| m.as_str());
                let end = caps.get(0).map_or(0, |m| m.end());
                (Some(block), &content[end..])
            }
            None => (None, content),
        }
    }

    /// Parse front matter fields from a raw YAML block.
    ///
    /// Returns `None` for malformed YAML.
    pub fn parse(block: &str) -> Option<FrontMatter> {
        let trimmed = block.trim();
        if trimmed.is_empty() {
            return Some(FrontMatter::default());
        }
        serde_yaml::from_str(trimmed).ok()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_split_with_front_matter() {
        let parser = FrontMatterParser::new();
        let content = "---\nid: api-query\ntitle: Query\n---\n# Heading\n\nBody";

        let (block, body) = parser.split(content);

        assert_eq!(block, Some("id: api-query\ntitle: Query"));
        assert_eq!(body, "# Heading\n\nBody");
    }

    #[test]
    fn test_split_without_front_matter() {
        let parser = FrontMatterParser::new();
        let content = "# Heading\n\n---\n\nAfter a rule";

        let (block, body) = parser.split(content);

        assert_eq!(block, None);
        assert_eq!(body, content);
    }

    #[test]
    fn test_split_empty_front_matter() {
        let parser = FrontMatterParser::new();

        let (block, body) = parser.split("---\n---\nBody");

        assert_eq!(block, Some(""));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_crlf_line_endings() {
        let parser = FrontMatterParser::new();

        let (block, body) = parser.split("---\r\nid: intro\r\n---\r\nBody");

        assert_eq!(block, Some("id: intro"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_parse_all_fields() {
        let fm = FrontMatterParser::parse(
            "id: api-query\ntitle: \"Query Reference\"\nsidebar_label: Query",
        )
        .unwrap();

        assert_eq!(fm.id.as_deref(), Some("api-query"));
        assert_eq!(fm.title.as_deref(), Some("Query Reference"));
        assert_eq!(fm.sidebar_label.as_deref(), Some("Query"));
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let fm = FrontMatterParser::parse("id: intro\nhide_title: true").unwrap();
        assert_eq!(fm.id.as_deref(), Some("intro"));
        assert_eq!(fm.title, None);
    }

    #[test]
    fn test_parse_malformed_returns_none() {
        assert!(FrontMatterParser::parse("id: [unclosed").is_none());
    }
}

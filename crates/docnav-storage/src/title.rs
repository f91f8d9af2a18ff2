//! Title extraction from markdown content.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

/// Extract the text of the first non-empty H1 heading.
///
/// Uses the markdown parser, so `#` lines inside code blocks are not headings.
pub(crate) fn first_heading(markdown: &str) -> Option<String> {
    let mut in_h1 = false;
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => {
                in_h1 = true;
                text.clear();
            }
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                in_h1 = false;
                let title = text.trim();
                if !title.is_empty() {
                    return Some(title.to_owned());
                }
            }
            Event::Text(t) | Event::Code(t) if in_h1 => text.push_str(&t),
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_first_heading() {
        assert_eq!(
            first_heading("Intro text\n\n# Getting Started  \n\n## Sub"),
            Some("Getting Started".to_owned())
        );
        assert_eq!(first_heading("## Only H2"), None);
    }

    #[test]
    fn test_first_heading_inline_code() {
        assert_eq!(
            first_heading("# The `Query` class"),
            Some("The Query class".to_owned())
        );
    }

    #[test]
    fn test_first_heading_ignores_fenced_code() {
        let markdown = "Intro\n\n```python\n# rename every call site\nquery.rename(\"x\")\n```\n";
        assert_eq!(first_heading(markdown), None);
    }

    #[test]
    fn test_first_heading_skips_empty_heading() {
        assert_eq!(first_heading("#\nContributing notes\n"), None);
        assert_eq!(
            first_heading("#\n\n# Contributing\n"),
            Some("Contributing".to_owned())
        );
    }

    #[test]
    fn test_first_heading_after_code_block() {
        let markdown = "```\n# not a title\n```\n\n# Real Title\n";
        assert_eq!(first_heading(markdown), Some("Real Title".to_owned()));
    }
}

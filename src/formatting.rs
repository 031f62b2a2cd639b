//! Helpers for building Slack block layouts and mrkdwn text.

use crate::core::{Block, TextObject};

/// Creates a single section block with a bold title line followed by the message.
pub fn generic_message_blocks(title: &str, message: &str) -> Vec<Block> {
    vec![section_block(&format!("{}\n{}", bold_text(title), message))]
}

/// Creates a horizontal divider block.
pub fn divider_block() -> Block {
    Block::Divider
}

/// Creates a section block wrapping the given mrkdwn text verbatim.
pub fn section_block(text: &str) -> Block {
    Block::Section {
        text: TextObject::mrkdwn(text),
    }
}

/// Formats a Slack link: `<url|text>`.
pub fn url_link(text: &str, url: &str) -> String {
    format!("<{}|{}>", url, text)
}

/// Formats a bullet list, one `• item` per line.
pub fn list_items<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("• {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats a numbered list starting at 1.
pub fn list_items_numbered<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn bold_text(text: &str) -> String {
    format!("*{}*", text)
}

pub fn italic_text(text: &str) -> String {
    format!("_{}_", text)
}

/// Creates a context block holding the footer message as its only element.
pub fn footer_block(footer_message: &str) -> Block {
    Block::Context {
        elements: vec![TextObject::mrkdwn(footer_message)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TextFormat;
    use serde_json::json;

    #[test]
    fn test_generic_message_blocks() {
        let blocks = generic_message_blocks("Title", "Message");
        assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            Block::Section { text } => {
                assert_eq!(text.format, TextFormat::Mrkdwn);
                assert_eq!(text.text, "*Title*\nMessage");
            }
            other => panic!("expected a section block, got {:?}", other),
        }
    }

    #[test]
    fn test_divider_block() {
        assert_eq!(
            serde_json::to_value(divider_block()).unwrap(),
            json!({"type": "divider"})
        );
    }

    #[test]
    fn test_section_block() {
        let block = section_block("Some text");
        assert_eq!(
            serde_json::to_value(block).unwrap(),
            json!({"type": "section", "text": {"type": "mrkdwn", "text": "Some text"}})
        );
    }

    #[test]
    fn test_url_link() {
        assert_eq!(
            url_link("click here", "https://example.com"),
            "<https://example.com|click here>"
        );
    }

    #[test]
    fn test_list_items() {
        let result = list_items(&["first", "second", "third"]);
        assert_eq!(result, "• first\n• second\n• third");
    }

    #[test]
    fn test_list_items_numbered() {
        let items = vec!["first".to_string(), "second".to_string(), "third".to_string()];
        let result = list_items_numbered(&items);
        assert_eq!(result, "1. first\n2. second\n3. third");
    }

    #[test]
    fn test_lists_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(list_items(&empty), "");
        assert_eq!(list_items_numbered(&empty), "");
    }

    #[test]
    fn test_bold_and_italic_text() {
        assert_eq!(bold_text("bold"), "*bold*");
        assert_eq!(italic_text("italics"), "_italics_");
    }

    #[test]
    fn test_footer_block() {
        let block = footer_block("Footer message");
        assert_eq!(
            serde_json::to_value(block).unwrap(),
            json!({"type": "context", "elements": [{"type": "mrkdwn", "text": "Footer message"}]})
        );
    }
}

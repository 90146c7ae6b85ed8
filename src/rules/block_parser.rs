//! Block-level view of a markdown document.
//!
//! Ast rules only need the top-level blocks of a document, so the CommonMark parser is
//! hidden behind [`BlockParser`] and rules can be tested against hand-built block lists.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading,
    List,
    BlockQuote,
    /// Code block created by four spaces or a tab of indentation
    IndentedCode,
    FencedCode,
    Html,
    ThematicBreak,
    Table,
    Other,
}

/// A top-level block with its raw text (code blocks only) and info string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
    pub info: Option<String>,
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            text: String::new(),
            info: None,
        }
    }

    pub fn code(kind: BlockKind, text: &str, info: Option<&str>) -> Self {
        Self {
            kind,
            text: text.to_string(),
            info: info.map(str::to_string),
        }
    }
}

pub trait BlockParser: Send + Sync {
    fn parse_blocks(&self, text: &str) -> Vec<Block>;
}

/// [`BlockParser`] backed by pulldown-cmark.
///
/// Parsing never escapes html; only the block structure is collected.
#[derive(Debug, Clone, Copy, Default)]
pub struct PulldownBlockParser;

impl PulldownBlockParser {
    fn block_kind(tag: &Tag) -> BlockKind {
        match tag {
            Tag::Paragraph => BlockKind::Paragraph,
            Tag::Heading { .. } => BlockKind::Heading,
            Tag::List(_) => BlockKind::List,
            Tag::BlockQuote(_) => BlockKind::BlockQuote,
            Tag::CodeBlock(CodeBlockKind::Indented) => BlockKind::IndentedCode,
            Tag::CodeBlock(CodeBlockKind::Fenced(_)) => BlockKind::FencedCode,
            Tag::HtmlBlock => BlockKind::Html,
            Tag::Table(_) => BlockKind::Table,
            _ => BlockKind::Other,
        }
    }
}

impl BlockParser for PulldownBlockParser {
    fn parse_blocks(&self, text: &str) -> Vec<Block> {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_TASKLISTS);

        let mut blocks = Vec::new();
        let mut depth = 0usize;

        for event in Parser::new_ext(text, options) {
            match event {
                Event::Start(tag) => {
                    if depth == 0 {
                        let mut block = Block::new(Self::block_kind(&tag));
                        if let Tag::CodeBlock(CodeBlockKind::Fenced(info)) = &tag {
                            let info = info.trim();
                            if !info.is_empty() {
                                block.info = Some(info.to_string());
                            }
                        }
                        blocks.push(block);
                    }
                    depth += 1;
                }
                Event::End(_) => {
                    depth = depth.saturating_sub(1);
                }
                Event::Text(content) if depth == 1 => {
                    if let Some(block) = blocks.last_mut()
                        && matches!(block.kind, BlockKind::IndentedCode | BlockKind::FencedCode)
                    {
                        block.text.push_str(&content);
                    }
                }
                Event::Rule if depth == 0 => blocks.push(Block::new(BlockKind::ThematicBreak)),
                _ => {}
            }
        }

        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_blocks() {
        let blocks = PulldownBlockParser.parse_blocks("# Title\n\nSome text\n\n- a\n- b\n\n---\n");
        let kinds: Vec<BlockKind> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Heading,
                BlockKind::Paragraph,
                BlockKind::List,
                BlockKind::ThematicBreak
            ]
        );
    }

    #[test]
    fn test_indented_code_text_has_no_indentation() {
        let blocks = PulldownBlockParser.parse_blocks("Text\n\n    - a\n    - b\n");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].kind, BlockKind::IndentedCode);
        assert_eq!(blocks[1].text, "- a\n- b\n");
        assert_eq!(blocks[1].info, None);
    }

    #[test]
    fn test_fenced_code_info() {
        let blocks = PulldownBlockParser.parse_blocks("```rust\nfn main() {}\n```\n\n```\n- plain\n```\n");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].kind, BlockKind::FencedCode);
        assert_eq!(blocks[0].info.as_deref(), Some("rust"));
        assert_eq!(blocks[1].info, None);
        assert_eq!(blocks[1].text, "- plain\n");
    }

    #[test]
    fn test_nested_code_is_not_top_level() {
        let blocks = PulldownBlockParser.parse_blocks("- item\n\n      code in item\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::List);
    }
}

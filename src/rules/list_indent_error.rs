/// Rule list-indent-error: List rendered as a code block
///
/// A list that is indented by four spaces (or a tab) without belonging to a list item is
/// parsed as an indented code block:
///
/// ```markdown
/// Some text
///
///     - first
///     - second
/// ```
///
/// Whether this was intended can not be decided automatically, so the rule only reports.
use crate::rule::{LintError, Rule, RuleKind};
use crate::rules::block_parser::{Block, BlockKind, BlockParser, PulldownBlockParser};
use std::fmt;

pub struct ListIndentError {
    parser: Box<dyn BlockParser>,
}

impl ListIndentError {
    pub fn new(parser: Box<dyn BlockParser>) -> Self {
        Self { parser }
    }

    /// Returns `true` when no top-level block looks like a mis-indented list
    pub fn blocks_are_valid(blocks: &[Block]) -> bool {
        !blocks.iter().any(Self::is_misparsed_list)
    }

    fn is_misparsed_list(block: &Block) -> bool {
        block.kind == BlockKind::IndentedCode && block.text.starts_with('-') && block.info.is_none()
    }
}

impl Default for ListIndentError {
    fn default() -> Self {
        Self::new(Box::new(PulldownBlockParser))
    }
}

impl Rule for ListIndentError {
    fn name(&self) -> &'static str {
        "list-indent-error"
    }

    fn help_text(&self) -> &'static str {
        "list that is indented so far it becomes a code block"
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Ast
    }

    fn is_fixable(&self) -> bool {
        false
    }

    fn validate(&self, lines: &[&str]) -> Result<bool, LintError> {
        let blocks = self.parser.parse_blocks(&lines.concat());
        Ok(Self::blocks_are_valid(&blocks))
    }

    fn fix(&self, _lines: &[&str]) -> Result<Vec<String>, LintError> {
        Err(LintError::NotFixable { rule: self.name() })
    }
}

impl fmt::Display for ListIndentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List Indent Error (list is not properly indented)")
    }
}

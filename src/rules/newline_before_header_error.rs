/// Rule newline-before-header-error: Header not preceded by a blank line
///
/// ```markdown
/// Some text
/// # Header
/// ```
///
/// Pandoc does not start a heading on a line that continues a paragraph. The fix prepends
/// a blank line to the header line, using the header's own line ending.
use crate::rule::{LineWindow, LintError, Rule, RuleKind, expect_window, is_blank_line, line_terminator};
use std::fmt;

#[derive(Debug, Clone, Copy, Default)]
pub struct NewlineBeforeHeaderError;

impl Rule for NewlineBeforeHeaderError {
    fn name(&self) -> &'static str {
        "newline-before-header-error"
    }

    fn help_text(&self) -> &'static str {
        "header without an empty line before it"
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Line(LineWindow::WITH_PREVIOUS)
    }

    fn is_fixable(&self) -> bool {
        true
    }

    fn validate(&self, lines: &[&str]) -> Result<bool, LintError> {
        expect_window(self.name(), lines, 2)?;
        if !lines[1].starts_with('#') {
            return Ok(true);
        }
        Ok(is_blank_line(lines[0]))
    }

    /// Takes the header line only
    fn fix(&self, lines: &[&str]) -> Result<Vec<String>, LintError> {
        expect_window(self.name(), lines, 1)?;
        Ok(vec![format!("{}{}", line_terminator(lines[0]), lines[0])])
    }
}

impl fmt::Display for NewlineBeforeHeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Newline Before Header Error (no empty line before `#`)")
    }
}

/// Rule seperator-error: Separator not followed by a blank line
///
/// A `---` separator must be followed by an empty line, otherwise pandoc reads the next
/// line as a setext heading or as front matter:
///
/// ```markdown
/// ---
/// # Header
/// ```
///
/// The fix appends a blank line, using the separator's own line ending.
use crate::rule::{LineWindow, LintError, Rule, RuleKind, expect_window, is_blank_line, line_terminator};
use std::fmt;

#[derive(Debug, Clone, Copy, Default)]
pub struct SeperatorError;

impl Rule for SeperatorError {
    fn name(&self) -> &'static str {
        "seperator-error"
    }

    fn help_text(&self) -> &'static str {
        "separator (`---`) not followed by an empty line"
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Line(LineWindow::WITH_NEXT)
    }

    fn is_fixable(&self) -> bool {
        true
    }

    fn validate(&self, lines: &[&str]) -> Result<bool, LintError> {
        expect_window(self.name(), lines, 2)?;
        if !lines[0].starts_with("---") {
            return Ok(true);
        }
        Ok(is_blank_line(lines[1]))
    }

    /// Takes the separator line only
    fn fix(&self, lines: &[&str]) -> Result<Vec<String>, LintError> {
        expect_window(self.name(), lines, 1)?;
        Ok(vec![format!("{}{}", lines[0], line_terminator(lines[0]))])
    }
}

impl fmt::Display for SeperatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seperator Error (`---` used without new line)")
    }
}

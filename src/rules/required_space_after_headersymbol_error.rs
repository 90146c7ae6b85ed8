/// Rule required-space-after-headersymbol-error: No space after `#` in a header
///
/// `#Heading` is a paragraph for pandoc; it has to be written as `# Heading`.
use crate::rule::{LineWindow, LintError, Rule, RuleKind, expect_window};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static HEADER_WITH_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#+\s").unwrap());

#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredSpaceAfterHeadersymbolError;

impl Rule for RequiredSpaceAfterHeadersymbolError {
    fn name(&self) -> &'static str {
        "required-space-after-headersymbol-error"
    }

    fn help_text(&self) -> &'static str {
        "header symbol (`#`) not followed by a space"
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Line(LineWindow::SINGLE)
    }

    fn is_fixable(&self) -> bool {
        true
    }

    fn validate(&self, lines: &[&str]) -> Result<bool, LintError> {
        expect_window(self.name(), lines, 1)?;
        let line = lines[0];
        if !line.starts_with('#') {
            return Ok(true);
        }
        Ok(HEADER_WITH_SPACE.is_match(line))
    }

    fn fix(&self, lines: &[&str]) -> Result<Vec<String>, LintError> {
        expect_window(self.name(), lines, 1)?;
        let line = lines[0];
        let content = line.trim_start_matches('#');
        let hashes = &line[..line.len() - content.len()];
        Ok(vec![format!("{hashes} {content}")])
    }
}

impl fmt::Display for RequiredSpaceAfterHeadersymbolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Required Space After Headersymbol Error (no space after `#`)")
    }
}

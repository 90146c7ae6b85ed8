/// Rule todo-error: Todo item without a list marker
///
/// Pandoc markdown expects task items to be list items:
///
/// ```markdown
/// - [ ] This is a todo
/// - [x] This todo is done
/// ```
///
/// Other flavors write them bare (`[ ] This is a todo`). The fix inserts `- ` in front of
/// the item and keeps the original indentation.
use crate::rule::{LineWindow, LintError, Rule, RuleKind, expect_window};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static BARE_TODO: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[(x| )\]").unwrap());

#[derive(Debug, Clone, Copy, Default)]
pub struct TodoError;

impl Rule for TodoError {
    fn name(&self) -> &'static str {
        "todo-error"
    }

    fn help_text(&self) -> &'static str {
        "todo item without a `-` list marker"
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Line(LineWindow::SINGLE)
    }

    fn is_fixable(&self) -> bool {
        true
    }

    fn validate(&self, lines: &[&str]) -> Result<bool, LintError> {
        expect_window(self.name(), lines, 1)?;
        Ok(!BARE_TODO.is_match(lines[0].trim()))
    }

    fn fix(&self, lines: &[&str]) -> Result<Vec<String>, LintError> {
        expect_window(self.name(), lines, 1)?;
        let line = lines[0];
        let content = line.trim_start();
        let indent = &line[..line.len() - content.len()];
        Ok(vec![format!("{indent}- {content}")])
    }
}

impl fmt::Display for TodoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Todo Error (no `-` used in todo item)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let rule = TodoError;
        let cases = [
            ("[x] TODO", false),
            ("    [x] TODO", false),
            ("- [x]: Todo", true),
            ("Random string", true),
            ("\t\t [x] TODO", false),
            ("[ ] TODO", false),
            ("- [ ]", true),
            ("[X] upper case is not a todo", true),
            ("[ not an x or space ]", true),
        ];
        for (line, expected) in cases {
            assert_eq!(rule.validate(&[line]).unwrap(), expected, "line: {line}");
        }
    }

    #[test]
    fn test_fix_preserves_indentation() {
        let rule = TodoError;
        let cases = [
            ("[x] TODO", "- [x] TODO"),
            ("   [x] a", "   - [x] a"),
            ("\t\t[x] TODO", "\t\t- [x] TODO"),
            ("[ ] TODO\n", "- [ ] TODO\n"),
        ];
        for (line, expected) in cases {
            assert_eq!(rule.fix(&[line]).unwrap(), vec![expected.to_string()]);
        }
    }

    #[test]
    fn test_only_accepts_one_line() {
        assert!(TodoError.validate(&["line 1", "line 2"]).is_err());
        assert!(TodoError.fix(&["", ""]).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(TodoError.to_string(), "Todo Error (no `-` used in todo item)");
    }
}

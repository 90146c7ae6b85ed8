/// Rule math-error: Math is denoted with `$$`
///
/// Pandoc markdown uses `$` for inline math, while some other flavors (for example
/// Dropbox Paper exports) use `$$`. The fix de-doubles every `$$` on the line:
///
/// ```markdown
/// There is $$E=mc^2$$ in this line
/// ```
///
/// becomes
///
/// ```markdown
/// There is $E=mc^2$ in this line
/// ```
use crate::rule::{LineWindow, LintError, Rule, RuleKind, expect_window};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static DOUBLE_DOLLAR_MATH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\$(.*?)\$\$").unwrap());

#[derive(Debug, Clone, Copy, Default)]
pub struct MathError;

impl Rule for MathError {
    fn name(&self) -> &'static str {
        "math-error"
    }

    fn help_text(&self) -> &'static str {
        "math denoted with `$$` instead of `$`"
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Line(LineWindow::SINGLE)
    }

    fn is_fixable(&self) -> bool {
        true
    }

    fn validate(&self, lines: &[&str]) -> Result<bool, LintError> {
        expect_window(self.name(), lines, 1)?;
        Ok(!DOUBLE_DOLLAR_MATH.is_match(lines[0]))
    }

    fn fix(&self, lines: &[&str]) -> Result<Vec<String>, LintError> {
        expect_window(self.name(), lines, 1)?;
        Ok(vec![lines[0].replace("$$", "$")])
    }
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Math Error (`$$` used)")
    }
}

//!
//! This module defines the Rule trait and the finding/report types produced by the check engine.
//! Rules come in two shapes: line rules that look at a fixed window of raw lines, and
//! ast rules that look at the block structure of a whole document.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LintError {
    #[error("{rule} requires {expected} line(s), got {actual}")]
    InvalidWindow {
        rule: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{rule} can not be fixed automatically")]
    NotFixable { rule: &'static str },
    #[error("Parsing error: {0}")]
    Parse(String),
}

/// The number of consecutive raw lines a line rule needs, and which of them a finding is
/// reported on (and rewritten by `fix`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineWindow {
    pub len: usize,
    pub anchor: usize,
}

impl LineWindow {
    pub const SINGLE: LineWindow = LineWindow { len: 1, anchor: 0 };
    /// Window of `[current, next]`, reported on `current`
    pub const WITH_NEXT: LineWindow = LineWindow { len: 2, anchor: 0 };
    /// Window of `[previous, current]`, reported on `current`
    pub const WITH_PREVIOUS: LineWindow = LineWindow { len: 2, anchor: 1 };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Line(LineWindow),
    Ast,
}

pub trait Rule: fmt::Display + Send + Sync {
    /// Stable kebab-case identifier, used for `--disable-<name>` flags
    fn name(&self) -> &'static str;

    fn help_text(&self) -> &'static str;

    fn kind(&self) -> RuleKind;

    fn is_fixable(&self) -> bool;

    /// Returns `Ok(true)` when the window does not exhibit this rule's error.
    fn validate(&self, lines: &[&str]) -> Result<bool, LintError>;

    /// Returns the replacement for the anchor line (line rules) or for the whole
    /// document (ast rules).
    fn fix(&self, lines: &[&str]) -> Result<Vec<String>, LintError>;

    fn is_ast_rule(&self) -> bool {
        self.kind() == RuleKind::Ast
    }
}

/// Reject a window that does not have exactly the length a rule requires
pub fn expect_window(rule: &'static str, lines: &[&str], expected: usize) -> Result<(), LintError> {
    if lines.len() != expected {
        return Err(LintError::InvalidWindow {
            rule,
            expected,
            actual: lines.len(),
        });
    }
    Ok(())
}

/// A line is blank when it holds nothing but its line terminator
pub fn is_blank_line(line: &str) -> bool {
    line == "\n" || line == "\r\n"
}

/// The line ending `line` uses, `"\n"` when it has none
pub fn line_terminator(line: &str) -> &'static str {
    if line.ends_with("\r\n") { "\r\n" } else { "\n" }
}

/// One occurrence of a rule violation in a document.
///
/// `line_nr` is 0-based and `None` exactly when the rule is an ast rule.
#[derive(Clone)]
pub struct Finding<'r> {
    pub line_nr: Option<usize>,
    pub line: Option<String>,
    pub rule: &'r dyn Rule,
}

impl<'r> Finding<'r> {
    pub fn at_line(rule: &'r dyn Rule, line_nr: usize, line: &str) -> Self {
        Self {
            line_nr: Some(line_nr),
            line: Some(line.to_string()),
            rule,
        }
    }

    pub fn for_document(rule: &'r dyn Rule) -> Self {
        Self {
            line_nr: None,
            line: None,
            rule,
        }
    }
}

impl fmt::Debug for Finding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Finding")
            .field("line_nr", &self.line_nr)
            .field("line", &self.line)
            .field("rule", &self.rule.name())
            .finish()
    }
}

/// All findings of a single scanned file, in scan order.
#[derive(Debug, Clone)]
pub struct DocumentReport<'r> {
    pub file_path: String,
    pub errors: Vec<Finding<'r>>,
}

impl<'r> DocumentReport<'r> {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            errors: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fixable_count(&self) -> usize {
        self.errors.iter().filter(|e| e.rule.is_fixable()).count()
    }

    pub fn count_of(&self, rule_name: &str) -> usize {
        self.errors.iter().filter(|e| e.rule.name() == rule_name).count()
    }
}

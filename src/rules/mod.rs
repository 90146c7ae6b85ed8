pub mod block_parser;

mod list_indent_error;
mod math_error;
mod newline_before_header_error;
mod required_space_after_headersymbol_error;
mod seperator_error;
mod todo_error;

pub use list_indent_error::ListIndentError;
pub use math_error::MathError;
pub use newline_before_header_error::NewlineBeforeHeaderError;
pub use required_space_after_headersymbol_error::RequiredSpaceAfterHeadersymbolError;
pub use seperator_error::SeperatorError;
pub use todo_error::TodoError;

use crate::rule::{LineWindow, Rule, RuleKind};

/// Returns all rule instances in scan order
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(MathError),
        Box::new(TodoError),
        Box::new(RequiredSpaceAfterHeadersymbolError),
        Box::new(SeperatorError),
        Box::new(NewlineBeforeHeaderError),
        Box::new(ListIndentError::default()),
    ]
}

/// The ordered catalog of rules a check run works with.
///
/// The registry is read-only once built; tests can build one from any subset of rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        debug_assert!(
            {
                let mut names: Vec<&str> = rules.iter().map(|r| r.name()).collect();
                names.sort_unstable();
                names.windows(2).all(|w| w[0] != w[1])
            },
            "rule names must be unique"
        );
        Self { rules }
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|r| -> &dyn Rule { r.as_ref() })
    }

    /// Line rules with their window, in registry order
    pub fn line_rules(&self) -> impl Iterator<Item = (&dyn Rule, LineWindow)> {
        self.iter().filter_map(|rule| match rule.kind() {
            RuleKind::Line(window) => Some((rule, window)),
            RuleKind::Ast => None,
        })
    }

    pub fn ast_rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.iter().filter(|rule| rule.is_ast_rule())
    }

    pub fn get(&self, name: &str) -> Option<&dyn Rule> {
        self.iter().find(|rule| rule.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// `(name, help_text)` pairs used to build one disable flag per rule
    pub fn metadata(&self) -> Vec<(&'static str, &'static str)> {
        self.iter().map(|rule| (rule.name(), rule.help_text())).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new(all_rules())
    }
}

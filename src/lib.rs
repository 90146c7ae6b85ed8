pub mod config;
pub mod convert;
pub mod encoding;
pub mod exit_codes;
pub mod file_processor;
pub mod fixer;
pub mod formatter;
pub mod front_matter;
pub mod progress;
pub mod rule;
pub mod rules;
pub mod scanner;
pub mod search;

pub use crate::rule::{DocumentReport, Finding, LintError, Rule};
pub use crate::rules::RuleRegistry;

mod line_rules_proptest;
mod list_indent_error_test;
mod math_error_test;
mod newline_before_header_error_test;
mod required_space_after_headersymbol_error_test;
mod seperator_error_test;
mod todo_error_test;

use notesystem_lib::rule::{DocumentReport, Rule};
use notesystem_lib::rules::RuleRegistry;
use notesystem_lib::scanner::DocumentScanner;
use std::collections::HashSet;

/// Scan `content` with a registry holding only `rule`
pub fn scan_with<'r>(registry: &'r RuleRegistry, content: &str) -> DocumentReport<'r> {
    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    DocumentScanner::new(registry, HashSet::new())
        .scan_lines("test.md", &lines)
        .unwrap()
}

pub fn registry_of(rule: impl Rule + 'static) -> RuleRegistry {
    RuleRegistry::new(vec![Box::new(rule)])
}

pub fn reported_lines(report: &DocumentReport<'_>) -> Vec<usize> {
    report.errors.iter().filter_map(|e| e.line_nr).collect()
}

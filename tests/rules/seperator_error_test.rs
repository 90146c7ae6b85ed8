use super::{registry_of, reported_lines, scan_with};
use notesystem_lib::rule::{LintError, Rule};
use notesystem_lib::rules::SeperatorError;

#[test]
fn test_seperator_error_reported_on_separator_line() {
    let registry = registry_of(SeperatorError);
    let content = "Intro\n---\n# Next\n\n---\n\nText\n";
    let report = scan_with(&registry, content);
    assert_eq!(reported_lines(&report), vec![1]);
}

#[test]
fn test_seperator_error_long_separator() {
    let registry = registry_of(SeperatorError);
    let content = format!("{}\n# Hello world\n", "-".repeat(30));
    assert_eq!(reported_lines(&scan_with(&registry, &content)), vec![0]);
}

#[test]
fn test_seperator_error_rejects_three_lines() {
    let err = SeperatorError.validate(&["---", "\n", ""]).unwrap_err();
    assert!(matches!(err, LintError::InvalidWindow { expected: 2, actual: 3, .. }));
}

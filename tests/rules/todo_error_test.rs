use super::{registry_of, reported_lines, scan_with};
use notesystem_lib::rules::TodoError;
use pretty_assertions::assert_eq;

#[test]
fn test_todo_error_lines_are_reported() {
    let registry = registry_of(TodoError);
    let content = "# Todo\n\n- [ ] fine\n[ ] bare\n  [x] indented bare\n* [ ] other marker\n";
    let report = scan_with(&registry, content);
    assert_eq!(reported_lines(&report), vec![3, 4]);
    assert_eq!(report.errors[1].line.as_deref(), Some("  [x] indented bare\n"));
}

#[test]
fn test_todo_error_finding_line_is_the_raw_line() {
    let registry = registry_of(TodoError);
    let report = scan_with(&registry, "[ ] Invalid todo\n");
    assert_eq!(report.errors[0].line.as_deref(), Some("[ ] Invalid todo\n"));
}

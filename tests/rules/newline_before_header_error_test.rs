use super::{registry_of, reported_lines, scan_with};
use notesystem_lib::rules::NewlineBeforeHeaderError;

#[test]
fn test_header_without_blank_line_before() {
    let registry = registry_of(NewlineBeforeHeaderError);
    let content = "# Title\nText\n## Sub\n\n## Fine\n";
    let report = scan_with(&registry, content);
    // The first line has no previous line and is never reported
    assert_eq!(reported_lines(&report), vec![2]);
    assert_eq!(report.errors[0].line.as_deref(), Some("## Sub\n"));
}

#[test]
fn test_crlf_blank_line_counts_as_blank() {
    let registry = registry_of(NewlineBeforeHeaderError);
    let report = scan_with(&registry, "Text\r\n\r\n# Header\r\n");
    assert!(report.is_empty());
}

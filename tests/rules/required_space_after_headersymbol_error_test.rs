use super::{registry_of, reported_lines, scan_with};
use notesystem_lib::rules::RequiredSpaceAfterHeadersymbolError;

#[test]
fn test_headers_without_space() {
    let registry = registry_of(RequiredSpaceAfterHeadersymbolError);
    let content = "#Title\n\n## Fine\n\n###Deep\nText with # inside\n";
    assert_eq!(reported_lines(&scan_with(&registry, content)), vec![0, 4]);
}

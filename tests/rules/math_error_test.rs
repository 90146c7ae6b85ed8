use super::{registry_of, reported_lines, scan_with};
use notesystem_lib::rule::Rule;
use notesystem_lib::rules::MathError;

#[test]
fn test_math_error_lines_are_reported() {
    let registry = registry_of(MathError);
    let content = "# Formulas\n\nInline $a^2$ is fine\nBut $$b^2$$ is not\n$$\nc^2\n$$\n";
    let report = scan_with(&registry, content);
    // A `$$` display block spread over lines is not matched per line
    assert_eq!(reported_lines(&report), vec![3]);
}

#[test]
fn test_math_error_metadata() {
    assert_eq!(MathError.name(), "math-error");
    assert!(MathError.is_fixable());
    assert!(!MathError.is_ast_rule());
}

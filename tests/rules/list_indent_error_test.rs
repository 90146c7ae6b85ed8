use super::{registry_of, scan_with};
use notesystem_lib::rule::Rule;
use notesystem_lib::rules::ListIndentError;
use notesystem_lib::rules::block_parser::{Block, BlockKind, BlockParser};

struct CodeOnly;

impl BlockParser for CodeOnly {
    fn parse_blocks(&self, _text: &str) -> Vec<Block> {
        vec![Block::code(BlockKind::IndentedCode, "- not a list\n", None)]
    }
}

#[test]
fn test_indented_list_is_reported_once() {
    let registry = registry_of(ListIndentError::default());
    let content = "# Groceries\n\n    - milk\n    - eggs\n\nText\n\n    - more\n";
    let report = scan_with(&registry, content);
    assert_eq!(report.len(), 1);
    assert_eq!(report.errors[0].line_nr, None);
}

#[test]
fn test_properly_indented_lists_are_valid() {
    let registry = registry_of(ListIndentError::default());
    let content = "- milk\n    - whole\n    - skimmed\n- eggs\n\n```\n- fenced\n```\n";
    assert!(scan_with(&registry, content).is_empty());
}

#[test]
fn test_indented_code_that_is_not_a_list() {
    let registry = registry_of(ListIndentError::default());
    assert!(scan_with(&registry, "Text\n\n    let x = 1;\n").is_empty());
}

#[test]
fn test_custom_block_parser() {
    let rule = ListIndentError::new(Box::new(CodeOnly));
    assert!(!rule.validate(&["# Just a header\n"]).unwrap());
    assert!(rule.is_ast_rule());
}

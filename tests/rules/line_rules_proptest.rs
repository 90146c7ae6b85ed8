use notesystem_lib::rule::Rule;
use notesystem_lib::rules::{MathError, RuleRegistry};
use proptest::prelude::*;

/// Lines made of the characters the line rules look at, with and without terminators
fn markdown_line() -> impl Strategy<Value = String> {
    prop_oneof![
        r"[ \t#x$a-z\[\]-]{0,24}(\n|\r\n)?",
        r"[ \t]{0,4}\[[x ]\][ a-z]{0,10}\n?",
        r"\${1,5}[a-z ]{0,6}\${1,5}[a-z ]{0,6}\n?",
        r"#{1,6}[a-zA-Z ]{0,10}(\n|\r\n)?",
        r"-{3,12}(\n|\r\n)?",
    ]
}

proptest! {
    #[test]
    fn invalid_single_lines_can_be_fixed(line in markdown_line()) {
        let registry = RuleRegistry::default();
        for (rule, window) in registry.line_rules().filter(|(_, w)| w.len == 1) {
            if !rule.validate(&[line.as_str()]).unwrap() {
                let fixed = rule.fix(&[line.as_str()]);
                prop_assert!(fixed.is_ok(), "{} failed to fix {:?}: {:?}", rule.name(), line, fixed);
                prop_assert_eq!(window.anchor, 0);
            }
        }
    }

    #[test]
    fn invalid_windows_can_be_fixed_on_their_anchor(
        first in markdown_line(),
        second in markdown_line(),
    ) {
        let registry = RuleRegistry::default();
        let window_lines = [first.as_str(), second.as_str()];
        for (rule, window) in registry.line_rules().filter(|(_, w)| w.len == 2) {
            if !rule.validate(&window_lines).unwrap() {
                prop_assert!(rule.fix(&[window_lines[window.anchor]]).is_ok());
            }
        }
    }

    #[test]
    fn math_fix_is_idempotent_once_no_double_dollar_is_left(line in markdown_line()) {
        let once = MathError.fix(&[line.as_str()]).unwrap().concat();
        if !once.contains("$$") {
            let twice = MathError.fix(&[once.as_str()]).unwrap().concat();
            prop_assert_eq!(&once, &twice);
            prop_assert!(MathError.validate(&[once.as_str()]).unwrap());
        }
    }

    #[test]
    fn math_fix_reaches_a_valid_fixed_point(line in markdown_line()) {
        let mut current = line.clone();
        // Each pass at least halves every run of `$`
        for _ in 0..8 {
            let next = MathError.fix(&[current.as_str()]).unwrap().concat();
            if next == current {
                break;
            }
            current = next;
        }
        prop_assert_eq!(MathError.fix(&[current.as_str()]).unwrap().concat(), current.clone());
        prop_assert!(MathError.validate(&[current.as_str()]).unwrap());
    }
}

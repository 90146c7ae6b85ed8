//! Output formatting and display utilities

use crate::rule::{DocumentReport, Finding};
use colored::*;
use std::fmt::Write;

/// Width of the file header rule in the pretty report
const HEADER_WIDTH: usize = 60;

fn display_line_nr(finding: &Finding<'_>) -> String {
    finding
        .line_nr
        .map(|nr| (nr + 1).to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn strip_control_chars(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

/// Multi-line report of one document, empty when the document has no findings
pub fn format_doc_error(report: &DocumentReport<'_>, fixed: bool) -> String {
    let mut out = String::new();
    if report.is_empty() {
        return out;
    }

    let file_path = strip_control_chars(&report.file_path);
    let n_dash = HEADER_WIDTH.saturating_sub(file_path.chars().count() + 3).max(3);
    let _ = writeln!(
        out,
        "{} {} {}",
        "-".cyan(),
        file_path.cyan().bold(),
        "-".repeat(n_dash).cyan()
    );
    let _ = writeln!(out, "{} {}", "* Total errors:".red().bold(), report.len().to_string().red());

    for (i, finding) in report.errors.iter().enumerate() {
        let _ = writeln!(out, "{}", format!("  Error {}:", i + 1).red());
        let _ = writeln!(out, "{}", format!("    Line nr: {}", display_line_nr(finding)).blue());
        let _ = writeln!(out, "{}", format!("    Error type: {}", finding.rule).blue());
        let label = if fixed { "    Fixed:" } else { "    Auto fixable:" };
        let status = if finding.rule.is_fixable() {
            "Yes".green()
        } else {
            "No".red()
        };
        let _ = writeln!(out, "{} {}", label.blue(), status);
    }

    out
}

/// One line per finding: `path:line - rule-name - status`
pub fn format_simple_doc_error(report: &DocumentReport<'_>, fixed: bool) -> String {
    let file_path = strip_control_chars(&report.file_path);
    let mut out = String::new();

    for finding in &report.errors {
        let line_nr = finding.line_nr.map(|nr| (nr + 1).to_string()).unwrap_or_default();
        let status = match (finding.rule.is_fixable(), fixed) {
            (true, true) => "Fixed".green(),
            (true, false) => "Fixable".green(),
            (false, true) => "Not fixed".red(),
            (false, false) => "Not fixable".red(),
        };
        let _ = writeln!(
            out,
            "{} - {} - {}",
            format!("{file_path}:{line_nr}").yellow(),
            finding.rule.name().cyan(),
            status
        );
    }

    out
}

pub fn print_doc_error(report: &DocumentReport<'_>, fixed: bool) {
    print!("{}", format_doc_error(report, fixed));
}

pub fn print_simple_doc_error(report: &DocumentReport<'_>, fixed: bool) {
    print!("{}", format_simple_doc_error(report, fixed));
}

/// Totals of a check run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub files_checked: usize,
    pub files_with_errors: usize,
    pub total_errors: usize,
    pub fixable_errors: usize,
    pub fixes_applied: usize,
    pub files_fixed: usize,
}

/// Print summary of check/fix results
pub fn print_check_summary(summary: &CheckSummary, fix: bool, duration_ms: u64) {
    let file_text = if summary.files_checked == 1 { "file" } else { "files" };

    if summary.total_errors == 0 {
        println!(
            "\n{} No errors found in {} {} ({}ms)",
            "Success:".green().bold(),
            summary.files_checked,
            file_text,
            duration_ms
        );
    } else if fix {
        println!(
            "\n{} Fixed {}/{} errors in {} {} ({}ms)",
            "Fixed:".green().bold(),
            summary.fixes_applied,
            summary.total_errors,
            summary.files_fixed,
            if summary.files_fixed == 1 { "file" } else { "files" },
            duration_ms
        );
    } else {
        println!(
            "\n{} Found {} errors in {}/{} {} ({}ms)",
            "Errors:".yellow(),
            summary.total_errors,
            summary.files_with_errors,
            summary.files_checked,
            file_text,
            duration_ms
        );
        if summary.fixable_errors > 0 {
            println!(
                "Run with `--fix` to automatically fix {} of the {} errors",
                summary.fixable_errors, summary.total_errors
            );
        }
    }
}

/// A line of a document that contains the search pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// 1-based
    pub line_nr: usize,
    pub line: String,
}

/// `path:line:content` per match, with the pattern highlighted when `highlight` is set
pub fn format_search_result(display_path: &str, matches: &[LineMatch], pattern: &str, highlight: bool) -> String {
    let file_path = strip_control_chars(display_path);
    let mut out = String::new();

    for m in matches {
        let content = m.line.trim();
        let content = if highlight && !pattern.is_empty() {
            content.replace(pattern, &pattern.black().on_green().to_string())
        } else {
            content.to_string()
        };
        let _ = writeln!(out, "{}:{}", format!("{file_path}:{}", m.line_nr).yellow(), content);
    }

    out
}

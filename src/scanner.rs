//! Runs every enabled rule over a document and collects the findings.

use crate::encoding::read_document;
use crate::rule::{DocumentReport, Finding, LintError};
use crate::rules::RuleRegistry;
use std::collections::HashSet;
use std::path::Path;

pub struct DocumentScanner<'r> {
    registry: &'r RuleRegistry,
    disabled: HashSet<String>,
}

impl<'r> DocumentScanner<'r> {
    pub fn new(registry: &'r RuleRegistry, disabled: HashSet<String>) -> Self {
        Self { registry, disabled }
    }

    fn is_enabled(&self, name: &str) -> bool {
        !self.disabled.contains(name)
    }

    /// Scan a file from disk.
    ///
    /// A file that can not be opened or decoded yields an empty report so a directory
    /// scan can carry on.
    pub fn scan_file(&self, path: &Path) -> Result<DocumentReport<'r>, LintError> {
        let file_path = path.display().to_string();
        let document = match read_document(path) {
            Ok(document) => document,
            Err(e) => {
                log::warn!("Could not open {file_path}. Skipping the file...");
                log::info!("{e}");
                return Ok(DocumentReport::new(file_path));
            }
        };
        self.scan_lines(&file_path, &document.lines())
    }

    /// Scan lines that still carry their line terminators.
    ///
    /// Per line, single-line rules run first, then rules that need following lines. Ast
    /// rules run once after the line pass and report at most one finding each.
    pub fn scan_lines(&self, file_path: &str, lines: &[&str]) -> Result<DocumentReport<'r>, LintError> {
        let mut report = DocumentReport::new(file_path);

        let (single, multi): (Vec<_>, Vec<_>) = self
            .registry
            .line_rules()
            .filter(|(rule, _)| self.is_enabled(rule.name()))
            .partition(|(_, window)| window.len == 1);

        for i in 0..lines.len() {
            for (rule, window) in single.iter().chain(multi.iter()) {
                let end = i + window.len;
                if end > lines.len() {
                    continue;
                }
                if !rule.validate(&lines[i..end])? {
                    let line_nr = i + window.anchor;
                    report.errors.push(Finding::at_line(*rule, line_nr, lines[line_nr]));
                }
            }
        }

        for rule in self.registry.ast_rules().filter(|r| self.is_enabled(r.name())) {
            if !rule.validate(lines)? {
                report.errors.push(Finding::for_document(rule));
            }
        }

        Ok(report)
    }
}

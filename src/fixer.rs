//! Applies the fixes of a scanned document and rewrites the file in place.
//!
//! Line findings replace the line they were reported on, indexed against the file as it
//! was scanned. A fix that inserts a line (a separator followed by a blank) therefore does
//! not shift the lines later findings point at. When several findings share a line only
//! the first one in scan order is applied; a new scan picks up the rest.

use crate::encoding::{DecodeError, read_document, write_document};
use crate::rule::{DocumentReport, Finding, LintError};
use std::collections::HashMap;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixError {
    #[error(transparent)]
    Read(#[from] DecodeError),
    #[error("Failed to write {path}: {source}")]
    Write { path: String, source: io::Error },
    #[error(transparent)]
    Lint(#[from] LintError),
}

/// Result of fixing one document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixOutcome {
    /// Findings whose fix was applied
    pub applied: usize,
    /// Whether the file content changed
    pub changed: bool,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentFixer;

impl DocumentFixer {
    pub fn new() -> Self {
        Self
    }

    /// Rewrite `lines` according to `findings`
    pub fn apply(&self, lines: &[&str], findings: &[Finding<'_>]) -> Result<(Vec<String>, usize), LintError> {
        let mut by_line: HashMap<usize, &Finding<'_>> = HashMap::new();
        for finding in findings {
            if let Some(line_nr) = finding.line_nr {
                by_line.entry(line_nr).or_insert(finding);
            }
        }

        let mut applied = 0;
        let mut fixed_lines = Vec::with_capacity(lines.len());
        for (line_nr, line) in lines.iter().enumerate() {
            match by_line.get(&line_nr) {
                Some(finding) if finding.rule.is_fixable() => {
                    fixed_lines.extend(finding.rule.fix(&[*line])?);
                    applied += 1;
                }
                _ => fixed_lines.push((*line).to_string()),
            }
        }

        // Ast fixes work on the whole document and replace the line rewrite
        for finding in findings.iter().filter(|f| f.line_nr.is_none()) {
            if finding.rule.is_fixable() {
                fixed_lines = finding.rule.fix(lines)?;
                applied += 1;
            }
        }

        Ok((fixed_lines, applied))
    }

    /// Re-read the reported file, apply its fixes and overwrite it.
    ///
    /// The write is not atomic; an interrupted write can leave a truncated file.
    pub fn fix_document(&self, report: &DocumentReport<'_>) -> Result<FixOutcome, FixError> {
        if report.is_empty() {
            return Ok(FixOutcome::default());
        }

        log::info!("Fixing {}", report.file_path);
        let path = Path::new(&report.file_path);
        let document = read_document(path)?;
        let lines = document.lines();

        let (fixed_lines, applied) = self.apply(&lines, &report.errors)?;
        let changed = fixed_lines.iter().map(String::as_str).ne(lines.iter().copied());

        write_document(path, &fixed_lines, document.encoding).map_err(|source| FixError::Write {
            path: report.file_path.clone(),
            source,
        })?;

        Ok(FixOutcome { applied, changed })
    }
}

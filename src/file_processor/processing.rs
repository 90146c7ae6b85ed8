//! The check run: resolve the target, scan, optionally fix, report.

use super::discovery::{TargetKind, classify_target, find_markdown_files};
use crate::fixer::DocumentFixer;
use crate::formatter::{self, CheckSummary};
use crate::rule::{DocumentReport, LintError};
use crate::rules::RuleRegistry;
use crate::scanner::DocumentScanner;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Could not find file or directory: {}\nPlease provide a valid file or directory.", .path.display())]
    PathNotFound { path: PathBuf },
    #[error(transparent)]
    Lint(#[from] LintError),
}

/// Arguments of a check run, as handed over by the command line and config layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckArgs {
    pub in_path: String,
    pub fix: bool,
    pub disabled_errors: HashSet<String>,
    pub simple_errors: bool,
}

/// Walks a file or a directory of markdown files, scans each one and optionally fixes it
pub struct CheckEngine<'r> {
    registry: &'r RuleRegistry,
    visual: bool,
}

impl<'r> CheckEngine<'r> {
    pub fn new(registry: &'r RuleRegistry, visual: bool) -> Self {
        Self { registry, visual }
    }

    pub fn check_dir(&self, scanner: &DocumentScanner<'r>, dir: &Path) -> Result<Vec<DocumentReport<'r>>, CheckError> {
        let md_files = find_markdown_files(dir);
        log::info!("Found {} files to check", md_files.len());

        let mut reports = Vec::with_capacity(md_files.len());
        for file in &md_files {
            reports.push(self.check_file(scanner, file)?);
        }
        Ok(reports)
    }

    pub fn check_file(&self, scanner: &DocumentScanner<'r>, file: &Path) -> Result<DocumentReport<'r>, CheckError> {
        let report = scanner.scan_file(file)?;
        log::info!("Found {} errors in {}", report.len(), report.file_path);
        Ok(report)
    }

    /// Scan the target named in `args` and return one report per markdown file
    pub fn scan(&self, args: &CheckArgs) -> Result<Vec<DocumentReport<'r>>, CheckError> {
        let scanner = DocumentScanner::new(self.registry, args.disabled_errors.clone());
        let in_path = Path::new(&args.in_path);

        match classify_target(in_path) {
            Some(TargetKind::Directory) => {
                log::info!("Checking directory {}", args.in_path);
                self.check_dir(&scanner, in_path)
            }
            Some(TargetKind::File) => {
                log::info!("Checking file {}", args.in_path);
                Ok(vec![self.check_file(&scanner, in_path)?])
            }
            None => Err(CheckError::PathNotFound {
                path: std::path::absolute(in_path).unwrap_or_else(|_| in_path.to_path_buf()),
            }),
        }
    }

    /// Full check run: scan, then fix or report
    pub fn run(&self, args: &CheckArgs) -> Result<CheckSummary, CheckError> {
        let reports = self.scan(args)?;

        let mut summary = CheckSummary {
            files_checked: reports.len(),
            ..CheckSummary::default()
        };
        for report in &reports {
            summary.total_errors += report.len();
            summary.fixable_errors += report.fixable_count();
            if !report.is_empty() {
                summary.files_with_errors += 1;
            }
        }

        if args.fix {
            let fixer = DocumentFixer::new();
            for report in &reports {
                match fixer.fix_document(report) {
                    Ok(outcome) => {
                        summary.fixes_applied += outcome.applied;
                        if outcome.changed {
                            summary.files_fixed += 1;
                        }
                        self.report(report, args.simple_errors, true);
                    }
                    Err(e) => log::warn!("Could not fix {}: {e}", report.file_path),
                }
            }
        } else {
            for report in &reports {
                self.report(report, args.simple_errors, false);
            }
        }

        Ok(summary)
    }

    fn report(&self, report: &DocumentReport<'_>, simple: bool, fixed: bool) {
        if !self.visual {
            return;
        }
        if simple {
            formatter::print_simple_doc_error(report, fixed);
        } else {
            formatter::print_doc_error(report, fixed);
        }
    }
}

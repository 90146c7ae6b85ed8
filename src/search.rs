//! Plain-text search over notes, filtered by front matter.

use crate::encoding::read_document;
use crate::file_processor::{TargetKind, classify_target, find_markdown_files};
use crate::formatter::LineMatch;
use crate::front_matter::FrontMatter;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Could not find file or directory: {}", .path.display())]
    PathNotFound { path: PathBuf },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchArgs {
    pub pattern: String,
    pub path: String,
    /// Comma separated, every tag has to be present
    pub tags: Option<String>,
    pub topic: Option<String>,
    pub title: Option<String>,
    pub case_insensitive: bool,
}

/// A document with at least one matching line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub path: PathBuf,
    pub matched_lines: Vec<LineMatch>,
}

impl SearchArgs {
    fn wanted_tags(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(|t| t.trim().to_lowercase())
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether a document with this front matter passes the metadata filters
    pub fn accepts(&self, front_matter: &FrontMatter) -> bool {
        let tags = front_matter.tags();
        if !self.wanted_tags().iter().all(|t| tags.contains(t)) {
            return false;
        }

        let field_matches = |key: &str, wanted: &Option<String>| match wanted {
            Some(wanted) => front_matter.get(key).is_some_and(|v| v.eq_ignore_ascii_case(wanted)),
            None => true,
        };
        field_matches("topic", &self.topic) && field_matches("title", &self.title)
    }

    pub fn matching_lines(&self, text: &str) -> Vec<LineMatch> {
        let pattern = if self.case_insensitive {
            self.pattern.to_lowercase()
        } else {
            self.pattern.clone()
        };

        text.lines()
            .enumerate()
            .filter(|(_, line)| {
                if self.case_insensitive {
                    line.to_lowercase().contains(&pattern)
                } else {
                    line.contains(&pattern)
                }
            })
            .map(|(i, line)| LineMatch {
                line_nr: i + 1,
                line: line.to_string(),
            })
            .collect()
    }
}

fn search_file(args: &SearchArgs, path: &Path) -> Option<SearchMatch> {
    let document = match read_document(path) {
        Ok(document) => document,
        Err(e) => {
            log::warn!("Could not open {}. Skipping the file...", path.display());
            log::info!("{e}");
            return None;
        }
    };

    if !args.accepts(&FrontMatter::parse(&document.text)) {
        return None;
    }

    let matched_lines = args.matching_lines(&document.text);
    if matched_lines.is_empty() {
        return None;
    }
    Some(SearchMatch {
        path: path.to_path_buf(),
        matched_lines,
    })
}

pub fn search(args: &SearchArgs) -> Result<Vec<SearchMatch>, SearchError> {
    let path = Path::new(&args.path);
    let files = match classify_target(path) {
        Some(TargetKind::Directory) => find_markdown_files(path),
        Some(TargetKind::File) => vec![path.to_path_buf()],
        None => {
            return Err(SearchError::PathNotFound {
                path: path.to_path_buf(),
            });
        }
    };
    log::info!("Searching {} files for '{}'", files.len(), args.pattern);

    Ok(files.iter().filter_map(|file| search_file(args, file)).collect())
}

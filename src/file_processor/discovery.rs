//! Target classification and markdown file discovery

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// What a user supplied path points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Directory,
    File,
}

/// Classify `path`, or `None` when it is neither a directory nor a regular file
pub fn classify_target(path: &Path) -> Option<TargetKind> {
    if path.is_dir() {
        Some(TargetKind::Directory)
    } else if path.is_file() {
        Some(TargetKind::File)
    } else {
        None
    }
}

pub fn is_markdown_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

/// Recursively find every `.md` file under `dir`.
///
/// Files come back in walk order. Ignore files and hidden-file filtering do not apply.
pub fn find_markdown_files(dir: &Path) -> Vec<PathBuf> {
    let mut walk_builder = WalkBuilder::new(dir);
    walk_builder.standard_filters(false);

    let mut file_paths = Vec::new();
    for result in walk_builder.build() {
        match result {
            Ok(entry) => {
                let path = entry.path();
                if entry.file_type().is_some_and(|ft| ft.is_file()) && is_markdown_file(path) {
                    log::debug!("Found markdown file: {}", path.display());
                    file_paths.push(entry.into_path());
                }
            }
            Err(err) => log::warn!("Error walking directory: {err}"),
        }
    }

    file_paths
}

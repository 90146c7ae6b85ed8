//! Progress bar for converting a directory of notes.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;

const TEMPLATE: &str = "{spinner:.green} Converting [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%)";

/// Drawn on stderr, hidden outside visual mode or when stderr is not a terminal
pub struct ConvertProgress {
    progress_bar: ProgressBar,
}

impl ConvertProgress {
    pub fn new(total: usize, visual: bool) -> Self {
        Self::new_with_visibility(total, visual, std::io::stderr().is_terminal())
    }

    fn new_with_visibility(total: usize, visual: bool, is_tty: bool) -> Self {
        let progress_bar = if visual && is_tty {
            Self::create_visible_progress_bar(total as u64)
        } else {
            ProgressBar::hidden()
        };
        Self { progress_bar }
    }

    fn create_visible_progress_bar(total: u64) -> ProgressBar {
        let style = ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░");
        ProgressBar::new(total).with_style(style)
    }

    pub fn inc(&self) {
        self.progress_bar.inc(1);
    }

    /// Run `f` with the bar cleared, for output that has to go above it
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.progress_bar.suspend(f)
    }

    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_outside_visual_mode() {
        let progress = ConvertProgress::new_with_visibility(3, false, true);
        assert!(progress.progress_bar.is_hidden());
        assert_eq!(progress.progress_bar.length(), None);
    }

    #[test]
    fn test_hidden_without_terminal() {
        let progress = ConvertProgress::new_with_visibility(3, true, false);
        assert_eq!(progress.progress_bar.length(), None);
    }

    #[test]
    fn test_visible_bar_counts_files() {
        let progress = ConvertProgress::new_with_visibility(3, true, true);
        assert_eq!(progress.progress_bar.length(), Some(3));
        progress.inc();
        progress.inc();
        assert_eq!(progress.progress_bar.position(), 2);
        assert_eq!(progress.suspend(|| 7), 7);
        progress.finish();
    }
}

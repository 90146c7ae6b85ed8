//! Convert mode: render notes to html or pdf with an external document converter.
//!
//! The external tool sits behind [`DocumentRenderer`] so the directory walk and the
//! outcome reporting can be tested without pandoc installed.

use crate::file_processor::{TargetKind, classify_target, find_markdown_files};
use crate::progress::ConvertProgress;
use colored::*;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;

/// Template used for html output when none is configured
pub const DEFAULT_HTML_TEMPLATE: &str = "GitHub.html5";

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Could not find file or directory: {}", .path.display())]
    PathNotFound { path: PathBuf },
    #[error("Could not create directory {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// Result of rendering a single document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Success,
    /// The output was written but the renderer complained
    Warning(String),
    Error(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub to_pdf: bool,
    pub template: Option<String>,
    pub extra_args: Vec<String>,
}

impl RenderOptions {
    /// The configured template, falling back to [`DEFAULT_HTML_TEMPLATE`] for html output
    pub fn effective_template(&self) -> Option<&str> {
        match (&self.template, self.to_pdf) {
            (Some(template), _) => Some(template),
            (None, false) => Some(DEFAULT_HTML_TEMPLATE),
            (None, true) => None,
        }
    }

    pub fn output_extension(&self) -> &'static str {
        if self.to_pdf { "pdf" } else { "html" }
    }
}

pub trait DocumentRenderer: Send + Sync {
    fn render(&self, input: &Path, output: &Path, options: &RenderOptions) -> RenderOutcome;
}

/// Renders through the `pandoc` executable
#[derive(Debug, Clone)]
pub struct PandocRenderer {
    program: String,
}

impl Default for PandocRenderer {
    fn default() -> Self {
        Self {
            program: "pandoc".to_string(),
        }
    }
}

impl PandocRenderer {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    pub fn command_args(input: &Path, output: &Path, options: &RenderOptions) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            input.into(),
            "-o".into(),
            output.into(),
            "--mathjax".into(),
        ];
        if let Some(template) = options.effective_template() {
            args.push("--template".into());
            args.push(template.into());
        }
        args.extend(options.extra_args.iter().map(OsString::from));
        args
    }
}

impl DocumentRenderer for PandocRenderer {
    fn render(&self, input: &Path, output: &Path, options: &RenderOptions) -> RenderOutcome {
        let args = Self::command_args(input, output, options);
        log::debug!("Running {} {:?}", self.program, args);

        let result = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output();

        match result {
            Ok(out) => {
                let stderr = String::from_utf8_lossy(&out.stderr).trim().to_string();
                if !out.status.success() {
                    RenderOutcome::Error(stderr)
                } else if !stderr.is_empty() {
                    RenderOutcome::Warning(stderr)
                } else {
                    RenderOutcome::Success
                }
            }
            Err(e) => RenderOutcome::Error(format!("Could not run {}: {e}", self.program)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertArgs {
    pub in_path: String,
    pub out_path: String,
    pub to_pdf: bool,
    /// Whitespace separated arguments handed to the renderer as-is
    pub pandoc_args: Option<String>,
    pub pandoc_template: Option<String>,
    pub ignore_warnings: bool,
}

impl ConvertArgs {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            to_pdf: self.to_pdf,
            template: self.pandoc_template.clone(),
            extra_args: self
                .pandoc_args
                .as_deref()
                .map(|args| args.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    pub converted: usize,
    pub warnings: usize,
    pub errors: usize,
}

pub struct ConvertEngine<'a> {
    renderer: &'a dyn DocumentRenderer,
    visual: bool,
}

impl<'a> ConvertEngine<'a> {
    pub fn new(renderer: &'a dyn DocumentRenderer, visual: bool) -> Self {
        Self { renderer, visual }
    }

    pub fn run(&self, args: &ConvertArgs) -> Result<ConvertSummary, ConvertError> {
        let in_path = Path::new(&args.in_path);
        let out_path = Path::new(&args.out_path);
        let options = args.render_options();

        let target = classify_target(in_path);
        let jobs = match target {
            Some(TargetKind::Directory) => mirror_directory(in_path, out_path, &options)?,
            Some(TargetKind::File) => vec![(in_path.to_path_buf(), out_path.to_path_buf())],
            None => {
                return Err(ConvertError::PathNotFound {
                    path: in_path.to_path_buf(),
                });
            }
        };
        log::info!("Found {} files to convert", jobs.len());

        let is_dir = target == Some(TargetKind::Directory);
        if self.visual && is_dir {
            println!(
                "{} {} {}",
                "Found".green(),
                jobs.len().to_string().green().bold(),
                "files to convert!".green()
            );
        }
        let progress = ConvertProgress::new(jobs.len(), self.visual && is_dir);

        let mut summary = ConvertSummary::default();
        for (input, output) in &jobs {
            if self.visual && !is_dir {
                println!(
                    "{}",
                    format!("Converting {} -> {}", input.display(), output.display()).green()
                );
            }
            match self.renderer.render(input, output, &options) {
                RenderOutcome::Success => summary.converted += 1,
                RenderOutcome::Warning(text) => {
                    summary.converted += 1;
                    summary.warnings += 1;
                    if !args.ignore_warnings {
                        progress.suspend(|| {
                            eprintln!("{} {}: {}", "Warning:".yellow().bold(), input.display(), text)
                        });
                    }
                }
                RenderOutcome::Error(text) => {
                    summary.errors += 1;
                    progress.suspend(|| {
                        eprintln!("{} Could not convert {}: {}", "Error:".red().bold(), input.display(), text)
                    });
                }
            }
            progress.inc();
        }
        progress.finish();

        Ok(summary)
    }
}

/// Map every markdown file under `in_dir` to its place under `out_dir`, creating the
/// output directories on the way
fn mirror_directory(in_dir: &Path, out_dir: &Path, options: &RenderOptions) -> Result<Vec<(PathBuf, PathBuf)>, ConvertError> {
    let mut jobs = Vec::new();
    for file in find_markdown_files(in_dir) {
        let relative = file.strip_prefix(in_dir).unwrap_or(&file);
        let output = out_dir.join(relative).with_extension(options.output_extension());
        if let Some(parent) = output.parent()
            && !parent.is_dir()
        {
            log::info!("Making new (sub)directory: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|source| ConvertError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        jobs.push((file, output));
    }
    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;

    /// Records calls and answers with a fixed outcome
    struct FakeRenderer {
        outcome: RenderOutcome,
        calls: Mutex<Vec<(PathBuf, PathBuf)>>,
    }

    impl FakeRenderer {
        fn new(outcome: RenderOutcome) -> Self {
            Self {
                outcome,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl DocumentRenderer for FakeRenderer {
        fn render(&self, input: &Path, output: &Path, _options: &RenderOptions) -> RenderOutcome {
            self.calls
                .lock()
                .unwrap()
                .push((input.to_path_buf(), output.to_path_buf()));
            self.outcome.clone()
        }
    }

    #[test]
    fn test_pandoc_command_args() {
        let options = RenderOptions {
            extra_args: vec!["--toc".to_string()],
            ..RenderOptions::default()
        };
        let args = PandocRenderer::command_args(Path::new("a.md"), Path::new("a.html"), &options);
        let expected: Vec<OsString> = ["a.md", "-o", "a.html", "--mathjax", "--template", "GitHub.html5", "--toc"]
            .iter()
            .map(OsString::from)
            .collect();
        assert_eq!(args, expected);

        let pdf = RenderOptions {
            to_pdf: true,
            ..RenderOptions::default()
        };
        assert_eq!(pdf.effective_template(), None);
        assert_eq!(PandocRenderer::command_args(Path::new("a.md"), Path::new("a.pdf"), &pdf).len(), 4);
    }

    #[test]
    fn test_render_options_from_args() {
        let args = ConvertArgs {
            pandoc_args: Some("--toc  --standalone".to_string()),
            pandoc_template: Some("custom.html".to_string()),
            ..ConvertArgs::default()
        };
        let options = args.render_options();
        assert_eq!(options.extra_args, vec!["--toc", "--standalone"]);
        assert_eq!(options.effective_template(), Some("custom.html"));
    }

    #[test]
    fn test_directory_structure_is_mirrored() {
        let in_dir = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(in_dir.path().join("week1")).unwrap();
        fs::write(in_dir.path().join("intro.md"), "# Intro\n").unwrap();
        fs::write(in_dir.path().join("week1/lecture.md"), "# Lecture\n").unwrap();
        fs::write(in_dir.path().join("week1/image.png"), "").unwrap();

        let renderer = FakeRenderer::new(RenderOutcome::Success);
        let engine = ConvertEngine::new(&renderer, false);
        let args = ConvertArgs {
            in_path: in_dir.path().to_string_lossy().to_string(),
            out_path: out_dir.path().to_string_lossy().to_string(),
            ..ConvertArgs::default()
        };
        let summary = engine.run(&args).unwrap();
        assert_eq!(summary.converted, 2);

        let mut outputs: Vec<PathBuf> = renderer.calls.lock().unwrap().iter().map(|(_, o)| o.clone()).collect();
        outputs.sort();
        assert_eq!(
            outputs,
            vec![out_dir.path().join("intro.html"), out_dir.path().join("week1/lecture.html")]
        );
        assert!(out_dir.path().join("week1").is_dir());
    }

    #[test]
    fn test_errors_do_not_stop_the_run() {
        let in_dir = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        fs::write(in_dir.path().join("a.md"), "a\n").unwrap();
        fs::write(in_dir.path().join("b.md"), "b\n").unwrap();

        let renderer = FakeRenderer::new(RenderOutcome::Error("boom".to_string()));
        let engine = ConvertEngine::new(&renderer, false);
        let args = ConvertArgs {
            in_path: in_dir.path().to_string_lossy().to_string(),
            out_path: out_dir.path().to_string_lossy().to_string(),
            to_pdf: true,
            ..ConvertArgs::default()
        };
        let summary = engine.run(&args).unwrap();
        assert_eq!(summary.errors, 2);
        assert_eq!(summary.converted, 0);
        assert_eq!(renderer.calls.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let renderer = FakeRenderer::new(RenderOutcome::Success);
        let engine = ConvertEngine::new(&renderer, false);
        let args = ConvertArgs {
            in_path: "/no/such/notes".to_string(),
            out_path: "out".to_string(),
            ..ConvertArgs::default()
        };
        assert!(matches!(engine.run(&args), Err(ConvertError::PathNotFound { .. })));
        assert!(renderer.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_missing_program_is_an_error_outcome() {
        let renderer = PandocRenderer::new("notesystem-no-such-program");
        let outcome = renderer.render(Path::new("a.md"), Path::new("a.html"), &RenderOptions::default());
        assert!(matches!(outcome, RenderOutcome::Error(_)));
    }
}

use clap::{Arg, ArgAction, ArgMatches, Args, Command, CommandFactory, Parser, Subcommand};
use notesystem_lib::rules::RuleRegistry;
use std::collections::HashSet;

/// Help heading of the synthesised `--disable-<rule>` flags
pub const DISABLED_ERRORS_HEADING: &str = "Disabled Errors";

#[derive(Parser, Debug)]
#[command(name = "notesystem", author, version, about = "Check, convert and search markdown notes", long_about = None)]
pub struct Cli {
    /// Print info output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print nothing but errors
    #[arg(long, global = true)]
    pub no_visual: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check notes for errors and optionally fix them
    Check(CheckCommand),
    /// Convert notes to html or pdf with pandoc
    Convert(ConvertCommand),
    /// Search notes, optionally filtered by front matter
    Search(SearchCommand),
}

#[derive(Args, Debug)]
pub struct CheckCommand {
    /// File or directory to check
    #[arg(value_name = "in")]
    pub in_path: String,

    /// Fix errors automatically where possible
    #[arg(short, long)]
    pub fix: bool,

    /// Print one line per error
    #[arg(long)]
    pub simple_errors: bool,
}

#[derive(Args, Debug)]
pub struct ConvertCommand {
    /// File or directory to convert
    #[arg(value_name = "in")]
    pub in_path: String,

    /// Output file or directory
    #[arg(value_name = "out")]
    pub out_path: String,

    /// Render pdf instead of html
    #[arg(long)]
    pub to_pdf: bool,

    /// Extra arguments for pandoc, e.g. "--toc --standalone"
    #[arg(long, allow_hyphen_values = true)]
    pub pandoc_args: Option<String>,

    /// Pandoc template (defaults to GitHub.html5 for html)
    #[arg(long)]
    pub pandoc_template: Option<String>,

    /// Do not print pandoc warnings
    #[arg(long)]
    pub ignore_warnings: bool,
}

#[derive(Args, Debug)]
pub struct SearchCommand {
    pub pattern: String,

    /// File or directory to search
    pub path: String,

    /// Comma separated tags that all have to be present in the front matter
    #[arg(long)]
    pub tags: Option<String>,

    #[arg(long)]
    pub topic: Option<String>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(short = 'i', long)]
    pub case_insensitive: bool,

    /// Print the full path instead of the file name
    #[arg(long)]
    pub full_path: bool,
}

/// The full command line, with a `--disable-<rule>` flag on `check` for every rule in `registry`
pub fn build_command(registry: &RuleRegistry) -> Command {
    Cli::command().mut_subcommand("check", |check| {
        registry
            .metadata()
            .into_iter()
            .fold(check.next_help_heading(DISABLED_ERRORS_HEADING), |cmd, (name, help_text)| {
                cmd.arg(
                    Arg::new(name)
                        .long(format!("disable-{name}"))
                        .action(ArgAction::SetTrue)
                        .help(format!("Disable: {help_text}")),
                )
            })
    })
}

/// Names of the rules disabled through flags in the `check` matches
pub fn disabled_from_matches(check_matches: &ArgMatches, registry: &RuleRegistry) -> HashSet<String> {
    registry
        .metadata()
        .into_iter()
        .filter(|(name, _)| check_matches.get_flag(name))
        .map(|(name, _)| name.to_string())
        .collect()
}

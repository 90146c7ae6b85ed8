use anyhow::{Context, Result};
use clap::{ArgMatches, FromArgMatches};
use colored::*;
use std::path::Path;
use std::time::Instant;

use notesystem_lib::config::Config;
use notesystem_lib::convert::{ConvertArgs, ConvertEngine, PandocRenderer};
use notesystem_lib::exit_codes::exit;
use notesystem_lib::file_processor::{CheckArgs, CheckEngine};
use notesystem_lib::formatter::{format_search_result, print_check_summary};
use notesystem_lib::rules::RuleRegistry;
use notesystem_lib::search::{SearchArgs, search};

mod cli_types;

use cli_types::{CheckCommand, Cli, Commands, ConvertCommand, SearchCommand};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run_check(cmd: &CheckCommand, matches: &ArgMatches, registry: &RuleRegistry, config: &Config, visual: bool) -> Result<()> {
    let mut disabled_errors = config.known_disabled_errors(registry);
    if let Some(check_matches) = matches.subcommand_matches("check") {
        disabled_errors.extend(cli_types::disabled_from_matches(check_matches, registry));
    }
    if !disabled_errors.is_empty() {
        log::info!("Disabled errors: {disabled_errors:?}");
    }

    let args = CheckArgs {
        in_path: cmd.in_path.clone(),
        fix: cmd.fix || config.check.fix,
        disabled_errors,
        simple_errors: cmd.simple_errors || config.check.simple_errors,
    };

    let start = Instant::now();
    let summary = CheckEngine::new(registry, visual).run(&args)?;
    if visual {
        print_check_summary(&summary, args.fix, start.elapsed().as_millis() as u64);
    }
    Ok(())
}

fn run_convert(cmd: &ConvertCommand, config: &Config, visual: bool) -> Result<()> {
    let args = ConvertArgs {
        in_path: cmd.in_path.clone(),
        out_path: cmd.out_path.clone(),
        to_pdf: cmd.to_pdf || config.convert.to_pdf,
        pandoc_args: cmd.pandoc_args.clone().or_else(|| config.convert.pandoc_args.clone()),
        pandoc_template: cmd
            .pandoc_template
            .clone()
            .or_else(|| config.convert.pandoc_template.clone()),
        ignore_warnings: cmd.ignore_warnings || config.convert.ignore_warnings,
    };

    let renderer = PandocRenderer::default();
    let summary = ConvertEngine::new(&renderer, visual)
        .run(&args)
        .with_context(|| format!("Could not convert {}", args.in_path))?;
    if visual {
        println!(
            "\n{} Converted {} files ({} warnings, {} errors)",
            "Done:".green().bold(),
            summary.converted,
            summary.warnings,
            summary.errors
        );
    }
    Ok(())
}

fn run_search(cmd: &SearchCommand, config: &Config, visual: bool) -> Result<()> {
    let args = SearchArgs {
        pattern: cmd.pattern.clone(),
        path: cmd.path.clone(),
        tags: cmd.tags.clone(),
        topic: cmd.topic.clone(),
        title: cmd.title.clone(),
        case_insensitive: cmd.case_insensitive || config.search.case_insensitive,
    };
    let full_path = cmd.full_path || config.search.full_path;

    for found in search(&args)? {
        let display_path = if full_path {
            found.path.display().to_string()
        } else {
            found
                .path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| found.path.display().to_string())
        };
        print!(
            "{}",
            format_search_result(&display_path, &found.matched_lines, &args.pattern, visual)
        );
    }
    Ok(())
}

fn run(cli: &Cli, matches: &ArgMatches, registry: &RuleRegistry, config: &Config) -> Result<()> {
    let visual = !(cli.no_visual || config.general.no_visual);
    if !visual {
        colored::control::set_override(false);
    }

    match &cli.command {
        Commands::Check(cmd) => run_check(cmd, matches, registry, config, visual),
        Commands::Convert(cmd) => run_convert(cmd, config, visual),
        Commands::Search(cmd) => run_search(cmd, config, visual),
    }
}

fn main() {
    let registry = RuleRegistry::default();
    let matches = cli_types::build_command(&registry).get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let config = match Config::load(cli.config_file.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "Config error:".red().bold());
            exit::tool_error();
        }
    };
    init_logging(cli.verbose || config.general.verbose);
    if let Some(path) = cli.config_file.as_deref() {
        log::info!("Using config file {}", Path::new(path).display());
    }

    if let Err(e) = run(&cli, &matches, &registry, &config) {
        eprintln!("{}", format!("{e:#}").red());
        exit::tool_error();
    }
    exit::success();
}

//! CLI entrypoint for kms-launch.

#[path = "kms-launch/cli.rs"]
mod cli;
#[path = "kms-launch/commands.rs"]
mod commands;
#[path = "kms-launch/completions.rs"]
mod completions;
#[path = "kms-launch/style.rs"]
mod style;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

use cli::{Cli, Command};
use kms_launch::{logging, AppConfig, ConfigOverrides};

fn main() -> anyhow::Result<()> {
    if let Err(err) = run() {
        let message = format_error_with_tip(&err);
        eprintln!("{}", style::error(format!("Error: {message}")));
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    let raw_args: Vec<String> = std::env::args().collect();
    let cli = match Cli::try_parse_from(&raw_args) {
        Ok(cli) => cli,
        Err(err) => {
            if err.kind() == ErrorKind::InvalidSubcommand {
                if let Some(input) = raw_args.iter().skip(1).find(|arg| !arg.starts_with('-')) {
                    if let Some(suggestion) = suggest_subcommand(input) {
                        eprintln!("Did you mean: {suggestion}?");
                    }
                }
            }
            err.exit();
        }
    };

    let overrides = ConfigOverrides {
        config: cli.config.clone(),
        endpoint: cli.endpoint.clone(),
        log_level: cli.log_level.clone(),
    };
    let config = AppConfig::load(&overrides)?;
    logging::init(&config.log_level, cli.verbose);
    debug!(
        version = %config.version,
        endpoint = %config.endpoint,
        source = ?config.source,
        "configuration resolved"
    );

    match cli.command {
        Command::Pages => commands::run_pages(),
        Command::Schema { page } => commands::run_schema(&page),
        Command::Encode { page, edits } => commands::run_encode(&page, &edits),
        Command::Extract { page, from, tokens } => {
            commands::run_extract(&page, from.as_deref(), tokens)
        }
        Command::Launch {
            page,
            edits,
            seed,
            detach,
            exit,
            working_directory,
            dry_run,
        } => commands::run_launch(
            &config,
            &page,
            &edits,
            commands::LaunchOptions {
                seed,
                detach,
                exit,
                working_directory,
                dry_run,
            },
        ),
        Command::Exit => commands::run_exit(&config),
        Command::Completions { shell } => completions::run_completions(shell),
    }
}

fn suggest_subcommand(input: &str) -> Option<&'static str> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    let candidates = [
        "pages",
        "schema",
        "encode",
        "extract",
        "launch",
        "exit",
        "completions",
    ];
    candidates
        .into_iter()
        .map(|candidate| (levenshtein(input, candidate), candidate))
        .min_by_key(|(score, _)| *score)
        .filter(|(score, _)| *score <= 2)
        .map(|(_, candidate)| candidate)
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }
    prev[b.len()]
}

fn format_error_with_tip(err: &anyhow::Error) -> String {
    let message = format!("{err:#}");
    let tip = if message.contains("transport error") {
        Some("Tip: check that the back-end is running, or pass --endpoint / set KMS_LAUNCH_ENDPOINT.")
    } else if message.contains("invalid config") {
        Some("Tip: check kms-launch.toml ([launch] endpoint, timeout_ms; [log] level).")
    } else if message.contains("unknown page") {
        Some("Tip: run `kms-launch pages` to list the pages.")
    } else {
        None
    };
    match tip {
        Some(tip) => format!("{message}\n{tip}"),
        None => message,
    }
}

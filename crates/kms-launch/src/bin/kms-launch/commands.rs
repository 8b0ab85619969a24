//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{info, warn};

use kms_args::catalog::{KMS_ARGUMENTS, LAUNCHER_PARAMETERS};
use kms_args::{Group, LaunchRequest, Page, PageForm, Schema};
use kms_launch::{render, AppConfig, LaunchClient};

use crate::cli::EditArgs;
use crate::style;

pub fn run_pages() -> anyhow::Result<()> {
    for page in Page::ALL {
        let schema = page.schema();
        println!(
            "{} {} field(s)",
            style::accent(format!("{:<12}", page.name())),
            schema.len()
        );
    }
    Ok(())
}

pub fn run_schema(name: &str) -> anyhow::Result<()> {
    print!("{}", render::schema_table(resolve_schema(name)?));
    Ok(())
}

pub fn run_encode(page: &str, edits: &EditArgs) -> anyhow::Result<()> {
    let mut form = PageForm::new(parse_page(page)?);
    apply_edits(&mut form, edits)?;
    print!("{}", render::token_listing(&form.arguments()));
    Ok(())
}

pub fn run_extract(page: &str, from: Option<&Path>, tokens: Vec<String>) -> anyhow::Result<()> {
    let page = parse_page(page)?;
    let tokens = match from {
        Some(path) => read_tokens(path)?,
        None => tokens,
    };
    let form = PageForm::seeded(page, &tokens);
    let mut output = serde_json::Map::new();
    output.insert(
        page.name().to_string(),
        render::present_fields(form.state(Group::Page)),
    );
    output.insert(
        KMS_ARGUMENTS.title().to_string(),
        render::present_fields(form.state(Group::Kms)),
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::Value::Object(output))?
    );
    for token in form.foreign(&tokens) {
        eprintln!("{}", style::warning(format!("ignored token '{token}'")));
    }
    Ok(())
}

pub struct LaunchOptions {
    pub seed: Option<PathBuf>,
    pub detach: bool,
    pub exit: bool,
    pub working_directory: Option<String>,
    pub dry_run: bool,
}

pub fn run_launch(
    config: &AppConfig,
    page: &str,
    edits: &EditArgs,
    options: LaunchOptions,
) -> anyhow::Result<()> {
    let page = parse_page(page)?;
    let mut form = match &options.seed {
        Some(path) => {
            let tokens = read_tokens(path)?;
            let form = PageForm::seeded(page, &tokens);
            for token in form.foreign(&tokens) {
                warn!(token, "seed token matches no field");
            }
            form
        }
        None => PageForm::new(page),
    };
    apply_edits(&mut form, edits)?;

    let parameters = form.state_mut(Group::Launcher);
    if options.detach {
        parameters.set_flag("Detach", true)?;
    }
    if options.exit {
        parameters.set_flag("Exit", true)?;
    }
    if let Some(dir) = options.working_directory {
        parameters.set_scalar("WorkingDirectory", dir)?;
    }

    for advisory in form.advisories() {
        warn!(field = advisory.field(), "{advisory}");
    }

    let request = form.request();
    if options.dry_run {
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    let client = LaunchClient::new(config);
    let response = client
        .launch(&request)
        .with_context(|| format!("launch via {} failed", client.base()))?;
    info!(result = response.result.as_deref().unwrap_or(""), "launch accepted");
    println!(
        "{}",
        style::success(format!(
            "{} launched ({} argument(s))",
            page.name(),
            request.arguments.len()
        ))
    );
    Ok(())
}

pub fn run_exit(config: &AppConfig) -> anyhow::Result<()> {
    let client = LaunchClient::new(config);
    client
        .exit()
        .with_context(|| format!("exit via {} failed", client.base()))?;
    println!("{}", style::success("back-end stopped"));
    Ok(())
}

fn parse_page(name: &str) -> anyhow::Result<Page> {
    Ok(name.parse::<Page>()?)
}

fn resolve_schema(name: &str) -> anyhow::Result<&'static Schema> {
    let key = name.trim().replace(['-', ' ', '_'], "").to_ascii_lowercase();
    match key.as_str() {
        "kms" | "kmsarguments" => Ok(&KMS_ARGUMENTS),
        "parameters" | "launcherparameters" => Ok(&LAUNCHER_PARAMETERS),
        _ => Ok(parse_page(name)?.schema()),
    }
}

fn apply_edits(form: &mut PageForm, edits: &EditArgs) -> anyhow::Result<()> {
    for edit in &edits.set {
        if !edit.contains('=') {
            anyhow::bail!("--set expects NAME=VALUE (got '{edit}')");
        }
        form.apply(edit)?;
    }
    for name in &edits.flag {
        form.apply(name)?;
    }
    for edit in &edits.push {
        let Some((name, value)) = edit.split_once('=') else {
            anyhow::bail!("--push expects NAME=VALUE (got '{edit}')");
        };
        form.apply(&format!("{name}+={value}"))?;
    }
    for edit in &edits.kms {
        form.state_mut(Group::Kms).apply(edit)?;
    }
    Ok(())
}

/// A saved launch payload, a JSON array of strings, or one token per
/// non-blank line.
fn read_tokens(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let head = text.trim_start();
    if head.starts_with('{') {
        let request = LaunchRequest::from_json(&text)
            .with_context(|| format!("{} is not a launch payload", path.display()))?;
        return Ok(request.arguments);
    }
    if head.starts_with('[') {
        return serde_json::from_str(&text)
            .with_context(|| format!("{} is not a JSON array of strings", path.display()));
    }
    Ok(text
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

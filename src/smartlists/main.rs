use clap::Parser;
use colored::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use smartlists::api::{CmdMessage, ConfigAction, MessageLevel, SmartListApi};
use smartlists::config::{resolve_config_dir, CONFIG_KEYS};
use smartlists::error::{Result, SmartListError};
use smartlists::filters::{FilterOperation, SelectorOption};
use smartlists::model::{SaveSmartListInput, SmartListForm};
use smartlists::validation::{SiblingNames, ValidationReport};
use std::io::Read;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, NameArgs};

const LOG_ENV: &str = "SMARTLISTS_LOG";

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

struct AppContext {
    api: SmartListApi,
    pretty: bool,
}

/// Returns `Ok(false)` when the command ran but found problems.
fn run() -> Result<bool> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_dir = resolve_config_dir(cli.config_dir.clone())?;
    let api = SmartListApi::open(config_dir)?;
    let pretty = api.settings().pretty_json;
    let ctx = AppContext { api, pretty };

    match cli.command {
        Commands::Load { file } => handle_load(&ctx, &file),
        Commands::Submit { file, names } => handle_submit(&ctx, &file, names),
        Commands::Validate { file, names } => handle_validate(&ctx, &file, names),
        Commands::Fields { source } => handle_fields(&ctx, source),
        Commands::Operations { field } => handle_operations(&ctx, &field),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn read_json<T: DeserializeOwned>(file: &str) -> Result<T> {
    let content = if file == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(file)?
    };
    Ok(serde_json::from_str(&content)?)
}

fn print_json<T: Serialize>(ctx: &AppContext, value: &T) -> Result<()> {
    let out = if ctx.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}

fn siblings(names: NameArgs) -> SiblingNames {
    let siblings = SiblingNames::new(names.existing);
    match names.current {
        Some(current) => siblings.editing(current),
        None => siblings,
    }
}

fn handle_load(ctx: &AppContext, file: &str) -> Result<bool> {
    let input: SaveSmartListInput = read_json(file)?;
    let result = ctx.api.load_list(&input)?;
    let form = result
        .form
        .ok_or_else(|| SmartListError::Api("load produced no form".into()))?;
    print_json(ctx, &form)?;
    eprint_messages(&result.messages);
    Ok(true)
}

fn handle_submit(ctx: &AppContext, file: &str, names: NameArgs) -> Result<bool> {
    let form: SmartListForm = read_json(file)?;
    let result = ctx.api.submit_list(&form, &siblings(names))?;
    match &result.input {
        Some(input) => {
            print_json(ctx, input)?;
            eprint_messages(&result.messages);
            Ok(true)
        }
        None => {
            if let Some(report) = &result.report {
                print_report(report);
            }
            eprint_messages(&result.messages);
            Ok(false)
        }
    }
}

fn handle_validate(ctx: &AppContext, file: &str, names: NameArgs) -> Result<bool> {
    let form: SmartListForm = read_json(file)?;
    let result = ctx.api.validate_list(&form, &siblings(names))?;
    let valid = result.report.as_ref().map_or(true, |r| r.is_valid());
    print_messages(&result.messages);
    Ok(valid)
}

fn handle_fields(ctx: &AppContext, source: Option<smartlists::filters::Source>) -> Result<bool> {
    let result = ctx.api.fields(source)?;
    print_selectors(&result.selectors);
    Ok(true)
}

fn handle_operations(ctx: &AppContext, field: &str) -> Result<bool> {
    let result = ctx.api.operations(field)?;
    print_messages(&result.messages);
    println!("{}", join_operations(&result.operations));
    Ok(true)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<bool> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in CONFIG_KEYS {
                if let Some(val) = config.get(key) {
                    println!("{} = {}", key, val);
                }
            }
        }
    }
    print_messages(&result.messages);
    Ok(!result.has_errors())
}

fn message_line(message: &CmdMessage) -> ColoredString {
    match message.level {
        MessageLevel::Info => message.content.dimmed(),
        MessageLevel::Success => message.content.green(),
        MessageLevel::Warning => message.content.yellow(),
        MessageLevel::Error => message.content.red(),
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", message_line(message));
    }
}

/// Messages go to stderr when stdout carries JSON.
fn eprint_messages(messages: &[CmdMessage]) {
    for message in messages {
        eprintln!("{}", message_line(message));
    }
}

fn print_report(report: &ValidationReport) {
    for issue in &report.issues {
        println!("{} {}", issue.path.yellow(), issue.message);
    }
}

fn join_operations(operations: &[FilterOperation]) -> String {
    operations
        .iter()
        .map(|op| op.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

const SOURCE_WIDTH: usize = 13;
const FIELD_WIDTH: usize = 15;
const DOMAIN_WIDTH: usize = 8;

fn pad(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn print_selectors(selectors: &[SelectorOption]) {
    if selectors.is_empty() {
        println!("No fields found.");
        return;
    }

    let mut last_source = None;
    for option in selectors {
        if last_source.is_some() && last_source != Some(option.source) {
            println!();
        }
        last_source = Some(option.source);

        let domain = option.domain.map(|d| d.as_str()).unwrap_or("-");
        println!(
            "{}{}{}{}",
            pad(option.source.as_str(), SOURCE_WIDTH).dimmed(),
            pad(option.field, FIELD_WIDTH).bold(),
            pad(domain, DOMAIN_WIDTH).cyan(),
            join_operations(&option.operations)
        );
    }
}

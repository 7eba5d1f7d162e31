//! fieldpicker - template field catalog browser
//!
//! CLI entry point: loads `.fields` definition files, prints catalog views and
//! tokens, and drives the taskpane against an in-memory document to show what
//! an insertion sequence produces.

mod cli;
mod config;

use clap::Parser;
use env_logger::Env;
use eyre::{bail, eyre, Context, Result};
use futures::executor::block_on;
use log::{info, warn};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use common::{Category, FieldName, LoopControl, PlaceholderToken, SortDirection};
use taskpane::helpers::EMPTY_LIST_MESSAGE;
use taskpane::host::Node;
use taskpane::insertion::field_code;
use taskpane::{update, InsertionStrategy, ListView, MemoryDocument, Msg, TaskpaneState};

use crate::cli::{Cli, Command};
use crate::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::init_from_env(Env::default().default_filter_or(level));

    let config = Config::load(cli.config.as_ref()).wrap_err("Failed to load configuration")?;

    match cli.command {
        Command::Catalog {
            source,
            category,
            filter,
            descending,
            json,
        } => cmd_catalog(&config, &source, category, filter, descending, json),
        Command::Token {
            field,
            category,
            loop_control,
        } => cmd_token(field, category, loop_control),
        Command::Fragment { token } => {
            println!("{}", field_code::package(&PlaceholderToken::literal(token)));
            Ok(())
        }
        Command::Insert {
            source,
            items,
            strategy,
            clean,
            json,
        } => cmd_insert(&config, &source, &items, strategy, clean, json),
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).wrap_err_with(|| format!("Failed to read {}", path.display()))
}

/// Loads `source` into a fresh taskpane, failing on the notice a parse error raises.
fn load_state(
    state: &mut TaskpaneState,
    document: &mut MemoryDocument,
    source: &Path,
) -> Result<()> {
    let msg = Msg::LoadCatalog {
        source_name: source.display().to_string(),
        source: read_source(source)?,
    };
    block_on(update(state, document, msg))?;
    if let Some(notice) = state.notice.take() {
        bail!("Failed to load {}: {}", source.display(), notice);
    }
    Ok(())
}

fn cmd_catalog(
    config: &Config,
    source: &Path,
    category: Option<Category>,
    filter: String,
    descending: bool,
    json: bool,
) -> Result<()> {
    let mut props = config.taskpane;
    if descending {
        props.initial_sort = SortDirection::Descending;
    }
    let mut state = TaskpaneState::new(props);
    let mut document = MemoryDocument::new();
    load_state(&mut state, &mut document, source)?;
    state.view.filter_text = filter;

    let categories = match category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };

    let mut views = BTreeMap::new();
    for category in categories {
        state.view.active_category = category;
        let names: Option<Vec<String>> = match state.list_view() {
            ListView::NoFields => None,
            ListView::Fields(fields) => Some(fields.iter().map(|f| f.to_string()).collect()),
        };
        views.insert(category, names);
    }

    if json {
        let flat: BTreeMap<String, Vec<String>> = views
            .into_iter()
            .map(|(category, names)| (category.to_string(), names.unwrap_or_default()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&flat)?);
        return Ok(());
    }

    for (category, names) in views {
        println!("[{}] {}", category.code(), category.label());
        match names {
            None => println!("  ({})", EMPTY_LIST_MESSAGE),
            Some(names) => {
                for name in names {
                    println!("  {}", name);
                }
            }
        }
    }
    Ok(())
}

fn cmd_token(
    field: Option<String>,
    category: Option<Category>,
    loop_control: Option<LoopControl>,
) -> Result<()> {
    let token = match (loop_control, field) {
        (Some(control), _) => PlaceholderToken::loop_control(control),
        (None, Some(raw)) => {
            let field = FieldName::parse(&raw)
                .ok_or_else(|| eyre!("'{}' is not a usable field name", raw))?;
            let category = category.unwrap_or_else(|| field.category());
            PlaceholderToken::for_field(&field, category)
        }
        (None, None) => bail!("Give a field name or --loop"),
    };
    println!("{}", token);
    Ok(())
}

/// Commands an author would issue to insert `item`: switch to the field's tab,
/// then choose it. `:foreach` and `:end` choose the loop controls.
fn item_commands(state: &TaskpaneState, item: &str) -> Result<Vec<Msg>> {
    match item {
        ":foreach" => Ok(vec![Msg::ChooseControlToken(LoopControl::Open)]),
        ":end" => Ok(vec![Msg::ChooseControlToken(LoopControl::Close)]),
        _ => {
            let field = FieldName::parse(item)
                .ok_or_else(|| eyre!("'{}' is not a usable field name", item))?;
            let category = field.category();
            if !state.catalog.fields(category).contains(&field) {
                warn!("{} is not in the loaded catalog", field);
            }
            Ok(vec![Msg::ChangeCategory(category), Msg::ChooseField(field)])
        }
    }
}

fn cmd_insert(
    config: &Config,
    source: &Path,
    items: &[String],
    strategy: Option<InsertionStrategy>,
    clean: bool,
    json: bool,
) -> Result<()> {
    let mut props = config.taskpane;
    if let Some(strategy) = strategy {
        props.strategy = strategy;
    }
    let mut state = TaskpaneState::new(props);
    let mut document = MemoryDocument::new();
    load_state(&mut state, &mut document, source)?;

    block_on(async {
        for item in items {
            for msg in item_commands(&state, item)? {
                update(&mut state, &mut document, msg).await?;
            }
        }
        if clean {
            update(&mut state, &mut document, Msg::CleanUp).await?;
            if let Some(notice) = state.notice.take() {
                info!("{}", notice);
            }
        }
        Ok::<(), eyre::Report>(())
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(document.nodes())?);
        return Ok(());
    }

    println!("{}", document.plain_text());
    for node in document.nodes() {
        match node {
            Node::FieldCode(field) => {
                println!("  field-code {}", field.merge_token().unwrap_or(&field.instruction))
            }
            Node::Region(region) => println!("  region #{} tag={}", region.id, region.tag),
            Node::Text { .. } => {}
        }
    }
    Ok(())
}

#![forbid(unsafe_code)]

//! List-tending commands: add, remove, enable/disable, mark, list, stats,
//! import, export. Each loads the stored list, applies one change, and
//! persists it.

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;

use lunchwheel_core::{Item, RecencyRule, eligible, model::validate_new_name};
use lunchwheel_store::FileStore;

use crate::error::{AppError, Result};

#[derive(Debug, Args)]
pub struct NameArgs {
    /// Item name (the unique key).
    pub name: String,
}

#[derive(Debug, Args)]
pub struct PathArgs {
    /// JSON file to read or write.
    pub path: PathBuf,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show eligibility under this recency window (days).
    #[arg(long)]
    pub exclude_days: Option<u32>,
}

fn unknown_name(name: &str) -> AppError {
    AppError::InvalidArgument {
        message: format!("no item named {name:?}"),
    }
}

fn rule_for(exclude_days: Option<u32>) -> RecencyRule {
    match exclude_days {
        None | Some(0) => RecencyRule::None,
        Some(days) => RecencyRule::ExcludeWithinDays(days),
    }
}

pub fn run_add(store: &FileStore, args: &NameArgs) -> Result<()> {
    let mut items = store.load_items();
    validate_new_name(&items, &args.name)?;
    let item = Item::new(&args.name)?;
    let name = item.name.clone();
    items.push(item);
    store.save_items(&items)?;
    println!("added {name:?}");
    Ok(())
}

pub fn run_remove(store: &FileStore, args: &NameArgs) -> Result<()> {
    let mut items = store.load_items();
    let before = items.len();
    items.retain(|i| i.name != args.name);
    if items.len() == before {
        return Err(unknown_name(&args.name));
    }
    store.save_items(&items)?;
    println!("removed {:?}", args.name);
    Ok(())
}

pub fn run_toggle(store: &FileStore, args: &NameArgs, enabled: bool) -> Result<()> {
    let mut items = store.load_items();
    let item = items
        .iter_mut()
        .find(|i| i.name == args.name)
        .ok_or_else(|| unknown_name(&args.name))?;
    item.enabled = enabled;
    store.save_items(&items)?;
    println!(
        "{} {:?}",
        if enabled { "enabled" } else { "disabled" },
        args.name
    );
    Ok(())
}

pub fn run_mark(store: &FileStore, args: &NameArgs) -> Result<()> {
    let mut items = store.load_items();
    let item = items
        .iter_mut()
        .find(|i| i.name == args.name)
        .ok_or_else(|| unknown_name(&args.name))?;
    item.mark_chosen(Utc::now());
    store.save_items(&items)?;
    println!("marked {:?} as chosen today", args.name);
    Ok(())
}

pub fn run_list(store: &FileStore, args: &ListArgs) -> Result<()> {
    let items = store.load_items();
    if items.is_empty() {
        println!("no items yet — `lunchwheel add <name>` to get started");
        return Ok(());
    }
    let rule = rule_for(args.exclude_days);
    let now = Utc::now();
    let eligible_names: Vec<String> = eligible(&items, rule, now)
        .into_iter()
        .map(|i| i.name)
        .collect();

    let width = items
        .iter()
        .map(|i| i.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("name".len());
    println!("{:width$}  last chosen  on wheel", "name");
    for item in &items {
        let last = item
            .last_chosen_at
            .map_or_else(|| "—".to_string(), |d| d.format("%Y-%m-%d").to_string());
        let status = if !item.enabled {
            "off"
        } else if eligible_names.iter().any(|n| *n == item.name) {
            "yes"
        } else {
            "cooling down"
        };
        println!("{:width$}  {last:11}  {status}", item.name);
    }
    print_stats_line(&items, rule);
    Ok(())
}

pub fn run_stats(store: &FileStore) -> Result<()> {
    let items = store.load_items();
    print_stats_line(&items, RecencyRule::None);
    Ok(())
}

fn print_stats_line(items: &[Item], rule: RecencyRule) {
    let total = items.len();
    let enabled = items.iter().filter(|i| i.enabled).count();
    let eligible_count = eligible(items, rule, Utc::now()).len();
    println!("wheel list {eligible_count}/{enabled} (enabled {enabled}/{total})");
}

pub fn run_import(store: &FileStore, args: &PathArgs) -> Result<()> {
    let items = store.import_items(&args.path)?;
    store.save_items(&items)?;
    println!("imported {} items from {}", items.len(), args.path.display());
    Ok(())
}

pub fn run_export(store: &FileStore, args: &PathArgs) -> Result<()> {
    let items = store.load_items();
    store.export_items(&args.path, &items)?;
    println!("exported {} items to {}", items.len(), args.path.display());
    Ok(())
}

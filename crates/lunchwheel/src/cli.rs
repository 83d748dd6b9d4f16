#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use lunchwheel_store::FileStore;

use crate::commands::{
    ListArgs, NameArgs, PathArgs, run_add, run_export, run_import, run_list, run_mark,
    run_remove, run_stats, run_toggle,
};
use crate::error::Result;
use crate::spin_view::{SpinArgs, run_spin};

#[derive(Debug, Parser)]
#[command(
    name = "lunchwheel",
    about = "Spin a wheel to decide where to eat",
    version
)]
pub struct Cli {
    /// Path of the stored item list.
    #[arg(long, global = true, default_value = "places.json")]
    pub store: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Spin the wheel interactively.
    Spin(SpinArgs),

    /// Add an item to the list.
    Add(NameArgs),

    /// Remove an item from the list.
    Remove(NameArgs),

    /// Put an item back on the wheel.
    Enable(NameArgs),

    /// Keep an item off the wheel without removing it.
    Disable(NameArgs),

    /// Mark an item as chosen today.
    Mark(NameArgs),

    /// Show the list with last-chosen dates and eligibility.
    List(ListArgs),

    /// One-line list summary.
    Stats,

    /// Replace the list with a JSON file (rejected wholesale if malformed).
    Import(PathArgs),

    /// Write the list as pretty JSON.
    Export(PathArgs),
}

pub fn run_from_env() -> Result<()> {
    run(Cli::parse())
}

pub fn run(cli: Cli) -> Result<()> {
    let store = FileStore::new(cli.store);
    match cli.command {
        Commands::Spin(args) => run_spin(&store, args),
        Commands::Add(args) => run_add(&store, &args),
        Commands::Remove(args) => run_remove(&store, &args),
        Commands::Enable(args) => run_toggle(&store, &args, true),
        Commands::Disable(args) => run_toggle(&store, &args, false),
        Commands::Mark(args) => run_mark(&store, &args),
        Commands::List(args) => run_list(&store, &args),
        Commands::Stats => run_stats(&store),
        Commands::Import(args) => run_import(&store, &args),
        Commands::Export(args) => run_export(&store, &args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn store_flag_is_accepted_after_the_subcommand() {
        let cli = Cli::try_parse_from(["lunchwheel", "stats", "--store", "/tmp/x.json"]).unwrap();
        assert_eq!(cli.store, PathBuf::from("/tmp/x.json"));
    }

    #[test]
    fn spin_accepts_filter_and_seed() {
        let cli = Cli::try_parse_from([
            "lunchwheel",
            "spin",
            "--exclude-days",
            "3",
            "--seed",
            "42",
        ])
        .unwrap();
        let Commands::Spin(args) = cli.command else {
            panic!("expected spin");
        };
        assert_eq!(args.exclude_days, Some(3));
        assert_eq!(args.seed, Some(42));
    }
}

//! worldseed — seed the bundled world dataset into SQLite
//!
//! This binary loads the countries/states/cities reference dataset bundled
//! with `worldseed-core`, applies an activation policy from a JSON config
//! file, and bulk-inserts the result into a SQLite database.
//!
//! Usage examples
//! --------------
//!
//! - Show dataset record counts
//!   $ worldseed stats
//!
//! - Check a policy against the dataset without writing anything
//!   $ worldseed --config policy.json check
//!
//! - Seed into a fresh database
//!   $ worldseed --config policy.json seed --db world.db
//!
//! - Re-seed, clearing the three tables first
//!   $ worldseed seed --db world.db --refresh
//!
//! A policy file looks like:
//!
//! ```json
//! {
//!   "insert_activations_only": true,
//!   "countries": { "only": { "iso2": ["US", "DE"] }, "chunk_len": 50 },
//!   "states":    { "default_active": true, "chunk_len": 200 },
//!   "cities":    { "default_active": true, "chunk_len": 200 }
//! }
//! ```
//!
//! Use `--data-dir <dir>` to point at a full dataset (for example the
//! upstream countries-states-cities JSON exports) instead of the trimmed
//! bundled one.
mod args;
mod sqlite;

use crate::args::{CliArgs, Commands};
use crate::sqlite::SqliteStore;
use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::Write as _;
use worldseed_core::{
    ActiveIdSets, MemoryStore, SeedPolicy, SeedProgress, SeedReport, Seeder, Table, WorldData,
};

/// Prints one line per entity kind with a dot per completed chunk.
#[derive(Default)]
struct ConsoleProgress;

impl SeedProgress for ConsoleProgress {
    fn batch_start(&mut self, table: Table, total: usize) {
        print!("Seeding {table} ({total} records) ");
        let _ = std::io::stdout().flush();
    }

    fn batch_advance(&mut self, _table: Table) {
        print!(".");
        let _ = std::io::stdout().flush();
    }

    fn batch_finish(&mut self, _table: Table) {
        println!(" done");
    }
}

fn load_policy(path: Option<&str>) -> anyhow::Result<SeedPolicy> {
    match path {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening policy file {path}"))?;
            serde_json::from_reader(file).with_context(|| format!("parsing policy file {path}"))
        }
        None => Ok(SeedPolicy::default()),
    }
}

fn print_report(report: &SeedReport) {
    println!("Seeded rows:");
    println!("  Countries: {}", report.countries);
    println!("  States: {}", report.states);
    println!("  Cities: {}", report.cities);
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = CliArgs::parse();

    let custom;
    let data: &WorldData = match args.data_dir.as_deref() {
        Some(dir) => {
            custom = WorldData::load_from_dir(dir);
            &custom
        }
        None => WorldData::load(),
    };

    let policy = load_policy(args.config.as_deref())?;

    match args.command {
        Commands::Stats => {
            let stats = data.stats();
            println!("Dataset statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  States: {}", stats.states);
            println!("  Cities: {}", stats.cities);
        }

        Commands::Check => {
            policy.ensure_codes_valid(&data.countries)?;

            let sets = ActiveIdSets::build(&policy, &data.countries);
            let active_countries = data
                .countries
                .iter()
                .filter(|c| policy.country_active(&c.iso2, &c.iso3))
                .count();
            let active_states = data
                .states
                .iter()
                .filter(|s| sets.dependent_active(s.country_id, policy.states.default_active))
                .count();
            let active_cities = data
                .cities
                .iter()
                .filter(|c| sets.dependent_active(c.country_id, policy.cities.default_active))
                .count();

            println!("Policy is valid.");
            println!(
                "  Countries: {active_countries} of {} active",
                data.countries.len()
            );
            println!("  States: {active_states} of {} active", data.states.len());
            println!("  Cities: {active_cities} of {} active", data.cities.len());
            if policy.insert_activations_only && policy.has_restriction() {
                println!("  insert_activations_only: inactive rows will be skipped entirely");
            }
        }

        Commands::Seed { db, refresh, dry_run } => {
            let seeder = Seeder::new(data, &policy);

            if dry_run {
                let mut store = MemoryStore::new();
                let report = seeder.seed(&mut store, &mut ConsoleProgress)?;
                println!("(dry run, nothing written)");
                print_report(&report);
                return Ok(());
            }

            let mut store = SqliteStore::open(&db)?;
            if refresh {
                store.refresh()?;
            }
            let report = seeder.seed(&mut store, &mut ConsoleProgress)?;
            print_report(&report);
        }
    }

    Ok(())
}

use clap::{Parser, Subcommand};

/// CLI arguments for worldseed
#[derive(Debug, Parser)]
#[command(
    name = "worldseed",
    version,
    about = "Seed the bundled countries/states/cities dataset into SQLite with an activation policy"
)]
pub struct CliArgs {
    /// Directory with countries/states/cities JSON files (default: bundled dataset)
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<String>,

    /// Path to a JSON policy file (default: everything active, chunks 50/200/200)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show record counts for the dataset
    Stats,

    /// Validate the policy against the dataset and show what would activate
    Check,

    /// Seed the dataset into a SQLite database
    Seed {
        /// Path to the SQLite database file
        #[arg(long = "db")]
        db: String,

        /// Drop and recreate the countries/states/cities tables first
        #[arg(short = 'R', long = "refresh")]
        refresh: bool,

        /// Run against an in-memory store and only print the report
        #[arg(long = "dry-run")]
        dry_run: bool,
    },
}

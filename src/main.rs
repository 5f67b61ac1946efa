//! # Eden KB CLI (`ekb`)
//!
//! The `ekb` binary is the operator interface for the Eden knowledge-base
//! corpus. It provides commands for validating a corpus regeneration,
//! inspecting its contents, and migrating it into the SQLite row set that
//! downstream indexing consumes.
//!
//! ## Usage
//!
//! ```bash
//! ekb --config ./config/ekb.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `ekb init` | Create the SQLite database and run schema migrations |
//! | `ekb validate` | Run the data-quality suite against the corpus file |
//! | `ekb stats` | Print corpus totals and a per-book breakdown |
//! | `ekb get <id>` | Print a single document by id |
//! | `ekb list` | List documents with optional filters |
//! | `ekb load` | Migrate the corpus into SQLite |
//! | `ekb export` | Export the SQLite row set back out as JSON |
//!
//! ## Examples
//!
//! ```bash
//! # Validate a fresh corpus regeneration, failing on any regression
//! ekb validate --config ./config/ekb.toml
//!
//! # Snapshot the current placeholder counts as the baseline
//! ekb validate --write-baseline --config ./config/ekb.toml
//!
//! # Show everything the extractor failed to pull out of Job
//! ekb list --book job --missing --config ./config/ekb.toml
//!
//! # Migrate into SQLite and round-trip back out
//! ekb init && ekb load && ekb export --output out.json
//! ```

mod books;
mod config;
mod corpus;
mod db;
mod export;
mod get;
mod list;
mod load;
mod migrate;
mod models;
mod stats;
mod validate;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Eden KB CLI — loader, validator, and exporter for the Eden assistant's
/// knowledge-base corpus.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/ekb.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "ekb",
    about = "Eden KB — loader, validator, and exporter for the Eden knowledge-base corpus",
    version,
    long_about = "Eden KB manages the Eden assistant's generated knowledge corpus: an ordered \
    JSON array of per-chapter documents produced by an upstream PDF extraction pipeline. \
    It validates the corpus against its data contract, reports extraction defects without \
    modifying them, and migrates the records into a SQLite row set for downstream indexing."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/ekb.toml`. Corpus, database, and validation
    /// settings are read from this file.
    #[arg(long, global = true, default_value = "./config/ekb.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Initialize the database schema.
    ///
    /// Creates the SQLite database file and all required tables
    /// (documents, corpus_meta). This command is idempotent — running it
    /// multiple times is safe.
    Init,

    /// Run the data-quality suite against the corpus file.
    ///
    /// Checks id uniqueness, field presence, category consistency, id/title
    /// correspondence, canon coverage, and extraction-defect markers.
    /// Structural violations are errors; content-quality findings are
    /// warnings. Exits non-zero on errors.
    Validate {
        /// Treat warnings as failures.
        #[arg(long)]
        strict: bool,

        /// Snapshot the current per-book placeholder counts to the
        /// configured baseline file instead of checking against it.
        #[arg(long)]
        write_baseline: bool,
    },

    /// Print corpus totals and a per-book breakdown.
    ///
    /// Shows document counts, missing-content counts, and chapter coverage
    /// against the 66-book canon.
    Stats,

    /// Print a single document by id.
    ///
    /// Prints the document's metadata, keywords, data-quality status, and
    /// full content.
    Get {
        /// Document id, e.g. `bible-genesis-1`.
        id: String,
    },

    /// List documents with optional filters.
    List {
        /// Only documents from this book slug (e.g. `genesis`, `song-of-songs`).
        #[arg(long)]
        book: Option<String>,

        /// Only documents whose content is the extraction placeholder.
        #[arg(long)]
        missing: bool,

        /// Maximum number of rows to print.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Migrate the corpus into SQLite.
    ///
    /// Replaces the `documents` table with the corpus contents in one
    /// transaction, hashing each record's content for regeneration diffing.
    /// Refuses a corpus with duplicate ids.
    Load {
        /// Show counts without writing to the database.
        #[arg(long)]
        dry_run: bool,

        /// Maximum number of documents to load.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Export the SQLite row set back out as JSON.
    ///
    /// Emits the same five-field record array the corpus file uses, in load
    /// order, so load-then-export reproduces the corpus exactly.
    Export {
        /// Output file path. Writes to stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Init => {
            migrate::run_migrations(&cfg).await?;
            println!("Database initialized successfully.");
        }
        Commands::Validate {
            strict,
            write_baseline,
        } => {
            validate::run_validate(&cfg, strict, write_baseline)?;
        }
        Commands::Stats => {
            stats::run_stats(&cfg)?;
        }
        Commands::Get { id } => {
            get::run_get(&cfg, &id)?;
        }
        Commands::List {
            book,
            missing,
            limit,
        } => {
            list::run_list(&cfg, book, missing, limit)?;
        }
        Commands::Load { dry_run, limit } => {
            load::run_load(&cfg, dry_run, limit).await?;
        }
        Commands::Export { output } => {
            export::run_export(&cfg, output.as_deref()).await?;
        }
    }

    Ok(())
}

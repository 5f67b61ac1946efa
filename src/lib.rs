//! # Eden KB
//!
//! Loader, validator, and exporter for the Eden assistant's knowledge-base
//! corpus.
//!
//! The corpus is a generated JSON artifact: an ordered array of knowledge
//! documents (id, title, content, category, keywords), one per Bible
//! chapter, produced by an upstream PDF extraction pipeline. That pipeline
//! is imperfect — some chapters carry a missing-content placeholder instead
//! of text, others carry leaked running heads or OCR spacing glitches — and
//! this crate treats those defects as part of the data contract: it detects
//! and reports them, it never rewrites them.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐    ┌─────────────┐    ┌──────────┐
//! │ corpus JSON  │───▶│ load + hash │───▶│  SQLite  │
//! │ (generated)  │    │             │    │ row set  │
//! └──────┬───────┘    └─────────────┘    └────┬─────┘
//!        │                                    │
//!        ▼                                    ▼
//!  validate / stats                      export JSON
//!  get / list
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! ekb validate                  # run the data-quality suite
//! ekb stats                     # per-book coverage overview
//! ekb init                      # create the SQLite schema
//! ekb load                      # migrate the corpus into SQLite
//! ekb export --output out.json  # round-trip the row set back to JSON
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | The knowledge-document data model |
//! | [`books`] | Canonical 66-book table for coverage reporting |
//! | [`corpus`] | JSON corpus loading |
//! | [`validate`] | Data-quality suite and placeholder baseline |
//! | [`stats`] | Corpus overview and per-book breakdown |
//! | [`get`] | Single-document retrieval |
//! | [`list`] | Filtered corpus listing |
//! | [`load`] | Corpus-to-SQLite migration |
//! | [`export`] | SQLite-to-JSON export |
//! | [`db`] | Database connection |
//! | [`migrate`] | Schema migrations |

pub mod books;
pub mod config;
pub mod corpus;
pub mod db;
pub mod export;
pub mod get;
pub mod list;
pub mod load;
pub mod migrate;
pub mod models;
pub mod stats;
pub mod validate;

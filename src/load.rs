//! Corpus-to-SQLite migration.
//!
//! Loads the JSON corpus into the `documents` row set that downstream
//! indexing consumes. The corpus is replaced whole-of-file upstream, so the
//! load replaces the table contents in one transaction rather than merging.
//! Each record gets a SHA-256 content hash for diffing regenerations, and
//! every run is logged in `corpus_meta`.

use anyhow::{bail, Result};
use sha2::{Digest, Sha256};
use std::collections::HashSet;

use crate::config::Config;
use crate::corpus::Corpus;
use crate::db;

pub async fn run_load(config: &Config, dry_run: bool, limit: Option<usize>) -> Result<()> {
    let corpus = Corpus::load(&config.corpus.path)?;

    // The primary key would silently collapse duplicate ids; refuse instead.
    let mut seen: HashSet<&str> = HashSet::with_capacity(corpus.len());
    for doc in corpus.documents() {
        if !seen.insert(doc.id.as_str()) {
            bail!(
                "corpus contains duplicate id '{}' — run `ekb validate` and fix the corpus first",
                doc.id
            );
        }
    }

    let mut documents = corpus.documents();
    if let Some(lim) = limit {
        documents = &documents[..documents.len().min(lim)];
    }

    let missing_count = documents.iter().filter(|d| d.is_placeholder()).count() as u64;

    if dry_run {
        println!("load {} (dry-run)", corpus.source_path().display());
        println!("  documents: {}", documents.len());
        println!("  missing content: {}", missing_count);
        return Ok(());
    }

    let pool = db::connect(config).await?;
    let now = chrono::Utc::now().timestamp();

    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM documents").execute(&mut *tx).await?;

    for (seq, doc) in documents.iter().enumerate() {
        let mut hasher = Sha256::new();
        hasher.update(doc.content.as_bytes());
        let content_hash = format!("{:x}", hasher.finalize());

        let keywords_json = serde_json::to_string(&doc.keywords)?;

        sqlx::query(
            r#"
            INSERT INTO documents (seq, id, title, content, category, keywords_json, content_hash, loaded_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(seq as i64)
        .bind(&doc.id)
        .bind(&doc.title)
        .bind(&doc.content)
        .bind(&doc.category)
        .bind(&keywords_json)
        .bind(&content_hash)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    sqlx::query(
        "INSERT INTO corpus_meta (source_path, document_count, missing_count, loaded_at) VALUES (?, ?, ?, ?)",
    )
    .bind(corpus.source_path().display().to_string())
    .bind(documents.len() as i64)
    .bind(missing_count as i64)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    println!("load {}", corpus.source_path().display());
    println!("  documents: {}", documents.len());
    println!("  missing content: {}", missing_count);
    println!("  database: {}", config.db.path.display());
    println!("ok");

    pool.close().await;
    Ok(())
}

//! Export the SQLite row set back out as JSON.
//!
//! Produces the same five-field record array the corpus file uses, ordered
//! by load sequence, so a corpus → `load` → `export` round trip reproduces
//! the collection exactly. Useful for handing the row set to consumers that
//! want the JSON shape, and for verifying a load.

use anyhow::Result;
use sqlx::Row;
use std::path::Path;

use crate::config::Config;
use crate::db;
use crate::models::KnowledgeDocument;

/// Export loaded documents as a JSON array.
///
/// If `output` is `Some`, writes to that file path. Otherwise writes to
/// stdout for piping.
pub async fn run_export(config: &Config, output: Option<&Path>) -> Result<()> {
    let pool = db::connect(config).await?;

    let rows = sqlx::query(
        "SELECT id, title, content, category, keywords_json \
         FROM documents ORDER BY seq",
    )
    .fetch_all(&pool)
    .await?;

    let mut documents: Vec<KnowledgeDocument> = Vec::with_capacity(rows.len());
    for row in &rows {
        let keywords_json: String = row.get("keywords_json");
        let keywords: Vec<String> = serde_json::from_str(&keywords_json)?;

        documents.push(KnowledgeDocument {
            id: row.get("id"),
            title: row.get("title"),
            content: row.get("content"),
            category: row.get("category"),
            keywords,
        });
    }

    let doc_count = documents.len();
    let json = serde_json::to_string_pretty(&documents)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &json)?;
            eprintln!("Exported {} documents to {}", doc_count, path.display());
        }
        None => {
            println!("{}", json);
        }
    }

    pool.close().await;
    Ok(())
}

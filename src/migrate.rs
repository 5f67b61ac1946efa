use anyhow::Result;

use crate::config::Config;
use crate::db;

pub async fn run_migrations(config: &Config) -> Result<()> {
    let pool = db::connect(config).await?;

    // Documents table. `seq` preserves the corpus's authored order; the five
    // corpus fields are stored as-is, keywords as a JSON array string.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            seq INTEGER NOT NULL UNIQUE,
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            category TEXT NOT NULL,
            keywords_json TEXT NOT NULL DEFAULT '[]',
            content_hash TEXT NOT NULL,
            loaded_at INTEGER NOT NULL
        )
        "#,
    )
    .execute(&pool)
    .await?;

    // One row per load run, for auditing corpus regenerations.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS corpus_meta (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            source_path TEXT NOT NULL,
            document_count INTEGER NOT NULL,
            missing_count INTEGER NOT NULL,
            loaded_at INTEGER NOT NULL
        )
        "#,
    )
    .execute(&pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_documents_category ON documents(category)")
        .execute(&pool)
        .await?;

    pool.close().await;
    Ok(())
}

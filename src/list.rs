//! Corpus listing with filters.
//!
//! Enumerates records in authored order. `--book` narrows to one book slug,
//! `--missing` shows only extraction placeholders, `--limit` truncates.

use anyhow::Result;

use crate::config::Config;
use crate::corpus::Corpus;
use crate::models::DocumentId;

pub fn run_list(
    config: &Config,
    book: Option<String>,
    missing_only: bool,
    limit: Option<usize>,
) -> Result<()> {
    let corpus = Corpus::load(&config.corpus.path)?;

    let mut shown = 0usize;
    let mut matched = 0usize;

    println!("{:<26} {:<30} {:>8}  STATUS", "ID", "TITLE", "KEYWORDS");
    println!("{}", "-".repeat(76));

    for doc in corpus.documents() {
        if let Some(ref slug) = book {
            match DocumentId::parse(&doc.id) {
                Some(parsed) if parsed.book_slug == *slug => {}
                _ => continue,
            }
        }

        if missing_only && !doc.is_placeholder() {
            continue;
        }

        matched += 1;
        if let Some(lim) = limit {
            if shown >= lim {
                continue;
            }
        }
        shown += 1;

        let status = if doc.is_placeholder() {
            "missing"
        } else if doc.is_artifact_suspect() {
            "artifact"
        } else {
            "ok"
        };

        println!(
            "{:<26} {:<30} {:>8}  {}",
            doc.id,
            truncate(&doc.title, 30),
            doc.keywords.len(),
            status
        );
    }

    println!();
    if shown < matched {
        println!("{} of {} documents", shown, matched);
    } else {
        println!("{} documents", shown);
    }

    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max - 1).collect();
        format!("{}…", cut)
    }
}

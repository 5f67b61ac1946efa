//! Corpus statistics and health overview.
//!
//! Provides a quick summary of what the corpus holds: document counts,
//! missing-content counts, canon coverage, and a per-book breakdown. Used by
//! `ekb stats` to judge a corpus regeneration at a glance before loading it
//! anywhere.

use anyhow::Result;
use std::collections::HashSet;

use crate::books::{self, Book};
use crate::config::Config;
use crate::corpus::Corpus;
use crate::models::DocumentId;

/// Per-book breakdown of record and placeholder counts.
struct BookStats {
    book: &'static Book,
    doc_count: u64,
    missing_count: u64,
    chapters_present: u32,
}

/// Run the stats command: load the corpus and print a summary.
pub fn run_stats(config: &Config) -> Result<()> {
    let corpus = Corpus::load(&config.corpus.path)?;
    let groups = corpus.group_by_book();

    let mut per_book: Vec<BookStats> = Vec::with_capacity(books::BOOKS.len());
    let mut total_missing: u64 = 0;
    let mut total_present: u32 = 0;

    for book in books::BOOKS {
        let docs = groups.get(book.slug).map(Vec::as_slice).unwrap_or(&[]);

        let mut chapters: HashSet<u32> = HashSet::new();
        let mut missing = 0u64;
        for doc in docs {
            if let Some(parsed) = DocumentId::parse(&doc.id) {
                if parsed.chapter <= book.chapters {
                    chapters.insert(parsed.chapter);
                }
            }
            if doc.is_placeholder() {
                missing += 1;
            }
        }

        total_missing += missing;
        total_present += chapters.len() as u32;

        per_book.push(BookStats {
            book,
            doc_count: docs.len() as u64,
            missing_count: missing,
            chapters_present: chapters.len() as u32,
        });
    }

    // Records that belong to no canonical book (unknown slug or unparsed id).
    let known: HashSet<&str> = books::BOOKS.iter().map(|b| b.slug).collect();
    let stray_count = corpus
        .documents()
        .iter()
        .filter(|d| match DocumentId::parse(&d.id) {
            Some(parsed) => !known.contains(parsed.book_slug.as_str()),
            None => true,
        })
        .count();

    let total_chapters = books::total_chapters();

    println!("Eden KB — Corpus Stats");
    println!("======================");
    println!();
    println!("  Corpus:    {}", corpus.source_path().display());
    println!("  Size:      {}", format_bytes(corpus.byte_size()));
    println!();
    println!("  Documents: {}", corpus.len());
    println!(
        "  Missing:   {} ({}%)",
        total_missing,
        if corpus.is_empty() {
            0
        } else {
            total_missing * 100 / corpus.len() as u64
        }
    );
    println!(
        "  Coverage:  {} / {} chapters ({}%)",
        total_present,
        total_chapters,
        total_present * 100 / total_chapters
    );
    if stray_count > 0 {
        println!("  Stray:     {} records outside the canon", stray_count);
    }

    println!();
    println!("  By book:");
    println!(
        "  {:<18} {:>5} {:>9} {:>8} {:>9}",
        "BOOK", "DOCS", "EXPECTED", "MISSING", "COVERAGE"
    );
    println!("  {}", "-".repeat(54));

    for s in &per_book {
        println!(
            "  {:<18} {:>5} {:>9} {:>8} {:>8}%",
            s.book.name,
            s.doc_count,
            s.book.chapters,
            s.missing_count,
            s.chapters_present * 100 / s.book.chapters
        );
    }

    println!();
    Ok(())
}

/// Format a byte count as a human-readable string.
fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.2} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }
}

//! Corpus validation.
//!
//! The data-quality suite for the knowledge corpus. Structural invariants
//! (id uniqueness, field presence, category consistency, id/title
//! correspondence) are errors; content-quality findings (unknown books,
//! typesetting artifacts, non-lowercase keywords) are warnings. Content is
//! never modified — the corpus is the upstream extractor's output and its
//! defects are preserved verbatim, this module only reports them.
//!
//! Placeholder counts per book can be snapshotted to a baseline file.
//! A later run fails if any book's missing-content count grew, which catches
//! silent regressions between corpus regenerations.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use crate::books;
use crate::config::Config;
use crate::corpus::Corpus;
use crate::models::{chapter_in_title, DocumentId, KnowledgeDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One validation finding, attached to a document id or a book slug.
#[derive(Debug, Clone)]
pub struct Finding {
    pub severity: Severity,
    pub subject: String,
    pub message: String,
}

/// Outcome of validating a corpus.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub findings: Vec<Finding>,
    pub total_documents: usize,
    /// Placeholder record counts keyed by book slug. Records whose id does
    /// not parse are counted under `(unparsed)`.
    pub missing_by_book: BTreeMap<String, u64>,
    pub total_missing: u64,
    /// Distinct canonical chapters that have at least one record.
    pub chapters_present: u32,
}

impl ValidationReport {
    fn error(&mut self, subject: &str, message: String) {
        self.findings.push(Finding {
            severity: Severity::Error,
            subject: subject.to_string(),
            message,
        });
    }

    fn warning(&mut self, subject: &str, message: String) {
        self.findings.push(Finding {
            severity: Severity::Warning,
            subject: subject.to_string(),
            message,
        });
    }

    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }
}

/// Run every check against the document sequence.
pub fn validate_documents(
    documents: &[KnowledgeDocument],
    expected_category: &str,
) -> ValidationReport {
    let mut report = ValidationReport {
        total_documents: documents.len(),
        ..Default::default()
    };

    let mut seen_ids: HashSet<&str> = HashSet::with_capacity(documents.len());
    let mut present_chapters: HashSet<(&str, u32)> = HashSet::new();

    for (idx, doc) in documents.iter().enumerate() {
        let subject = if doc.id.is_empty() {
            format!("record #{}", idx)
        } else {
            doc.id.clone()
        };

        if doc.id.is_empty() {
            report.error(&subject, "id is empty".to_string());
        } else if !seen_ids.insert(doc.id.as_str()) {
            report.error(&subject, "duplicate id".to_string());
        }

        if doc.title.is_empty() {
            report.error(&subject, "title is empty".to_string());
        }
        if doc.content.is_empty() {
            report.error(&subject, "content is empty".to_string());
        }
        if doc.category.is_empty() {
            report.error(&subject, "category is empty".to_string());
        } else if doc.category != expected_category {
            report.error(
                &subject,
                format!(
                    "category is '{}', expected '{}'",
                    doc.category, expected_category
                ),
            );
        }

        if doc.keywords.is_empty() {
            report.error(&subject, "keywords list is empty".to_string());
        } else {
            if doc.keywords.iter().any(|k| k.trim().is_empty()) {
                report.error(&subject, "keywords contain an empty entry".to_string());
            }
            if let Some(kw) = doc.keywords.iter().find(|k| **k != k.to_lowercase()) {
                report.warning(&subject, format!("keyword '{}' is not lowercase", kw));
            }
        }

        let parsed = DocumentId::parse(&doc.id);
        match &parsed {
            None => {
                if !doc.id.is_empty() {
                    report.error(
                        &subject,
                        "id does not match bible-<book-slug>-<chapter>".to_string(),
                    );
                }
            }
            Some(did) => {
                match chapter_in_title(&doc.title) {
                    Some(n) if n == did.chapter => {}
                    Some(n) => report.error(
                        &subject,
                        format!("id names chapter {} but title says Chapter {}", did.chapter, n),
                    ),
                    None => report.error(
                        &subject,
                        format!("title '{}' has no 'Chapter <N>' label", doc.title),
                    ),
                }

                match books::find_by_slug(&did.book_slug) {
                    None => {
                        report.warning(&subject, format!("unknown book slug '{}'", did.book_slug))
                    }
                    Some(book) => {
                        if did.chapter > book.chapters {
                            report.warning(
                                &subject,
                                format!(
                                    "chapter {} is beyond {}'s canonical {} chapters",
                                    did.chapter, book.name, book.chapters
                                ),
                            );
                        } else {
                            present_chapters.insert((book.slug, did.chapter));
                        }
                    }
                }
            }
        }

        if doc.is_placeholder() {
            let slug = parsed
                .as_ref()
                .map(|d| d.book_slug.clone())
                .unwrap_or_else(|| "(unparsed)".to_string());
            *report.missing_by_book.entry(slug).or_insert(0) += 1;
            report.total_missing += 1;
        } else if doc.is_artifact_suspect() {
            report.warning(
                &subject,
                "content looks like a typesetting artifact, not chapter text".to_string(),
            );
        }
    }

    report.chapters_present = present_chapters.len() as u32;
    report
}

/// Per-book placeholder counts snapshotted from a known corpus build.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderBaseline {
    pub missing_by_book: BTreeMap<String, u64>,
}

pub fn load_baseline(path: &Path) -> Result<PlaceholderBaseline> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read baseline file: {}", path.display()))?;
    let baseline: PlaceholderBaseline = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse baseline file: {}", path.display()))?;
    Ok(baseline)
}

pub fn write_baseline(path: &Path, report: &ValidationReport) -> Result<()> {
    let baseline = PlaceholderBaseline {
        missing_by_book: report.missing_by_book.clone(),
    };
    let json = serde_json::to_string_pretty(&baseline)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write baseline file: {}", path.display()))?;
    Ok(())
}

/// Diff current placeholder counts against the snapshot. Growth in any book
/// is a regression error; shrinkage means chapters were recovered and only
/// calls for refreshing the snapshot.
pub fn apply_baseline(report: &mut ValidationReport, baseline: &PlaceholderBaseline) {
    let mut regressions = Vec::new();
    for (slug, &count) in &report.missing_by_book {
        let snapshot = baseline.missing_by_book.get(slug).copied().unwrap_or(0);
        if count > snapshot {
            regressions.push((slug.clone(), count, snapshot));
        }
    }
    for (slug, count, snapshot) in regressions {
        report.error(
            &slug,
            format!(
                "missing-content count grew: {} records (baseline {})",
                count, snapshot
            ),
        );
    }
}

/// CLI entry point for `ekb validate`.
pub fn run_validate(config: &Config, strict: bool, write_baseline_flag: bool) -> Result<()> {
    let corpus = Corpus::load(&config.corpus.path)?;
    let mut report = validate_documents(corpus.documents(), &config.corpus.category);

    let mut baseline_status = "not configured".to_string();
    if write_baseline_flag {
        let path = config.validation.baseline.as_ref().ok_or_else(|| {
            anyhow::anyhow!("cannot write baseline: no [validation] baseline path configured")
        })?;
        write_baseline(path, &report)?;
        baseline_status = format!("written to {}", path.display());
    } else if let Some(path) = &config.validation.baseline {
        if path.exists() {
            let baseline = load_baseline(path)?;
            apply_baseline(&mut report, &baseline);
            baseline_status = "checked".to_string();
        } else {
            baseline_status = format!("not found at {}", path.display());
        }
    }

    println!("validate {}", corpus.source_path().display());
    println!("  documents: {}", report.total_documents);
    println!("  missing content: {}", report.total_missing);
    println!(
        "  canon coverage: {} / {} chapters",
        report.chapters_present,
        books::total_chapters()
    );
    println!("  baseline: {}", baseline_status);
    println!("  errors: {}", report.error_count());
    println!("  warnings: {}", report.warning_count());

    if !report.findings.is_empty() {
        println!();
        for finding in &report.findings {
            let tag = match finding.severity {
                Severity::Error => "[error]",
                Severity::Warning => "[warn] ",
            };
            println!("  {} {}: {}", tag, finding.subject, finding.message);
        }
    }

    println!();

    let errors = report.error_count();
    let warnings = report.warning_count();
    if errors > 0 {
        anyhow::bail!("validation failed: {} error(s)", errors);
    }
    if strict && warnings > 0 {
        anyhow::bail!("validation failed (strict): {} warning(s)", warnings);
    }

    println!("ok");
    Ok(())
}

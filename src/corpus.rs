//! Corpus loading.
//!
//! Reads the JSON knowledge-base artifact produced by the upstream
//! extraction pipeline into an ordered, id-indexed [`Corpus`]. The corpus is
//! a value, not a service: once loaded it is read-only, and replacement is
//! whole-of-file (regenerate upstream, reload here).
//!
//! Loading validates shape only (field presence and types, via serde).
//! Semantic invariants — id uniqueness, id/title correspondence, category
//! consistency — are the validator's job, so a defective corpus still loads
//! and can be reported on. Duplicate ids keep their first occurrence in the
//! index while every record stays in the sequence.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::models::{DocumentId, KnowledgeDocument};

#[derive(Debug)]
pub struct Corpus {
    documents: Vec<KnowledgeDocument>,
    by_id: HashMap<String, usize>,
    source_path: PathBuf,
    byte_size: u64,
}

impl Corpus {
    /// Load a corpus from a JSON array file.
    pub fn load(path: &Path) -> Result<Corpus> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read corpus file: {}", path.display()))?;

        let documents: Vec<KnowledgeDocument> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse corpus file: {}", path.display()))?;

        Ok(Corpus::from_documents(
            documents,
            path.to_path_buf(),
            content.len() as u64,
        ))
    }

    fn from_documents(
        documents: Vec<KnowledgeDocument>,
        source_path: PathBuf,
        byte_size: u64,
    ) -> Corpus {
        let mut by_id = HashMap::with_capacity(documents.len());
        for (idx, doc) in documents.iter().enumerate() {
            by_id.entry(doc.id.clone()).or_insert(idx);
        }

        Corpus {
            documents,
            by_id,
            source_path,
            byte_size,
        }
    }

    /// All documents in authored order.
    pub fn documents(&self) -> &[KnowledgeDocument] {
        &self.documents
    }

    /// Look up a document by id. First occurrence wins for duplicates.
    pub fn get(&self, id: &str) -> Option<&KnowledgeDocument> {
        self.by_id.get(id).map(|&idx| &self.documents[idx])
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Path the corpus was loaded from.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Size of the corpus file in bytes.
    pub fn byte_size(&self) -> u64 {
        self.byte_size
    }

    /// Group documents by parsed book slug, preserving authored order within
    /// each group. Documents whose id does not parse are skipped; the
    /// validator reports those separately.
    pub fn group_by_book(&self) -> HashMap<String, Vec<&KnowledgeDocument>> {
        let mut groups: HashMap<String, Vec<&KnowledgeDocument>> = HashMap::new();
        for doc in &self.documents {
            if let Some(parsed) = DocumentId::parse(&doc.id) {
                groups.entry(parsed.book_slug).or_default().push(doc);
            }
        }
        groups
    }
}

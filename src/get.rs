//! Document retrieval by id.
//!
//! Fetches a single record from the corpus file and prints it in full,
//! including its data-quality status. Used by `ekb get`.

use anyhow::Result;

use crate::config::Config;
use crate::corpus::Corpus;

/// CLI entry point — looks up the id and prints the document.
pub fn run_get(config: &Config, id: &str) -> Result<()> {
    let corpus = Corpus::load(&config.corpus.path)?;

    let doc = match corpus.get(id) {
        Some(d) => d,
        None => {
            eprintln!("Error: document not found: {}", id);
            std::process::exit(1);
        }
    };

    let status = if doc.is_placeholder() {
        "missing (extraction placeholder)"
    } else if doc.is_artifact_suspect() {
        "artifact suspect"
    } else {
        "ok"
    };

    println!("--- Document ---");
    println!("id:       {}", doc.id);
    println!("title:    {}", doc.title);
    println!("category: {}", doc.category);
    println!("keywords: {}", doc.keywords.join(", "));
    println!("status:   {}", status);
    println!();

    println!("--- Content ---");
    println!("{}", doc.content);

    Ok(())
}

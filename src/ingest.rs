//! Conversion of stored documents into analyzable articles and papers
//!
//! Vector-store records carry loosely typed metadata. This is the boundary
//! where missing fields get their defaults, so everything handed to the
//! analytics engine is a fully populated [`Article`] or [`Paper`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{format_timestamp, Article, Paper};

/// Title used when a document has none
pub const DEFAULT_TITLE: &str = "No title";

/// Source used when a document has none
pub const DEFAULT_SOURCE: &str = "Unknown";

/// Metadata stored alongside a document's embedding
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub link: Option<String>,
    pub pub_date: Option<String>,
    pub content: Option<String>,
    pub source: Option<String>,
    pub categories: Option<Vec<String>>,
    pub authors: Option<Vec<String>>,

    /// `"paper"` for papers; anything else is an article
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// A record as returned by the vector store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredDocument {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub metadata: Option<DocumentMetadata>,
}

/// Articles and papers ready for analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub papers: Vec<Paper>,
}

impl Corpus {
    /// Total number of items
    pub fn len(&self) -> usize {
        self.articles.len() + self.papers.len()
    }

    /// Check if the corpus has no items
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty() && self.papers.is_empty()
    }
}

/// Accepted input file shapes
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InputFile {
    Corpus(Corpus),
    Documents(Vec<StoredDocument>),
}

/// Split stored documents into articles and papers, applying defaults
///
/// Documents without metadata are skipped. A missing publication date
/// becomes `now`.
pub fn split_documents(documents: Vec<StoredDocument>, now: DateTime<Utc>) -> Corpus {
    let fallback_date = format_timestamp(now);
    let mut corpus = Corpus::default();
    let mut skipped = 0usize;

    for doc in documents {
        let Some(meta) = doc.metadata else {
            tracing::debug!(id = %doc.id, "Skipping document without metadata");
            skipped += 1;
            continue;
        };

        let is_paper = meta.kind.as_deref() == Some("paper");
        let title = meta.title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let link = meta.link.unwrap_or_default();
        let pub_date = meta.pub_date.unwrap_or_else(|| fallback_date.clone());
        let content = meta.content.unwrap_or_default();
        let source = meta.source.unwrap_or_else(|| DEFAULT_SOURCE.to_string());
        let categories = meta.categories.unwrap_or_default();

        if is_paper {
            corpus.papers.push(Paper {
                title,
                link,
                pub_date,
                content,
                source,
                categories,
                authors: meta.authors.unwrap_or_default(),
            });
        } else {
            corpus.articles.push(Article {
                title,
                link,
                pub_date,
                content,
                source,
                categories,
            });
        }
    }

    tracing::info!(
        articles = corpus.articles.len(),
        papers = corpus.papers.len(),
        skipped,
        "Split stored documents"
    );

    corpus
}

/// Parse an input file: a corpus object or an array of stored documents
pub fn parse_corpus(json: &str, now: DateTime<Utc>) -> Result<Corpus> {
    match serde_json::from_str::<InputFile>(json)? {
        InputFile::Corpus(corpus) => Ok(corpus),
        InputFile::Documents(documents) => Ok(split_documents(documents, now)),
    }
}

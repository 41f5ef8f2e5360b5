//! Keyword catalog and whole-phrase keyword extraction
//!
//! Each catalog entry keeps its display label (e.g. `"Fine-tuning"`) and a
//! normalized matching key (`"fine tuning"`). Normalization lowercases and
//! turns every character that is neither alphanumeric nor whitespace into a
//! space, so `"Fine-tuning"`, `"fine tuning"` and `"FINE\ntuning"` all
//! compare equal once the text goes through the same normalization.
//!
//! Matching is whole-phrase on word boundaries with an optional trailing
//! plural `s`: `"RAGs"` counts as `RAG`, `"ChatGPT"` does not count as `GPT`.

use regex::Regex;
use std::collections::HashSet;

use crate::error::{Error, Result};

/// Default AI/ML keyword catalog, in display form
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "GPT",
    "LLM",
    "Large Language Model",
    "ChatGPT",
    "Gemini",
    "Claude",
    "OpenAI",
    "Anthropic",
    "Deep Learning",
    "Neural Network",
    "Machine Learning",
    "Computer Vision",
    "Natural Language Processing",
    "NLP",
    "Transformer",
    "Diffusion",
    "Stable Diffusion",
    "DALL-E",
    "Generative AI",
    "AI Agent",
    "Reinforcement Learning",
    "Multimodal",
    "RAG",
    "Vector Database",
    "Fine-tuning",
    "Prompt Engineering",
];

/// Normalize a phrase or a text for matching
pub fn normalize_phrase(text: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .to_lowercase();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A single catalog phrase
#[derive(Debug, Clone)]
pub struct KeywordEntry {
    label: String,
    key: String,
    pattern: Regex,
}

impl KeywordEntry {
    /// Build an entry from its display label
    ///
    /// Fails when the label has no alphanumeric content to match on.
    pub fn new(label: &str) -> Result<Self> {
        let key = normalize_phrase(label);
        if key.is_empty() {
            return Err(Error::InvalidKeyword(label.to_string()));
        }

        let words: Vec<String> = key.split(' ').map(regex::escape).collect();
        let pattern = format!(r"\b{}s?\b", words.join(r"\s+"));
        let pattern = Regex::new(&pattern)
            .map_err(|e| Error::with_source(format!("Invalid keyword pattern for {label:?}"), e))?;

        Ok(Self {
            label: label.trim().to_string(),
            key,
            pattern,
        })
    }

    /// Display label reported in results
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Normalized matching key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Check the entry against text that already went through [`normalize_phrase`]
    pub fn is_match_normalized(&self, normalized: &str) -> bool {
        self.pattern.is_match(normalized)
    }
}

/// Ordered keyword catalog
///
/// Labels are unique; the first occurrence of a repeated label wins.
#[derive(Debug, Clone)]
pub struct KeywordCatalog {
    entries: Vec<KeywordEntry>,
}

impl KeywordCatalog {
    /// Build a catalog from display labels, preserving their order
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for label in labels {
            let entry = KeywordEntry::new(label.as_ref())?;
            if seen.insert(entry.label.clone()) {
                entries.push(entry);
            }
        }

        Ok(Self { entries })
    }

    /// Catalog entries in order
    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Indices of the entries present in `text`, in catalog order
    pub fn match_indices(&self, text: &str) -> Vec<usize> {
        let normalized = normalize_phrase(text);
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_match_normalized(&normalized))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Labels of the entries present in `text`, in catalog order
    ///
    /// Presence is boolean: a phrase repeated in the text is reported once.
    pub fn extract(&self, text: &str) -> Vec<&str> {
        self.match_indices(text)
            .into_iter()
            .map(|idx| self.entries[idx].label())
            .collect()
    }
}

impl Default for KeywordCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().copied())
            .expect("default keyword catalog contains only matchable phrases")
    }
}

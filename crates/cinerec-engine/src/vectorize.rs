//! Tokenization and TF-IDF vectorization
//!
//! Turns each catalog entry's text into a weighted term vector comparable
//! to every other entry's vector. Weighting is term frequency times smoothed
//! inverse document frequency, idf = ln((1+N)/(1+df)) + 1, with each row
//! L2-normalized so cosine similarity reduces to a dot product.

use crate::error::{Error, Result};
use crate::stopwords::StopWords;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

// Alphanumeric runs of length >= 2; single-character tokens carry no signal
// and are dropped.
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{Alphabetic}\p{N}_]{2,}").expect("token pattern is valid"));

/// Normalize and split text into lowercase tokens.
///
/// Text is NFC-normalized first so composed and decomposed accent forms
/// (common in Spanish titles) produce identical tokens. Unexpected
/// characters are simply skipped; pathological input degrades to an empty
/// token stream, never a panic.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.nfc().collect::<String>().to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Vocabulary and L2-normalized TF-IDF weight matrix for one corpus
///
/// One row per document, one column per vocabulary term, row-major storage.
/// Read-only after construction; a changed corpus requires a full rebuild.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermVectorSpace {
    /// Term to column index
    vocabulary: HashMap<String, usize>,
    /// Column index to term, sorted order
    terms: Vec<String>,
    /// Row-major weight matrix, `rows * terms.len()` entries
    weights: Vec<f32>,
    /// Number of document rows
    rows: usize,
}

impl TermVectorSpace {
    /// Number of document rows.
    pub fn len(&self) -> usize {
        self.rows
    }

    /// Whether the space holds no documents.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Number of vocabulary terms (columns).
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Vocabulary terms in column order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Column index of `term`, if it is in the vocabulary.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Weight row for document `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`; use [`crate::similarity::scores`] for the
    /// checked path.
    pub fn row(&self, index: usize) -> &[f32] {
        let cols = self.terms.len();
        &self.weights[index * cols..(index + 1) * cols]
    }
}

/// Builds a [`TermVectorSpace`] from a corpus of text fields
///
/// Pure: the output is a deterministic function of the corpus and the
/// configured stop-word set. Columns are assigned in sorted term order so
/// identical corpora always produce identical matrices.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    stop_words: StopWords,
}

impl TfidfVectorizer {
    /// Vectorizer with the Spanish stop-word set, matching the upstream
    /// catalog's language.
    pub fn new() -> Self {
        Self {
            stop_words: StopWords::spanish(),
        }
    }

    /// Vectorizer with a custom stop-word set.
    pub fn with_stop_words(stop_words: StopWords) -> Self {
        Self { stop_words }
    }

    /// Build the vector space for an ordered corpus, one document per entry.
    ///
    /// Fails with [`Error::EmptyCorpus`] on a zero-length corpus. Documents
    /// consisting only of stop words (or empty strings) become exact zero
    /// rows, which is not an error; their similarity to everything is 0.
    pub fn fit<S: AsRef<str>>(&self, corpus: &[S]) -> Result<TermVectorSpace> {
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let documents: Vec<Vec<String>> = corpus
            .iter()
            .map(|text| {
                tokenize(text.as_ref())
                    .into_iter()
                    .filter(|token| !self.stop_words.contains(token))
                    .collect()
            })
            .collect();

        // Document frequency per term; BTreeMap keeps term order sorted so
        // column assignment is deterministic.
        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &documents {
            let mut seen: Vec<&str> = tokens.iter().map(String::as_str).collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let terms: Vec<String> = doc_freq.keys().map(|t| t.to_string()).collect();
        let vocabulary: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(col, term)| (term.clone(), col))
            .collect();

        let n_docs = documents.len();
        let cols = terms.len();
        let idf: Vec<f32> = terms
            .iter()
            .map(|term| {
                let df = doc_freq[term.as_str()];
                ((1.0 + n_docs as f32) / (1.0 + df as f32)).ln() + 1.0
            })
            .collect();

        let mut weights = vec![0.0f32; n_docs * cols];
        for (row, tokens) in documents.iter().enumerate() {
            let slot = &mut weights[row * cols..(row + 1) * cols];
            for token in tokens {
                let col = vocabulary[token.as_str()];
                slot[col] += idf[col];
            }

            let norm = slot.iter().map(|w| w * w).sum::<f32>().sqrt();
            if norm > 0.0 {
                for w in slot.iter_mut() {
                    *w /= norm;
                }
            }
        }

        debug!(
            documents = n_docs,
            terms = cols,
            "term vector space built"
        );

        Ok(TermVectorSpace {
            vocabulary,
            terms,
            weights,
            rows: n_docs,
        })
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

//! The corpus container
//!
//! A `Corpus` maps document labels to plain-text contents. Iteration order is
//! insertion order, labels are unique and non-empty, and every mutating
//! operation completes before the next one starts (single-threaded, caller
//! owned). Loading from files lives in the sibling loader modules; this file
//! is the container contract itself.

use std::collections::{BTreeSet, HashMap, HashSet};

use indexmap::IndexMap;
use rand::Rng;

use crate::config::CollisionPolicy;
use crate::corpus::paragraphs::{split_paragraphs, SplitOptions};
use crate::error::{CorpusError, Result};
use crate::tokenize::Tokenizer;

/// An ordered, label-keyed collection of text documents
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    docs: IndexMap<String, String>,
}

impl Corpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Get a document's content by label
    pub fn get(&self, label: &str) -> Result<&str> {
        self.docs
            .get(label)
            .map(String::as_str)
            .ok_or_else(|| CorpusError::DocNotFound {
                label: label.to_string(),
            })
    }

    pub fn contains(&self, label: &str) -> bool {
        self.docs.contains_key(label)
    }

    /// Insert a single document, honoring the collision policy.
    ///
    /// Overwriting keeps the label's original insertion position.
    pub fn insert(&mut self, label: impl Into<String>, content: impl Into<String>, policy: CollisionPolicy) -> Result<()> {
        let label = label.into();
        if label.is_empty() {
            return Err(CorpusError::InvalidArgument(
                "document labels must not be empty".to_string(),
            ));
        }
        if self.docs.contains_key(&label) && policy == CollisionPolicy::Fail {
            return Err(CorpusError::DuplicateLabel { label });
        }
        self.docs.insert(label, content.into());
        Ok(())
    }

    /// Insert a batch of documents atomically.
    ///
    /// Under `CollisionPolicy::Fail` every label is checked first, both
    /// against the existing corpus and within the batch itself; nothing is
    /// inserted unless the whole batch is clean.
    pub fn insert_all(&mut self, docs: Vec<(String, String)>, policy: CollisionPolicy) -> Result<()> {
        if docs.iter().any(|(label, _)| label.is_empty()) {
            return Err(CorpusError::InvalidArgument(
                "document labels must not be empty".to_string(),
            ));
        }
        if policy == CollisionPolicy::Fail {
            let mut seen: HashSet<&str> = HashSet::with_capacity(docs.len());
            for (label, _) in &docs {
                if self.docs.contains_key(label) || !seen.insert(label.as_str()) {
                    return Err(CorpusError::DuplicateLabel {
                        label: label.clone(),
                    });
                }
            }
        }
        for (label, content) in docs {
            self.docs.insert(label, content);
        }
        Ok(())
    }

    /// Remove a document by label, returning its content
    pub fn remove(&mut self, label: &str) -> Result<String> {
        // shift_remove keeps insertion order for the survivors
        self.docs
            .shift_remove(label)
            .ok_or_else(|| CorpusError::DocNotFound {
                label: label.to_string(),
            })
    }

    /// Labels in insertion order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.docs.keys().map(String::as_str)
    }

    /// `(label, content)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.docs.iter().map(|(l, c)| (l.as_str(), c.as_str()))
    }

    /// Per-document character counts (Unicode scalar values, not bytes),
    /// keyed by label in insertion order
    pub fn doc_lengths(&self) -> IndexMap<String, usize> {
        self.docs
            .iter()
            .map(|(l, c)| (l.clone(), c.chars().count()))
            .collect()
    }

    /// Set union of the distinct characters across every document
    pub fn unique_characters(&self) -> BTreeSet<char> {
        self.docs.values().flat_map(|c| c.chars()).collect()
    }

    // -------------------------------------------------------------------------
    // Character-level transforms (in place, chainable)
    // -------------------------------------------------------------------------

    /// Delete every occurrence of each given character from every document
    pub fn remove_characters(&mut self, chars: &[char]) -> &mut Self {
        for content in self.docs.values_mut() {
            content.retain(|c| !chars.contains(&c));
        }
        self
    }

    /// Keep only characters present in the whitelist
    pub fn filter_characters(&mut self, whitelist: &HashSet<char>) -> &mut Self {
        for content in self.docs.values_mut() {
            content.retain(|c| whitelist.contains(&c));
        }
        self
    }

    /// Substitute each occurrence of a mapped character with its replacement
    /// string (single character or longer)
    pub fn replace_characters(&mut self, mapping: &HashMap<char, String>) -> &mut Self {
        for content in self.docs.values_mut() {
            if content.chars().any(|c| mapping.contains_key(&c)) {
                let mut replaced = String::with_capacity(content.len());
                for c in content.chars() {
                    match mapping.get(&c) {
                        Some(target) => replaced.push_str(target),
                        None => replaced.push(c),
                    }
                }
                *content = replaced;
            }
        }
        self
    }

    /// Replace every document's content with `f(content)`. Labels are
    /// untouched.
    pub fn apply<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&str) -> String,
    {
        for content in self.docs.values_mut() {
            *content = f(content);
        }
        self
    }

    // -------------------------------------------------------------------------
    // Splitting and filtering
    // -------------------------------------------------------------------------

    /// Split every document into its paragraphs.
    ///
    /// Each paragraph becomes a new document labeled `{label}-{i}` (1-based),
    /// replacing the original. Document insertion order and paragraph order
    /// are preserved. A document with no boundary yields exactly one document
    /// (`label-1`, soft wraps joined); an empty document yields none and is
    /// dropped.
    pub fn split_by_paragraphs(&mut self, opts: SplitOptions) -> Result<&mut Self> {
        if opts.min_breaks == 0 {
            return Err(CorpusError::InvalidArgument(
                "paragraph boundary threshold must be at least 1".to_string(),
            ));
        }

        let mut split: IndexMap<String, String> = IndexMap::with_capacity(self.docs.len());
        for (label, content) in self.docs.drain(..) {
            let paragraphs = split_paragraphs(&content, opts.min_breaks);
            if paragraphs.is_empty() {
                tracing::debug!("dropping empty document '{label}' during paragraph split");
            }
            for (i, paragraph) in paragraphs.into_iter().enumerate() {
                split.insert(format!("{}-{}", label, i + 1), paragraph);
            }
        }
        self.docs = split;
        Ok(self)
    }

    /// Remove every document shorter than `n` characters (inclusive bound:
    /// length exactly `n` is kept)
    pub fn filter_by_min_length(&mut self, n: usize) -> &mut Self {
        self.docs.retain(|_, content| content.chars().count() >= n);
        self
    }

    /// Remove every document longer than `n` characters (inclusive bound:
    /// length exactly `n` is kept)
    pub fn filter_by_max_length(&mut self, n: usize) -> &mut Self {
        self.docs.retain(|_, content| content.chars().count() <= n);
        self
    }

    /// Sample `k` documents uniformly without replacement.
    ///
    /// Destructive: the corpus keeps only the sampled documents (in their
    /// original relative order), and the same pairs are returned as a new
    /// corpus. Pass a seeded `StdRng` for reproducible sampling.
    pub fn sample<R: Rng + ?Sized>(&mut self, k: usize, rng: &mut R) -> Result<Corpus> {
        if k > self.docs.len() {
            return Err(CorpusError::SampleTooLarge {
                requested: k,
                available: self.docs.len(),
            });
        }

        let picked: HashSet<usize> = rand::seq::index::sample(rng, self.docs.len(), k)
            .into_iter()
            .collect();

        // Filtering in iteration order keeps the survivors' insertion order
        let sampled: IndexMap<String, String> = self
            .docs
            .iter()
            .enumerate()
            .filter(|(i, _)| picked.contains(i))
            .map(|(_, (l, c))| (l.clone(), c.clone()))
            .collect();

        self.docs = sampled.clone();
        Ok(Corpus { docs: sampled })
    }

    // -------------------------------------------------------------------------
    // Collaborators
    // -------------------------------------------------------------------------

    /// Tokenize every document, returning `(label, tokens)` in iteration
    /// order. The tokenizer is an external collaborator; see
    /// [`crate::tokenize`].
    pub fn tokenize<T: Tokenizer>(&self, tokenizer: &T) -> Vec<(String, Vec<String>)> {
        self.docs
            .iter()
            .map(|(label, content)| (label.clone(), tokenizer.tokenize(content)))
            .collect()
    }
}

impl FromIterator<(String, String)> for Corpus {
    /// Build a corpus from `(label, content)` pairs. Later duplicates
    /// overwrite earlier ones; use [`Corpus::insert_all`] for policy control.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            docs: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}

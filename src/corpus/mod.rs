//! Document collections and their loaders
//!
//! The `Corpus` container maps labels to plain-text documents and supports
//! introspection, character-level transforms, paragraph splitting, length
//! filtering, and seedable sampling.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use textcorpus::{Corpus, LoadOptions};
//!
//! let corpus = Corpus::from_folder(&path, &LoadOptions::new())?;
//! println!("{} documents", corpus.len());
//!
//! let mut corpus = corpus;
//! corpus
//!     .remove_characters(&['\t'])
//!     .split_by_paragraphs(SplitOptions::default())?;
//! ```
//!
//! Loaders are grouped by source: file system ([`loader`]), CSV/TSV
//! ([`tabular`]), ZIP archives ([`archive`]), and the built-in dataset
//! registry ([`builtin`]). All of them share the label-format and
//! collision-policy contract from [`crate::config`] and are all-or-nothing.

pub mod archive;
pub mod builtin;
pub mod collection;
pub mod loader;
pub mod paragraphs;
pub mod tabular;


pub use builtin::{builtin_datasets, BUILTIN_DATASETS};
pub use collection::Corpus;
pub use paragraphs::{split_paragraphs, SplitOptions, DEFAULT_MIN_BREAKS};
pub use tabular::TabularOptions;

//! Built-in dataset registry
//!
//! A fixed, enumerable set of dataset names, each resolving to a ZIP archive
//! under a caller-supplied data directory. The registry only maps names to
//! local files; fetching the archives is outside this crate.

use std::path::Path;

use crate::config::LoadOptions;
use crate::corpus::tabular::TabularOptions;
use crate::corpus::Corpus;
use crate::error::{CorpusError, Result};

/// Known built-in dataset names
pub const BUILTIN_DATASETS: &[&str] = &[
    "news-articles-en",
    "parliament-speeches-de-sample",
    "novels-sample-en",
];

/// List the known built-in dataset names
pub fn builtin_datasets() -> &'static [&'static str] {
    BUILTIN_DATASETS
}

impl Corpus {
    /// Build a new corpus from a built-in dataset.
    ///
    /// The dataset must be one of [`BUILTIN_DATASETS`] and its archive must
    /// exist at `<data_dir>/<name>.zip`. An unknown name fails with
    /// `DatasetNotFound` before any file access.
    pub fn from_builtin(name: &str, data_dir: &Path, opts: &LoadOptions) -> Result<Corpus> {
        if !BUILTIN_DATASETS.contains(&name) {
            return Err(CorpusError::DatasetNotFound {
                name: name.to_string(),
            });
        }
        let path = data_dir.join(format!("{name}.zip"));
        tracing::info!("loading built-in dataset '{name}' from {}", path.display());
        Corpus::from_archive(&path, &TabularOptions::new(), opts)
    }
}

//! Error types for corpus loading and mutation
//!
//! Every fallible operation returns `Result<T, CorpusError>`. Bulk loaders
//! are all-or-nothing: an error from any source leaves the corpus untouched.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, CorpusError>;

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// Label absent on read or delete
    #[error("no document with label '{label}'")]
    DocNotFound { label: String },

    /// Built-in dataset name not in the registry
    #[error("unknown built-in dataset '{name}'")]
    DatasetNotFound { name: String },

    /// Unreadable path, missing file, or other file-system failure
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Archive could not be opened or a member could not be decoded
    #[error("malformed archive {path}: {reason}")]
    MalformedArchive { path: PathBuf, reason: String },

    /// Tabular file missing the configured columns or otherwise unparseable
    #[error("malformed tabular file {path}: {reason}")]
    MalformedTabular { path: PathBuf, reason: String },

    /// Caller passed an invalid parameter (zero paragraph threshold, bad column name, ...)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Requested sample size exceeds the document count
    #[error("sample size {requested} exceeds document count {available}")]
    SampleTooLarge { requested: usize, available: usize },

    /// Two sources produced the same label under `CollisionPolicy::Fail`
    #[error("duplicate document label '{label}'")]
    DuplicateLabel { label: String },
}

impl CorpusError {
    /// Wrap an I/O error with the path that produced it.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

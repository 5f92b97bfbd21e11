//! File-system loaders
//!
//! Populates a `Corpus` from a folder of plain-text files, a single file, or
//! an explicit file list.
//!
//! ```rust,ignore
//! let opts = LoadOptions::new().with_extensions(vec!["txt", "md"]);
//! let corpus = Corpus::from_folder(&path, &opts)?;
//! ```
//!
//! Every loader is all-or-nothing: all sources are read and all labels are
//! checked against the collision policy before the first document is
//! inserted, so a failed load leaves an existing corpus untouched.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::config::LoadOptions;
use crate::corpus::Corpus;
use crate::error::{CorpusError, Result};

impl Corpus {
    /// Build a new corpus from every matching file under `root`.
    ///
    /// The walk respects gitignore rules and skips hidden files, and the
    /// matched paths are sorted so label assignment is deterministic.
    pub fn from_folder(root: &Path, opts: &LoadOptions) -> Result<Corpus> {
        let mut corpus = Corpus::new();
        corpus.add_folder(root, opts)?;
        Ok(corpus)
    }

    /// Build a new corpus from a single file
    pub fn from_file(path: &Path, opts: &LoadOptions) -> Result<Corpus> {
        let mut corpus = Corpus::new();
        corpus.add_file(path, opts)?;
        Ok(corpus)
    }

    /// Build a new corpus from an explicit list of files
    pub fn from_files<P: AsRef<Path>>(paths: &[P], opts: &LoadOptions) -> Result<Corpus> {
        let mut corpus = Corpus::new();
        corpus.add_files(paths, opts)?;
        Ok(corpus)
    }

    /// Add every matching file under `root` to this corpus
    pub fn add_folder(&mut self, root: &Path, opts: &LoadOptions) -> Result<()> {
        let docs = read_folder(root, opts)?;
        tracing::info!("loaded {} documents from {}", docs.len(), root.display());
        self.insert_all(docs, opts.collision_policy)
    }

    /// Add a single file to this corpus
    pub fn add_file(&mut self, path: &Path, opts: &LoadOptions) -> Result<()> {
        self.add_files(&[path], opts)
    }

    /// Add an explicit list of files to this corpus.
    ///
    /// Listed paths are loaded regardless of the extension filter; labels
    /// fall back to the file stem since there is no common root.
    pub fn add_files<P: AsRef<Path>>(&mut self, paths: &[P], opts: &LoadOptions) -> Result<()> {
        let mut docs = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            let content = read_text(path)?;
            let label = opts.label_format.label_for(path, None);
            docs.push((label, content));
        }
        self.insert_all(docs, opts.collision_policy)
    }
}

/// Collect `(label, content)` pairs for every matching file under `root`
fn read_folder(root: &Path, opts: &LoadOptions) -> Result<Vec<(String, String)>> {
    if !root.is_dir() {
        return Err(CorpusError::io(
            root,
            std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        ));
    }

    let walker = WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .build();

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let io = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("walk failed"));
            CorpusError::io(root, io)
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !opts.should_include(ext) {
            continue;
        }
        paths.push(path.to_path_buf());
    }

    // Walk order is platform dependent; sort for stable labels
    paths.sort();

    let mut docs = Vec::with_capacity(paths.len());
    for path in paths {
        let content = read_text(&path)?;
        let label = opts.label_format.label_for(&path, Some(root));
        docs.push((label, content));
    }
    Ok(docs)
}

/// Read a file as UTF-8 text, attaching the path to any failure
pub(crate) fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| CorpusError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CollisionPolicy, LabelFormat};
    use std::fs;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_from_folder_with_relative_path_labels() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.txt", "alpha");
        write(dir.path(), "sub/b.txt", "beta");
        write(dir.path(), "notes.md", "ignored by extension filter");

        let corpus = Corpus::from_folder(dir.path(), &LoadOptions::new()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get("a").unwrap(), "alpha");
        assert_eq!(corpus.get("sub-b").unwrap(), "beta");
    }

    #[test]
    fn test_from_folder_sorted_label_order() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "b.txt", "2");
        write(dir.path(), "a.txt", "1");
        write(dir.path(), "c.txt", "3");

        let corpus = Corpus::from_folder(dir.path(), &LoadOptions::new()).unwrap();
        let labels: Vec<&str> = corpus.labels().collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_from_missing_folder_is_io_error() {
        let err = Corpus::from_folder(Path::new("/no/such/dir"), &LoadOptions::new()).unwrap_err();
        assert!(matches!(err, CorpusError::Io { .. }));
    }

    #[test]
    fn test_from_missing_file_is_io_error() {
        let err =
            Corpus::from_file(Path::new("/no/such/file.txt"), &LoadOptions::new()).unwrap_err();
        assert!(matches!(err, CorpusError::Io { .. }));
    }

    #[test]
    fn test_add_files_collision_fails_without_inserting() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "one/doc.txt", "first");
        write(dir.path(), "two/doc.txt", "second");

        let opts = LoadOptions::new().with_label_format(LabelFormat::Basename);
        let paths = [dir.path().join("one/doc.txt"), dir.path().join("two/doc.txt")];

        let mut corpus = Corpus::new();
        let err = corpus.add_files(&paths, &opts).unwrap_err();
        assert!(matches!(err, CorpusError::DuplicateLabel { .. }));
        // All-or-nothing: the clean first file was not inserted either
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_add_files_collision_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "one/doc.txt", "first");
        write(dir.path(), "two/doc.txt", "second");

        let opts = LoadOptions::new()
            .with_label_format(LabelFormat::Basename)
            .with_collision_policy(CollisionPolicy::Overwrite);
        let paths = [dir.path().join("one/doc.txt"), dir.path().join("two/doc.txt")];

        let corpus = Corpus::from_files(&paths, &opts).unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.get("doc").unwrap(), "second");
    }

    #[test]
    fn test_add_folder_into_existing_corpus() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.txt", "alpha");

        let mut corpus = Corpus::new();
        corpus
            .insert("manual", "hand-added", CollisionPolicy::Fail)
            .unwrap();
        corpus.add_folder(dir.path(), &LoadOptions::new()).unwrap();

        assert_eq!(corpus.len(), 2);
        let labels: Vec<&str> = corpus.labels().collect();
        assert_eq!(labels, vec!["manual", "a"]);
    }

    #[test]
    fn test_empty_extension_filter_loads_everything() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.txt", "alpha");
        write(dir.path(), "b.md", "beta");

        let opts = LoadOptions::new().with_extensions(vec![]);
        let corpus = Corpus::from_folder(dir.path(), &opts).unwrap();
        assert_eq!(corpus.len(), 2);
    }
}

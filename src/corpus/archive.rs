//! ZIP archive loader
//!
//! Treats an archive like a folder: text members become documents with labels
//! derived from their member paths, and `.csv`/`.tsv` members go through the
//! tabular contract (one document per row). Other members are skipped.

use std::io::Read;
use std::path::Path;

use zip::ZipArchive;

use crate::config::LoadOptions;
use crate::corpus::tabular::{parse_tabular, TabularOptions};
use crate::corpus::Corpus;
use crate::error::{CorpusError, Result};

impl Corpus {
    /// Build a new corpus from a ZIP archive
    pub fn from_archive(
        path: &Path,
        topts: &TabularOptions,
        opts: &LoadOptions,
    ) -> Result<Corpus> {
        let mut corpus = Corpus::new();
        corpus.add_archive(path, topts, opts)?;
        Ok(corpus)
    }

    /// Add every loadable member of a ZIP archive to this corpus.
    ///
    /// Text members pass the `LoadOptions` extension filter; tabular members
    /// (`.csv`, `.tsv`) are always parsed with `topts`. All-or-nothing like
    /// the other loaders: a malformed member fails the whole call.
    pub fn add_archive(
        &mut self,
        path: &Path,
        topts: &TabularOptions,
        opts: &LoadOptions,
    ) -> Result<()> {
        let file = std::fs::File::open(path).map_err(|e| CorpusError::io(path, e))?;
        let mut archive = ZipArchive::new(file).map_err(|e| CorpusError::MalformedArchive {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let malformed = |reason: String| CorpusError::MalformedArchive {
            path: path.to_path_buf(),
            reason,
        };

        // Member names in index order, so labels are as deterministic as the
        // archive itself
        let mut docs: Vec<(String, String)> = Vec::new();
        for i in 0..archive.len() {
            let mut member = archive
                .by_index(i)
                .map_err(|e| malformed(e.to_string()))?;
            if member.is_dir() {
                continue;
            }

            let member_path = Path::new(member.name()).to_path_buf();
            let ext = member_path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_ascii_lowercase();

            match ext.as_str() {
                "csv" | "tsv" => {
                    let mut content = String::new();
                    member
                        .read_to_string(&mut content)
                        .map_err(|e| malformed(format!("{}: {e}", member_path.display())))?;
                    let stem = member_path
                        .file_stem()
                        .map(|s| s.to_string_lossy().into_owned())
                        .unwrap_or_else(|| "tabular".to_string());
                    let delimiter = if ext == "tsv" { b'\t' } else { b',' };
                    let rows = parse_tabular(&content, &stem, delimiter, topts)
                        .map_err(|reason| malformed(format!("{}: {reason}", member_path.display())))?;
                    docs.extend(rows);
                }
                _ if opts.should_include(&ext) => {
                    let mut content = String::new();
                    member
                        .read_to_string(&mut content)
                        .map_err(|e| malformed(format!("{}: {e}", member_path.display())))?;
                    let label = opts.label_format.label_for_relative(&member_path);
                    docs.push((label, content));
                }
                _ => {
                    tracing::debug!("skipping archive member {}", member_path.display());
                }
            }
        }

        tracing::info!("loaded {} documents from {}", docs.len(), path.display());
        self.insert_all(docs, opts.collision_policy)
    }
}

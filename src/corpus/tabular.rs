//! Tabular loaders (CSV / TSV)
//!
//! Reads delimiter-separated files mapping an identifier column to a text
//! column, one document per row. Labels are `{file stem}-{id}` so rows from
//! different files cannot collide with each other by accident.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::LoadOptions;
use crate::corpus::Corpus;
use crate::error::{CorpusError, Result};

/// Options for tabular loading
///
/// ```rust,ignore
/// let topts = TabularOptions::new()
///     .with_id_column("doc_id")
///     .with_text_column("body");
///
/// let corpus = Corpus::from_tabular(&path, &topts, &LoadOptions::new())?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabularOptions {
    /// Header name of the identifier column
    #[serde(default = "default_id_column")]
    pub id_column: String,

    /// Header name of the text column
    #[serde(default = "default_text_column")]
    pub text_column: String,

    /// Field delimiter. `None` infers from the extension: `.tsv` is
    /// tab-separated, everything else comma-separated.
    #[serde(default)]
    pub delimiter: Option<u8>,
}

fn default_id_column() -> String {
    "id".to_string()
}

fn default_text_column() -> String {
    "text".to_string()
}

impl Default for TabularOptions {
    fn default() -> Self {
        Self {
            id_column: default_id_column(),
            text_column: default_text_column(),
            delimiter: None,
        }
    }
}

impl TabularOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_column(mut self, column: impl Into<String>) -> Self {
        self.id_column = column.into();
        self
    }

    pub fn with_text_column(mut self, column: impl Into<String>) -> Self {
        self.text_column = column.into();
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    fn delimiter_for(&self, path: &Path) -> u8 {
        self.delimiter.unwrap_or_else(|| {
            match path.extension().and_then(|e| e.to_str()) {
                Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
                _ => b',',
            }
        })
    }
}

impl Corpus {
    /// Build a new corpus from a tabular file
    pub fn from_tabular(path: &Path, topts: &TabularOptions, opts: &LoadOptions) -> Result<Corpus> {
        let mut corpus = Corpus::new();
        corpus.add_tabular(path, topts, opts)?;
        Ok(corpus)
    }

    /// Add one document per row of a tabular file to this corpus
    pub fn add_tabular(
        &mut self,
        path: &Path,
        topts: &TabularOptions,
        opts: &LoadOptions,
    ) -> Result<()> {
        let content = super::loader::read_text(path)?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "tabular".to_string());

        let docs = parse_tabular(&content, &stem, topts.delimiter_for(path), topts)
            .map_err(|reason| CorpusError::MalformedTabular {
                path: path.to_path_buf(),
                reason,
            })?;

        tracing::info!("loaded {} documents from {}", docs.len(), path.display());
        self.insert_all(docs, opts.collision_policy)
    }
}

/// Parse rows into `(label, content)` pairs. Kept separate from the
/// file-system read so archive members can reuse it on in-memory bytes.
pub(crate) fn parse_tabular(
    content: &str,
    stem: &str,
    delimiter: u8,
    topts: &TabularOptions,
) -> std::result::Result<Vec<(String, String)>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(content.as_bytes());

    let headers = reader.headers().map_err(|e| e.to_string())?.clone();
    let id_idx = headers
        .iter()
        .position(|h| h == topts.id_column)
        .ok_or_else(|| format!("missing id column '{}'", topts.id_column))?;
    let text_idx = headers
        .iter()
        .position(|h| h == topts.text_column)
        .ok_or_else(|| format!("missing text column '{}'", topts.text_column))?;

    let mut docs = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| format!("row {}: {e}", row + 1))?;
        let id = record
            .get(id_idx)
            .ok_or_else(|| format!("row {}: short record", row + 1))?;
        let text = record
            .get(text_idx)
            .ok_or_else(|| format!("row {}: short record", row + 1))?;
        docs.push((format!("{stem}-{id}"), text.to_string()));
    }
    Ok(docs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CSV_CONTENT: &str = "id,text\n1,first doc\n2,\"second, quoted\"\n";

    #[test]
    fn test_csv_loading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("speeches.csv");
        fs::write(&path, CSV_CONTENT).unwrap();

        let corpus =
            Corpus::from_tabular(&path, &TabularOptions::new(), &LoadOptions::new()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get("speeches-1").unwrap(), "first doc");
        assert_eq!(corpus.get("speeches-2").unwrap(), "second, quoted");
    }

    #[test]
    fn test_tsv_delimiter_inferred() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.tsv");
        fs::write(&path, "id\ttext\na\talpha text\n").unwrap();

        let corpus =
            Corpus::from_tabular(&path, &TabularOptions::new(), &LoadOptions::new()).unwrap();
        assert_eq!(corpus.get("data-a").unwrap(), "alpha text");
    }

    #[test]
    fn test_custom_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.csv");
        fs::write(&path, "doc_id,body,extra\nx,content here,junk\n").unwrap();

        let topts = TabularOptions::new()
            .with_id_column("doc_id")
            .with_text_column("body");
        let corpus = Corpus::from_tabular(&path, &topts, &LoadOptions::new()).unwrap();
        assert_eq!(corpus.get("table-x").unwrap(), "content here");
    }

    #[test]
    fn test_missing_column_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.csv");
        fs::write(&path, "id,body\n1,stuff\n").unwrap();

        let err = Corpus::from_tabular(&path, &TabularOptions::new(), &LoadOptions::new())
            .unwrap_err();
        assert!(matches!(err, CorpusError::MalformedTabular { .. }));
    }

    #[test]
    fn test_duplicate_row_ids_fail_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.csv");
        fs::write(&path, "id,text\n1,first\n1,second\n").unwrap();

        let err = Corpus::from_tabular(&path, &TabularOptions::new(), &LoadOptions::new())
            .unwrap_err();
        assert!(matches!(err, CorpusError::DuplicateLabel { .. }));
    }
}

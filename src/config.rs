//! Configuration for corpus loading
//!
//! Defines the `LoadOptions` builder, label formatting, and the collision
//! policy applied when two sources produce the same label.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CorpusError, Result};

/// How a source file path is turned into a document label
///
/// - `RelativePath`: path relative to the load root, extension stripped,
///   path separators replaced with `-` (default)
/// - `Basename`: file stem only
///
/// Both are deterministic for a given path. `Basename` can collapse distinct
/// files onto one label; what happens then is governed by `CollisionPolicy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelFormat {
    /// Normalized relative path (e.g. `sub/dir/doc.txt` -> `sub-dir-doc`)
    #[default]
    RelativePath,
    /// File stem only (e.g. `sub/dir/doc.txt` -> `doc`)
    Basename,
}

impl LabelFormat {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RelativePath => "relative-path",
            Self::Basename => "basename",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "relative-path" | "relative_path" | "path" => Some(Self::RelativePath),
            "basename" | "base" | "stem" => Some(Self::Basename),
            _ => None,
        }
    }

    /// Derive a label for `path`, relative to `root` when given.
    ///
    /// Falls back to the file stem when the path has no usable relative form
    /// (no root, or the path is not under it).
    pub fn label_for(&self, path: &Path, root: Option<&Path>) -> String {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        match self {
            Self::Basename => stem,
            Self::RelativePath => {
                let Some(rel) = root.and_then(|r| path.strip_prefix(r).ok()) else {
                    return stem;
                };
                Self::join_relative(rel, stem)
            }
        }
    }

    /// Derive a label for a path that is already relative (e.g. an archive
    /// member name).
    pub fn label_for_relative(&self, rel: &Path) -> String {
        let stem = rel
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| rel.to_string_lossy().into_owned());
        match self {
            Self::Basename => stem,
            Self::RelativePath => Self::join_relative(rel, stem),
        }
    }

    fn join_relative(rel: &Path, stem: String) -> String {
        let mut parts: Vec<String> = rel
            .parent()
            .into_iter()
            .flat_map(|p| p.components())
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        parts.push(stem);
        parts.join("-")
    }
}

/// What to do when a load produces a label that already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Fail the whole load with `DuplicateLabel` (default)
    #[default]
    Fail,
    /// Replace the existing document's content
    Overwrite,
}

/// Options for bulk loading documents into a corpus
///
/// Use the builder pattern to configure:
/// - Which file extensions to include when walking a folder
/// - How labels are derived from paths
/// - What happens on label collisions
///
/// ```rust,ignore
/// let opts = LoadOptions::new()
///     .with_extensions(vec!["txt", "md"])
///     .with_label_format(LabelFormat::Basename)
///     .with_collision_policy(CollisionPolicy::Overwrite);
///
/// let corpus = Corpus::from_folder(&path, &opts)?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadOptions {
    /// File extensions to include when walking a folder (without dots).
    /// Empty means every file the walker yields.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Label derivation from source paths
    #[serde(default)]
    pub label_format: LabelFormat,

    /// Behavior on duplicate labels
    #[serde(default)]
    pub collision_policy: CollisionPolicy,
}

fn default_extensions() -> Vec<String> {
    vec!["txt".to_string()]
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            label_format: LabelFormat::default(),
            collision_policy: CollisionPolicy::default(),
        }
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set file extensions to include (empty = all files)
    pub fn with_extensions(mut self, extensions: Vec<&str>) -> Self {
        self.extensions = extensions.into_iter().map(String::from).collect();
        self
    }

    /// Set how labels are derived from paths
    pub fn with_label_format(mut self, format: LabelFormat) -> Self {
        self.label_format = format;
        self
    }

    /// Set the duplicate-label policy
    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    /// Check whether a file extension passes the filter
    pub fn should_include(&self, ext: &str) -> bool {
        self.extensions.is_empty() || self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }

    /// Load options from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CorpusError::io(path, e))?;
        toml::from_str(&content)
            .map_err(|e| CorpusError::InvalidArgument(format!("bad options file {path:?}: {e}")))
    }

    /// Load from `./textcorpus.toml` when present, defaults otherwise
    pub fn load_default() -> Result<Self> {
        let local_path = Path::new("textcorpus.toml");
        if local_path.exists() {
            return Self::load(local_path);
        }
        Ok(Self::default())
    }

    /// Save options to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CorpusError::InvalidArgument(format!("unserializable options: {e}")))?;
        std::fs::write(path, content).map_err(|e| CorpusError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_label_format_from_str() {
        assert_eq!(LabelFormat::from_str("basename"), Some(LabelFormat::Basename));
        assert_eq!(LabelFormat::from_str("path"), Some(LabelFormat::RelativePath));
        assert_eq!(LabelFormat::from_str("invalid"), None);
    }

    #[test]
    fn test_relative_path_label() {
        let root = PathBuf::from("/data/corpus");
        let path = root.join("sub/dir/doc.txt");
        let label = LabelFormat::RelativePath.label_for(&path, Some(&root));
        assert_eq!(label, "sub-dir-doc");
    }

    #[test]
    fn test_relative_path_label_at_root() {
        let root = PathBuf::from("/data/corpus");
        let path = root.join("doc.txt");
        let label = LabelFormat::RelativePath.label_for(&path, Some(&root));
        assert_eq!(label, "doc");
    }

    #[test]
    fn test_basename_label_ignores_directories() {
        let root = PathBuf::from("/data/corpus");
        let path = root.join("sub/dir/doc.txt");
        let label = LabelFormat::Basename.label_for(&path, Some(&root));
        assert_eq!(label, "doc");
    }

    #[test]
    fn test_label_without_root_falls_back_to_stem() {
        let path = PathBuf::from("/somewhere/else/notes.md");
        let label = LabelFormat::RelativePath.label_for(&path, None);
        assert_eq!(label, "notes");
    }

    #[test]
    fn test_options_toml_round_trip() {
        let toml_str = r#"
extensions = ["txt", "md"]
label_format = "basename"
collision_policy = "overwrite"
"#;
        let opts: LoadOptions = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.extensions, vec!["txt", "md"]);
        assert_eq!(opts.label_format, LabelFormat::Basename);
        assert_eq!(opts.collision_policy, CollisionPolicy::Overwrite);
    }

    #[test]
    fn test_extension_filter() {
        let opts = LoadOptions::new().with_extensions(vec!["txt"]);
        assert!(opts.should_include("txt"));
        assert!(opts.should_include("TXT"));
        assert!(!opts.should_include("md"));

        let all = LoadOptions::new().with_extensions(vec![]);
        assert!(all.should_include("anything"));
    }
}

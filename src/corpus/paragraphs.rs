//! Paragraph boundary detection
//!
//! A paragraph boundary is a run of at least `min_breaks` consecutive line
//! breaks (default 2). Shorter runs are soft line wraps and are joined with a
//! single space when the paragraph text is reconstructed. Splitting is a pure
//! function over `&str` so it can be tested without a corpus.

/// Default number of consecutive line breaks that mark a paragraph boundary
pub const DEFAULT_MIN_BREAKS: usize = 2;

/// Options for paragraph splitting
#[derive(Debug, Clone, Copy)]
pub struct SplitOptions {
    /// Minimum run of consecutive line breaks that separates paragraphs.
    /// Must be at least 1.
    pub min_breaks: usize,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            min_breaks: DEFAULT_MIN_BREAKS,
        }
    }
}

impl SplitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_breaks(mut self, min_breaks: usize) -> Self {
        self.min_breaks = min_breaks;
        self
    }
}

/// Split `text` into paragraphs at runs of `min_breaks`-or-more line breaks.
///
/// CRLF sequences are treated as single line breaks. Break runs below the
/// threshold are replaced with a single space inside the paragraph. Empty
/// paragraphs (produced by leading, trailing, or adjacent boundary runs) are
/// dropped, so an empty input yields an empty vector.
///
/// Callers must ensure `min_breaks >= 1`; the corpus-level operation
/// validates this before delegating here.
pub fn split_paragraphs(text: &str, min_breaks: usize) -> Vec<String> {
    debug_assert!(min_breaks >= 1);

    let normalized = text.replace("\r\n", "\n");

    let mut paragraphs = Vec::new();
    let mut current = String::new();

    let mut rest = normalized.as_str();
    while !rest.is_empty() {
        match rest.find('\n') {
            None => {
                current.push_str(rest);
                break;
            }
            Some(pos) => {
                current.push_str(&rest[..pos]);
                rest = &rest[pos..];
                let run = rest.bytes().take_while(|&b| b == b'\n').count();
                rest = &rest[run..];

                if run >= min_breaks {
                    if !current.is_empty() {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                } else if !current.is_empty() && !rest.is_empty() {
                    // Soft wrap inside a paragraph
                    current.push(' ');
                }
            }
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs
}

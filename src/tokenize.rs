//! Tokenizer seam
//!
//! The corpus only ever hands a tokenizer full document texts and collects
//! per-document token lists back, so real NLP tokenizers can be plugged in
//! behind this trait. The bundled `WhitespaceTokenizer` is deliberately
//! simple and exists for tests and quick inspection.

/// A pure text -> tokens mapping
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Splits on Unicode whitespace, keeping everything else as-is
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }
}

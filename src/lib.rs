//! textcorpus library
//!
//! Load, inspect, and transform plain-text document collections.

pub mod config;
pub mod corpus;
pub mod error;
pub mod tokenize;

pub use config::{CollisionPolicy, LabelFormat, LoadOptions};
pub use corpus::{Corpus, SplitOptions, TabularOptions};
pub use error::{CorpusError, Result};

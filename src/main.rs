//! textcorpus CLI
//!
//! Inspect and transform plain-text document collections from the command
//! line.
//!
//! ```bash
//! # Document count, per-document lengths, unique characters (JSON)
//! textcorpus info ./my-texts --extensions txt,md
//!
//! # Split every document by paragraph and list the resulting labels
//! textcorpus split ./my-texts --min-breaks 2
//!
//! # Reproducible random sample
//! textcorpus sample ./my-texts -k 5 --seed 42
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

use textcorpus::{CollisionPolicy, Corpus, LabelFormat, LoadOptions, SplitOptions};

#[derive(Parser)]
#[command(name = "textcorpus")]
#[command(about = "Load, inspect, and transform plain-text document collections")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// File extensions to include (comma-separated, e.g. "txt,md")
    #[arg(short, long, value_delimiter = ',', global = true)]
    extensions: Option<Vec<String>>,

    /// Use file stems as labels instead of normalized relative paths
    #[arg(long, global = true)]
    basename_labels: bool,

    /// Overwrite on duplicate labels instead of failing
    #[arg(long, global = true)]
    overwrite_collisions: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print document count, per-document lengths, and the unique-character set
    Info {
        /// Folder of plain-text files
        path: PathBuf,
    },

    /// Split every document by paragraph boundary and list the results
    Split {
        /// Folder of plain-text files
        path: PathBuf,

        /// Consecutive line breaks that mark a paragraph boundary
        #[arg(long, default_value = "2")]
        min_breaks: usize,
    },

    /// Sample k documents uniformly without replacement
    Sample {
        /// Folder of plain-text files
        path: PathBuf,

        /// Number of documents to sample
        #[arg(short)]
        k: usize,

        /// Seed for reproducible sampling (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Serialize)]
struct InfoReport {
    documents: usize,
    lengths: Vec<(String, usize)>,
    unique_characters: BTreeSet<char>,
}

#[derive(Serialize)]
struct SplitReport {
    documents: usize,
    labels: Vec<String>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    // Start from ./textcorpus.toml when present, then apply CLI overrides
    let mut opts = LoadOptions::load_default()?;
    if let Some(exts) = &cli.extensions {
        let ext_refs: Vec<&str> = exts.iter().map(|s| s.as_str()).collect();
        opts = opts.with_extensions(ext_refs);
    }
    if cli.basename_labels {
        opts = opts.with_label_format(LabelFormat::Basename);
    }
    if cli.overwrite_collisions {
        opts = opts.with_collision_policy(CollisionPolicy::Overwrite);
    }

    match cli.command {
        Commands::Info { path } => {
            let corpus = Corpus::from_folder(&path, &opts)
                .with_context(|| format!("failed to load corpus from {path:?}"))?;
            let report = InfoReport {
                documents: corpus.len(),
                lengths: corpus.doc_lengths().into_iter().collect(),
                unique_characters: corpus.unique_characters(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Commands::Split { path, min_breaks } => {
            let mut corpus = Corpus::from_folder(&path, &opts)
                .with_context(|| format!("failed to load corpus from {path:?}"))?;
            corpus.split_by_paragraphs(SplitOptions::new().with_min_breaks(min_breaks))?;
            let report = SplitReport {
                documents: corpus.len(),
                labels: corpus.labels().map(String::from).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Commands::Sample { path, k, seed } => {
            let mut corpus = Corpus::from_folder(&path, &opts)
                .with_context(|| format!("failed to load corpus from {path:?}"))?;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let sampled = corpus.sample(k, &mut rng)?;
            let labels: Vec<String> = sampled.labels().map(String::from).collect();
            println!("{}", serde_json::to_string_pretty(&labels)?);
        }
    }

    Ok(())
}

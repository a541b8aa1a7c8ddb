//! # rapid_digest
//!
//! Extractive summarization of a pre-split document.
//!
//! Given a list of sentences, an optional title and optional weighted
//! keywords, the summarizer returns the subset of sentences that best
//! represents the document. Selection order is significance order.
//!
//! ## Features
//!
//! - **Lexicon-weighted similarity**: cosine over word sets, with rare words
//!   weighted above common ones
//! - **Centrality**: PageRank over the sentence similarity graph
//! - **Relevance**: title overlap, keyword strength and density, sentence
//!   length and position
//! - **Diversity**: Maximal Marginal Relevance keeps near-duplicates out
//! - **Parallel**: large documents fan similarity rows out over `rayon`
//!
//! ```no_run
//! use rapid_digest::{Keywords, Lexicon, Summarizer};
//! use std::sync::Arc;
//!
//! let lexicon = Arc::new(Lexicon::load("lexicon.txt")?);
//! let summarizer = Summarizer::new(lexicon);
//! let sentences = vec!["First sentence.", "Second sentence.", "Third one."];
//! let summary = summarizer.summarize(&sentences, "A title", &Keywords::default(), 1);
//! # Ok::<(), rapid_digest::DigestError>(())
//! ```

pub mod errors;
pub mod graph;
pub mod lexicon;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{DigestError, Result};
pub use lexicon::Lexicon;
pub use types::{
    Document, FactorWeights, KeywordDensityRule, Keywords, LengthScoring, SelectedSentence,
    SummarizerConfig, SummaryResult,
};

// Re-export main functionality
pub use graph::{builder::SimilarityMatrix, csr::CsrGraph};
pub use nlp::{splitter::split_sentences, tokenizer::Tokenizer};
pub use pagerank::{standard::StandardPageRank, PageRankResult};
pub use pipeline::{
    observer::{NoopObserver, PipelineObserver, StageRecorder, StageReport},
    runner::{summarize, Summarizer},
};
pub use summarizer::{
    keywords::keyword_weights, relevance::RelevanceScorer, selector::SentenceSelector,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

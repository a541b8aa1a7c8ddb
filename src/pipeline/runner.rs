//! Pipeline runner — runs the summarization stages in order.
//!
//! The [`Summarizer`] holds a validated configuration and a shared
//! [`Lexicon`]. Each call runs the stages in order:
//!
//! 1. Tokenize every sentence
//! 2. Build the pairwise similarity matrix
//! 3. Rank sentences by PageRank centrality
//! 4. Score relevance against title and keywords
//! 5. Combine, prune and select by MMR
//!
//! and notifies an optional [`PipelineObserver`] at each boundary. Calls
//! share nothing but the read-only lexicon, so one `Summarizer` can serve
//! many threads at once.

use crate::errors::Result;
use crate::graph::builder::SimilarityBuilder;
use crate::graph::csr::CsrGraph;
use crate::lexicon::Lexicon;
use crate::nlp::tokenizer::Tokenizer;
use crate::pagerank::standard::StandardPageRank;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, STAGE_CENTRALITY, STAGE_RELEVANCE,
    STAGE_SELECT, STAGE_SIMILARITY, STAGE_TOKENIZE,
};
use crate::summarizer::relevance::RelevanceScorer;
use crate::summarizer::selector::{combine_scores, SelectorConfig, SentenceSelector};
use crate::types::{Document, Keywords, SelectedSentence, SummarizerConfig, SummaryResult};
use rustc_hash::FxHashSet;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Extractive summarizer over a shared lexicon
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummarizerConfig,
    lexicon: Arc<Lexicon>,
}

impl Summarizer {
    /// Create a summarizer with the default configuration
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            config: SummarizerConfig::default(),
            lexicon,
        }
    }

    /// Create a summarizer with a custom configuration
    pub fn with_config(config: SummarizerConfig, lexicon: Arc<Lexicon>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, lexicon })
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Pick at most `summary_size` sentences, most representative first
    ///
    /// Returns the input unchanged when `summary_size` covers every
    /// sentence. The result can be shorter than requested when the
    /// remaining candidates are too redundant to add.
    pub fn summarize<S: AsRef<str>>(
        &self,
        sentences: &[S],
        title: &str,
        keywords: &Keywords,
        summary_size: usize,
    ) -> Vec<String> {
        if summary_size >= sentences.len() {
            return sentences.iter().map(|s| s.as_ref().to_string()).collect();
        }
        self.summarize_detailed(sentences, title, keywords, summary_size)
            .texts()
    }

    /// Summarize a [`Document`]
    pub fn summarize_document(&self, document: &Document, summary_size: usize) -> Vec<String> {
        self.summarize(
            &document.sentences,
            &document.title,
            &document.keywords,
            summary_size,
        )
    }

    /// Summarize and keep every selected sentence's scores
    pub fn summarize_detailed<S: AsRef<str>>(
        &self,
        sentences: &[S],
        title: &str,
        keywords: &Keywords,
        summary_size: usize,
    ) -> SummaryResult {
        self.summarize_observed(sentences, title, keywords, summary_size, &mut NoopObserver)
    }

    /// Summarize, notifying `observer` at every stage boundary
    pub fn summarize_observed<S: AsRef<str>>(
        &self,
        sentences: &[S],
        title: &str,
        keywords: &Keywords,
        summary_size: usize,
        observer: &mut impl PipelineObserver,
    ) -> SummaryResult {
        if summary_size >= sentences.len() {
            return unscored(sentences.iter().map(|s| s.as_ref()).enumerate());
        }

        let texts: Vec<&str> = sentences.iter().map(|s| s.as_ref()).collect();
        let n = texts.len();

        // Only the first occurrence of a repeated sentence may be selected
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let distinct: Vec<usize> = (0..n).filter(|&i| seen.insert(texts[i])).collect();

        if summary_size >= distinct.len() {
            return unscored(distinct.iter().map(|&i| (i, texts[i])));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sentences = n,
            duplicates = n - distinct.len(),
            summary_size,
            has_title = !title.is_empty(),
            keywords = keywords.len(),
            "summarizing"
        );

        // Stage 1: Tokenize
        let token_sets = {
            trace_stage!(STAGE_TOKENIZE);
            observer.on_stage_start(STAGE_TOKENIZE);
            let clock = StageClock::start();
            let token_sets = Tokenizer::new().tokenize_all(&texts);
            observer.on_stage_end(STAGE_TOKENIZE, &StageReport::new(clock.elapsed(), n));
            token_sets
        };

        // Stage 2: Similarity matrix
        let similarity = {
            trace_stage!(STAGE_SIMILARITY);
            observer.on_stage_start(STAGE_SIMILARITY);
            let clock = StageClock::start();
            let similarity = SimilarityBuilder::new(&self.lexicon)
                .with_parallel_threshold(self.config.parallel_threshold)
                .build(&token_sets);
            observer.on_stage_end(STAGE_SIMILARITY, &StageReport::new(clock.elapsed(), n * n));
            similarity
        };

        // Stage 3: Centrality
        let pagerank = {
            trace_stage!(STAGE_CENTRALITY);
            observer.on_stage_start(STAGE_CENTRALITY);
            let clock = StageClock::start();
            let graph = CsrGraph::from_matrix(&similarity);
            let pagerank = StandardPageRank::new()
                .with_damping(self.config.damping)
                .with_max_iterations(self.config.max_iterations)
                .with_threshold(self.config.convergence_threshold)
                .run(&graph);

            #[cfg(feature = "tracing")]
            tracing::debug!(
                edges = graph.num_edges(),
                sinks = graph.sink_nodes().len(),
                iterations = pagerank.iterations,
                converged = pagerank.converged,
                "centrality ranked"
            );

            observer.on_stage_end(
                STAGE_CENTRALITY,
                &StageReport::new(clock.elapsed(), graph.num_edges()),
            );
            pagerank
        };

        // Stage 4: Relevance
        let relevance = {
            trace_stage!(STAGE_RELEVANCE);
            observer.on_stage_start(STAGE_RELEVANCE);
            let clock = StageClock::start();
            let relevance = RelevanceScorer::new(&self.config, &self.lexicon).score_all(
                &texts,
                &token_sets,
                title,
                keywords,
            );
            observer.on_stage_end(STAGE_RELEVANCE, &StageReport::new(clock.elapsed(), n));
            relevance
        };

        // Stage 5: Combine and select
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let combined = combine_scores(&relevance, &pagerank.scores);
        let selector = SentenceSelector::with_config(SelectorConfig {
            lambda: self.config.lambda,
            candidate_multiplier: self.config.candidate_multiplier,
        });
        let selections =
            selector.select_among(&combined.scores, &similarity, &distinct, summary_size);
        observer.on_stage_end(
            STAGE_SELECT,
            &StageReport::new(clock.elapsed(), selections.len()),
        );

        #[cfg(feature = "tracing")]
        if selections.len() < summary_size {
            tracing::debug!(
                requested = summary_size,
                selected = selections.len(),
                "summary stopped early: no candidate with positive margin"
            );
        }

        let sentences = selections
            .into_iter()
            .map(|selection| {
                let i = selection.index;
                SelectedSentence {
                    text: texts[i].to_string(),
                    index: i,
                    relevance: relevance[i],
                    centrality: combined.scaled_centrality[i],
                    score: selection.score,
                    mmr: selection.mmr,
                }
            })
            .collect();

        SummaryResult {
            sentences,
            iterations: pagerank.iterations,
            converged: pagerank.converged,
        }
    }
}

/// Every sentence, in document order, with no scoring performed
fn unscored<'a>(sentences: impl Iterator<Item = (usize, &'a str)>) -> SummaryResult {
    SummaryResult {
        sentences: sentences
            .map(|(index, text)| SelectedSentence {
                text: text.to_string(),
                index,
                relevance: 0.0,
                centrality: 0.0,
                score: 0.0,
                mmr: 0.0,
            })
            .collect(),
        iterations: 0,
        converged: true,
    }
}

/// Summarize with the default configuration
pub fn summarize<S: AsRef<str>>(
    sentences: &[S],
    title: &str,
    keywords: &Keywords,
    summary_size: usize,
    lexicon: Arc<Lexicon>,
) -> Vec<String> {
    Summarizer::new(lexicon).summarize(sentences, title, keywords, summary_size)
}

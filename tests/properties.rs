//! Property tests for rapid_digest.

use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

use rapid_digest::graph::builder::similarity_matrix;
use rapid_digest::summarizer::quickselect::kth_largest;
use rapid_digest::summarizer::selector::combine_scores;
use rapid_digest::{CsrGraph, Keywords, Lexicon, StandardPageRank, Summarizer};

const VOCAB: &[&str] = &[
    "the", "market", "rally", "stocks", "fell", "bank", "rates", "rose", "Tuesday", "investors",
    "bond", "yields", "central", "inflation", "a", "of", "growth", "jobs",
];

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB), 1..10).prop_map(|words| {
        let mut s = words.join(" ");
        s.push('.');
        s
    })
}

fn document(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(sentence(), 0..max)
}

fn lexicon() -> Arc<Lexicon> {
    Arc::new(Lexicon::from_ranked_words(["the", "a", "of", "market", "rates"]))
}

fn keywords() -> Keywords {
    [("inflation".to_string(), 2.0), ("rates".to_string(), 1.0)]
        .into_iter()
        .collect()
}

// Similarity is symmetric and bounded.
proptest! {
    #[test]
    fn prop_similarity_symmetric_and_bounded(sentences in document(12)) {
        let matrix = similarity_matrix(&sentences, &lexicon());

        prop_assert_eq!(matrix.size(), sentences.len());
        prop_assert!(matrix.is_symmetric());
        for i in 0..matrix.size() {
            for j in 0..matrix.size() {
                let v = matrix.get(i, j);
                prop_assert!((0.0..=1.0).contains(&v), "sim({}, {}) = {}", i, j, v);
            }
        }
    }
}

// Centrality is a probability distribution.
proptest! {
    #[test]
    fn prop_centrality_sums_to_one(sentences in document(12)) {
        prop_assume!(!sentences.is_empty());
        let matrix = similarity_matrix(&sentences, &lexicon());
        let result = StandardPageRank::new().run(&CsrGraph::from_matrix(&matrix));

        let sum: f64 = result.scores.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "sum = {}", sum);
        prop_assert!(result.scores.iter().all(|&s| s >= 0.0));
    }
}

// A summary covering the whole document is the document.
proptest! {
    #[test]
    fn prop_identity_when_size_covers(sentences in document(10), extra in 0usize..5) {
        let summarizer = Summarizer::new(lexicon());
        let size = sentences.len() + extra;
        let summary = summarizer.summarize(&sentences, "market rally", &keywords(), size);
        prop_assert_eq!(summary, sentences);
    }
}

// Summaries are bounded, drawn from the input and never repeat.
proptest! {
    #[test]
    fn prop_summary_bounded_members_unique(
        sentences in document(16),
        size in 0usize..6,
        with_keywords in any::<bool>(),
    ) {
        prop_assume!(size < sentences.len());
        let summarizer = Summarizer::new(lexicon());
        let kw = if with_keywords { keywords() } else { Keywords::default() };
        let summary = summarizer.summarize(&sentences, "central bank rates", &kw, size);

        prop_assert!(summary.len() <= size);
        for s in &summary {
            prop_assert!(sentences.contains(s));
        }
        let distinct: HashSet<&String> = summary.iter().collect();
        prop_assert_eq!(distinct.len(), summary.len());
    }
}

// Summarization is deterministic.
proptest! {
    #[test]
    fn prop_deterministic(sentences in document(12), size in 1usize..4) {
        let summarizer = Summarizer::new(lexicon());
        let a = summarizer.summarize(&sentences, "bond yields", &keywords(), size);
        let b = summarizer.summarize(&sentences, "bond yields", &keywords(), size);
        prop_assert_eq!(a, b);
    }
}

// Parallel and sequential similarity agree.
proptest! {
    #[test]
    fn prop_parallel_matches_sequential(sentences in document(14), size in 1usize..4) {
        prop_assume!(size < sentences.len());
        let lex = lexicon();
        let sequential = Summarizer::new(Arc::clone(&lex));
        let parallel = Summarizer::with_config(
            rapid_digest::SummarizerConfig::default().with_parallel_threshold(1),
            lex,
        ).unwrap();

        prop_assert_eq!(
            sequential.summarize(&sentences, "jobs growth", &keywords(), size),
            parallel.summarize(&sentences, "jobs growth", &keywords(), size)
        );
    }
}

// k-th largest agrees with a full sort.
proptest! {
    #[test]
    fn prop_kth_largest_matches_sort(
        values in prop::collection::vec(-1.0e3f64..1.0e3, 1..64),
        k_seed in any::<usize>(),
    ) {
        let k = k_seed % values.len() + 1;
        let mut sorted = values.clone();
        sorted.sort_by(|a, b| b.total_cmp(a));
        prop_assert_eq!(kth_largest(&values, k), Some(sorted[k - 1]));
    }
}

// Combined scores are non-negative and rescaled centrality peaks at max relevance.
proptest! {
    #[test]
    fn prop_combined_scores_rescaled(
        pairs in prop::collection::vec((0.0f64..1.0, 0.001f64..1.0), 1..20),
    ) {
        let (relevance, centrality): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        let combined = combine_scores(&relevance, &centrality);

        prop_assert!(combined.scores.iter().all(|&s| s >= 0.0));
        let max_relevance = relevance.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let max_scaled = combined
            .scaled_centrality
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        if max_relevance > 0.0 {
            prop_assert!((max_scaled - max_relevance).abs() < 1e-9);
        }
    }
}

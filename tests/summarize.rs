//! End-to-end summarization tests.

use std::io::Write;
use std::sync::Arc;

use rapid_digest::{
    keyword_weights, split_sentences, Document, Keywords, Lexicon, RelevanceScorer, StageRecorder,
    Summarizer, SummarizerConfig,
};

const ARTICLE: &str = "The central bank raised interest rates on Tuesday. \
Officials said inflation remained too high for comfort. \
Mr. Alvarez, the bank's chair, expected rates to stay high through the year. \
Markets fell sharply after the announcement. \
A new bakery opened downtown with a line around the block. \
Economists had expected the bank to raise rates by a quarter point. \
Higher rates make mortgages and car loans more expensive. \
Some lawmakers criticized the decision, e.g. citing job losses. \
The bank will meet again in six weeks? \
Analysts expect inflation to ease slowly as rates bite.";

const REFERENCE: &str = "Inflation is the rate at which prices rise. Central banks \
raise interest rates to curb inflation. Higher interest rates slow borrowing.";

fn lexicon() -> Arc<Lexicon> {
    Arc::new(Lexicon::from_ranked_words([
        "the", "a", "to", "of", "and", "in", "on", "for", "with", "by", "said", "bank",
    ]))
}

#[test]
fn test_article_end_to_end() {
    let sentences = split_sentences(ARTICLE);
    assert_eq!(sentences.len(), 10);
    assert!(sentences[2].starts_with("Mr. Alvarez"));

    let lex = lexicon();
    let keywords = keyword_weights(REFERENCE, ["inflation", "rates", "interest"], &lex);
    assert!(keywords["inflation"] > 0.0);

    let summarizer = Summarizer::new(Arc::clone(&lex));
    let result = summarizer.summarize_detailed(
        &sentences,
        "Central bank raises interest rates",
        &keywords,
        3,
    );

    assert!(!result.is_empty());
    assert!(result.len() <= 3);
    assert!(result.converged);

    // The bakery sentence shares nothing with the title or keywords
    assert_ne!(result.sentences[0].index, 4);

    // Selection order is non-increasing in MMR for the first pick
    let first = &result.sentences[0];
    assert!(result.sentences.iter().all(|s| s.mmr <= first.mmr + 1e-12));

    for s in &result.sentences {
        assert_eq!(sentences[s.index], s.text);
        assert!(s.score >= 0.0);
    }
}

#[test]
fn test_document_order_view_is_sorted() {
    let sentences = split_sentences(ARTICLE);
    let result = Summarizer::new(lexicon()).summarize_detailed(
        &sentences,
        "interest rates",
        &Keywords::default(),
        4,
    );

    let ordered = result.in_document_order();
    let positions: Vec<usize> = ordered
        .iter()
        .map(|t| sentences.iter().position(|s| s == t).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn test_near_duplicates_not_both_selected() {
    let sentences = vec![
        "Rust compiles to fast native code without a garbage collector.",
        "Rust compiles to fast native code without any garbage collector.",
        "Cargo manages dependencies and builds for Rust projects.",
        "The borrow checker prevents data races at compile time.",
        "Many teams adopt Rust for systems programming work.",
    ];
    let summary = Summarizer::new(Arc::new(Lexicon::empty())).summarize(
        &sentences,
        "Rust compiles to fast native code",
        &Keywords::default(),
        2,
    );

    let both =
        summary.iter().any(|s| s == sentences[0]) && summary.iter().any(|s| s == sentences[1]);
    assert!(!both, "near-duplicates both selected: {summary:?}");
}

#[test]
fn test_repeated_sentences_scored_in_place() {
    let mut sentences = split_sentences(ARTICLE);
    sentences.insert(1, sentences[0].clone());
    sentences.insert(5, sentences[3].clone());

    let summarizer = Summarizer::new(lexicon());
    let title = "Central bank raises interest rates";
    let none = Keywords::default();
    let result = summarizer.summarize_detailed(&sentences, title, &none, 4);

    let scorer = RelevanceScorer::new(summarizer.config(), summarizer.lexicon());
    for s in &result.sentences {
        assert_ne!(s.index, 1);
        assert_ne!(s.index, 5);
        let expected = scorer.score_sentence(&s.text, title, &none, s.index, sentences.len());
        assert!((s.relevance - expected.total).abs() < 1e-12);
    }
}

#[test]
fn test_lexicon_file_and_config_file() {
    let dir = std::env::temp_dir().join(format!("rapid_digest_it_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let lexicon_path = dir.join("lexicon.txt");
    let mut file = std::fs::File::create(&lexicon_path).unwrap();
    writeln!(file, "the\na\nof\n\nbank").unwrap();
    drop(file);

    let config_path = dir.join("config.json");
    std::fs::write(
        &config_path,
        r#"{ "lambda": 0.8, "candidate_multiplier": 3, "length_scoring": "penalty" }"#,
    )
    .unwrap();

    let lexicon = Lexicon::load(&lexicon_path).unwrap();
    assert_eq!(lexicon.len(), 4);
    assert!((lexicon.importance("the") - 0.2).abs() < 1e-12);
    assert!((lexicon.importance("bank") - 0.8).abs() < 1e-12);

    let config = SummarizerConfig::from_json_file(&config_path).unwrap();
    assert_eq!(config.candidate_multiplier, 3);

    let summarizer = Summarizer::with_config(config, Arc::new(lexicon)).unwrap();
    let summary = summarizer.summarize(&split_sentences(ARTICLE), "rates", &Keywords::default(), 2);
    assert!(summary.len() <= 2);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_missing_lexicon_file_is_io_error() {
    let err = Lexicon::load("/definitely/not/here/lexicon.txt").unwrap_err();
    assert!(matches!(err, rapid_digest::DigestError::Io { .. }));
}

#[test]
fn test_iteration_cap_still_summarizes() {
    let config = SummarizerConfig::default()
        .with_max_iterations(1)
        .with_convergence_threshold(1e-12);
    let summarizer = Summarizer::with_config(config, lexicon()).unwrap();

    let result = summarizer.summarize_detailed(
        &split_sentences(ARTICLE),
        "interest rates",
        &Keywords::default(),
        3,
    );
    assert_eq!(result.iterations, 1);
    assert!(!result.converged);
    assert!(!result.is_empty());
}

#[test]
fn test_observer_and_document_entry_point() {
    let document = Document::new(split_sentences(ARTICLE))
        .with_title("Central bank raises rates")
        .with_keywords([("rates".to_string(), 1.0)].into_iter().collect());

    let summarizer = Summarizer::new(lexicon());
    let mut recorder = StageRecorder::new();
    let detailed = summarizer.summarize_observed(
        &document.sentences,
        &document.title,
        &document.keywords,
        2,
        &mut recorder,
    );

    assert_eq!(recorder.stages().len(), 5);
    assert_eq!(summarizer.summarize_document(&document, 2), detailed.texts());
}

#[test]
fn test_result_serializes_to_json() {
    let result = Summarizer::new(lexicon()).summarize_detailed(
        &split_sentences(ARTICLE),
        "rates",
        &Keywords::default(),
        2,
    );
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json["sentences"].as_array().map(Vec::len),
        Some(result.len())
    );
    assert!(json["converged"].is_boolean());
}

#[test]
fn test_summarizer_shared_across_threads() {
    let summarizer = Arc::new(Summarizer::new(lexicon()));
    let sentences = split_sentences(ARTICLE);
    let expected = summarizer.summarize(&sentences, "rates", &Keywords::default(), 3);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let summarizer = Arc::clone(&summarizer);
            let sentences = sentences.clone();
            std::thread::spawn(move || {
                summarizer.summarize(&sentences, "rates", &Keywords::default(), 3)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

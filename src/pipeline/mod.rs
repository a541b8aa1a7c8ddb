//! Staged summarization pipeline
//!
//! [`runner::Summarizer`] runs tokenize, similarity, centrality, relevance
//! and select in order; [`observer`] exposes the stage boundaries.

pub mod observer;
pub mod runner;

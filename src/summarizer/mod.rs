//! Summarization components
//!
//! Relevance scoring, score combination and MMR (Maximal Marginal
//! Relevance) selection of diverse, relevant sentences.

pub mod keywords;
pub mod quickselect;
pub mod relevance;
pub mod selector;
pub mod weights;

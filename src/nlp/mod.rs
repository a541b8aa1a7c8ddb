//! Natural Language Processing components
//!
//! This module provides word tokenization and a simple sentence splitter.

pub mod splitter;
pub mod tokenizer;

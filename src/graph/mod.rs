//! Sentence graph construction and representation
//!
//! This module builds the pairwise sentence similarity matrix and its
//! sparse form for the centrality computation.

pub mod builder;
pub mod csr;

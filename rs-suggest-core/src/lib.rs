//! Prefix-tree suggestion library.
//!
//! This crate provides a generic autocomplete engine including:
//! - A recursive prefix tree (trie) over any ordered token type
//! - Exact-prefix subtree lookup
//! - Deterministic, order-preserving enumeration of stored sequences
//! - A suggestion session that loads word-sequence corpora from text files
//!   and answers "what continues this prefix?" queries
//!
//! The trie itself never touches files or streams. Loading, prompting and
//! tokenization live in the session layer so the tree stays reusable for
//! arbitrary token alphabets.

/// Core trie engine and the suggestion session built on top of it.
///
/// This module exposes the high-level suggestion interface as well as the
/// underlying generic tree, which is usable on its own.
pub mod engine;

/// I/O utilities (corpus file loading, path helpers).
///
/// Exposed for the front-end crates; not part of the trie contract.
pub mod io;

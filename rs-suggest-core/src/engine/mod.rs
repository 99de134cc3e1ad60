//! Top-level module for the suggestion engine.
//!
//! This module provides a prefix-tree based completion system, including:
//! - A generic recursive trie (`Trie`)
//! - A corpus-backed query layer (`SuggestionSession`)
//! - The whitespace tokenization policy shared by loaders and queries

/// Generic recursive prefix tree over any ordered token type.
///
/// Supports sequence insertion, exact-prefix subtree lookup and
/// depth-first backtracking enumeration of every stored sequence.
pub mod trie;

/// High-level session tying the trie to line-oriented corpora.
///
/// Owns file loading, tokenization and the rendering of completions
/// into printable suggestions. The trie stays I/O-free.
pub mod session;

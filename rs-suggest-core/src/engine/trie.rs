use std::borrow::Borrow;
use std::collections::BTreeMap;

/// A recursive prefix tree over an ordered token type.
///
/// Each node owns a map from token to child node, so a path from the root
/// spells out one stored sequence prefix. The node and the tree are the same
/// type: any node is the root of the subtree below it.
///
/// # Responsibilities
/// - Record finite token sequences (`insert`)
/// - Resolve an exact prefix to the node at its end (`subtrie`)
/// - Enumerate every sequence stored beneath a node, in token order
///
/// # Invariants
/// - Children are keyed uniquely and iterated in `T`'s total order,
///   regardless of insertion order
/// - A node exclusively owns its children: the structure is a tree, with
///   no cycles and no parent back-pointers
/// - A node with no children ends at least one inserted sequence; sequence
///   termination is inferred from the structure alone (see
///   [`for_each_completion`](Self::for_each_completion))
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trie<T: Ord> {
	children: BTreeMap<T, Trie<T>>,
}

impl<T: Ord> Default for Trie<T> {
	fn default() -> Self {
		Self { children: BTreeMap::new() }
	}
}

impl<T: Ord> Trie<T> {
	/// Creates an empty tree.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns `true` if this node has no children.
	///
	/// On the root this means nothing has been inserted yet; further down
	/// it marks the end of a stored sequence.
	pub fn is_empty(&self) -> bool {
		self.children.is_empty()
	}

	/// Records one token sequence in the tree.
	///
	/// Walks the tree token by token, creating each missing child on the
	/// way, so that afterwards the whole sequence can be consumed from this
	/// node. Shared prefixes are reused: at most `sequence.len()` new nodes
	/// are allocated, zero when the full path already exists.
	///
	/// # Notes
	/// - An empty sequence is a no-op.
	/// - Re-inserting a known sequence changes nothing.
	/// - Insertion cannot fail for any finite sequence.
	pub fn insert<I>(&mut self, sequence: I)
	where
		I: IntoIterator<Item = T>,
	{
		self.insert_tokens(sequence.into_iter());
	}

	fn insert_tokens<I>(&mut self, mut tokens: I)
	where
		I: Iterator<Item = T>,
	{
		if let Some(token) = tokens.next() {
			self.children.entry(token).or_default().insert_tokens(tokens);
		}
	}

	/// Resolves a prefix to the node exactly at its end.
	///
	/// Consumes one token of `prefix` per step. The walk short-circuits:
	/// the first token with no matching child yields `None` and the rest of
	/// the prefix is never consulted. An empty prefix resolves to `self`.
	///
	/// # Returns
	/// A borrow of the reached node, usable for further lookups or for
	/// enumeration. "Not found" is the ordinary no-suggestions outcome,
	/// not an error.
	///
	/// # Notes
	/// Tokens are compared through [`Borrow`], so a `Trie<String>` can be
	/// queried with `&str` tokens directly.
	pub fn subtrie<'a, Q, I>(&self, prefix: I) -> Option<&Self>
	where
		T: Borrow<Q>,
		Q: Ord + ?Sized + 'a,
		I: IntoIterator<Item = &'a Q>,
	{
		self.subtrie_tokens(prefix.into_iter())
	}

	fn subtrie_tokens<'a, Q, I>(&self, mut prefix: I) -> Option<&Self>
	where
		T: Borrow<Q>,
		Q: Ord + ?Sized + 'a,
		I: Iterator<Item = &'a Q>,
	{
		match prefix.next() {
			None => Some(self),
			Some(token) => self.children.get(token)?.subtrie_tokens(prefix),
		}
	}

	/// Calls `visit` once per sequence stored beneath this node.
	///
	/// Depth-first backtracking walk: the token of each visited child is
	/// pushed onto a shared path buffer, popped again on return, and the
	/// buffer is handed to `visit` whenever a node without children is
	/// reached. Each visited path is the suffix from this node down, not
	/// including tokens above it.
	///
	/// # Behavior
	/// - Children are visited in token order, so output order is fully
	///   determined by the stored content.
	/// - A node without children emits exactly one path; on a node that is
	///   itself childless that path is empty.
	/// - A sequence that is a strict prefix of another stored sequence is
	///   not reported separately: termination is structural, so the shorter
	///   sequence is absorbed by the longer one.
	pub fn for_each_completion<F>(&self, mut visit: F)
	where
		F: FnMut(&[&T]),
	{
		let mut path = Vec::new();
		self.walk(&mut path, &mut visit);
	}

	fn walk<'t, F>(&'t self, path: &mut Vec<&'t T>, visit: &mut F)
	where
		F: FnMut(&[&'t T]),
	{
		if self.children.is_empty() {
			visit(path);
		}
		for (token, child) in &self.children {
			path.push(token);
			child.walk(path, visit);
			path.pop();
		}
	}

	/// Collects every sequence stored beneath this node.
	///
	/// Materialized form of [`for_each_completion`](Self::for_each_completion);
	/// same order, same termination rules.
	pub fn completions(&self) -> Vec<Vec<T>>
	where
		T: Clone,
	{
		let mut all = Vec::new();
		self.for_each_completion(|path| all.push(path.iter().copied().cloned().collect()));
		all
	}
}

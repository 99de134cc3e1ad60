use std::path::Path;

use log::info;

use super::trie::Trie;
use crate::io;

/// Splits one line of text into query/storage tokens.
///
/// The policy is plain whitespace splitting: runs of whitespace separate
/// tokens, leading/trailing whitespace is ignored, and nothing else is
/// normalized (case and punctuation pass through untouched). Loaders and
/// queries share this single policy so a stored line can always be found
/// again by typing it back.
pub fn tokenize(line: &str) -> Vec<String> {
	line.split_whitespace().map(str::to_owned).collect()
}

/// A corpus-backed suggestion session.
///
/// Builds a word trie once from line-oriented text corpora (the writer
/// phase), then answers "what continues this prefix?" queries read-only.
/// The tree is rebuilt from its source files every run; there is no on-disk
/// representation of the tree itself.
///
/// # Responsibilities
/// - Load corpora from single files or whole directories
/// - Tokenize stored lines and incoming queries with one shared policy
/// - Render trie completions into printable suggestions
///
/// # Invariants
/// - `corpus_names` holds each loaded corpus exactly once, in load order
/// - Every non-blank ingested line is reachable through [`suggest`](Self::suggest)
#[derive(Debug, Default)]
pub struct SuggestionSession {
	trie: Trie<String>,
	corpus_names: Vec<String>,
	lines_ingested: usize,
}

impl SuggestionSession {
	/// Creates a session by loading all `.txt` corpora from a directory.
	///
	/// # Parameters
	/// - `dir`: Path to a directory containing corpus files.
	///   Both `"folder"` and `"folder/"` are accepted.
	///
	/// # Behavior
	/// - Lists all files with the `.txt` extension in the given directory.
	/// - Loads each one; the corpus name is the file name without extension.
	/// - Only files directly contained in the directory are loaded
	///   (subdirectories are ignored).
	///
	/// # Errors
	/// - Returns an error if the path does not exist or is not a directory.
	/// - Returns an error if a corpus fails to load.
	pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self, Box<dyn std::error::Error>> {
		let mut session = Self::default();

		let string_path = match dir.as_ref().to_str() {
			Some(s) => s,
			None => return Err("Invalid corpus directory".into()),
		};
		// Normalize "." / "./"
		let folder = io::normalize_folder(string_path);

		if !folder.is_dir() {
			return Err(format!("Expected a directory, got: {}", folder.display()).into());
		}

		let mut files = io::list_files(&folder, "txt")?;
		files.sort();
		for file in files {
			session.load_corpus(folder.join(&file))?;
		}

		Ok(session)
	}

	/// Loads one corpus file into the session.
	///
	/// Every line of the file is tokenized and recorded as one sequence;
	/// blank lines are skipped. The corpus is registered under its file
	/// stem (`data/db.txt` → `"db"`).
	///
	/// # Errors
	/// Returns an error if the corpus is already loaded or if the file
	/// cannot be read.
	pub fn load_corpus<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Box<dyn std::error::Error>> {
		let name = io::file_stem(&path)?;
		if self.corpus_names.contains(&name) {
			return Err(format!("Corpus {name} already loaded").into());
		}

		let before = self.lines_ingested;
		for line in io::read_lines(&path)? {
			self.ingest_line(&line);
		}

		info!("loaded corpus {} ({} sequences)", name, self.lines_ingested - before);
		self.corpus_names.push(name);
		Ok(())
	}

	/// Records one line as a stored sequence.
	///
	/// Blank lines (no tokens) are ignored. This is the unit the corpus
	/// loaders are built on; it is public so callers can feed sequences
	/// from sources other than files.
	pub fn ingest_line(&mut self, line: &str) {
		let tokens = tokenize(line);
		if tokens.is_empty() {
			return;
		}
		self.trie.insert(tokens);
		self.lines_ingested += 1;
	}

	/// Answers a prefix query with rendered suggestions.
	///
	/// The query line is tokenized with the same policy as stored lines,
	/// then resolved to its subtree. On a hit, each stored continuation is
	/// rendered by joining its tokens with single spaces, in token order.
	///
	/// # Returns
	/// - `Some(suggestions)` when the full query prefix is stored. A query
	///   matching a complete sequence with no longer continuation yields
	///   one empty suggestion.
	/// - `None` when the prefix is absent, or when nothing has been
	///   ingested at all. Not an error; it is the ordinary
	///   "no suggestions found" outcome.
	pub fn suggest(&self, line: &str) -> Option<Vec<String>> {
		if self.trie.is_empty() {
			return None;
		}

		let query = tokenize(line);
		let node = self.trie.subtrie(query.iter().map(String::as_str))?;

		let mut suggestions = Vec::new();
		node.for_each_completion(|path| {
			suggestions.push(path.iter().map(|w| w.as_str()).collect::<Vec<_>>().join(" "));
		});
		Some(suggestions)
	}

	/// Renders every recorded sequence, in token order.
	///
	/// Empty when nothing has been ingested.
	pub fn recorded_sequences(&self) -> Vec<String> {
		self.suggest("").unwrap_or_default()
	}

	/// Names of the loaded corpora, in load order.
	pub fn corpus_names(&self) -> &[String] {
		&self.corpus_names
	}

	/// Number of non-blank lines ingested so far.
	///
	/// Counts ingestions, not distinct sequences: re-ingesting a known
	/// line bumps the counter even though the tree is unchanged.
	pub fn lines_ingested(&self) -> usize {
		self.lines_ingested
	}

	/// Returns `true` while nothing has been ingested.
	pub fn is_empty(&self) -> bool {
		self.trie.is_empty()
	}

	/// Read access to the underlying tree.
	pub fn trie(&self) -> &Trie<String> {
		&self.trie
	}
}

#[cfg(test)]
mod tests {
	use super::{SuggestionSession, tokenize};

	fn demo_session() -> SuggestionSession {
		let mut session = SuggestionSession::default();
		session.ingest_line("hi how are you");
		session.ingest_line("hi i am great");
		session.ingest_line("what are you");
		session
	}

	#[test]
	fn tokenize_splits_on_runs_of_whitespace() {
		assert_eq!(tokenize("  hi\thow  are you "), ["hi", "how", "are", "you"]);
		assert!(tokenize("").is_empty());
		assert!(tokenize("   \t ").is_empty());
	}

	#[test]
	fn tokenize_does_not_normalize() {
		assert_eq!(tokenize("Hi you?"), ["Hi", "you?"]);
	}

	#[test]
	fn suggest_renders_completions_with_spaces() {
		let session = demo_session();
		assert_eq!(session.suggest("hi").unwrap(), ["how are you", "i am great"]);
	}

	#[test]
	fn suggest_misses_with_none() {
		let session = demo_session();
		assert!(session.suggest("bye").is_none());
		assert!(session.suggest("hi there").is_none());
	}

	#[test]
	fn empty_query_lists_every_recorded_sequence() {
		let session = demo_session();
		assert_eq!(
			session.suggest("").unwrap(),
			["hi how are you", "hi i am great", "what are you"]
		);
		assert_eq!(session.recorded_sequences(), session.suggest("").unwrap());
	}

	#[test]
	fn full_sentence_yields_single_empty_suggestion() {
		let session = demo_session();
		assert_eq!(session.suggest("hi i am great").unwrap(), [String::new()]);
	}

	#[test]
	fn empty_session_has_no_suggestions() {
		let session = SuggestionSession::default();
		assert!(session.suggest("").is_none());
		assert!(session.recorded_sequences().is_empty());
	}

	#[test]
	fn blank_lines_are_skipped() {
		let mut session = SuggestionSession::default();
		session.ingest_line("   ");
		assert!(session.is_empty());
		assert_eq!(session.lines_ingested(), 0);
	}

	#[test]
	fn load_corpus_reads_a_text_file() {
		let stem = format!("rs-suggest-load-{}", std::process::id());
		let path = std::env::temp_dir().join(format!("{stem}.txt"));
		std::fs::write(&path, "hi how are you\nhi i am great\n\nwhat are you\n").unwrap();

		let mut session = SuggestionSession::default();
		session.load_corpus(&path).unwrap();
		std::fs::remove_file(&path).unwrap();

		assert_eq!(session.corpus_names(), [stem]);
		assert_eq!(session.lines_ingested(), 3);
		assert_eq!(session.suggest("hi").unwrap(), ["how are you", "i am great"]);
	}

	#[test]
	fn double_load_is_rejected() {
		let stem = format!("rs-suggest-dup-{}", std::process::id());
		let path = std::env::temp_dir().join(format!("{stem}.txt"));
		std::fs::write(&path, "hi how are you\n").unwrap();

		let mut session = SuggestionSession::default();
		session.load_corpus(&path).unwrap();
		let second = session.load_corpus(&path);
		std::fs::remove_file(&path).unwrap();

		assert!(second.is_err());
		assert_eq!(session.corpus_names().len(), 1);
	}
}

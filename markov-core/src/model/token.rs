use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{MarkovError, Result};

/// Handle to a word interned in a [`Vocabulary`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(u32);

impl WordId {
	/// Raw index of the word inside its vocabulary.
	pub fn index(self) -> u32 {
		self.0
	}
}

/// A token as seen by the model.
///
/// `NonWord` is the sentinel marking both the start of the corpus (it fills
/// the initial prefix window) and its end (it is the last suffix recorded
/// during training). Since it is a distinct variant, no input can ever
/// produce it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
	NonWord,
	Word(WordId),
}

impl Symbol {
	pub fn is_non_word(self) -> bool {
		matches!(self, Symbol::NonWord)
	}
}

/// Interned storage for every distinct word of a corpus.
///
/// Each word is stored once, behind an `Arc`, and never moved or mutated
/// afterwards. Prefixes and suffix lists only keep [`WordId`] handles.
///
/// ## Invariants
/// - `words[id]` and `index` always describe the same set of words
/// - ids are dense, starting at 0, in first-seen order
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
	words: Vec<Arc<[u8]>>,
	index: HashMap<Arc<[u8]>, WordId>,
}

impl Vocabulary {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the id of `word`, inserting it on first sight.
	///
	/// # Errors
	/// - `ResourceExhausted` if the backing storage cannot grow
	/// - `VocabularyFull` once `u32::MAX` distinct words are stored
	pub fn intern(&mut self, word: &[u8]) -> Result<WordId> {
		if let Some(id) = self.index.get(word) {
			return Ok(*id);
		}

		let next = u32::try_from(self.words.len()).map_err(|_| MarkovError::VocabularyFull(self.words.len()))?;
		let id = WordId(next);

		self.words.try_reserve(1)?;
		self.index.try_reserve(1)?;

		let word: Arc<[u8]> = Arc::from(word);
		self.words.push(Arc::clone(&word));
		self.index.insert(word, id);

		Ok(id)
	}

	/// Looks a word up without inserting it.
	pub fn get(&self, word: &[u8]) -> Option<WordId> {
		self.index.get(word).copied()
	}

	/// Returns the bytes of an interned word.
	pub fn word(&self, id: WordId) -> Option<&[u8]> {
		self.words.get(id.0 as usize).map(|word| &**word)
	}

	/// Number of distinct words.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}
}

use std::collections::HashMap;
use std::fmt;

use super::prefix::PrefixWindow;
use super::state::State;
use super::token::{Symbol, Vocabulary};
use crate::error::{MarkovError, Result};

/// Learned order-`k` Markov model over words.
///
/// The `StateTable` maps every observed prefix (a `k`-tuple of symbols) to
/// the [`State`] holding the suffixes that followed it. It also owns the
/// [`Vocabulary`] the symbols point into, so word bytes live exactly as long
/// as the table.
///
/// # Responsibilities
/// - Intern words and hand out `Copy` handles
/// - Append suffixes under their prefix, keeping duplicates
/// - Answer lookups for the generator
///
/// # Invariants
/// - `order` is always >= 1 and every key has exactly `order` symbols
/// - Every stored state is non-empty
/// - `suffix_count` equals the sum of all state lengths
#[derive(Clone, Debug)]
pub struct StateTable {
	order: usize,
	states: HashMap<Box<[Symbol]>, State>,
	vocabulary: Vocabulary,
	suffix_count: usize,
}

impl StateTable {
	/// Creates an empty table for prefixes of `order` symbols.
	///
	/// # Errors
	/// Returns an error if `order == 0`.
	pub fn new(order: usize) -> Result<Self> {
		if order == 0 {
			return Err(MarkovError::InvalidOrder(order));
		}
		Ok(Self {
			order,
			states: HashMap::new(),
			vocabulary: Vocabulary::new(),
			suffix_count: 0,
		})
	}

	/// Appends `suffix` to the multiset of `prefix`, creating the state if needed.
	///
	/// # Errors
	/// - `PrefixLength` if `prefix` does not have `order` symbols
	/// - `UnknownWord` if a symbol was not interned in this table
	/// - `ResourceExhausted` if the table cannot grow
	pub fn add(&mut self, prefix: &[Symbol], suffix: Symbol) -> Result<()> {
		if prefix.len() != self.order {
			return Err(MarkovError::PrefixLength { expected: self.order, found: prefix.len() });
		}
		for symbol in prefix.iter().chain([&suffix]) {
			self.check_known(*symbol)?;
		}

		if let Some(state) = self.states.get_mut(prefix) {
			state.push(suffix)?;
		} else {
			let mut state = State::new();
			state.push(suffix)?;
			self.states.try_reserve(1)?;
			self.states.insert(prefix.into(), state);
		}

		self.suffix_count += 1;
		Ok(())
	}

	fn check_known(&self, symbol: Symbol) -> Result<()> {
		match symbol {
			Symbol::Word(id) if self.vocabulary.word(id).is_none() => Err(MarkovError::UnknownWord(id.index())),
			_ => Ok(()),
		}
	}

	/// Returns the state for `prefix`, or `None` if it was never observed.
	pub fn lookup(&self, prefix: &[Symbol]) -> Option<&State> {
		self.states.get(prefix)
	}

	/// Interns `word` in the table's vocabulary.
	pub fn intern(&mut self, word: &[u8]) -> Result<Symbol> {
		Ok(Symbol::Word(self.vocabulary.intern(word)?))
	}

	/// Returns the bytes behind a symbol. `NonWord` has none.
	pub fn resolve(&self, symbol: Symbol) -> Option<&[u8]> {
		match symbol {
			Symbol::NonWord => None,
			Symbol::Word(id) => self.vocabulary.word(id),
		}
	}

	/// Human-readable form of a prefix, used in diagnostics.
	pub fn describe(&self, prefix: &[Symbol]) -> String {
		prefix
			.iter()
			.map(|symbol| match self.resolve(*symbol) {
				Some(word) => String::from_utf8_lossy(word).into_owned(),
				None => "<nonword>".to_owned(),
			})
			.collect::<Vec<_>>()
			.join(" ")
	}

	/// A fresh window matching this table's order.
	pub fn initial_window(&self) -> PrefixWindow {
		PrefixWindow::filled(self.order)
	}

	pub fn order(&self) -> usize {
		self.order
	}

	/// Number of states (distinct prefixes).
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Total number of suffix occurrences across all states.
	pub fn total_suffixes(&self) -> usize {
		self.suffix_count
	}

	/// Iterates over `(prefix, state)` pairs in arbitrary order.
	pub fn states(&self) -> impl Iterator<Item = (&[Symbol], &State)> {
		self.states.iter().map(|(prefix, state)| (&**prefix, state))
	}

	pub fn vocabulary(&self) -> &Vocabulary {
		&self.vocabulary
	}

	pub fn stats(&self) -> ModelStats {
		ModelStats {
			order: self.order,
			states: self.states.len(),
			suffixes: self.suffix_count,
			words: self.vocabulary.len(),
		}
	}
}

/// Size summary of a trained table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelStats {
	pub order: usize,
	pub states: usize,
	pub suffixes: usize,
	pub words: usize,
}

impl fmt::Display for ModelStats {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"order={} states={} suffixes={} words={}",
			self.order, self.states, self.suffixes, self.words
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn add_creates_then_appends() {
		let mut table = StateTable::new(2).unwrap();
		let a = table.intern(b"a").unwrap();
		let b = table.intern(b"b").unwrap();
		let prefix = [Symbol::NonWord, a];

		table.add(&prefix, b).unwrap();
		table.add(&prefix, b).unwrap();
		table.add(&prefix, Symbol::NonWord).unwrap();

		let state = table.lookup(&prefix).unwrap();
		assert_eq!(state.suffixes(), &[b, b, Symbol::NonWord]);
		assert_eq!(table.len(), 1);
		assert_eq!(table.total_suffixes(), 3);
	}

	#[test]
	fn lookup_miss_is_none() {
		let mut table = StateTable::new(2).unwrap();
		let a = table.intern(b"a").unwrap();
		assert!(table.lookup(&[a, a]).is_none());
		assert!(table.is_empty());
	}

	#[test]
	fn keys_compare_as_tuples() {
		let mut table = StateTable::new(2).unwrap();
		let ab = table.intern(b"ab").unwrap();
		let c = table.intern(b"c").unwrap();
		let a = table.intern(b"a").unwrap();
		let bc = table.intern(b"bc").unwrap();

		table.add(&[ab, c], Symbol::NonWord).unwrap();

		assert!(table.lookup(&[ab, c]).is_some());
		assert!(table.lookup(&[a, bc]).is_none());
	}

	#[test]
	fn wrong_prefix_length_is_rejected() {
		let mut table = StateTable::new(2).unwrap();
		let result = table.add(&[Symbol::NonWord], Symbol::NonWord);
		assert!(matches!(result, Err(MarkovError::PrefixLength { expected: 2, found: 1 })));
		assert_eq!(table.total_suffixes(), 0);
	}

	#[test]
	fn symbols_from_another_table_are_rejected() {
		let mut other = StateTable::new(2).unwrap();
		let foreign = [b"w", b"x", b"y", b"z"].iter().map(|word| other.intern(*word).unwrap()).last().unwrap();

		let mut table = StateTable::new(2).unwrap();
		let a = table.intern(b"a").unwrap();

		let as_suffix = table.add(&[Symbol::NonWord, Symbol::NonWord], foreign);
		assert!(matches!(as_suffix, Err(MarkovError::UnknownWord(3))));

		let in_prefix = table.add(&[a, foreign], a);
		assert!(matches!(in_prefix, Err(MarkovError::UnknownWord(3))));

		assert!(table.is_empty());
		assert_eq!(table.total_suffixes(), 0);
	}

	#[test]
	fn zero_order_is_rejected() {
		assert!(matches!(StateTable::new(0), Err(MarkovError::InvalidOrder(0))));
	}

	#[test]
	fn describe_and_stats() {
		let mut table = StateTable::new(2).unwrap();
		let hello = table.intern(b"Hello,").unwrap();
		table.add(&[Symbol::NonWord, Symbol::NonWord], hello).unwrap();

		assert_eq!(table.describe(&[Symbol::NonWord, hello]), "<nonword> Hello,");
		assert_eq!(table.resolve(Symbol::NonWord), None);
		assert_eq!(table.resolve(hello), Some(&b"Hello,"[..]));
		assert_eq!(
			table.stats(),
			ModelStats { order: 2, states: 1, suffixes: 1, words: 1 }
		);
		assert_eq!(table.stats().to_string(), "order=2 states=1 suffixes=1 words=1");
	}
}

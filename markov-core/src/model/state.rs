use rand::Rng;
use rand::seq::IndexedRandom;

use super::token::Symbol;
use crate::error::Result;

/// Suffix multiset of one state in the Markov chain.
///
/// A `State` holds every symbol observed right after a given prefix, one
/// entry per occurrence. Duplicates are the probability weights: a suffix
/// seen three times is three times as likely to be sampled.
///
/// ## Responsibilities:
/// - Accumulate suffix occurrences during training
/// - Sample the next symbol uniformly over occurrences
///
/// ## Invariants
/// - A state stored in a table is never empty
/// - Entries are never removed or reordered
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
	/// Observed suffixes, in insertion order.
	/// Example: [a, a, b, NonWord] gives `a` a weight of 1/2
	suffixes: Vec<Symbol>,
}

impl State {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one more occurrence of `suffix`.
	///
	/// # Errors
	/// Returns `ResourceExhausted` if the suffix list cannot grow.
	pub fn push(&mut self, suffix: Symbol) -> Result<()> {
		self.suffixes.try_reserve(1)?;
		self.suffixes.push(suffix);
		Ok(())
	}

	/// Picks one suffix uniformly over occurrences.
	///
	/// Returns `None` if the state has no suffix.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Symbol> {
		self.suffixes.choose(rng).copied()
	}

	pub fn suffixes(&self) -> &[Symbol] {
		&self.suffixes
	}

	/// Number of times `symbol` was observed as a suffix of this state.
	pub fn occurrences(&self, symbol: Symbol) -> usize {
		self.suffixes.iter().filter(|suffix| **suffix == symbol).count()
	}

	pub fn len(&self) -> usize {
		self.suffixes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.suffixes.is_empty()
	}
}

use std::io::BufRead;

use log::{debug, info};

use super::prefix::PrefixWindow;
use super::state_table::StateTable;
use super::token::Symbol;
use crate::error::Result;
use crate::io;

/// Builds a [`StateTable`] from a word stream in a single pass.
///
/// The window starts as `k` sentinels. Every observed word is recorded as a
/// suffix of the current window, then slid into it. [`finish`](Self::finish)
/// records one final `NonWord`, which gives generation a reachable stop.
#[derive(Debug)]
pub struct Trainer {
	table: StateTable,
	window: PrefixWindow,
	observed: usize,
}

impl Trainer {
	/// # Errors
	/// Returns an error if `order == 0`.
	pub fn new(order: usize) -> Result<Self> {
		let table = StateTable::new(order)?;
		let window = table.initial_window();
		debug!("training order-{order} model");
		Ok(Self { table, window, observed: 0 })
	}

	/// Records `word` as the suffix of the current window, then slides it in.
	///
	/// `word` is expected to come from a whitespace tokenizer: non-empty and
	/// free of separators. Other byte strings are stored as-is.
	pub fn observe(&mut self, word: &[u8]) -> Result<()> {
		let symbol = self.table.intern(word)?;
		self.table.add(self.window.key(), symbol)?;
		self.window.slide(symbol);
		self.observed += 1;
		Ok(())
	}

	/// Number of words observed so far.
	pub fn observed(&self) -> usize {
		self.observed
	}

	/// Records the end-of-corpus sentinel and returns the finished table.
	pub fn finish(mut self) -> Result<StateTable> {
		self.table.add(self.window.key(), Symbol::NonWord)?;
		info!("trained on {} words: {}", self.observed, self.table.stats());
		Ok(self.table)
	}
}

/// Trains an order-`order` model on an in-memory word sequence.
pub fn train<I, T>(order: usize, words: I) -> Result<StateTable>
where
	I: IntoIterator<Item = T>,
	T: AsRef<[u8]>,
{
	let mut trainer = Trainer::new(order)?;
	for word in words {
		trainer.observe(word.as_ref())?;
	}
	trainer.finish()
}

/// Trains an order-`order` model on whitespace-separated words read from `reader`.
///
/// A read error ends training early; the partial model is returned.
/// Running out of memory while buffering a word is an error.
pub fn train_reader<R: BufRead>(order: usize, reader: R) -> Result<StateTable> {
	let mut trainer = Trainer::new(order)?;
	for word in io::words(reader) {
		trainer.observe(&word?)?;
	}
	trainer.finish()
}

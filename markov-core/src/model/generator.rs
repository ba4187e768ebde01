use rand::Rng;
use rand::rngs::StdRng;

use super::config::MarkovConfig;
use super::prefix::PrefixWindow;
use super::state_table::StateTable;
use super::token::Symbol;
use crate::error::{MarkovError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
	Emitting,
	Halted,
}

/// Walks a trained [`StateTable`] and yields words.
///
/// # Behavior
/// - Starts from the all-sentinel window
/// - At each step, samples one suffix of the current window uniformly over
///   occurrences
/// - Stops on `NonWord` or after `max_output` words
///
/// # Notes
/// - The table is borrowed immutably for the generator's whole life, so
///   yielded words stay valid as long as the table does.
/// - A lookup miss means the table was not built by a `Trainer`. It is
///   yielded once as `MissingState` and the generator halts.
#[derive(Debug)]
pub struct Generator<'a, R = StdRng> {
	table: &'a StateTable,
	window: PrefixWindow,
	rng: R,
	max_output: usize,
	emitted: usize,
	phase: Phase,
}

impl<'a> Generator<'a, StdRng> {
	/// Creates a generator using the cap and seed of `config`.
	pub fn new(table: &'a StateTable, config: &MarkovConfig) -> Self {
		Self::with_rng(table, config.max_output, config.rng())
	}
}

impl<'a, R: Rng> Generator<'a, R> {
	/// Creates a generator drawing from a caller-supplied PRNG.
	pub fn with_rng(table: &'a StateTable, max_output: usize, rng: R) -> Self {
		Self {
			table,
			window: table.initial_window(),
			rng,
			max_output,
			emitted: 0,
			phase: Phase::Emitting,
		}
	}

	/// Goes back to the initial window. The PRNG keeps its state.
	pub fn reset(&mut self) {
		self.window.reset();
		self.emitted = 0;
		self.phase = Phase::Emitting;
	}

	/// Number of words yielded since creation or the last reset.
	pub fn emitted(&self) -> usize {
		self.emitted
	}

	pub fn is_halted(&self) -> bool {
		self.phase == Phase::Halted
	}

	/// Runs to completion and collects the words.
	pub fn generate(&mut self) -> Result<Vec<&'a [u8]>> {
		self.collect()
	}

	fn missing_state(&mut self) -> MarkovError {
		self.phase = Phase::Halted;
		MarkovError::MissingState { prefix: self.table.describe(self.window.key()) }
	}

	fn step(&mut self) -> Result<Option<&'a [u8]>> {
		let table = self.table;
		let Some(state) = table.lookup(self.window.key()) else {
			return Err(self.missing_state());
		};
		let Some(symbol) = state.sample(&mut self.rng) else {
			return Err(self.missing_state());
		};

		match symbol {
			Symbol::NonWord => {
				self.phase = Phase::Halted;
				Ok(None)
			}
			Symbol::Word(id) => {
				let word = table.vocabulary().word(id).ok_or_else(|| {
					self.phase = Phase::Halted;
					MarkovError::UnknownWord(id.index())
				})?;
				self.window.slide(symbol);
				self.emitted += 1;
				Ok(Some(word))
			}
		}
	}
}

impl<'a, R: Rng> Iterator for Generator<'a, R> {
	type Item = Result<&'a [u8]>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.phase == Phase::Halted {
			return None;
		}
		if self.emitted >= self.max_output {
			self.phase = Phase::Halted;
			return None;
		}
		self.step().transpose()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::trainer::train;
	use rand::SeedableRng;

	fn seeded(seed: u64, max_output: usize) -> MarkovConfig {
		let mut config = MarkovConfig::default();
		config.max_output = max_output;
		config.seed = Some(seed);
		config
	}

	#[test]
	fn empty_model_emits_nothing() {
		let table = train(2, Vec::<&str>::new()).unwrap();
		let mut generator = Generator::new(&table, &seeded(0, 200));

		assert!(generator.generate().unwrap().is_empty());
		assert!(generator.is_halted());
		assert!(generator.next().is_none());
	}

	#[test]
	fn linear_corpus_is_replayed() {
		let table = train(2, "a b c d".split(' ')).unwrap();
		for seed in 0..20 {
			let words = Generator::new(&table, &seeded(seed, 200)).generate().unwrap();
			assert_eq!(words, [b"a", b"b", b"c", b"d"]);
		}
	}

	#[test]
	fn zero_max_output_emits_nothing() {
		let table = train(2, "a b c d".split(' ')).unwrap();
		let mut generator = Generator::new(&table, &seeded(3, 0));
		assert!(generator.generate().unwrap().is_empty());
	}

	#[test]
	fn max_output_caps_length() {
		let table = train(2, "a b c d".split(' ')).unwrap();
		let mut generator = Generator::new(&table, &seeded(3, 3));
		assert_eq!(generator.generate().unwrap(), [b"a", b"b", b"c"]);
		assert_eq!(generator.emitted(), 3);
	}

	#[test]
	fn reset_restarts_from_initial_window() {
		let table = train(2, "a b c d".split(' ')).unwrap();
		let mut generator = Generator::new(&table, &seeded(5, 2));
		assert_eq!(generator.generate().unwrap().len(), 2);

		generator.reset();
		assert!(!generator.is_halted());
		assert_eq!(generator.generate().unwrap(), [b"a", b"b"]);
	}

	#[test]
	fn same_seed_same_output() {
		let text = "the cat sat on the mat and the cat ate the rat on the mat";
		let table = train(1, text.split(' ')).unwrap();

		for seed in [1, 17, 4242] {
			let first = Generator::new(&table, &seeded(seed, 50)).generate().unwrap();
			let second = Generator::new(&table, &seeded(seed, 50)).generate().unwrap();
			assert_eq!(first, second);
		}
	}

	#[test]
	fn hand_built_table_without_start_state_fails() {
		let mut table = StateTable::new(2).unwrap();
		let a = table.intern(b"a").unwrap();
		table.add(&[a, a], a).unwrap();

		let mut generator = Generator::with_rng(&table, 10, StdRng::seed_from_u64(0));
		let err = generator.next().unwrap().unwrap_err();

		assert!(matches!(err, MarkovError::MissingState { ref prefix } if prefix == "<nonword> <nonword>"));
		assert!(generator.is_halted());
		assert!(generator.next().is_none());
	}

	#[test]
	fn dead_end_in_hand_built_table_fails() {
		let mut table = StateTable::new(1).unwrap();
		let a = table.intern(b"a").unwrap();
		table.add(&[Symbol::NonWord], a).unwrap();

		let result = Generator::with_rng(&table, 10, StdRng::seed_from_u64(0)).generate();
		assert!(matches!(result, Err(MarkovError::MissingState { .. })));
	}
}

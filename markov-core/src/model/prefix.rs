use super::token::Symbol;
use crate::error::{MarkovError, Result};

/// Rolling window over the last `k` symbols.
///
/// The window is the key into the [`StateTable`](super::state_table::StateTable):
/// two windows select the same state iff they hold the same symbols in the
/// same order. Keys are compared as tuples, so `("ab", "c")` and `("a", "bc")`
/// never collide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixWindow {
	symbols: Box<[Symbol]>,
}

impl PrefixWindow {
	/// Creates a window of `order` sentinels.
	///
	/// # Errors
	/// Returns an error if `order == 0`.
	pub fn new(order: usize) -> Result<Self> {
		if order == 0 {
			return Err(MarkovError::InvalidOrder(order));
		}
		Ok(Self::filled(order))
	}

	/// Caller guarantees `order >= 1`.
	pub(crate) fn filled(order: usize) -> Self {
		Self { symbols: vec![Symbol::NonWord; order].into_boxed_slice() }
	}

	/// Puts the window back to `k` sentinels.
	pub fn reset(&mut self) {
		self.symbols.fill(Symbol::NonWord);
	}

	/// Current lookup key, oldest symbol first.
	pub fn key(&self) -> &[Symbol] {
		&self.symbols
	}

	/// Drops the oldest symbol and appends `symbol` as the newest one.
	pub fn slide(&mut self, symbol: Symbol) {
		self.symbols.copy_within(1.., 0);
		if let Some(newest) = self.symbols.last_mut() {
			*newest = symbol;
		}
	}

	pub fn order(&self) -> usize {
		self.symbols.len()
	}

	/// Whether the window holds only sentinels (start of corpus).
	pub fn is_initial(&self) -> bool {
		self.symbols.iter().all(|symbol| symbol.is_non_word())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::token::Vocabulary;

	#[test]
	fn zero_order_is_rejected() {
		assert!(matches!(PrefixWindow::new(0), Err(MarkovError::InvalidOrder(0))));
	}

	#[test]
	fn slide_keeps_last_k_symbols() {
		let mut vocabulary = Vocabulary::new();
		let a = Symbol::Word(vocabulary.intern(b"a").unwrap());
		let b = Symbol::Word(vocabulary.intern(b"b").unwrap());
		let c = Symbol::Word(vocabulary.intern(b"c").unwrap());

		let mut window = PrefixWindow::new(2).unwrap();
		assert_eq!(window.key(), &[Symbol::NonWord, Symbol::NonWord]);

		window.slide(a);
		assert_eq!(window.key(), &[Symbol::NonWord, a]);
		window.slide(b);
		window.slide(c);
		assert_eq!(window.key(), &[b, c]);
		assert!(!window.is_initial());
	}

	#[test]
	fn reset_is_idempotent() {
		let mut vocabulary = Vocabulary::new();
		let a = Symbol::Word(vocabulary.intern(b"a").unwrap());

		let mut window = PrefixWindow::new(3).unwrap();
		window.slide(a);
		window.reset();
		let once = window.clone();
		window.reset();

		assert_eq!(window, once);
		assert!(window.is_initial());
		assert_eq!(window, PrefixWindow::new(3).unwrap());
	}

	#[test]
	fn order_one_window_holds_only_newest() {
		let mut vocabulary = Vocabulary::new();
		let a = Symbol::Word(vocabulary.intern(b"a").unwrap());

		let mut window = PrefixWindow::new(1).unwrap();
		window.slide(a);
		assert_eq!(window.key(), &[a]);
		assert_eq!(window.order(), 1);
	}
}

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{MarkovError, Result};

/// Default prefix length.
pub const DEFAULT_ORDER: usize = 2;

/// Default cap on emitted words.
pub const DEFAULT_MAX_OUTPUT: usize = 200;

/// Parameters for training a model and sampling from it.
///
/// # Responsibilities
/// - Track the prefix length used for training (`order`)
/// - Track generation parameters (`max_output`, `seed`)
/// - Build the generator's PRNG
///
/// # Invariants
/// - `order` is always >= 1
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkovConfig {
	/// Number of symbols in a prefix.
	order: usize,

	/// Maximum number of words emitted by one generation run.
	pub max_output: usize,

	/// Fixed PRNG seed. `None` draws a seed from the operating system.
	pub seed: Option<u64>,
}

impl Default for MarkovConfig {
	fn default() -> Self {
		Self { order: DEFAULT_ORDER, max_output: DEFAULT_MAX_OUTPUT, seed: None }
	}
}

impl MarkovConfig {
	/// Returns the current prefix length.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Sets the prefix length.
	///
	/// # Errors
	/// Returns an error if `order == 0`.
	pub fn set_order(&mut self, order: usize) -> Result<()> {
		if order == 0 {
			return Err(MarkovError::InvalidOrder(order));
		}
		self.order = order;
		Ok(())
	}

	/// Builds the PRNG used by the generator.
	///
	/// Two generators built from configs with the same `seed` draw the same
	/// sequence.
	pub fn rng(&self) -> StdRng {
		match self.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		}
	}
}

use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

/// Errors raised while training or sampling a Markov model.
///
/// Absence of a prefix in [`StateTable::lookup`](crate::model::state_table::StateTable::lookup)
/// is not an error; `MissingState` is only produced by the generator, where a
/// miss means the table was not built by a [`Trainer`](crate::model::trainer::Trainer).
#[derive(Debug, Error)]
pub enum MarkovError {
	#[error("prefix length must be >= 1, got {0}")]
	InvalidOrder(usize),

	#[error("prefix has {found} tokens but the table order is {expected}")]
	PrefixLength { expected: usize, found: usize },

	#[error("memory allocation failed while growing the model: {0}")]
	ResourceExhausted(#[from] TryReserveError),

	#[error("too many distinct words ({0})")]
	VocabularyFull(usize),

	#[error("no state for prefix [{prefix}]")]
	MissingState { prefix: String },

	#[error("unknown word id {0}")]
	UnknownWord(u32),

	#[error(transparent)]
	Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, MarkovError>;

//! Word-level Markov chain: training and generation.
//!
//! - Interned words and the `NonWord` sentinel (`Symbol`, `Vocabulary`)
//! - The rolling prefix key (`PrefixWindow`)
//! - The learned model (`StateTable`, `State`)
//! - Single-pass training (`Trainer`)
//! - Bounded random walks over the model (`Generator`)

/// Training and generation parameters.
pub mod config;

/// Random walk over a trained `StateTable`.
///
/// Yields words until the `NonWord` sentinel is sampled or the output cap
/// is reached.
pub mod generator;

/// Rolling window over the last `k` symbols, used as the lookup key.
pub mod prefix;

/// Suffix multiset of a single prefix, with uniform sampling over occurrences.
pub mod state;

/// Prefix → suffix multiset mapping, owner of every word.
pub mod state_table;

/// Streaming construction of a `StateTable`.
pub mod trainer;

/// Word interning and the `Symbol` handle type.
pub mod token;

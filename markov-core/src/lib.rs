//! Word-level Markov chain text generation library.
//!
//! This crate provides an order-`k` Markov text generator:
//! - Whitespace tokenization of byte streams
//! - A state table mapping each `k`-word prefix to the words that followed it
//! - Single-pass streaming training
//! - Bounded random generation, optionally seeded
//!
//! ```
//! use markov_core::{Generator, MarkovConfig, train};
//!
//! let table = train(2, "a b c d".split(' ')).unwrap();
//! let mut config = MarkovConfig::default();
//! config.seed = Some(7);
//! let words = Generator::new(&table, &config).generate().unwrap();
//! assert_eq!(words, [b"a", b"b", b"c", b"d"]);
//! ```

/// Error type shared by every fallible operation.
pub mod error;

/// Word streaming from readers and output formatting.
pub mod io;

/// Core Markov model: tokens, prefix window, state table, trainer and generator.
pub mod model;

pub use error::{MarkovError, Result};
pub use model::config::{DEFAULT_MAX_OUTPUT, DEFAULT_ORDER, MarkovConfig};
pub use model::generator::Generator;
pub use model::prefix::PrefixWindow;
pub use model::state::State;
pub use model::state_table::{ModelStats, StateTable};
pub use model::token::{Symbol, Vocabulary, WordId};
pub use model::trainer::{Trainer, train, train_reader};

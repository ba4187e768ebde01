//! `markov` - word-level Markov chain text generator.
//!
//! Reads a corpus (standard input by default), learns an order-k model over
//! its whitespace-separated words and prints one random walk over it.
//!
//! ```text
//! markov < corpus.txt
//! markov -k 3 -n 50 --seed 42 corpus.txt
//! ```

use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use markov_core::io::{WordWriter, open_corpus};
use markov_core::{DEFAULT_MAX_OUTPUT, DEFAULT_ORDER, Generator, MarkovConfig, MarkovError, train_reader};

/// Generate random text that mimics the words of a corpus
#[derive(Parser, Debug)]
#[command(name = "markov")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of words in a prefix
    #[arg(short = 'k', long, default_value_t = DEFAULT_ORDER)]
    order: usize,

    /// Maximum number of words to print
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_OUTPUT)]
    max_output: usize,

    /// Fixed random seed, for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Corpus file ("-" or nothing reads standard input)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> Result<MarkovConfig, MarkovError> {
        let mut config = MarkovConfig::default();
        config.set_order(self.order)?;
        config.max_output = self.max_output;
        config.seed = self.seed;
        Ok(config)
    }
}

/// Trains on `input` and writes one generated line to `output`.
///
/// Returns the number of words written.
fn run<R: BufRead, W: Write>(cli: &Cli, input: R, output: W) -> Result<usize, MarkovError> {
    let config = cli.config()?;
    let table = train_reader(config.order(), input)?;

    let mut writer = WordWriter::new(output);
    for word in Generator::new(&table, &config) {
        writer.write_word(word?)?;
    }
    let written = writer.finish()?;

    debug!("generated {written} words (cap {})", config.max_output);
    Ok(written)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let input = match open_corpus(cli.input.as_deref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: cannot open corpus: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    match run(&cli, input, BufWriter::new(stdout.lock())) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::mem;
use std::path::Path;

use log::warn;

use crate::error::Result;

/// Bytes separating two words: space, tab, `\n`, `\r` and form feed.
pub fn is_separator(byte: u8) -> bool {
	byte.is_ascii_whitespace()
}

/// Streams whitespace-separated words out of a reader.
///
/// - Words are returned byte-for-byte (no case folding, no UTF-8 check)
/// - A word is never empty and never contains a separator
/// - A read error ends the stream; the words read so far are kept
/// - A word buffer that cannot grow yields `ResourceExhausted` and ends the stream
pub fn words<R: BufRead>(reader: R) -> Words<R> {
	Words { reader, pending: Vec::new(), exhausted: false }
}

/// Iterator returned by [`words`].
#[derive(Debug)]
pub struct Words<R> {
	reader: R,
	pending: Vec<u8>,
	exhausted: bool,
}

impl<R: BufRead> Words<R> {
	/// Appends the next run of word bytes from `chunk` to the pending word.
	///
	/// Returns how many bytes of `chunk` were used and whether the pending
	/// word is complete.
	fn scan(pending: &mut Vec<u8>, chunk: &[u8]) -> Result<(usize, bool)> {
		let start = if pending.is_empty() {
			chunk.iter().position(|byte| !is_separator(*byte)).unwrap_or(chunk.len())
		} else {
			0
		};
		let end = chunk[start..]
			.iter()
			.position(|byte| is_separator(*byte))
			.map_or(chunk.len(), |offset| start + offset);

		let run = &chunk[start..end];
		pending.try_reserve(run.len())?;
		pending.extend_from_slice(run);

		// The separator closing the word is consumed with it
		if end < chunk.len() { Ok((end + 1, true)) } else { Ok((end, false)) }
	}
}

impl<R: BufRead> Iterator for Words<R> {
	type Item = Result<Vec<u8>>;

	fn next(&mut self) -> Option<Self::Item> {
		while !self.exhausted {
			let buf = match self.reader.fill_buf() {
				Ok(buf) => buf,
				Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
				Err(e) => {
					warn!("input read failed, treating as end of stream: {e}");
					self.exhausted = true;
					break;
				}
			};
			if buf.is_empty() {
				self.exhausted = true;
				break;
			}

			let (consumed, complete) = match Self::scan(&mut self.pending, buf) {
				Ok(scanned) => scanned,
				Err(e) => {
					self.exhausted = true;
					self.pending = Vec::new();
					return Some(Err(e));
				}
			};
			self.reader.consume(consumed);

			if complete {
				return Some(Ok(mem::take(&mut self.pending)));
			}
		}

		// Last word of a stream without trailing whitespace
		if self.pending.is_empty() { None } else { Some(Ok(mem::take(&mut self.pending))) }
	}
}

/// Opens the corpus to train on.
///
/// `None` and `"-"` both mean standard input.
pub fn open_corpus<P: AsRef<Path>>(path: Option<P>) -> io::Result<Box<dyn BufRead>> {
	match path {
		Some(path) if path.as_ref() != Path::new("-") => {
			Ok(Box::new(BufReader::new(File::open(path)?)))
		}
		_ => Ok(Box::new(BufReader::new(io::stdin()))),
	}
}

/// Writes generated words in the output format: every word followed by a
/// single space, the whole line terminated by a newline on [`finish`](Self::finish).
#[derive(Debug)]
pub struct WordWriter<W: Write> {
	out: W,
	written: usize,
}

impl<W: Write> WordWriter<W> {
	pub fn new(out: W) -> Self {
		Self { out, written: 0 }
	}

	pub fn write_word(&mut self, word: &[u8]) -> io::Result<()> {
		self.out.write_all(word)?;
		self.out.write_all(b" ")?;
		self.written += 1;
		Ok(())
	}

	/// Terminates the line and flushes. Returns the number of words written.
	pub fn finish(mut self) -> io::Result<usize> {
		self.out.write_all(b"\n")?;
		self.out.flush()?;
		Ok(self.written)
	}
}

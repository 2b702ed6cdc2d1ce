//! Line-oriented truth-table reader.
//!
//! A row is a line that, once surrounding whitespace is trimmed, is a run of
//! binary digits, a separator without any binary digits, and a second run,
//! e.g. `01 10` or `01 -> 10`. The first run is the input, the second the
//! output. Every other line is ignored, including comments that happen to
//! contain digits. Lines are handled as raw bytes, so ignored lines need not
//! be valid UTF-8.
//!
//! The width of a gate is the length of the first input seen after the
//! previous gate completed. Once `2^width` rows have been read the gate is
//! yielded and the next row starts a new gate. Rows may appear in any order.

use std::io::BufRead;

use fixedbitset::FixedBitSet;

use crate::error::{ReadError, RowSide};
use crate::gate::{Gate, MAX_WIDTH};

/// Iterator over the gates in a text stream.
///
/// Yields `Err` at most once; the iterator is finished after an error.
#[derive(Debug)]
pub struct TableReader<R> {
    inner: R,
    buf: Vec<u8>,
    line: usize,
    pending: Option<PendingGate>,
    done: bool,
}

impl<R: BufRead> TableReader<R> {
    /// Reads gates from `inner` line by line.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            line: 0,
            pending: None,
            done: false,
        }
    }

    /// Number of lines consumed so far.
    pub fn line(&self) -> usize {
        self.line
    }

    fn next_gate(&mut self) -> Result<Option<Gate>, ReadError> {
        loop {
            self.buf.clear();
            if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
                return match self.pending.take() {
                    None => Ok(None),
                    Some(pending) => Err(ReadError::TruncatedStream {
                        rows: pending.rows,
                        expected: pending.table.len(),
                    }),
                };
            }
            self.line += 1;

            let Some((input, output)) = split_row(&self.buf) else {
                continue;
            };
            let mut pending = match self.pending.take() {
                Some(pending) => pending,
                None => PendingGate::new(self.line, input.len())?,
            };
            pending.push(self.line, input, output)?;

            if pending.rows == pending.table.len() {
                return pending.finish(self.line).map(Some);
            }
            self.pending = Some(pending);
        }
    }
}

impl<R: BufRead> Iterator for TableReader<R> {
    type Item = Result<Gate, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.next_gate().transpose();
        if !matches!(item, Some(Ok(_))) {
            self.done = true;
        }
        item
    }
}

/// A gate whose rows are still being collected.
#[derive(Debug)]
struct PendingGate {
    width: usize,
    table: Vec<u32>,
    /// Inputs that already have a row.
    seen: FixedBitSet,
    rows: usize,
}

impl PendingGate {
    fn new(line: usize, width: usize) -> Result<Self, ReadError> {
        if width > MAX_WIDTH as usize {
            return Err(ReadError::WidthOutOfRange { line, width });
        }
        let size = 1usize << width;
        Ok(Self {
            width,
            table: vec![0; size],
            seen: FixedBitSet::with_capacity(size),
            rows: 0,
        })
    }

    fn push(&mut self, line: usize, input: &[u8], output: &[u8]) -> Result<(), ReadError> {
        for (side, run) in [(RowSide::Input, input), (RowSide::Output, output)] {
            if run.len() != self.width {
                return Err(ReadError::MalformedRow {
                    line,
                    side,
                    found: run.len(),
                    expected: self.width,
                });
            }
        }

        let x = parse_binary(input) as usize;
        if self.seen.put(x) {
            return Err(ReadError::DuplicateRow {
                line,
                input: String::from_utf8_lossy(input).into_owned(),
            });
        }
        self.table[x] = parse_binary(output);
        self.rows += 1;
        Ok(())
    }

    fn finish(self, line: usize) -> Result<Gate, ReadError> {
        Gate::new(self.width as u32, self.table).map_err(|source| ReadError::Gate { line, source })
    }
}

fn is_binary(b: &u8) -> bool {
    matches!(*b, b'0' | b'1')
}

/// Splits a line into its input and output runs, or `None` if the trimmed
/// line is not exactly `<bits><separator><bits>`.
fn split_row(line: &[u8]) -> Option<(&[u8], &[u8])> {
    let line = line.trim_ascii();
    let input_len = line.iter().position(|b| !is_binary(b))?;
    let output_start = input_len + line[input_len..].iter().position(is_binary)?;
    let (input, rest) = (&line[..input_len], &line[output_start..]);
    if input.is_empty() || !rest.iter().all(is_binary) {
        return None;
    }
    Some((input, rest))
}

/// Value of a run of at most 31 binary digits.
fn parse_binary(run: &[u8]) -> u32 {
    run.iter()
        .fold(0, |acc, &b| (acc << 1) | u32::from(b == b'1'))
}

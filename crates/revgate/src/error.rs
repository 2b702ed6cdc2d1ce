//! Error types for gate construction, classification and table reading.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::gate::MAX_WIDTH;

/// Errors raised while building or classifying a [`Gate`](crate::Gate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// The bit width is zero or larger than [`MAX_WIDTH`].
    #[error("gate width {0} is outside the supported range 1..={max}", max = MAX_WIDTH)]
    WidthOutOfRange(u32),

    /// The truth table does not have exactly `2^width` rows.
    #[error("truth table has {found} rows, expected {expected}")]
    TableLength {
        /// Rows supplied.
        found: usize,
        /// `2^width`.
        expected: usize,
    },

    /// An output value has bits set above the gate width.
    #[error("output {value:#b} for input {input:#b} does not fit in {width} bits")]
    ValueOutOfRange {
        /// Input whose output is too wide.
        input: u32,
        /// The offending output.
        value: u32,
        /// Width of the gate.
        width: u32,
    },

    /// Two inputs map to the same output.
    #[error("non-reversible gate")]
    NonReversibleGate,
}

/// Which half of a truth-table row an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSide {
    /// The first binary run of the row.
    Input,
    /// The second binary run of the row.
    Output,
}

impl fmt::Display for RowSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowSide::Input => f.write_str("input"),
            RowSide::Output => f.write_str("output"),
        }
    }
}

/// Errors raised by [`TableReader`](crate::TableReader).
///
/// Every variant is fatal: once one is returned the reader yields nothing
/// further.
#[derive(Debug, Error)]
pub enum ReadError {
    /// A row's input or output disagrees with the width fixed by the first
    /// row of the gate.
    #[error("line {line}: {side} length does not match gate size ({found} != {expected})")]
    MalformedRow {
        /// 1-based line number.
        line: usize,
        /// Which run has the wrong length.
        side: RowSide,
        /// Length of that run.
        found: usize,
        /// Width of the gate being read.
        expected: usize,
    },

    /// The first row of a gate is wider than [`MAX_WIDTH`].
    #[error(
        "line {line}: gate width {width} exceeds the supported maximum of {max}",
        max = MAX_WIDTH
    )]
    WidthOutOfRange {
        /// 1-based line number.
        line: usize,
        /// Length of the row's input run.
        width: usize,
    },

    /// The same input value appears twice within one gate.
    #[error("line {line}: input {input} already has a row in this gate")]
    DuplicateRow {
        /// 1-based line number of the second row.
        line: usize,
        /// The repeated input, as written.
        input: String,
    },

    /// Input ended while a gate was only partially populated.
    #[error("end of input in the middle of a gate ({rows} of {expected} rows)")]
    TruncatedStream {
        /// Rows read for the unfinished gate.
        rows: usize,
        /// Rows the gate needs.
        expected: usize,
    },

    /// A completed table was rejected when building the gate.
    #[error("gate ending at line {line}: {source}")]
    Gate {
        /// 1-based line number of the gate's last row.
        line: usize,
        /// Why the table was rejected.
        #[source]
        source: GateError,
    },

    /// The underlying reader failed.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

//! Classification of reversible Boolean gates.
//!
//! A reversible gate on `n` bits is a permutation of `{0, ..., 2^n - 1}`,
//! given as a complete truth table. This crate reduces such a table to an
//! algebraic fingerprint (affineness, linearity, orthogonality of the linear
//! part, and two weight-change moduli) and maps the fingerprint to the name
//! of the gate class it generates, e.g. `CNOT`, `T4`, `FREDKIN` or `ALL`.
//!
//! # Example
//! ```
//! use revgate::{ClassName, Gate, classify};
//!
//! // Toffoli: flip bit 2 when bits 0 and 1 are both set.
//! let toffoli = Gate::from_fn(3, |x| x ^ (((x & 1) & (x >> 1)) << 2)).unwrap();
//! assert_eq!(classify(&toffoli).unwrap(), ClassName::All);
//! ```
//!
//! Truth tables can also be read from text with [`TableReader`], which accepts
//! one `<input> <output>` row of binary digits per line.

mod affine;
mod classify;
mod error;
mod flags;
mod gate;
mod invertible;
mod matrix;
mod name;
mod reader;
mod spectrum;

pub use affine::{affine_offset, is_affine, is_linear};
pub use classify::{Classification, classify};
pub use error::{GateError, ReadError, RowSide};
pub use flags::{Flag, FlagSet};
pub use gate::{Gate, MAX_WIDTH, Permutations, permutations};
pub use invertible::is_bijective;
pub use matrix::LinearMatrix;
pub use name::ClassName;
pub use reader::TableReader;
pub use spectrum::{Spectrum, column_spectrum, gcd, hamming_spectrum, mod_class};

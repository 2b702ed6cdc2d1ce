//! Truth-table representation of a gate.

use std::fmt;

use crate::error::GateError;

/// Largest supported bit width. Inputs and outputs must fit in a `u32`
/// together with the `2^n` domain size.
pub const MAX_WIDTH: u32 = 31;

/// A total map on `n`-bit integers, stored as its truth table.
///
/// Construction checks the shape of the table but not bijectivity; that is
/// checked by [`classify`](crate::classify) before any analysis runs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Gate {
    width: u32,
    /// Output for every input, indexed by input value.
    ///
    /// Length MUST be `2^width`.
    table: Vec<u32>,
}

impl Gate {
    /// Builds a gate from a table indexed by input value.
    pub fn new(width: u32, table: Vec<u32>) -> Result<Self, GateError> {
        check_width(width)?;
        let expected = 1usize << width;
        if table.len() != expected {
            return Err(GateError::TableLength {
                found: table.len(),
                expected,
            });
        }
        if let Some((input, &value)) = table.iter().enumerate().find(|(_, v)| **v >> width != 0) {
            return Err(GateError::ValueOutOfRange {
                input: input as u32,
                value,
                width,
            });
        }
        Ok(Self { width, table })
    }

    /// Builds a gate by evaluating `f` on every input. Outputs are truncated
    /// to `width` bits.
    pub fn from_fn(width: u32, mut f: impl FnMut(u32) -> u32) -> Result<Self, GateError> {
        check_width(width)?;
        let mask = mask(width);
        let table = (0..1u32 << width).map(|x| f(x) & mask).collect();
        Ok(Self { width, table })
    }

    /// The identity gate on `width` bits.
    pub fn identity(width: u32) -> Result<Self, GateError> {
        Self::from_fn(width, |x| x)
    }

    /// Bit width `n`.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Domain size `2^n`.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always false: a gate of width `n >= 1` has `2^n >= 2` rows.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Outputs indexed by input value.
    pub fn table(&self) -> &[u32] {
        &self.table
    }

    /// Output for input `x`.
    ///
    /// # Panics
    /// If `x` is outside the domain.
    #[inline]
    pub fn apply(&self, x: u32) -> u32 {
        self.table[x as usize]
    }
}

impl fmt::Debug for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gate(n={}, {:?})", self.width, self.table)
    }
}

/// Writes one `<input> <output>` row per line, zero padded to the gate width.
/// [`TableReader`](crate::TableReader) reads this format back.
impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.width as usize;
        for (x, y) in self.table.iter().enumerate() {
            writeln!(f, "{x:0w$b} {y:0w$b}")?;
        }
        Ok(())
    }
}

fn check_width(width: u32) -> Result<(), GateError> {
    if width == 0 || width > MAX_WIDTH {
        return Err(GateError::WidthOutOfRange(width));
    }
    Ok(())
}

#[inline]
fn mask(width: u32) -> u32 {
    (1u32 << width) - 1
}

/// Every bijective gate of the given width, in lexicographic order of their
/// truth tables, starting from the identity.
///
/// There are `(2^n)!` of them, so this is only practical for `n <= 3`.
pub fn permutations(width: u32) -> Result<Permutations, GateError> {
    let first = Gate::identity(width)?;
    Ok(Permutations {
        width,
        next: Some(first.table),
    })
}

/// Iterator returned by [`permutations`].
#[derive(Debug, Clone)]
pub struct Permutations {
    width: u32,
    next: Option<Vec<u32>>,
}

impl Iterator for Permutations {
    type Item = Gate;

    fn next(&mut self) -> Option<Gate> {
        let table = self.next.take()?;
        let mut successor = table.clone();
        if next_permutation(&mut successor) {
            self.next = Some(successor);
        }
        Some(Gate {
            width: self.width,
            table,
        })
    }
}

/// Advances `v` to its lexicographic successor. Returns false if `v` was the
/// last permutation, leaving it untouched.
fn next_permutation(v: &mut [u32]) -> bool {
    let Some(i) = v.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let pivot = v[i];
    let j = (i + 1..v.len())
        .rev()
        .find(|&j| v[j] > pivot)
        .unwrap_or(i + 1);
    v.swap(i, j);
    v[i + 1..].reverse();
    true
}

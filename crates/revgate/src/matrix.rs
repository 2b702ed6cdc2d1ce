//! GF(2) matrix of the linear part of an affine gate.

use std::fmt;

use crate::error::GateError;
use crate::gate::{Gate, MAX_WIDTH};

/// An `n x n` matrix over GF(2), stored column-major as one `u32` per column.
///
/// Bit `j` of column `i` is the entry in row `j`; column `i` is the image of
/// basis vector `2^i` under the linear part.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinearMatrix {
    width: u32,
    /// Entries past `width` are always zero.
    columns: [u32; MAX_WIDTH as usize],
}

impl LinearMatrix {
    /// Extracts the linear part of an affine gate: column `i` is
    /// `G(2^i) ^ G(0)`, which cancels the constant offset.
    ///
    /// The result is only meaningful if the gate is affine.
    pub fn from_affine(gate: &Gate) -> Self {
        let g0 = gate.apply(0);
        let mut columns = [0u32; MAX_WIDTH as usize];
        for (i, column) in columns.iter_mut().take(gate.width() as usize).enumerate() {
            *column = gate.apply(1 << i) ^ g0;
        }
        Self {
            width: gate.width(),
            columns,
        }
    }

    /// Builds a matrix from explicit column words, one per column. Bits above
    /// the width are masked off.
    ///
    /// Fails with [`GateError::WidthOutOfRange`] if there are no columns or
    /// more than [`MAX_WIDTH`].
    pub fn from_columns(columns: &[u32]) -> Result<Self, GateError> {
        let width = u32::try_from(columns.len()).unwrap_or(u32::MAX);
        if width == 0 || width > MAX_WIDTH {
            return Err(GateError::WidthOutOfRange(width));
        }
        let mask = (1u32 << width) - 1;
        let mut out = [0u32; MAX_WIDTH as usize];
        for (dst, src) in out.iter_mut().zip(columns) {
            *dst = src & mask;
        }
        Ok(Self {
            width,
            columns: out,
        })
    }

    /// Number of rows and columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Column `i`, the image of basis vector `2^i`.
    ///
    /// # Panics
    /// If `i >= width`.
    #[inline]
    pub fn column(&self, i: usize) -> u32 {
        self.columns()[i]
    }

    /// The `width` columns, column 0 first.
    pub fn columns(&self) -> &[u32] {
        &self.columns[..self.width as usize]
    }

    /// Matrix-vector product over GF(2): XOR of the columns selected by the
    /// bits of `x`.
    pub fn apply(&self, x: u32) -> u32 {
        self.columns()
            .iter()
            .enumerate()
            .filter(|&(i, _)| (x >> i) & 1 == 1)
            .fold(0, |acc, (_, col)| acc ^ col)
    }

    /// True if every pair of distinct columns has even overlap, i.e. a zero
    /// GF(2) dot product.
    ///
    /// Says nothing about a column's product with itself, so this alone does
    /// not make the matrix orthogonal.
    pub fn columns_orthogonal(&self) -> bool {
        let cols = self.columns();
        for i in 1..cols.len() {
            for j in 0..i {
                if (cols[i] & cols[j]).count_ones() % 2 == 1 {
                    return false;
                }
            }
        }
        true
    }
}

impl fmt::Debug for LinearMatrix {
    /// Row by row, row 0 first, column 0 leftmost.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "LinearMatrix({}x{}) [", self.width, self.width)?;
        for row in 0..self.width {
            let bits: String = self
                .columns()
                .iter()
                .map(|col| if (col >> row) & 1 == 1 { '1' } else { '0' })
                .collect();
            writeln!(f, "  {bits}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t4() -> Gate {
        // Complement all four bits when the input has odd parity.
        Gate::from_fn(4, |x| if x.count_ones() % 2 == 1 { !x } else { x }).unwrap()
    }

    #[test]
    fn test_identity_matrix() {
        let m = LinearMatrix::from_affine(&Gate::identity(3).unwrap());
        assert_eq!(m.columns(), &[0b001, 0b010, 0b100]);
        assert!(m.columns_orthogonal());
    }

    #[test]
    fn test_offset_is_cancelled() {
        let gate = Gate::from_fn(3, |x| x ^ 0b101).unwrap();
        let m = LinearMatrix::from_affine(&gate);
        assert_eq!(m.columns(), &[0b001, 0b010, 0b100]);
    }

    #[test]
    fn test_cnot_matrix() {
        let cnot = Gate::from_fn(2, |x| x ^ ((x & 1) << 1)).unwrap();
        let m = LinearMatrix::from_affine(&cnot);
        assert_eq!(m.columns(), &[0b11, 0b10]);
        assert!(!m.columns_orthogonal());
    }

    #[test]
    fn test_t4_columns_are_orthogonal() {
        let m = LinearMatrix::from_affine(&t4());
        assert_eq!(m.columns(), &[0b1110, 0b1101, 0b1011, 0b0111]);
        assert!(m.columns_orthogonal());
    }

    #[test]
    fn test_apply_reproduces_linear_gate() {
        let gate = t4();
        let m = LinearMatrix::from_affine(&gate);
        for x in 0..16 {
            assert_eq!(m.apply(x), gate.apply(x));
        }
    }

    #[test]
    fn test_from_columns_masks() {
        let m = LinearMatrix::from_columns(&[0xff, 0b10]).unwrap();
        assert_eq!(m.width(), 2);
        assert_eq!(m.columns(), &[0b11, 0b10]);
        assert_eq!(m.column(0), 0b11);
    }

    #[test]
    fn test_from_columns_rejects_bad_width() {
        assert_eq!(
            LinearMatrix::from_columns(&[]),
            Err(GateError::WidthOutOfRange(0))
        );
        assert_eq!(
            LinearMatrix::from_columns(&[1; 32]),
            Err(GateError::WidthOutOfRange(32))
        );
    }

    #[test]
    fn test_single_column_is_trivially_orthogonal() {
        assert!(LinearMatrix::from_columns(&[1]).unwrap().columns_orthogonal());
    }
}

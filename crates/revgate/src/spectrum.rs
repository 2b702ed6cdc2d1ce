//! Weight-change spectra and their gcd moduli.

use std::fmt;

use crate::gate::Gate;
use crate::matrix::LinearMatrix;

/// A set of small non-negative integers, stored as a bitmask.
///
/// Weight differences on a 31-bit gate never exceed 31, so 64 slots are
/// plenty.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Spectrum(u64);

impl Spectrum {
    /// Largest value a spectrum can hold.
    pub const MAX: u32 = 63;

    const EVEN: u64 = 0x5555_5555_5555_5555;

    /// The empty spectrum.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Adds `k`. Returns false, leaving the spectrum unchanged, if `k`
    /// exceeds [`Spectrum::MAX`].
    #[inline]
    pub fn insert(&mut self, k: u32) -> bool {
        if k > Self::MAX {
            return false;
        }
        self.0 |= 1 << k;
        true
    }

    /// True if `k` is a member.
    pub fn contains(&self, k: u32) -> bool {
        k <= Self::MAX && self.0 & (1 << k) != 0
    }

    /// True if the spectrum has no members.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        let mut rest = self.0;
        std::iter::from_fn(move || {
            if rest == 0 {
                return None;
            }
            let k = rest.trailing_zeros();
            rest &= rest - 1;
            Some(k)
        })
    }

    /// True if some member is even (zero included).
    pub fn has_even(&self) -> bool {
        self.0 & Self::EVEN != 0
    }

    /// gcd of all members; 0 for the empty spectrum.
    pub fn modulus(&self) -> u32 {
        mod_class(self.iter())
    }
}

/// Collects weight differences. Every caller in this crate passes values of
/// at most [`MAX_WIDTH`](crate::MAX_WIDTH); larger ones are dropped, which
/// `debug_assert!` flags in test builds.
impl FromIterator<u32> for Spectrum {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut spectrum = Spectrum::new();
        for k in iter {
            let inserted = spectrum.insert(k);
            debug_assert!(inserted, "spectrum value {k} out of range");
        }
        spectrum
    }
}

impl fmt::Debug for Spectrum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// `{ |popcount(x) - popcount(G(x))| : x in domain }`.
pub fn hamming_spectrum(gate: &Gate) -> Spectrum {
    gate.table()
        .iter()
        .enumerate()
        .map(|(x, y)| (x as u32).count_ones().abs_diff(y.count_ones()))
        .collect()
}

/// `{ popcount(column_i) - 1 : i < n }`, the weight change of each basis
/// vector under the matrix.
///
/// Columns of an invertible matrix are nonzero; a zero column contributes 0.
pub fn column_spectrum(matrix: &LinearMatrix) -> Spectrum {
    matrix
        .columns()
        .iter()
        .map(|col| col.count_ones().saturating_sub(1))
        .collect()
}

/// Euclid's algorithm. `gcd(k, 0) == k`.
pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Folds [`gcd`] over `values` starting from 0. Order does not matter and
/// duplicates have no effect; an empty input gives 0.
pub fn mod_class(values: impl IntoIterator<Item = u32>) -> u32 {
    values.into_iter().fold(0, gcd)
}

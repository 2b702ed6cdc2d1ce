//! Algebraic fingerprint flags.

use std::fmt;

/// One property in a gate's fingerprint.
///
/// The discriminant is the flag's bit position in a [`FlagSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Flag {
    /// `G(x) = L(x) ^ c` for a linear `L`.
    Affine = 0,
    /// Affine with `G(0) = 0`.
    Linear = 1,
    /// Distinct columns of the linear part are orthogonal and INF2 holds.
    Ortho = 2,
    /// Column weights are all 1.
    Inf0 = 3,
    /// Column weights are 1 mod 4.
    Inf4 = 4,
    /// Column weights are 1 mod 2; for non-affine gates, every Hamming
    /// weight change is odd.
    Inf2 = 5,
}

impl Flag {
    /// Every flag, in bit order.
    pub const ALL: [Flag; 6] = [
        Flag::Affine,
        Flag::Linear,
        Flag::Ortho,
        Flag::Inf0,
        Flag::Inf4,
        Flag::Inf2,
    ];

    #[inline]
    const fn bit(self) -> u8 {
        1 << self as u8
    }

    /// Upper-case name used in fingerprints.
    pub const fn name(self) -> &'static str {
        match self {
            Flag::Affine => "AFFINE",
            Flag::Linear => "LINEAR",
            Flag::Ortho => "ORTHO",
            Flag::Inf0 => "INF0",
            Flag::Inf4 => "INF4",
            Flag::Inf2 => "INF2",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of independent [`Flag`]s.
///
/// Implications between flags (e.g. LINEAR implies AFFINE) come from how
/// [`Classification`](crate::Classification) computes them and are not
/// enforced here.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FlagSet(u8);

impl FlagSet {
    /// The set with no flags.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Decodes the low six bits of `bits`, using each flag's discriminant as
    /// its bit position.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & 0x3f)
    }

    /// Raw bits, one per flag at its discriminant.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Adds `flag`.
    #[inline]
    pub fn insert(&mut self, flag: Flag) {
        self.0 |= flag.bit();
    }

    /// Inserts `flag` if `cond` holds.
    #[inline]
    pub fn set(&mut self, flag: Flag, cond: bool) {
        if cond {
            self.insert(flag);
        }
    }

    /// True if `flag` is in the set.
    #[inline]
    pub const fn contains(self, flag: Flag) -> bool {
        self.0 & flag.bit() != 0
    }

    /// True if no flag is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Contained flags in bit order.
    pub fn iter(self) -> impl Iterator<Item = Flag> {
        Flag::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}

impl FromIterator<Flag> for FlagSet {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        let mut set = FlagSet::empty();
        for flag in iter {
            set.insert(flag);
        }
        set
    }
}

/// `AFFINE|LINEAR|...` in declaration order, or `-` when empty.
impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (i, flag) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            f.write_str(flag.name())?;
        }
        Ok(())
    }
}

impl fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlagSet({self})")
    }
}

//! Class names and the decision tree that picks one from a fingerprint.

use std::fmt;

use crate::flags::{Flag, FlagSet};

/// The gate classes that a fingerprint can name.
///
/// `Display` gives the canonical upper-case spelling, e.g. `T6+NOTNOT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClassName {
    // Affine classes.
    /// `EMPTY`: wire permutations only.
    Empty,
    /// `NOT`.
    Not,
    /// `NOTNOT`: even numbers of negations.
    NotNot,
    /// `T6+NOT`.
    T6Not,
    /// `T6+NOTNOT`.
    T6NotNot,
    /// `T6`.
    T6,
    /// `T4`.
    T4,
    /// `F4+NOT`.
    F4Not,
    /// `F4+NOTNOT`.
    F4NotNot,
    /// `F4`.
    F4,
    /// `CNOTNOT+NOT`.
    CnotNotNot,
    /// `CNOTNOT`.
    CnotNot,
    /// `CNOT`: every affine gate.
    Cnot,
    // Non-affine classes.
    /// `FREDKIN`: conservative gates.
    Fredkin,
    /// `FREDKIN+NOT`.
    FredkinNot,
    /// `ALL`: every reversible gate.
    All,
    /// Non-affine gates whose Hamming weight changes are all multiples of
    /// the given modulus (at least 2).
    Mod(u32),
}

impl ClassName {
    /// Maps a fingerprint to a class name. Total: every flag set and modulus
    /// yields a name, and the first matching branch wins.
    ///
    /// INF0 and INF4 are tested before ORTHO, so a linear orthogonal matrix
    /// whose columns are 1 mod 4 is named in the T6 family, not T4.
    pub fn from_fingerprint(flags: FlagSet, modulus: u32) -> Self {
        if !flags.contains(Flag::Affine) {
            return match modulus {
                0 => ClassName::Fredkin,
                1 if flags.contains(Flag::Inf2) => ClassName::FredkinNot,
                1 => ClassName::All,
                k => ClassName::Mod(k),
            };
        }

        if flags.contains(Flag::Inf0) {
            match modulus {
                0 => ClassName::Empty,
                1 => ClassName::Not,
                _ => ClassName::NotNot,
            }
        } else if flags.contains(Flag::Inf4) {
            match modulus {
                1 => ClassName::T6Not,
                2 => ClassName::T6NotNot,
                _ => ClassName::T6,
            }
        } else if flags.contains(Flag::Ortho) {
            if flags.contains(Flag::Linear) {
                return ClassName::T4;
            }
            match modulus {
                1 => ClassName::F4Not,
                2 => ClassName::F4NotNot,
                _ => ClassName::F4,
            }
        } else if flags.contains(Flag::Inf2) {
            match modulus {
                1 => ClassName::CnotNotNot,
                _ => ClassName::CnotNot,
            }
        } else {
            ClassName::Cnot
        }
    }

    /// True for the classes reachable only from affine fingerprints.
    pub fn is_affine(self) -> bool {
        !matches!(
            self,
            ClassName::Fredkin | ClassName::FredkinNot | ClassName::All | ClassName::Mod(_)
        )
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClassName::Empty => "EMPTY",
            ClassName::Not => "NOT",
            ClassName::NotNot => "NOTNOT",
            ClassName::T6Not => "T6+NOT",
            ClassName::T6NotNot => "T6+NOTNOT",
            ClassName::T6 => "T6",
            ClassName::T4 => "T4",
            ClassName::F4Not => "F4+NOT",
            ClassName::F4NotNot => "F4+NOTNOT",
            ClassName::F4 => "F4",
            ClassName::CnotNotNot => "CNOTNOT+NOT",
            ClassName::CnotNot => "CNOTNOT",
            ClassName::Cnot => "CNOT",
            ClassName::Fredkin => "FREDKIN",
            ClassName::FredkinNot => "FREDKIN+NOT",
            ClassName::All => "ALL",
            ClassName::Mod(k) => return write!(f, "MOD{k}"),
        };
        f.write_str(name)
    }
}

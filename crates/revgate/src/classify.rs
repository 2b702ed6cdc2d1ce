//! The classification pipeline: invertibility, affine analysis, invariant
//! spectra, orthogonality, naming.

use crate::affine::affine_offset;
use crate::error::GateError;
use crate::flags::{Flag, FlagSet};
use crate::gate::Gate;
use crate::invertible::is_bijective;
use crate::matrix::LinearMatrix;
use crate::name::ClassName;
use crate::spectrum::{column_spectrum, hamming_spectrum};

/// A gate's algebraic fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification {
    /// Properties the gate satisfies.
    pub flags: FlagSet,
    /// gcd of the gate's Hamming weight changes.
    pub modulus: u32,
}

impl Classification {
    /// Computes the fingerprint of a gate.
    ///
    /// Fails with [`GateError::NonReversibleGate`] before any analysis if the
    /// gate is not a bijection.
    pub fn of(gate: &Gate) -> Result<Self, GateError> {
        if !is_bijective(gate) {
            return Err(GateError::NonReversibleGate);
        }

        let hamming = hamming_spectrum(gate);
        let modulus = hamming.modulus();
        let mut flags = FlagSet::empty();

        match affine_offset(gate) {
            Some(offset) => {
                flags.insert(Flag::Affine);
                flags.set(Flag::Linear, offset == 0);

                let matrix = LinearMatrix::from_affine(gate);
                let inf = column_spectrum(&matrix).modulus();
                flags.set(Flag::Inf0, inf == 0);
                flags.set(Flag::Inf4, inf % 4 == 0);
                flags.set(Flag::Inf2, inf % 2 == 0);

                // Pairwise orthogonality only counts together with odd
                // column weights.
                flags.set(
                    Flag::Ortho,
                    flags.contains(Flag::Inf2) && matrix.columns_orthogonal(),
                );
            }
            None => {
                flags.set(Flag::Inf2, !hamming.has_even());
            }
        }

        Ok(Self { flags, modulus })
    }

    /// The class this fingerprint names.
    pub fn name(&self) -> ClassName {
        ClassName::from_fingerprint(self.flags, self.modulus)
    }
}

/// Names the class of a reversible gate.
///
/// Fails with [`GateError::NonReversibleGate`] if the gate is not a
/// bijection.
pub fn classify(gate: &Gate) -> Result<ClassName, GateError> {
    Classification::of(gate).map(|c| c.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(width: u32, f: impl FnMut(u32) -> u32) -> Gate {
        Gate::from_fn(width, f).unwrap()
    }

    fn parity(x: u32) -> bool {
        x.count_ones() % 2 == 1
    }

    /// Complements all `width` bits when the input has odd parity.
    fn parity_flip(width: u32) -> Gate {
        gate(width, |x| if parity(x) { !x } else { x })
    }

    fn xor_after(g: &Gate, c: u32) -> Gate {
        gate(g.width(), |x| g.apply(x) ^ c)
    }

    fn fredkin() -> Gate {
        // Bit 0 controls a swap of bits 1 and 2.
        gate(3, |x| {
            if x & 1 == 1 {
                let b1 = (x >> 1) & 1;
                let b2 = (x >> 2) & 1;
                1 | (b2 << 1) | (b1 << 2)
            } else {
                x
            }
        })
    }

    #[test]
    fn test_non_reversible() {
        let g = Gate::new(1, vec![0, 0]).unwrap();
        assert_eq!(classify(&g), Err(GateError::NonReversibleGate));
        assert_eq!(Classification::of(&g), Err(GateError::NonReversibleGate));
    }

    #[test]
    fn test_identity_is_empty() {
        for width in 1..=6 {
            let c = Classification::of(&Gate::identity(width).unwrap()).unwrap();
            let expected: FlagSet = [Flag::Affine, Flag::Linear, Flag::Ortho, Flag::Inf0, Flag::Inf4, Flag::Inf2]
                .into_iter()
                .collect();
            assert_eq!(c.flags, expected);
            assert_eq!(c.modulus, 0);
            assert_eq!(c.name(), ClassName::Empty);
        }
    }

    #[test]
    fn test_not() {
        let c = Classification::of(&Gate::new(1, vec![1, 0]).unwrap()).unwrap();
        assert!(c.flags.contains(Flag::Affine));
        assert!(!c.flags.contains(Flag::Linear));
        assert!(c.flags.contains(Flag::Inf0));
        assert_eq!(c.modulus, 1);
        assert_eq!(c.name(), ClassName::Not);
    }

    #[test]
    fn test_wire_swap_is_empty() {
        let swap = gate(2, |x| ((x & 1) << 1) | (x >> 1));
        assert_eq!(classify(&swap).unwrap(), ClassName::Empty);
    }

    #[test]
    fn test_not_family() {
        assert_eq!(classify(&gate(3, |x| x ^ 0b100)).unwrap(), ClassName::Not);
        assert_eq!(classify(&gate(2, |x| x ^ 0b11)).unwrap(), ClassName::NotNot);
    }

    #[test]
    fn test_cnot_family() {
        let cnot = gate(2, |x| x ^ ((x & 1) << 1));
        assert_eq!(classify(&cnot).unwrap(), ClassName::Cnot);
        assert_eq!(classify(&xor_after(&cnot, 0b01)).unwrap(), ClassName::Cnot);

        // Bit 0 controls a flip of bits 1 and 2.
        let cnotnot = gate(3, |x| if x & 1 == 1 { x ^ 0b110 } else { x });
        assert_eq!(classify(&cnotnot).unwrap(), ClassName::CnotNot);
        assert_eq!(
            classify(&xor_after(&cnotnot, 0b001)).unwrap(),
            ClassName::CnotNotNot
        );
    }

    #[test]
    fn test_t4_family() {
        let t4 = parity_flip(4);
        let c = Classification::of(&t4).unwrap();
        assert!(c.flags.contains(Flag::Ortho));
        assert!(c.flags.contains(Flag::Linear));
        assert!(!c.flags.contains(Flag::Inf4));
        assert_eq!(c.name(), ClassName::T4);

        assert_eq!(classify(&xor_after(&t4, 0b0001)).unwrap(), ClassName::F4Not);
        assert_eq!(classify(&xor_after(&t4, 0b0011)).unwrap(), ClassName::F4NotNot);
        assert_eq!(classify(&xor_after(&t4, 0b1111)).unwrap(), ClassName::F4);
    }

    #[test]
    fn test_t6_family() {
        let t6 = parity_flip(6);
        let c = Classification::of(&t6).unwrap();
        assert!(c.flags.contains(Flag::Inf4));
        assert!(!c.flags.contains(Flag::Inf0));
        assert_eq!(c.modulus, 4);
        assert_eq!(c.name(), ClassName::T6);

        assert_eq!(classify(&xor_after(&t6, 0b000001)).unwrap(), ClassName::T6Not);
        assert_eq!(classify(&xor_after(&t6, 0b000011)).unwrap(), ClassName::T6NotNot);
    }

    #[test]
    fn test_toffoli_is_all() {
        let toffoli = gate(3, |x| x ^ (((x & 1) & (x >> 1)) << 2));
        let c = Classification::of(&toffoli).unwrap();
        assert!(!c.flags.contains(Flag::Affine));
        assert!(!c.name().is_affine());
        assert_eq!(c.name(), ClassName::All);
    }

    #[test]
    fn test_fredkin_family() {
        let f = fredkin();
        let c = Classification::of(&f).unwrap();
        assert_eq!(c.modulus, 0);
        assert_eq!(c.name(), ClassName::Fredkin);

        assert_eq!(classify(&xor_after(&f, 0b001)).unwrap(), ClassName::FredkinNot);
        assert_eq!(classify(&xor_after(&f, 0b111)).unwrap(), ClassName::FredkinNot);
        assert_eq!(classify(&xor_after(&f, 0b011)).unwrap(), ClassName::Mod(2));
    }
}

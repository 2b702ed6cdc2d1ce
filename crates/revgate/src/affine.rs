use crate::gate::Gate;

/// Returns the constant offset `c = G(0)` if `G(x) = L(x) ^ c` for some
/// GF(2)-linear `L`, or `None` if the gate is not affine.
///
/// An affine map satisfies `G(a) ^ G(b) ^ G(a ^ b) == G(0)` for all `a, b`.
/// It is enough to check the triples `(x, z, x ^ z)` where `z` is the lowest
/// set bit of `x`: by induction on the number of set bits, these force
/// `G(x) ^ G(0)` to be the XOR of `G(2^i) ^ G(0)` over the bits `i` of `x`.
pub fn affine_offset(gate: &Gate) -> Option<u32> {
    let g0 = gate.apply(0);
    for x in 1..gate.len() as u32 {
        let z = x & x.wrapping_neg();
        if gate.apply(x) ^ gate.apply(z) ^ gate.apply(x ^ z) != g0 {
            return None;
        }
    }
    Some(g0)
}

/// See [`affine_offset`].
pub fn is_affine(gate: &Gate) -> bool {
    affine_offset(gate).is_some()
}

/// Affine with zero offset.
pub fn is_linear(gate: &Gate) -> bool {
    affine_offset(gate) == Some(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_is_affine_not_linear() {
        let gate = Gate::new(1, vec![1, 0]).unwrap();
        assert_eq!(affine_offset(&gate), Some(1));
        assert!(is_affine(&gate));
        assert!(!is_linear(&gate));
    }

    #[test]
    fn test_cnot_is_linear() {
        let cnot = Gate::from_fn(2, |x| x ^ ((x & 1) << 1)).unwrap();
        assert!(is_linear(&cnot));
    }

    #[test]
    fn test_toffoli_is_not_affine() {
        let toffoli = Gate::from_fn(3, |x| x ^ (((x & 1) & (x >> 1)) << 2)).unwrap();
        assert_eq!(affine_offset(&toffoli), None);
    }

    #[test]
    fn test_affine_with_offset() {
        // Linear part swaps bits 0 and 2 and adds bit 0 into bit 1.
        let lin = |x: u32| {
            let b0 = x & 1;
            let b1 = (x >> 1) & 1;
            let b2 = (x >> 2) & 1;
            b2 | ((b1 ^ b0) << 1) | (b0 << 2)
        };
        let gate = Gate::from_fn(3, |x| lin(x) ^ 0b110).unwrap();
        assert_eq!(affine_offset(&gate), Some(0b110));
    }

    #[test]
    fn test_single_defect_breaks_affinity() {
        // Identity with the two highest entries swapped.
        let mut table: Vec<u32> = (0..8).collect();
        table.swap(6, 7);
        let gate = Gate::new(3, table).unwrap();
        assert!(!is_affine(&gate));
    }
}

use fixedbitset::FixedBitSet;

use crate::gate::Gate;

/// Checks that the gate is a bijection on `[0, 2^n)`.
///
/// Marks every output in a presence set; the domain is finite, so hitting
/// `2^n` distinct values means the map is onto and therefore one-to-one.
pub fn is_bijective(gate: &Gate) -> bool {
    let mut hit = FixedBitSet::with_capacity(gate.len());
    for &y in gate.table() {
        hit.insert(y as usize);
    }
    hit.count_ones(..) == gate.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_bijective() {
        for width in 1..=8 {
            assert!(is_bijective(&Gate::identity(width).unwrap()));
        }
    }

    #[test]
    fn test_collision_is_detected() {
        let gate = Gate::new(1, vec![0, 0]).unwrap();
        assert!(!is_bijective(&gate));

        let gate = Gate::new(2, vec![3, 1, 2, 1]).unwrap();
        assert!(!is_bijective(&gate));
    }

    #[test]
    fn test_constant_map_is_not_bijective() {
        let gate = Gate::from_fn(4, |_| 5).unwrap();
        assert!(!is_bijective(&gate));
    }
}

//! Literal encoding shared by every datapath component.
//!
//! A variable `v` in `1..=V` has two literals: `2*v` (positive) and `2*v + 1`
//! (negative). `0` is reserved as a padding slot and never denotes a real
//! literal.

/// An encoded literal, or `0` for padding.
pub type Lit = u32;

/// An encoded variable id, `1..=V`.
pub type Var = u32;

/// Flips the polarity of `lit`. `negate(0) == 0`.
#[inline]
pub fn negate(lit: Lit) -> Lit {
    if lit == 0 {
        0
    } else {
        lit ^ 1
    }
}

/// The variable a literal refers to (`lit / 2`). Undefined for `lit == 0`.
#[inline]
pub fn variable(lit: Lit) -> Var {
    lit / 2
}

/// Encodes a signed DIMACS-style literal (`raw > 0` positive, `raw < 0`
/// negative) into the internal `2*v` / `2*v + 1` scheme.
#[inline]
pub fn encode(raw: i64) -> Lit {
    if raw > 0 {
        2 * raw as Lit
    } else {
        2 * raw.unsigned_abs() as Lit + 1
    }
}

/// Decodes the (variable, value) assignment that makes `lit` *false*.
///
/// An even literal `2*v` represents `x_v`; it is false exactly when
/// `x_v == false`. An odd literal `2*v + 1` represents `!x_v`; it is false
/// exactly when `x_v == true`.
#[inline]
pub fn falsifying_assignment(lit: Lit) -> (Var, bool) {
    (variable(lit), lit % 2 == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negate_is_involution() {
        for lit in [2u32, 3, 4, 5, 100, 101] {
            assert_eq!(negate(negate(lit)), lit);
        }
    }

    #[test]
    fn negate_zero_is_zero() {
        assert_eq!(negate(0), 0);
    }

    #[test]
    fn variable_of_positive_and_negative_literal() {
        assert_eq!(variable(6), 3);
        assert_eq!(variable(7), 3);
    }

    #[test]
    fn falsifying_assignment_matches_spec_rationale() {
        // 2*v (x_v) is false when x_v == false.
        assert_eq!(falsifying_assignment(6), (3, false));
        // 2*v+1 (!x_v) is false when x_v == true.
        assert_eq!(falsifying_assignment(7), (3, true));
    }

    #[test]
    fn encode_matches_dimacs_convention() {
        assert_eq!(encode(3), 6);
        assert_eq!(encode(-3), 7);
        assert_eq!(encode(1), 2);
        assert_eq!(encode(-1), 3);
    }
}

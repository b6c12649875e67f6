//! GF(2) polynomial helpers used by the feedback-polynomial search.
//!
//! A `u32` encodes a polynomial over GF(2) where bit `i` is the coefficient
//! of x^i. Addition is XOR, so long division reduces to shift-and-XOR.

/// Degree of a nonzero polynomial (position of the highest set bit).
#[inline]
pub const fn degree(p: u32) -> u32 {
    debug_assert!(p != 0);
    31 - p.leading_zeros()
}

/// Whether `divisor` divides `p` exactly in GF(2)[x].
///
/// XORs `divisor`, shifted to align leading bits, into `p` until the
/// remainder drops below `divisor`; divisible iff the remainder is zero.
pub fn divides(mut p: u32, divisor: u32) -> bool {
    let divisor_degree = degree(divisor);
    while p >= divisor {
        p ^= divisor << (degree(p) - divisor_degree);
    }
    p == 0
}

/// Trial-division screen applied to feedback-polynomial candidates.
///
/// Tries every odd value 3, 5, 7, ... strictly below `2^(degree/2 + 1)` as a
/// divisor and rejects `p` on the first hit. This is an irreducibility
/// heuristic rather than a true primitivity test, but it is the exact check
/// the candidate pool is defined by, so it must not be tightened: a stricter
/// test would change which polynomials the selector can hand out.
pub fn passes_trial_division(p: u32) -> bool {
    let check_cap = 1u32 << (degree(p) / 2 + 1);
    let mut trial = 3;
    while trial < check_cap {
        if divides(p, trial) {
            return false;
        }
        trial += 2;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_is_highest_set_bit() {
        assert_eq!(degree(0b1), 0);
        assert_eq!(degree(0b111), 2);
        assert_eq!(degree(1 << 20 | 5), 20);
    }

    #[test]
    fn division_reduces_by_aligned_xor() {
        // x^4 + x^2 + 1 = (x^2 + x + 1)^2 over GF(2).
        assert!(divides(0b10101, 0b111));
        // x^4 + x + 1 is irreducible; nothing small divides it.
        assert!(!divides(0b10011, 0b11));
        assert!(!divides(0b10011, 0b111));
        // Any polynomial divides itself.
        assert!(divides(0b10011, 0b10011));
    }

    #[test]
    fn trial_division_rejects_even_weight() {
        // Even-weight polynomials evaluate to 0 at x = 1, so x + 1 (= 3)
        // divides them and the screen rejects them immediately.
        assert!(!passes_trial_division(0b1000000000000000011001));
    }

    #[test]
    fn trial_division_accepts_known_trinomials() {
        // x^18 + x^7 + 1 and x^7 + x + 1 are primitive.
        assert!(passes_trial_division(1 << 18 | 1 << 7 | 1));
        assert!(passes_trial_division(1 << 7 | 1 << 1 | 1));
    }

    #[test]
    fn trial_division_rejects_square_factors() {
        // x^20 + x^2 + 1 = (x^10 + x + 1)^2.
        assert!(!passes_trial_division(1 << 20 | 1 << 2 | 1));
    }
}

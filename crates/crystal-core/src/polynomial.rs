//! Feedback-polynomial search, pool cache, and selection.
//!
//! The device draws its feedback polynomial from a process-wide pool of
//! candidates over degrees 18..=24. The pool is enumerated once, lazily, and
//! never mutated afterwards; every device constructed in the process picks
//! uniformly from the same pool.
//!
//! The enumeration order and the trial-division screen together define the
//! selection distribution, so both are kept exactly as the search below
//! spells them out. Each degree runs two rounds of a decrement-and-backtrack
//! walk over interior tap positions: one with a single interior position
//! (trinomials `x^d + x^p + 1`) and one with three (pentanomials).

use once_cell::sync::Lazy;
use tracing::debug;

use crate::gf2;
use crate::rng::SplitMix64;

/// Smallest register width the search considers.
pub const MIN_DEGREE: u32 = 18;
/// Largest register width the search considers.
pub const MAX_DEGREE: u32 = 24;

/// A GF(2) feedback polynomial: bit `i` set means the degree-`i` term is present.
///
/// Always carries the constant term (bit 0) and the leading term (bit `degree`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPolynomial(u32);

impl FeedbackPolynomial {
    /// Wraps a raw term bitmask.
    ///
    /// Intended for fixed, known-good polynomials (tests, replays). The mask
    /// must carry bit 0 and a leading term; `select` is the normal entry point.
    #[inline]
    pub const fn from_mask(mask: u32) -> Self {
        Self(mask)
    }

    /// Raw term bitmask.
    #[inline]
    pub const fn mask(self) -> u32 {
        self.0
    }

    /// Tap mask for the LFSR: the polynomial with the constant term shifted
    /// out, so the leading term lands on register bit `degree - 1`.
    #[inline]
    pub const fn taps(self) -> u32 {
        self.0 >> 1
    }

    /// Register width, recovered from the tap mask the same way the engine
    /// recovers it.
    #[inline]
    pub const fn degree(self) -> u32 {
        gf2::degree((self.taps() << 1) | 1)
    }

    /// Number of nonzero terms. Always odd for pool members (3 or 5).
    #[inline]
    pub const fn weight(self) -> u32 {
        self.0.count_ones()
    }
}

static CANDIDATE_POOL: Lazy<Vec<u32>> = Lazy::new(|| {
    let mut pool = Vec::new();
    for degree in MIN_DEGREE..=MAX_DEGREE {
        enumerate_degree(degree as i32, &mut pool);
    }
    debug!(candidates = pool.len(), "feedback polynomial pool populated");
    pool
});

/// All candidate polynomials, in enumeration order.
///
/// Computed on first use and cached for the life of the process.
pub fn candidate_pool() -> &'static [u32] {
    &CANDIDATE_POOL
}

/// Draws a uniformly random pool member.
pub fn select(rng: &mut SplitMix64) -> FeedbackPolynomial {
    let pool = candidate_pool();
    let pick = rng.next_below(pool.len() as u64) as usize;
    FeedbackPolynomial(pool[pick])
}

/// Appends every trial-division survivor of one degree to `pool`.
///
/// The walk keeps a fixed-capacity stack of term positions seeded with the
/// degree itself. Each round tops the stack up with descending positions,
/// emits a candidate, then decrements the top position; when the top falls
/// below 1 it backtracks by popping and decrementing the next position down,
/// and the round ends once only the degree itself remains.
fn enumerate_degree(degree: i32, pool: &mut Vec<u32>) {
    let mut parameter_count = 0i32;
    while parameter_count < 4 {
        let mut stack = [0i32; 4];
        stack[0] = degree;
        let mut len = 1usize;
        parameter_count += 2;

        while degree > parameter_count {
            while len < parameter_count as usize {
                stack[len] = stack[len - 1] - 1;
                len += 1;
            }

            if stack[len - 1] < 1 {
                while stack[len - 1] < 1 {
                    len -= 1;
                    stack[len - 1] -= 1;
                }
                if len <= 1 {
                    break;
                }
                continue;
            }

            let mut polynomial = 1u32;
            for &position in &stack[..len] {
                polynomial |= 1 << position;
            }
            if gf2::passes_trial_division(polynomial) {
                pool.push(polynomial);
            }

            stack[len - 1] -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_18_round_trip() {
        // x^18 + x^7 + 1.
        let poly = FeedbackPolynomial(1 << 18 | 1 << 7 | 1);
        assert_eq!(poly.degree(), 18);
        assert_eq!(poly.taps(), 1 << 17 | 1 << 6);
        assert_eq!(poly.weight(), 3);
    }

    #[test]
    fn enumeration_finds_known_degree_18_trinomials() {
        let mut pool = Vec::new();
        enumerate_degree(18, &mut pool);
        // The five irreducible-screened trinomials of degree 18, in the
        // decreasing-position order the walk visits them.
        let trinomials: Vec<u32> = pool.iter().copied().filter(|p| p.count_ones() == 3).collect();
        assert_eq!(
            trinomials,
            vec![
                1 << 18 | 1 << 15 | 1,
                1 << 18 | 1 << 11 | 1,
                1 << 18 | 1 << 9 | 1,
                1 << 18 | 1 << 7 | 1,
                1 << 18 | 1 << 3 | 1,
            ]
        );
    }

    #[test]
    fn selection_is_deterministic_per_seed() {
        let mut a = SplitMix64::new(99);
        let mut b = SplitMix64::new(99);
        for _ in 0..16 {
            assert_eq!(select(&mut a), select(&mut b));
        }
    }

    #[test]
    fn selection_spans_multiple_degrees() {
        let mut rng = SplitMix64::new(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..512 {
            seen.insert(select(&mut rng).degree());
        }
        assert!(seen.len() > 1);
        assert!(seen.iter().all(|&d| (MIN_DEGREE..=MAX_DEGREE).contains(&d)));
    }
}

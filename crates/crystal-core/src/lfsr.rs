//! Fibonacci linear-feedback shift register.

use crate::error::Error;
use crate::gf2;
use crate::polynomial::FeedbackPolynomial;
use crate::rng::SplitMix64;

/// Shift register with fixed taps; one output bit per step.
///
/// The register width is recovered from the tap mask as
/// `degree((taps << 1) | 1)`, i.e. the tap on the highest register bit stands
/// in for the polynomial's leading term. Feedback is the parity of the tapped
/// bits, shifted into the new low end of the register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lfsr {
    register: u32,
    taps: u32,
    degree: u32,
}

impl Lfsr {
    /// Builds an engine from a selected polynomial and an explicit seed.
    ///
    /// Fails fast on a zero seed: zero is the one state the register can
    /// never leave.
    pub fn new(polynomial: FeedbackPolynomial, register: u32) -> Result<Self, Error> {
        Self::with_taps(polynomial.taps(), register)
    }

    /// Builds an engine from a raw tap mask and an explicit seed.
    pub fn with_taps(taps: u32, register: u32) -> Result<Self, Error> {
        if taps == 0 {
            return Err(Error::EmptyTapMask);
        }
        // degree((taps << 1) | 1), computed without shifting off the top bit.
        let degree = gf2::degree(taps) + 1;
        if register == 0 {
            return Err(Error::ZeroRegister { degree });
        }
        if degree < 32 && register >> degree != 0 {
            return Err(Error::RegisterOutOfRange { register, degree });
        }
        Ok(Self {
            register,
            taps,
            degree,
        })
    }

    /// Builds an engine with a register drawn uniformly from `[1, 2^degree - 1]`.
    pub fn seeded(polynomial: FeedbackPolynomial, rng: &mut SplitMix64) -> Self {
        let degree = polynomial.degree();
        let register = 1 + rng.next_below((1u64 << degree) - 1) as u32;
        Self {
            register,
            taps: polynomial.taps(),
            degree,
        }
    }

    /// Advances the register by one step and returns the output bit.
    ///
    /// The output is the new register's low bit after the shift, interpreted
    /// as heads when set.
    pub fn step(&mut self) -> bool {
        let tapped = self.register & self.taps;
        let feedback = tapped.count_ones() & 1;
        let mask = ((1u64 << self.degree) - 1) as u32;
        self.register = ((self.register << 1) | feedback) & mask;
        self.register & 1 == 1
    }

    /// Current register contents.
    pub fn register(&self) -> u32 {
        self.register
    }

    /// Tap mask in register coordinates.
    pub fn taps(&self) -> u32 {
        self.taps
    }

    /// Register width in bits.
    pub fn degree(&self) -> u32 {
        self.degree
    }
}

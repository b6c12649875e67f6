//! Golden-output regression for a fixed tap configuration.

use crystal_core::lfsr::Lfsr;
use crystal_core::polynomial::FeedbackPolynomial;

// x^20 + x^2 + 1: not a pool member (it has a square factor), but the engine
// does not care; any fixed taps give a reproducible bit stream.
const POLYNOMIAL: u32 = 1 << 20 | 1 << 2 | 1;

#[test]
fn taps_derive_from_the_polynomial() {
    let poly = FeedbackPolynomial::from_mask(POLYNOMIAL);
    assert_eq!(poly.taps(), 0x80002);
    assert_eq!(poly.degree(), 20);
}

#[test]
fn five_steps_from_register_one() {
    let mut lfsr = Lfsr::with_taps(0x80002, 1).expect("valid engine");
    assert_eq!(lfsr.degree(), 20);

    let mut bits = Vec::new();
    let mut registers = Vec::new();
    for _ in 0..5 {
        bits.push(lfsr.step());
        registers.push(lfsr.register());
    }

    assert_eq!(bits, [false, true, false, true, false]);
    assert_eq!(registers, [2, 5, 10, 21, 42]);
}

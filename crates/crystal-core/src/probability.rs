//! Exact decimal expansion of (1/2)^n for the odds display.

/// Returns the exact decimal digits of `(1/2)^n`, with no rounding.
///
/// `"1"` for n = 0, otherwise `"0."` followed by exactly `n` digits. The
/// expansion is built by repeated halving of a digit list seeded with `[5]`:
/// scanning from the least significant digit, an odd digit passes a 5 into
/// the position below it (growing the list when there is none yet), then the
/// digit itself is halved. Every halving grows the list by one digit, since
/// the last digit is always 5.
pub fn probability_decimal(n: u32) -> String {
    if n == 0 {
        return "1".to_owned();
    }

    let mut digits: Vec<u8> = vec![5];
    for _ in 1..n {
        for i in (0..digits.len()).rev() {
            let carry = (digits[i] % 2) * 5;
            if carry != 0 {
                if i == digits.len() - 1 {
                    digits.push(carry);
                } else {
                    digits[i + 1] += carry;
                }
            }
            digits[i] /= 2;
        }
    }

    let mut out = String::with_capacity(digits.len() + 2);
    out.push_str("0.");
    out.extend(digits.iter().map(|&d| char::from(b'0' + d)));
    out
}

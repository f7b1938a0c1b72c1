/// Greatest common divisor of two integers (Euclid).
///
/// The result is always non-negative, and `gcd(0, 0) == 0`, so folding a
/// list of coefficients starting from `0` yields the gcd of the list.
///
/// # Panics
///
/// Panics if the result is `2^63`, which happens only when both inputs are
/// `0` or `i64::MIN` and at least one is `i64::MIN`.
pub const fn gcd(a: i64, b: i64) -> i64 {
    let g = gcd_u128(a.unsigned_abs() as u128, b.unsigned_abs() as u128);
    assert!(g <= i64::MAX as u128, "gcd overflows i64");
    g as i64
}

/// Euclid on unsigned magnitudes, wide enough for `i128` intermediates.
pub(crate) const fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Computes the greatest common divisor of two numbers.
///
/// Defined for the whole `i64` range: `gcd(i64::MIN, 0)` is `2^63`, hence the `u64` result.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Finds (g, x, y) such that ax + by = g = gcd(a, b), with g >= 0.
///
/// Iterative form of the extended Euclidean algorithm, keeping the Bezout
/// coefficients of both remainders at every step. Works in `i128` so that
/// `i64::MIN` inputs cannot overflow.
pub fn extended_gcd(a: i64, b: i64) -> (i128, i128, i128) {
    let (mut old_r, mut r) = (a as i128, b as i128);
    let (mut old_x, mut x) = (1i128, 0i128);
    let (mut old_y, mut y) = (0i128, 1i128);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_x, x) = (x, old_x - q * x);
        (old_y, y) = (y, old_y - q * y);
    }

    if old_r < 0 {
        return (-old_r, -old_x, -old_y);
    }

    (old_r, old_x, old_y)
}

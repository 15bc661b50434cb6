use num_integer::Roots;

/// Computes the greatest common divisor of two numbers.
///
/// The result is always non-negative.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a.abs()
}

/// Finds (g, x, y) such that ax + by = g = gcd(a, b).
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    if a == 0 {
        if b.is_negative() {
            return (-b, 0, -1);
        }

        return (b, 0, 1);
    }

    let (g, x1, y1) = extended_gcd(b % a, a);
    let x = y1 - (b / a) * x1;
    let y = x1;
    (g, x, y)
}

/// Modular inverse of `a` mod `m`, if it exists.
///
/// `a` may be negative or larger than `m`; the returned value lies in `[0, m)`.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    if m <= 1 {
        return None;
    }
    let (g, x, _) = extended_gcd(a.rem_euclid(m), m);
    if g != 1 {
        None
    } else {
        // x·a ≡ 1 (mod m)
        Some(x.rem_euclid(m))
    }
}

/// Returns `r` such that `r * r == n`, or `None` if `n` is not a perfect square.
///
/// Uses an exact integer square root, so large sizes never suffer rounding.
pub fn exact_square_root(n: usize) -> Option<usize> {
    let r = n.sqrt();
    if r.checked_mul(r) == Some(n) {
        Some(r)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_gcd() {
        assert_eq!(gcd(1, 26), 1);
        assert_eq!(gcd(5, 26), 1);
        assert_eq!(gcd(2, 26), 2);
        assert_eq!(gcd(13, 26), 13);
        assert_eq!(gcd(4, 26), 2);
        assert_eq!(gcd(26, 26), 26);
        assert_eq!(gcd(10, 0), 10);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(-12, 26), 2);
    }

    #[test]
    fn test_equivalence_with_extended_gcd() {
        let (g, _, _) = extended_gcd(12, 8);
        assert_eq!(g, gcd(12, 8));
    }

    #[test]
    fn test_extended_gcd_basic() {
        let (g, x, y) = extended_gcd(12, 8);
        assert_eq!(g, 4);
        assert_eq!(12 * x + 8 * y, g);

        let (g, x, y) = extended_gcd(17, 26);
        assert_eq!(g, 1);
        assert_eq!(17 * x + 26 * y, g);
    }

    #[test]
    fn test_extended_gcd_zero() {
        let (g, x, y) = extended_gcd(0, 15);
        assert_eq!((g, x, y), (15, 0, 1));

        let (g, x, _y) = extended_gcd(15, 0);
        assert_eq!(g, 15);
        assert_eq!(15 * x, g);
    }

    #[test]
    fn test_mod_inverse() {
        assert_eq!(mod_inverse(3, 26), Some(9));
        assert_eq!(mod_inverse(25, 26), Some(25));
        assert_eq!(mod_inverse(-1, 26), Some(25));
        assert_eq!(mod_inverse(29, 26), Some(9));
        assert_eq!(mod_inverse(13, 26), None);
        assert_eq!(mod_inverse(0, 26), None);
        assert_eq!(mod_inverse(1, 1), None);
    }

    #[test]
    fn test_exact_square_root() {
        assert_eq!(exact_square_root(0), Some(0));
        assert_eq!(exact_square_root(4), Some(2));
        assert_eq!(exact_square_root(9), Some(3));
        assert_eq!(exact_square_root(5), None);
        assert_eq!(exact_square_root(8), None);
        assert_eq!(exact_square_root(1 << 40), Some(1 << 20));
        assert_eq!(exact_square_root((1 << 40) + 1), None);
    }
}

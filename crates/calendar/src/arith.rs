//! Integer primitives shared by the leap engine and the JDN bridge.
//!
//! Both functions truncate toward zero. The leap-cycle arithmetic for years
//! before the epoch relies on that sign behaviour, so these must not be
//! replaced with `div_euclid` / `rem_euclid`.

/// Integer division truncated toward zero.
///
/// `b` must be non-zero.
#[inline]
pub const fn div(a: i64, b: i64) -> i64 {
    a / b
}

/// Remainder matching [`div`]: `a - div(a, b) * b`.
///
/// Carries the sign of `a`, so it can be negative.
#[inline]
pub const fn modulo(a: i64, b: i64) -> i64 {
    a - div(a, b) * b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn div_positive() {
        assert_eq!(div(7, 2), 3);
        assert_eq!(div(33, 33), 1);
    }

    #[test]
    fn div_truncates_negative() {
        assert_eq!(div(-7, 2), -3);
        assert_eq!(div(-7, 6), -1);
        assert_eq!(div(7, -2), -3);
    }

    #[test]
    fn modulo_shares_sign_with_dividend() {
        assert_eq!(modulo(7, 3), 1);
        assert_eq!(modulo(-7, 3), -1);
        assert_eq!(modulo(-1, 4), -1);
        assert_eq!(modulo(7, -3), 1);
    }

    #[test]
    fn div_modulo_identity() {
        for a in -100..=100 {
            for b in [-33, -4, -1, 1, 4, 12, 33] {
                assert_eq!(div(a, b) * b + modulo(a, b), a, "a={a}, b={b}");
            }
        }
    }
}

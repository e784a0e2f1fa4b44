use num_bigint::BigInt;

// Closed form for the term at a zero-based offset from the first term.
// The solver uses this with offset = n - 1; the chunked generators use it
// to compute chunk boundary values in O(1).
pub fn term_at(a1: &BigInt, d: &BigInt, offset: usize) -> BigInt {
    a1 + d * BigInt::from(offset)
}

// Exact sum of the first n terms: n * (2*a1 + d*(n-1)) / 2.
// The division is always exact because n and the bracket cannot both be odd.
pub fn series_sum(a1: &BigInt, d: &BigInt, n: usize) -> BigInt {
    let bracket = a1 * 2 + d * BigInt::from(n.saturating_sub(1));
    BigInt::from(n) * bracket / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_at_zero_offset_is_first_term() {
        let a1 = BigInt::from(7);
        let d = BigInt::from(-2);
        assert_eq!(term_at(&a1, &d, 0), a1);
    }

    #[test]
    fn term_at_matches_repeated_addition() {
        let a1 = BigInt::from(3);
        let d = BigInt::from(4);
        let mut current = a1.clone();
        for offset in 0..10 {
            assert_eq!(term_at(&a1, &d, offset), current);
            current += &d;
        }
    }

    #[test]
    fn series_sum_small_cases() {
        // 3 + 6 + 9 + 12 + 15 = 45
        assert_eq!(
            series_sum(&BigInt::from(3), &BigInt::from(3), 5),
            BigInt::from(45)
        );
        // 1 + 3 + 5 + 7 = 16
        assert_eq!(
            series_sum(&BigInt::from(1), &BigInt::from(2), 4),
            BigInt::from(16)
        );
        // Single term sums to itself.
        assert_eq!(
            series_sum(&BigInt::from(-9), &BigInt::from(100), 1),
            BigInt::from(-9)
        );
    }

    #[test]
    fn series_sum_empty_is_zero() {
        assert_eq!(
            series_sum(&BigInt::from(42), &BigInt::from(5), 0),
            BigInt::from(0)
        );
    }
}

use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::collections::HashMap;

// Naive doubly recursive computation of F(n). Runtime grows exponentially
// because calls with identical inputs are repeated.
pub fn nth_recursive(n: usize) -> BigUint {
    if n < 2 {
        return BigUint::from(n);
    }
    nth_recursive(n - 1) + nth_recursive(n - 2)
}

/// Computes the nth Fibonacci number with a per-call memo table.
///
/// Same recursion shape as [`nth_recursive`], but each F(k) is computed at
/// most once, so runtime drops to O(n). The memo table is owned by the call
/// rather than shared, so repeated calls are independent.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use sequence_toolkit::fibonacci;
/// assert_eq!(fibonacci::nth_memoized(20), BigUint::from(6765u32));
/// ```
pub fn nth_memoized(n: usize) -> BigUint {
    let mut memo: HashMap<usize, BigUint> = HashMap::new();
    nth_with_memo(n, &mut memo)
}

fn nth_with_memo(n: usize, memo: &mut HashMap<usize, BigUint>) -> BigUint {
    if n < 2 {
        return BigUint::from(n);
    }
    if let Some(hit) = memo.get(&n) {
        return hit.clone();
    }
    let current = nth_with_memo(n - 1, memo) + nth_with_memo(n - 2, memo);
    memo.insert(n, current.clone());
    current
}

/// Computes the nth Fibonacci number iteratively.
///
/// Runs in O(n) time and constant space by keeping only the previous two
/// values, making it the fastest of the three approaches for any sizeable
/// `n`.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use sequence_toolkit::fibonacci;
/// assert_eq!(fibonacci::nth_iterative(10), BigUint::from(55u32));
/// ```
pub fn nth_iterative(n: usize) -> BigUint {
    if n == 0 {
        return BigUint::zero();
    }

    let mut prev = BigUint::zero();
    let mut curr = BigUint::one();

    for _ in 1..n {
        let next = &prev + &curr;
        prev = curr;
        curr = next;
    }

    curr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_cases() {
        assert_eq!(nth_recursive(0), BigUint::zero());
        assert_eq!(nth_recursive(1), BigUint::one());
        assert_eq!(nth_memoized(0), BigUint::zero());
        assert_eq!(nth_memoized(1), BigUint::one());
        assert_eq!(nth_iterative(0), BigUint::zero());
        assert_eq!(nth_iterative(1), BigUint::one());
    }

    #[test]
    fn known_values() {
        assert_eq!(nth_iterative(10), BigUint::from(55u32));
        assert_eq!(nth_iterative(20), BigUint::from(6765u32));
        assert_eq!(nth_iterative(30), BigUint::from(832040u32));
        assert_eq!(nth_iterative(50), BigUint::from(12586269025u64));
    }

    #[test]
    fn approaches_agree() {
        for n in 0..=25 {
            let expected = nth_iterative(n);
            assert_eq!(nth_recursive(n), expected, "recursive disagrees at n={n}");
            assert_eq!(nth_memoized(n), expected, "memoized disagrees at n={n}");
        }
    }

    #[test]
    fn memoized_handles_large_n() {
        // Far beyond what the naive recursion could finish; F(200) has 42 digits.
        let f200 = nth_memoized(200);
        assert_eq!(
            f200,
            BigUint::parse_bytes(b"280571172992510140037611932413038677189525", 10).unwrap()
        );
        assert_eq!(nth_iterative(200), f200);
    }
}

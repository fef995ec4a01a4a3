/// Naive doubly-recursive Fibonacci. Exponential in `n`, no memoization.
///
/// Returns 0 for `n <= 0` and 1 for `n == 1`.
pub fn fib_recursive(n: i32) -> i64 {
    match n {
        n if n <= 0 => 0,
        1 => 1,
        _ => fib_recursive(n - 1).wrapping_add(fib_recursive(n - 2)),
    }
}

/// Iterative Fibonacci over a sliding `(a, b)` pair.
///
/// The accumulator is a plain `i64` with two's-complement wrapping, so any
/// `n` past 92 yields F(n) mod 2^64 rather than the true value.
pub fn fib_iterative(n: i32) -> i64 {
    match n {
        n if n <= 0 => 0,
        1 => 1,
        _ => {
            let (mut a, mut b) = (0i64, 1i64);
            for _ in 2..=n {
                (a, b) = (b, a.wrapping_add(b));
            }
            b
        }
    }
}

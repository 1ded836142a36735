/// Largest `n` whose fibonacci number still fits into a `u64`.
pub const MAX_EXACT_N: u64 = 93;

/// Computes the nth fibonacci number by plain double recursion.
///
/// Runs in exponential time on purpose: this is the workload being measured.
/// Do not memoize. Only `n <= MAX_EXACT_N` is supported: debug builds
/// panic on larger `n`, release builds wrap.
pub fn fibonacci(n: u64) -> u64 {
    debug_assert!(n <= MAX_EXACT_N, "fibonacci({n}) does not fit into a u64");
    if n < 2 {
        n
    } else {
        fibonacci(n - 1) + fibonacci(n - 2)
    }
}

/// English ordinal of `n` as used in the benchmark label, e.g. "45th".
pub fn ordinal(n: u64) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// The line printed before the result.
pub fn label(n: u64) -> String {
    format!("Calculating the {} fibonacci number:", ordinal(n))
}

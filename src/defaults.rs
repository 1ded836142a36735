//! Centralized default values for the benchmarks.
//!
//! A run with no command line arguments uses exactly these values.

// ============================================================================
// Fibonacci Defaults
// ============================================================================

/// Index of the fibonacci number computed by the `fib` benchmark.
pub const DEFAULT_FIBONACCI_N: u64 = 45;

// ============================================================================
// Sort Defaults
// ============================================================================

/// Number of random integers generated and sorted by the `sort` benchmark.
pub const DEFAULT_BATCH_SIZE: usize = 1_000_000;

/// Number of times the `sort` benchmark regenerates and sorts its input.
pub const DEFAULT_REPETITIONS: u16 = 1;

/// Seed used by the deterministic generator when none is given explicitly.
///
/// Only consulted by code that asks for a reproducible sequence. Benchmark
/// runs without `--seed` draw from fresh entropy instead.
pub const DEFAULT_SEED: u64 = 172344;

use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::strategy::Strategy;

/// Repeat count for the classic benchmark protocol.
pub const REPEATS: u32 = 1_000_000;

/// Scalar inputs for the point benchmarks.
pub const POINT_INPUTS: [i64; 4] = [14, -15, 120, 0];

/// Half-open `[start, end)` ranges for the range benchmarks.
pub const RANGES: [(i64, i64); 3] = [(-3, 3), (0, 8), (-20, 20)];

/// Reduced repeat counts for the all-strategies comparison.
pub const COMPARE_POINT_REPEATS: u32 = 10_000;
pub const COMPARE_RANGE_REPEATS: u32 = 1_000;

/// Average nanoseconds per call of `strategy.eval(n)` over `repeats` calls.
/// Results are routed through `black_box` so the loop body survives
/// optimization.
pub fn time_point(strategy: Strategy, n: i64, repeats: u32) -> f64 {
    let start = Instant::now();
    for _ in 0..repeats {
        black_box(strategy.eval(black_box(n)));
    }
    average_nanos(start.elapsed(), repeats)
}

/// Average nanoseconds per repeat of accumulating `strategy.eval(u)` for
/// every `u` in `start..end`. The running total is discarded after each
/// repeat; the average is per repeat, not per inner call.
pub fn time_range(strategy: Strategy, bounds: (i64, i64), repeats: u32) -> f64 {
    let (start, end) = bounds;
    let begun = Instant::now();
    for _ in 0..repeats {
        let mut total: i64 = 0;
        for u in start..end {
            total += strategy.eval(black_box(u));
        }
        black_box(total);
    }
    average_nanos(begun.elapsed(), repeats)
}

fn average_nanos(elapsed: Duration, repeats: u32) -> f64 {
    elapsed.as_secs_f64() * 1e9 / f64::from(repeats)
}

//! Wall clock timing helpers shared by the benchmark style exercises.

use std::time::{Duration, Instant};

/// Run `f` once and return its result with the elapsed wall time.
pub fn time_it<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Elapsed seconds clamped away from zero so fast runs never report 0.
pub fn non_zero_secs(d: Duration) -> f64 {
    d.as_secs_f64().max(1e-6)
}

/// Elapsed milliseconds with the same clamp, for reports in ms.
pub fn non_zero_millis(d: Duration) -> f64 {
    (d.as_secs_f64() * 1000.0).max(0.001)
}

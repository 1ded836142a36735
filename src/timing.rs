use std::time::{Duration, Instant};

/// Runs `f` and returns its result together with the wall-clock time it took.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Report line for a sort run. Milliseconds are truncated, not rounded.
pub fn finished_line(elapsed: Duration) -> String {
    format!("Finished in {}ms", elapsed.as_millis())
}

//! Single-shot wall-clock timing.

use std::time::{Duration, Instant};

/// A value together with the time it took to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timed<T> {
    /// What the measured call returned.
    pub value: T,
    /// Monotonic wall-clock time spent inside the call.
    pub elapsed: Duration,
}

/// Invoke `f` exactly once and measure how long it ran.
///
/// No warm-up and no repetition. The closure's error is returned as-is and
/// the elapsed time is discarded with it. Any copying needed to isolate
/// side effects is the caller's job.
pub fn measure<F, T, E>(f: F) -> Result<Timed<T>, E>
where
    F: FnOnce() -> Result<T, E>,
{
    let start = Instant::now();
    let value = f()?;
    let elapsed = start.elapsed();
    Ok(Timed { value, elapsed })
}

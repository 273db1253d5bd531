//! Stage timing for the pipeline.

use std::time::Instant;

use tracing::info;

/// Runs `f`, logging when the stage starts and how long it took.
///
/// # Example
///
/// ```
/// use modscope::timing::timed;
///
/// let sum = timed("adding", || 2 + 2);
/// assert_eq!(sum, 4);
/// ```
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> T {
    info!("{}...", label);
    let start = Instant::now();
    let result = f();
    let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    info!(elapsed_ms, "{} completed", label);
    result
}

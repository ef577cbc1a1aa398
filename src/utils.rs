use std::time::Duration;

/// Convert a (validated, non-negative) number of seconds to a duration
///
/// Negative and NaN inputs give zero; values too large for a `Duration`
/// saturate at `Duration::MAX`.
pub fn seconds(secs: f64) -> Duration {
    if secs.is_nan() || secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}

/// Sleep for a fixed delay, logging what it is for
pub async fn pause(secs: f64, reason: &str) {
    let delay = seconds(secs);
    if delay.is_zero() {
        return;
    }
    ::log::debug!("Waiting {:.1} seconds for {}.", secs, reason);
    tokio::time::sleep(delay).await;
}

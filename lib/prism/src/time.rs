use std::time::{Duration, Instant, SystemTime};

/// Returns the current unix timestamp (seconds elapsed since 1970-01-01)
#[inline]
pub fn timestamp_secs() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .expect("Closed timelike curve, reality compromised")
        .as_secs()
}

/// True once `timeout` has elapsed since `start`.
#[inline]
pub fn has_timed_out(start: Instant, timeout: Duration) -> bool {
    start.elapsed() > timeout
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_is_after_2020() {
        assert!(timestamp_secs() > 1_577_836_800);
    }

    #[test]
    fn test_has_timed_out() {
        let start = Instant::now();
        assert!(!has_timed_out(start, Duration::from_secs(3600)));
        assert!(has_timed_out(start, Duration::from_nanos(1)));
    }
}

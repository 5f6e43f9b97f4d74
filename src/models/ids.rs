//! Entity id generation.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Creation-timestamp id in milliseconds since the epoch.
///
/// Two requests landing in the same millisecond would otherwise collide,
/// so the counter is nudged forward past the last issued id.
pub fn next_id() -> i64 {
    let now = Utc::now().timestamp_millis();
    let mut prev = LAST_ID.load(Ordering::Relaxed);
    loop {
        let next = if now > prev { now } else { prev + 1 };
        match LAST_ID.compare_exchange_weak(prev, next, Ordering::SeqCst, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => prev = actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_is_strictly_increasing() {
        let a = next_id();
        let b = next_id();
        let c = next_id();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_next_id_tracks_wall_clock() {
        let id = next_id();
        // Within a second of now (ids are creation timestamps).
        assert!((Utc::now().timestamp_millis() - id).abs() < 1000);
    }
}

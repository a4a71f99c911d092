//! Wraparound-aware expiry check.
//!
//! The branch structure below is relied on by existing callers and must stay
//! as written. In particular it is NOT `now.wrapping_sub(start) >= duration`:
//! when `start > now` and `start <= u32::MAX - duration` the answer is always
//! `false`, even if the true modular distance exceeds `duration`.

use super::Ticks;

/// Check whether `duration` ticks have elapsed since `start`, given `now`.
///
/// - `start <= now`: expired iff `now - start >= duration`.
/// - `start > now` (the counter wrapped since `start` was recorded): with
///   `delta = Ticks::MAX - duration`, expired iff `start > delta` and
///   `now >= start - delta`; otherwise not expired.
///
/// Total for every input, including `duration == 0` and
/// `duration == Ticks::MAX`.
pub const fn is_expired_at(start: Ticks, duration: Ticks, now: Ticks) -> bool {
    if start > now {
        let delta = Ticks::MAX - duration;
        if start > delta {
            // Counter overflowed between `start` and `now`
            return now >= start - delta;
        }
        return false;
    }

    now - start >= duration
}

//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

use ms_tick::{MsClock, Ticks};

// ============================================================================
// Clock Creation Helpers
// ============================================================================

/// Create a clock that lives for the rest of the test process.
///
/// Needed wherever a ticker thread borrows the clock.
pub fn leaked_clock(start: Ticks) -> &'static MsClock {
    Box::leak(Box::new(MsClock::starting_at(start)))
}

// ============================================================================
// Tick Helpers
// ============================================================================

/// Simulate `n` timer interrupts.
pub fn fire(clock: &MsClock, n: u32) {
    for _ in 0..n {
        clock.tick();
    }
}

/// Simulate timer interrupts until the expiry check passes.
///
/// Returns the number of ticks fired, or `None` if `limit` was reached first.
pub fn ticks_until_expired(
    clock: &MsClock,
    start: Ticks,
    duration: Ticks,
    limit: u32,
) -> Option<u32> {
    for fired in 0..=limit {
        if clock.is_expired(start, duration) {
            return Some(fired);
        }
        clock.tick();
    }
    None
}

//! Blocking delays on top of the tick counter.
//!
//! `ClockDelay` implements `embedded_hal::delay::DelayNs` by spinning on
//! [`MsClock::is_expired`]. Resolution is one tick, so sub-millisecond requests
//! are rounded up to a whole millisecond. Assumes 1 kHz ticks.

use embedded_hal::delay::DelayNs;

use crate::clock::{MsClock, Ticks};

const NANOS_PER_TICK: u32 = 1_000_000;
const MICROS_PER_TICK: u32 = 1_000;

/// Longest single wait handed to [`MsClock::is_expired`].
///
/// Durations close to `Ticks::MAX` can never expire through the rollover
/// branch (with `duration == Ticks::MAX` it needs `start > now` and
/// `now >= start` at once), so longer waits are split into chunks, each
/// measured from a fresh `now()`.
pub const MAX_CHUNK_TICKS: Ticks = Ticks::MAX / 2;

/// Busy-wait delay driven by an [`MsClock`].
///
/// The clock must be ticking (its tick source initialized and interrupts
/// enabled), otherwise any non-zero delay spins forever.
#[derive(Debug, Clone, Copy)]
pub struct ClockDelay<'a> {
    clock: &'a MsClock,
    max_chunk: Ticks,
}

impl<'a> ClockDelay<'a> {
    /// Create a delay provider reading `clock`.
    pub const fn new(clock: &'a MsClock) -> Self {
        Self {
            clock,
            max_chunk: MAX_CHUNK_TICKS,
        }
    }

    /// Create a delay provider that waits at most `max_chunk` ticks per
    /// expiry check.
    ///
    /// `max_chunk` is clamped to `1..=MAX_CHUNK_TICKS`.
    pub const fn with_max_chunk(clock: &'a MsClock, max_chunk: Ticks) -> Self {
        let max_chunk = if max_chunk == 0 {
            1
        } else if max_chunk > MAX_CHUNK_TICKS {
            MAX_CHUNK_TICKS
        } else {
            max_chunk
        };
        Self { clock, max_chunk }
    }

    /// Spin until at least `ticks` full ticks have passed.
    ///
    /// The tick in progress when the wait starts is not counted, so this
    /// waits for `ticks + 1` counter increments.
    pub fn wait_ticks(&self, ticks: Ticks) {
        if ticks == 0 {
            return;
        }

        // Run out the partial tick first
        self.spin_for(1);

        let mut remaining = ticks;
        while remaining > 0 {
            let chunk = remaining.min(self.max_chunk);
            self.spin_for(chunk);
            remaining -= chunk;
        }
    }

    fn spin_for(&self, duration: Ticks) {
        let start = self.clock.now();
        while !self.clock.is_expired(start, duration) {
            core::hint::spin_loop();
        }
    }
}

impl Default for ClockDelay<'static> {
    /// Delay provider for the process-wide [`CLOCK`](crate::CLOCK).
    fn default() -> Self {
        Self::new(&crate::CLOCK)
    }
}

impl DelayNs for ClockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.wait_ticks(ns.div_ceil(NANOS_PER_TICK));
    }

    fn delay_us(&mut self, us: u32) {
        self.wait_ticks(us.div_ceil(MICROS_PER_TICK));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.wait_ticks(ms);
    }
}

//! Millisecond tick counter.
//!
//! `MsClock` holds a single free-running `u32` that the timer interrupt bumps
//! once per tick. It wraps to zero after `Ticks::MAX` (about 49.7 days at
//! 1 kHz); [`is_expired_at`] accounts for that.
//!
//! The counter lives in a `portable_atomic::AtomicU32`. On AVR each access
//! runs with interrupts disabled, so foreground reads never observe a
//! half-updated value. thumbv6m has no atomic read-modify-write: build with
//! the `critical-section` feature (and a `critical-section` implementation)
//! there.

use portable_atomic::{AtomicBool, AtomicU32, Ordering};

use crate::config::TimerSetup;
use crate::source::TickSource;

// Sub-modules
pub mod expiry;

pub use expiry::is_expired_at;

/// One counter unit, nominally one millisecond.
pub type Ticks = u32;

/// Free-running tick counter.
///
/// Written only by [`tick`](Self::tick) from the timer interrupt; every other
/// method is a read.
#[derive(Debug)]
pub struct MsClock {
    ticks: AtomicU32,
    initialized: AtomicBool,
}

impl MsClock {
    /// Create a clock at tick zero.
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Create a clock at an arbitrary tick count.
    ///
    /// Useful for simulating a clock close to wraparound.
    pub const fn starting_at(ticks: Ticks) -> Self {
        Self {
            ticks: AtomicU32::new(ticks),
            initialized: AtomicBool::new(false),
        }
    }

    /// Start the periodic tick source.
    ///
    /// Call once at startup, before any timing query is meaningful. The
    /// counter is not touched: queries made before this return whatever the
    /// clock was created with (zero for [`new`](Self::new)).
    pub fn initialize<S: TickSource>(
        &self,
        source: &mut S,
        setup: TimerSetup,
    ) -> Result<(), S::Error> {
        source.start(&setup)?;
        self.initialized.store(true, Ordering::Release);

        #[cfg(feature = "defmt")]
        defmt::debug!("tick source started: {}", setup);

        Ok(())
    }

    /// Whether [`initialize`](Self::initialize) has completed.
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Advance the clock by one tick (interrupt handler body).
    ///
    /// Wraps silently at `Ticks::MAX`.
    #[inline]
    pub fn tick(&self) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }

    /// Current tick count.
    #[inline]
    pub fn now(&self) -> Ticks {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Check whether `duration` ticks have elapsed since `start`.
    ///
    /// Samples [`now`](Self::now) once and defers to [`is_expired_at`].
    /// Never modifies the counter.
    pub fn is_expired(&self, start: Ticks, duration: Ticks) -> bool {
        is_expired_at(start, duration, self.now())
    }

    /// Ticks since `start`, modulo 2^32.
    pub fn elapsed_since(&self, start: Ticks) -> Ticks {
        self.now().wrapping_sub(start)
    }
}

impl Default for MsClock {
    fn default() -> Self {
        Self::new()
    }
}

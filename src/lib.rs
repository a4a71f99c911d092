//! # ms-tick
//!
//! Millisecond tick clock for microcontrollers, driven by a timer interrupt.
//!
//! **Key features:**
//! - **One counter** - A free-running `u32` bumped once per millisecond from an ISR
//! - **Wraparound-aware expiry** - `is_expired(start, duration)` keeps working across the 2^32 rollover
//! - **Const timer setup** - Prescaler and compare values derived and validated at compile time
//! - **Platform-agnostic** - Hardware access goes through the `TickSource` trait
//! - **embedded-hal** - `ClockDelay` implements `DelayNs`
//!
//! ## Usage
//!
//! ```ignore
//! ms_tick::initialize(&mut timer0, TimerSetup::DEFAULT)?;
//!
//! let start = ms_tick::now();
//! loop {
//!     if ms_tick::is_expired(start, 500) {
//!         break;
//!     }
//! }
//!
//! // In the timer compare-match ISR:
//! ms_tick::on_tick();
//! ```
//!
//! ## Optional Features
//!
//! - `critical-section` - Route counter access through the `critical-section` crate
//! - `defmt` - `defmt::Format` impls and a debug record when the tick source starts
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod error;
pub mod source;

pub mod clock;
pub mod delay;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Configuration
pub use config::{
    Atmega328p8MhzConfig, Atmega328p16MhzConfig, DefaultConfig, Prescaler, TimerConfig,
    TimerSetup,
};

// Error types
pub use error::TimerError;

// Tick source
pub use source::TickSource;

// Clock types
pub use clock::{MsClock, Ticks, is_expired_at};

// Delay
pub use delay::ClockDelay;

// ============================================================================
// Process-wide Clock
// ============================================================================

/// Process-wide clock used by the free functions below.
pub static CLOCK: MsClock = MsClock::new();

/// Start the tick source for [`CLOCK`]. Call once at startup.
pub fn initialize<S: TickSource>(source: &mut S, setup: TimerSetup) -> Result<(), S::Error> {
    CLOCK.initialize(source, setup)
}

/// Ticks since [`initialize`] (zero if it has not run yet).
#[inline]
pub fn now() -> Ticks {
    CLOCK.now()
}

/// Check whether `duration` ticks have elapsed since `start` on [`CLOCK`].
pub fn is_expired(start: Ticks, duration: Ticks) -> bool {
    CLOCK.is_expired(start, duration)
}

/// Timer interrupt body: advance [`CLOCK`] by one tick.
#[inline]
pub fn on_tick() {
    CLOCK.tick();
}

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

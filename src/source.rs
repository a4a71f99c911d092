//! Tick source abstraction for platform-specific timer setup.
//!
//! The `TickSource` trait is the only place hardware is touched: it programs a
//! timer peripheral so that the platform's interrupt handler calls
//! [`on_tick`](crate::on_tick) (or [`MsClock::tick`](crate::MsClock::tick))
//! once per period.

use crate::config::TimerSetup;

/// Platform-agnostic periodic tick source.
///
/// Implementations must:
/// - Program the timer from `setup` (AVR parts can store the
///   `tccr0a`/`tccr0b`/`ocr0a`/`timsk0` bytes as-is)
/// - Enable the timer interrupt, and global interrupts if the platform
///   requires it
/// - Keep the interrupt handler to a single clock increment
///
/// # Example
///
/// ```ignore
/// struct Timer0(avr_device::atmega328p::TC0);
///
/// impl TickSource for Timer0 {
///     type Error = core::convert::Infallible;
///
///     fn start(&mut self, setup: &TimerSetup) -> Result<(), Self::Error> {
///         let tc0 = &self.0;
///         tc0.tccr0a.write(|w| unsafe { w.bits(setup.tccr0a()) });
///         tc0.tccr0b.write(|w| unsafe { w.bits(setup.tccr0b()) });
///         tc0.ocr0a.write(|w| unsafe { w.bits(setup.ocr0a()) });
///         tc0.timsk0.write(|w| unsafe { w.bits(setup.timsk0()) });
///         unsafe { avr_device::interrupt::enable() };
///         Ok(())
///     }
/// }
///
/// #[avr_device::interrupt(atmega328p)]
/// fn TIMER0_COMPA() {
///     ms_tick::on_tick();
/// }
/// ```
pub trait TickSource {
    /// Platform-specific error type
    type Error;

    /// Configure the timer from `setup` and start the periodic interrupt.
    ///
    /// Called once, from [`MsClock::initialize`](crate::MsClock::initialize).
    fn start(&mut self, setup: &TimerSetup) -> Result<(), Self::Error>;
}

impl<T: TickSource + ?Sized> TickSource for &mut T {
    type Error = T::Error;

    fn start(&mut self, setup: &TimerSetup) -> Result<(), Self::Error> {
        (**self).start(setup)
    }
}

//! Error types for timer configuration.
//!
//! The clock itself never fails. `TimerError` only covers deriving a timer
//! setup from a [`TimerConfig`](crate::config::TimerConfig) that cannot
//! produce an exact tick period.

use core::fmt;

/// Timer configuration error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// Requested tick rate is 0 Hz
    ZeroTickRate,

    /// Prescaled timer clock does not divide evenly into ticks
    InexactPeriod {
        /// CPU clock in Hz
        cpu_hz: u32,
        /// Prescaler division factor
        divisor: u32,
        /// Requested tick rate in Hz
        tick_hz: u32,
    },

    /// Timer counts per tick do not fit the 8-bit compare register
    CompareOutOfRange {
        /// Timer counts needed per tick (valid range 1..=256)
        counts: u32,
    },
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerError::ZeroTickRate => write!(f, "Tick rate must be non-zero"),
            TimerError::InexactPeriod {
                cpu_hz,
                divisor,
                tick_hz,
            } => write!(
                f,
                "{} Hz / {} does not divide into {} Hz ticks",
                cpu_hz, divisor, tick_hz
            ),
            TimerError::CompareOutOfRange { counts } => {
                write!(f, "{} counts per tick, expected 1-256", counts)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::format;

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", TimerError::ZeroTickRate),
            "Tick rate must be non-zero"
        );

        let err = TimerError::InexactPeriod {
            cpu_hz: 16_000_000,
            divisor: 1024,
            tick_hz: 1000,
        };
        assert_eq!(
            format!("{}", err),
            "16000000 Hz / 1024 does not divide into 1000 Hz ticks"
        );

        let err = TimerError::CompareOutOfRange { counts: 2000 };
        assert_eq!(format!("{}", err), "2000 counts per tick, expected 1-256");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(TimerError::ZeroTickRate, TimerError::ZeroTickRate);
        assert_ne!(
            TimerError::ZeroTickRate,
            TimerError::CompareOutOfRange { counts: 0 }
        );
    }
}

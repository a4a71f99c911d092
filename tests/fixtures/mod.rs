//! Test fixtures and utilities for ms-tick testing.
//!
//! Provides:
//! - `MockTickSource`: Records every setup it is started with
//! - `FailingTickSource`: Tick source whose `start` always fails
//! - `ThreadTicker`: Background thread standing in for the timer interrupt

#![allow(dead_code)]

use ms_tick::{MsClock, TickSource, TimerSetup};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;

// ============================================================================
// MockTickSource - Recording Tick Source
// ============================================================================

/// Mock tick source for testing.
///
/// Captures each `TimerSetup` passed to `start()` instead of touching hardware.
#[derive(Debug, Default)]
pub struct MockTickSource {
    started: Vec<TimerSetup>,
}

impl MockTickSource {
    /// Create a tick source that has not been started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setups received so far, oldest first.
    pub fn started(&self) -> &[TimerSetup] {
        &self.started
    }

    /// Number of `start()` calls.
    pub fn start_count(&self) -> usize {
        self.started.len()
    }
}

impl TickSource for MockTickSource {
    type Error = ();

    fn start(&mut self, setup: &TimerSetup) -> Result<(), Self::Error> {
        self.started.push(*setup);
        Ok(())
    }
}

// ============================================================================
// FailingTickSource - Tick Source That Cannot Start
// ============================================================================

/// Error reported by `FailingTickSource`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MockStartError {
    /// Peripheral already claimed by someone else
    PeripheralBusy,
}

/// Tick source whose `start()` always fails.
#[derive(Debug, Default)]
pub struct FailingTickSource {
    attempts: usize,
}

impl FailingTickSource {
    /// Number of `start()` calls.
    pub fn attempts(&self) -> usize {
        self.attempts
    }
}

impl TickSource for FailingTickSource {
    type Error = MockStartError;

    fn start(&mut self, _setup: &TimerSetup) -> Result<(), Self::Error> {
        self.attempts += 1;
        Err(MockStartError::PeripheralBusy)
    }
}

// ============================================================================
// ThreadTicker - Simulated Timer Interrupt
// ============================================================================

/// Background thread calling `MsClock::tick()` at a fixed period.
///
/// Stops and joins on drop.
#[derive(Debug)]
pub struct ThreadTicker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl ThreadTicker {
    /// Start ticking `clock` every `period`.
    pub fn spawn(clock: &'static MsClock, period: Duration) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = std::thread::spawn(move || {
            while !flag.load(Ordering::Relaxed) {
                std::thread::sleep(period);
                clock.tick();
            }
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }
}

impl Drop for ThreadTicker {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

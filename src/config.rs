//! Timer configuration traits and the derived Timer0 register image.
//!
//! The `TimerConfig` trait fixes the CPU clock, prescaler and tick rate at
//! compile time. [`TimerSetup`] turns a configuration into the byte values an
//! AVR Timer0 needs for a CTC-mode compare-match interrupt at the tick rate.
//! Writing those bytes to the peripheral is left to the platform's
//! [`TickSource`](crate::source::TickSource).

use crate::error::TimerError;

/// Tick rate giving one tick per millisecond.
pub const MILLISECOND_TICK_HZ: u32 = 1_000;

// ATmega328P Timer0 bit positions
const WGM01: u8 = 1;
const CS00: u8 = 0;
const CS01: u8 = 1;
const CS02: u8 = 2;
const OCIE0A: u8 = 1;

/// Timer clock configuration.
///
/// All values are const (zero runtime cost). See [`TimerSetup::from_config`]
/// for how they are validated.
pub trait TimerConfig {
    /// CPU clock feeding the timer prescaler, in Hz
    const CPU_HZ: u32;

    /// Prescaler applied to the CPU clock
    const PRESCALER: Prescaler;

    /// Compare-match interrupt rate (default: 1000, one tick per millisecond)
    const TICK_HZ: u32 = MILLISECOND_TICK_HZ;
}

/// Arduino Uno / Nano class part: 16 MHz, prescaler 64.
///
/// 16 MHz / 64 = 250 kHz, so one tick every 250 counts (compare value 249).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Atmega328p16MhzConfig;

impl TimerConfig for Atmega328p16MhzConfig {
    const CPU_HZ: u32 = 16_000_000;
    const PRESCALER: Prescaler = Prescaler::Div64;
}

/// 3.3 V Pro Mini class part: 8 MHz, prescaler 64.
///
/// 8 MHz / 64 = 125 kHz, so one tick every 125 counts (compare value 124).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Atmega328p8MhzConfig;

impl TimerConfig for Atmega328p8MhzConfig {
    const CPU_HZ: u32 = 8_000_000;
    const PRESCALER: Prescaler = Prescaler::Div64;
}

/// Configuration used by [`TimerSetup::DEFAULT`].
pub type DefaultConfig = Atmega328p16MhzConfig;

/// Timer0 clock select.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Prescaler {
    /// clk/1
    Div1,
    /// clk/8
    Div8,
    /// clk/64
    Div64,
    /// clk/256
    Div256,
    /// clk/1024
    Div1024,
}

impl Prescaler {
    /// All prescalers in ascending divisor order.
    pub const ALL: [Prescaler; 5] = [
        Prescaler::Div1,
        Prescaler::Div8,
        Prescaler::Div64,
        Prescaler::Div256,
        Prescaler::Div1024,
    ];

    /// Division factor applied to the CPU clock.
    pub const fn divisor(self) -> u32 {
        match self {
            Prescaler::Div1 => 1,
            Prescaler::Div8 => 8,
            Prescaler::Div64 => 64,
            Prescaler::Div256 => 256,
            Prescaler::Div1024 => 1024,
        }
    }

    /// CS02:CS00 clock select bits for TCCR0B.
    pub const fn clock_select_bits(self) -> u8 {
        match self {
            Prescaler::Div1 => 1 << CS00,
            Prescaler::Div8 => 1 << CS01,
            Prescaler::Div64 => (1 << CS01) | (1 << CS00),
            Prescaler::Div256 => 1 << CS02,
            Prescaler::Div1024 => (1 << CS02) | (1 << CS00),
        }
    }
}

/// Validated timer setup for a periodic compare-match interrupt.
///
/// Produced by [`TimerSetup::from_config`], [`TimerSetup::new`] or
/// [`TimerSetup::select`]; a value of this type always describes an exact
/// tick period.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerSetup {
    cpu_hz: u32,
    tick_hz: u32,
    prescaler: Prescaler,
    compare: u8,
}

impl TimerSetup {
    /// Setup for [`DefaultConfig`] (16 MHz, prescaler 64, 1 ms ticks).
    pub const DEFAULT: TimerSetup = match TimerSetup::from_config::<DefaultConfig>() {
        Ok(setup) => setup,
        Err(_) => panic!("default timer configuration is invalid"),
    };

    /// Derive the setup from a compile-time configuration.
    pub const fn from_config<C: TimerConfig>() -> Result<Self, TimerError> {
        Self::new(C::CPU_HZ, C::PRESCALER, C::TICK_HZ)
    }

    /// Derive the setup from runtime values.
    ///
    /// The prescaled clock must divide exactly into `tick_hz`, and the number
    /// of timer counts per tick must fit the 8-bit compare register (the
    /// counter runs from 0 to the compare value inclusive, hence 1-256).
    pub const fn new(cpu_hz: u32, prescaler: Prescaler, tick_hz: u32) -> Result<Self, TimerError> {
        if tick_hz == 0 {
            return Err(TimerError::ZeroTickRate);
        }

        let divisor = prescaler.divisor();
        let timer_hz = cpu_hz / divisor;
        if cpu_hz % divisor != 0 || timer_hz % tick_hz != 0 {
            return Err(TimerError::InexactPeriod {
                cpu_hz,
                divisor,
                tick_hz,
            });
        }

        let counts = timer_hz / tick_hz;
        if counts == 0 || counts > 256 {
            return Err(TimerError::CompareOutOfRange { counts });
        }

        Ok(Self {
            cpu_hz,
            tick_hz,
            prescaler,
            compare: (counts - 1) as u8,
        })
    }

    /// Pick the smallest prescaler that yields an exact tick period.
    ///
    /// Returns the error for the largest prescaler if none fits.
    pub fn select(cpu_hz: u32, tick_hz: u32) -> Result<Self, TimerError> {
        let mut last = Err(TimerError::ZeroTickRate);
        for prescaler in Prescaler::ALL {
            last = Self::new(cpu_hz, prescaler, tick_hz);
            if last.is_ok() {
                break;
            }
        }
        last
    }

    /// CPU clock in Hz.
    pub const fn cpu_hz(&self) -> u32 {
        self.cpu_hz
    }

    /// Tick rate in Hz.
    pub const fn tick_hz(&self) -> u32 {
        self.tick_hz
    }

    /// Selected prescaler.
    pub const fn prescaler(&self) -> Prescaler {
        self.prescaler
    }

    /// Compare value (timer counts per tick minus one).
    pub const fn compare(&self) -> u8 {
        self.compare
    }

    /// CPU cycles between two ticks.
    ///
    /// For down-counting timers clocked straight from the core (e.g. SysTick),
    /// the reload value is this minus one.
    pub const fn cycles_per_tick(&self) -> u32 {
        self.cpu_hz / self.tick_hz
    }

    /// TCCR0A value: CTC mode (WGM01).
    pub const fn tccr0a(&self) -> u8 {
        1 << WGM01
    }

    /// TCCR0B value: clock select bits for the prescaler.
    pub const fn tccr0b(&self) -> u8 {
        self.prescaler.clock_select_bits()
    }

    /// OCR0A value: the compare value.
    pub const fn ocr0a(&self) -> u8 {
        self.compare
    }

    /// TIMSK0 value: compare match A interrupt enable (OCIE0A).
    pub const fn timsk0(&self) -> u8 {
        1 << OCIE0A
    }
}

impl Default for TimerSetup {
    fn default() -> Self {
        Self::DEFAULT
    }
}

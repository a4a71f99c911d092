#![no_std]
#![no_main]

use core::convert::Infallible;
use cortex_m::peripheral::SYST;
use cortex_m::peripheral::syst::SystClkSource;
use embedded_hal::delay::DelayNs;
use ms_tick::{ClockDelay, TickSource, TimerSetup};
use panic_halt as _;

// SysTick tick source - reloads from the core clock, no prescaler
pub struct SysTickSource(SYST);

impl TickSource for SysTickSource {
    type Error = Infallible;

    fn start(&mut self, setup: &TimerSetup) -> Result<(), Self::Error> {
        self.0.set_clock_source(SystClkSource::Core);
        self.0.set_reload(setup.cycles_per_tick() - 1);
        self.0.clear_current();
        self.0.enable_counter();
        self.0.enable_interrupt();
        Ok(())
    }
}

// Entry point
#[cortex_m_rt::entry]
fn main() -> ! {
    let core = cortex_m::Peripherals::take().unwrap();
    let mut source = SysTickSource(core.SYST);

    // 16 MHz core, 1 ms ticks
    let _ = ms_tick::initialize(&mut source, TimerSetup::DEFAULT);

    // Pull in the expiry check and the delay loop
    let start = ms_tick::now();
    let _ = core::hint::black_box(ms_tick::is_expired(start, 10));
    ClockDelay::default().delay_ms(core::hint::black_box(1));

    loop {
        core::hint::black_box(ms_tick::now());
        cortex_m::asm::nop();
    }
}

// Tick interrupt
#[cortex_m_rt::exception]
fn SysTick() {
    ms_tick::on_tick();
}

// Required: exception handler
#[cortex_m_rt::exception]
unsafe fn HardFault(_ef: &cortex_m_rt::ExceptionFrame) -> ! {
    loop {
        cortex_m::asm::nop();
    }
}

//! Busy-wait delays for the controller protocol.
//!
//! Protocol timing is expressed through [`embedded_hal::delay::DelayNs`], so
//! any HAL delay works. [`SpinDelay`] is the calibrated spin loop used on
//! target: its iteration count is derived from the system clock frequency,
//! which keeps the waits proportional when the core runs at a different
//! speed. [`NoDelay`] costs nothing and is meant for simulated ports.

use embedded_hal::delay::DelayNs;

/// Width of the latch pulse: one microsecond.
pub const LATCH_PULSE_NS: u32 = 1_000;

/// Wait on each side of a Data sample while Clock is high: 1.5 microseconds.
///
/// Both waits must use this same duration; together they bound the shift
/// register's setup and hold window around the sample point.
pub const CLOCK_HALF_PERIOD_NS: u32 = LATCH_PULSE_NS * 3 / 2;

/// Spin-loop delay calibrated in loop iterations per microsecond.
///
/// One iteration per system clock cycle is the calibration used by the
/// reference design; the real duration is an approximation that depends on
/// the instructions the loop compiles to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpinDelay {
    cycles_per_us: u32,
}

impl SpinDelay {
    /// Calibrate from an explicit iteration count per microsecond.
    #[must_use]
    pub const fn new(cycles_per_us: u32) -> Self {
        Self { cycles_per_us }
    }

    /// Calibrate from the system clock frequency in Hz.
    #[must_use]
    pub const fn from_sys_clock_hz(hz: u32) -> Self {
        Self::new(hz / 1_000_000)
    }

    #[inline]
    #[must_use]
    pub const fn cycles_per_us(&self) -> u32 {
        self.cycles_per_us
    }

    /// Loop iterations needed to wait `ns` nanoseconds, rounded up.
    #[inline]
    #[must_use]
    pub const fn iterations_for(&self, ns: u32) -> u32 {
        let cycles = (self.cycles_per_us as u64 * ns as u64).div_ceil(1_000);
        if cycles > u32::MAX as u64 {
            u32::MAX
        } else {
            cycles as u32
        }
    }
}

impl DelayNs for SpinDelay {
    #[inline]
    fn delay_ns(&mut self, ns: u32) {
        for _ in 0..self.iterations_for(ns) {
            core::hint::spin_loop();
        }
    }
}

/// Delay that returns immediately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoDelay;

impl DelayNs for NoDelay {
    #[inline]
    fn delay_ns(&mut self, _ns: u32) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_period_is_one_and_a_half_latch_pulses() {
        assert_eq!(LATCH_PULSE_NS, 1_000);
        assert_eq!(CLOCK_HALF_PERIOD_NS, 1_500);
    }

    #[test]
    fn test_from_sys_clock_hz() {
        assert_eq!(SpinDelay::from_sys_clock_hz(125_000_000).cycles_per_us(), 125);
        assert_eq!(SpinDelay::from_sys_clock_hz(20_971_520).cycles_per_us(), 20);
    }

    #[test]
    fn test_iterations_scale_with_clock() {
        let slow = SpinDelay::new(20);
        let fast = SpinDelay::new(120);

        assert_eq!(slow.iterations_for(LATCH_PULSE_NS), 20);
        assert_eq!(slow.iterations_for(CLOCK_HALF_PERIOD_NS), 30);
        assert_eq!(fast.iterations_for(LATCH_PULSE_NS), 120);
        assert_eq!(fast.iterations_for(CLOCK_HALF_PERIOD_NS), 180);
    }

    #[test]
    fn test_iterations_round_up() {
        let delay = SpinDelay::new(1);
        assert_eq!(delay.iterations_for(1), 1);
        assert_eq!(delay.iterations_for(0), 0);
        assert_eq!(delay.iterations_for(1_001), 2);
    }

    #[test]
    fn test_iterations_saturate() {
        let delay = SpinDelay::new(u32::MAX);
        assert_eq!(delay.iterations_for(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_delays_terminate() {
        let mut spin = SpinDelay::new(1);
        spin.delay_ns(CLOCK_HALF_PERIOD_NS);
        spin.delay_us(1);

        let mut none = NoDelay;
        none.delay_ms(1_000);
    }
}

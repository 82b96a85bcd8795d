//! GPIO port capability.
//!
//! The controller reader never touches memory-mapped registers itself. It is
//! handed two [`GpioPort`] implementations (one for the Clock/Latch lines, one
//! for the Data line) and drives them through whole-port bit masks, the same
//! way the set/clear/input registers of a microcontroller port work.

use core::fmt::Debug;

/// Width of a GPIO port in bits.
pub const PORT_WIDTH: u8 = 32;

/// Direction of a pin once it has been switched to its GPIO mux function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Push-pull digital output.
    Output,
    /// Digital input with the hardware's default pull configuration.
    Input,
}

/// A GPIO port: up to [`PORT_WIDTH`] pins sharing set/clear/input registers.
///
/// Implementations exist for real hardware (in the firmware crate) and for
/// simulated ports in tests.
pub trait GpioPort {
    /// Platform failure reported while configuring the port.
    type Error: Debug;

    /// Open the clock gate / power domain backing this port.
    ///
    /// Must be idempotent: enabling an already enabled port is a no-op.
    fn enable_clock(&mut self) -> Result<(), Self::Error>;

    /// Select the GPIO mux function for `bit` and set its direction.
    ///
    /// Must not force a pull resistor for [`PinMode::Input`].
    fn configure(&mut self, bit: u8, mode: PinMode) -> Result<(), Self::Error>;

    /// Drive every output bit set in `mask` high.
    fn set_bits(&mut self, mask: u32);

    /// Drive every output bit set in `mask` low.
    fn clear_bits(&mut self, mask: u32);

    /// Sample the input levels of the whole port.
    fn read_bits(&mut self) -> u32;
}

/// Mask with only `bit` set.
#[inline]
#[must_use]
pub const fn bit_mask(bit: u8) -> u32 {
    1 << bit
}

/// Whether `bit` is high in a value returned by [`GpioPort::read_bits`].
#[inline]
#[must_use]
pub const fn is_set(levels: u32, bit: u8) -> bool {
    levels & bit_mask(bit) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_mask() {
        assert_eq!(bit_mask(0), 0b1);
        assert_eq!(bit_mask(3), 0b1000);
        assert_eq!(bit_mask(31), 0x8000_0000);
    }

    #[test]
    fn test_is_set_ignores_other_bits() {
        assert!(is_set(0b0100, 2));
        assert!(!is_set(0b1011, 2));
        assert!(!is_set(0, 31));
        assert!(is_set(u32::MAX, 31));
    }
}

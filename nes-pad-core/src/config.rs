//! Pin assignment for the three controller lines.

use core::fmt;

use crate::port::PORT_WIDTH;

/// Which GPIO bit carries each controller line.
///
/// Clock and Latch share the control port, Data sits on the data port, so
/// Data may reuse a bit index that Clock or Latch uses.
///
/// The default matches the reference wiring:
///
/// | Line  | Port    | Bit |
/// |-------|---------|-----|
/// | Clock | control | 3   |
/// | Latch | control | 2   |
/// | Data  | data    | 2   |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// Clock output bit on the control port.
    pub clock: u8,
    /// Latch output bit on the control port.
    pub latch: u8,
    /// Data input bit on the data port.
    pub data: u8,
}

impl PinConfig {
    /// Reference wiring.
    pub const DEFAULT: Self = Self {
        clock: 3,
        latch: 2,
        data: 2,
    };

    #[must_use]
    pub const fn new(clock: u8, latch: u8, data: u8) -> Self {
        Self { clock, latch, data }
    }

    /// Check that every bit fits the port and Clock/Latch don't collide.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::BitOutOfRange`] if any bit is `>= PORT_WIDTH`
    /// - [`ConfigError::SharedControlBit`] if Clock and Latch use the same bit
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.clock >= PORT_WIDTH {
            return Err(ConfigError::BitOutOfRange(self.clock));
        }
        if self.latch >= PORT_WIDTH {
            return Err(ConfigError::BitOutOfRange(self.latch));
        }
        if self.data >= PORT_WIDTH {
            return Err(ConfigError::BitOutOfRange(self.data));
        }
        if self.clock == self.latch {
            return Err(ConfigError::SharedControlBit(self.clock));
        }
        Ok(())
    }
}

impl Default for PinConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Invalid [`PinConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Clock and Latch were both assigned this control-port bit.
    SharedControlBit(u8),
    /// Bit index does not exist on a 32-bit port.
    BitOutOfRange(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::SharedControlBit(bit) => {
                write!(f, "clock and latch share control port bit {bit}")
            }
            ConfigError::BitOutOfRange(bit) => {
                write!(f, "bit {bit} is outside the {}-bit port", PORT_WIDTH)
            }
        }
    }
}

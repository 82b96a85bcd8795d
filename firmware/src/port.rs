//! [`GpioPort`] over RP2040 bank 0 pins.
//!
//! The RP2040 has a single SIO bank, so a "port" here is just the set of pins
//! handed to it, keyed by GPIO number. Masks use the same numbering, which
//! keeps [`PinConfig`](nes_pad_core::PinConfig) bits equal to the board's
//! GPIO labels.

use defmt::Format;
use embassy_rp::gpio::{Flex, Pull};
use heapless::Vec;
use nes_pad_core::port::{bit_mask, PinMode};
use nes_pad_core::GpioPort;

/// Pins a single [`FlexPort`] can hold.
pub const MAX_PORT_PINS: usize = 8;

/// Error type for port operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum PortError {
    /// No pin with this GPIO number was added to the port.
    UnknownPin(u8),
    /// The GPIO number was added twice.
    DuplicatePin(u8),
    /// The port already holds [`MAX_PORT_PINS`] pins.
    Full,
}

/// A group of GPIO pins driven through whole-port masks.
pub struct FlexPort<'d> {
    pins: Vec<(u8, Flex<'d>), MAX_PORT_PINS>,
}

impl<'d> FlexPort<'d> {
    #[must_use]
    pub fn new() -> Self {
        Self { pins: Vec::new() }
    }

    /// Hand GPIO `gpio` to the port. It stays an unconfigured input until
    /// [`GpioPort::configure`] is called for it.
    pub fn add(&mut self, gpio: u8, pin: Flex<'d>) -> Result<(), PortError> {
        if self.pins.iter().any(|(n, _)| *n == gpio) {
            return Err(PortError::DuplicatePin(gpio));
        }
        self.pins.push((gpio, pin)).map_err(|_| PortError::Full)
    }

    fn pin_mut(&mut self, gpio: u8) -> Result<&mut Flex<'d>, PortError> {
        self.pins
            .iter_mut()
            .find(|(n, _)| *n == gpio)
            .map(|(_, pin)| pin)
            .ok_or(PortError::UnknownPin(gpio))
    }

    fn selected(&mut self, mask: u32) -> impl Iterator<Item = &mut Flex<'d>> + '_ {
        self.pins
            .iter_mut()
            .filter(move |(n, _)| mask & bit_mask(*n) != 0)
            .map(|(_, pin)| pin)
    }
}

impl Default for FlexPort<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioPort for FlexPort<'_> {
    type Error = PortError;

    /// IO_BANK0 and PADS_BANK0 are taken out of reset by `embassy_rp::init`.
    fn enable_clock(&mut self) -> Result<(), PortError> {
        Ok(())
    }

    /// `Flex::new` already selected the SIO function; this sets direction.
    fn configure(&mut self, bit: u8, mode: PinMode) -> Result<(), PortError> {
        let pin = self.pin_mut(bit)?;
        match mode {
            PinMode::Output => pin.set_as_output(),
            PinMode::Input => {
                pin.set_pull(Pull::None);
                pin.set_as_input();
            }
        }
        Ok(())
    }

    fn set_bits(&mut self, mask: u32) {
        for pin in self.selected(mask) {
            pin.set_high();
        }
    }

    fn clear_bits(&mut self, mask: u32) {
        for pin in self.selected(mask) {
            pin.set_low();
        }
    }

    fn read_bits(&mut self) -> u32 {
        self.pins
            .iter()
            .filter(|(_, pin)| pin.is_high())
            .fold(0, |levels, (n, _)| levels | bit_mask(*n))
    }
}

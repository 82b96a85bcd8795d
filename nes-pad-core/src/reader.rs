//! NES controller shift-register driver.
//!
//! The controller holds a parallel-in/serial-out shift register (a 4021).
//! Reading it is a fixed bit-banged handshake over three lines:
//!
//! ```text
//! Latch  __/‾‾\_________________________________________
//! Clock  ________/‾‾‾\____/‾‾‾\____ ... ____/‾‾‾\_______
//! Data   =X=s0===X=s1====X=s2===== ... ====X=s8=========
//!              ^       ^                     ^
//!              sample  sample (mid-high)     sample
//! ```
//!
//! The latch pulse copies the buttons into the register and presents the
//! first one on Data; every rising clock edge presents the next. Buttons pull
//! Data low when pressed, so the assembled byte is inverted before it is
//! returned.

use core::fmt;
use core::future::Future;

use embedded_hal::delay::DelayNs;

use crate::config::{ConfigError, PinConfig};
use crate::delay::{CLOCK_HALF_PERIOD_NS, LATCH_PULSE_NS};
use crate::input::{InputError, InputSource};
use crate::port::{bit_mask, is_set, GpioPort, PinMode};
use crate::types::NesButtons;

/// Rising clock edges per frame.
pub const CLOCK_PULSES: usize = 8;

/// Error raised while setting up the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReaderError<E> {
    /// The pin assignment is unusable.
    Config(ConfigError),
    /// The port refused a clock-gate or pin configuration request.
    Port(E),
}

impl<E> From<ConfigError> for ReaderError<E> {
    fn from(err: ConfigError) -> Self {
        ReaderError::Config(err)
    }
}

impl<E: fmt::Debug> fmt::Display for ReaderError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReaderError::Config(e) => write!(f, "invalid pin configuration: {e}"),
            ReaderError::Port(e) => write!(f, "GPIO port error: {e:?}"),
        }
    }
}

/// Driver for one NES controller.
///
/// Owns the control port (Clock and Latch outputs), the data port (Data
/// input) and the delay used for protocol timing. Call
/// [`initialize`](Self::initialize) once, then [`read_frame`](Self::read_frame)
/// as often as needed.
pub struct ControllerReader<C, D, W> {
    control: C,
    data: D,
    delay: W,
    pins: PinConfig,
    initialized: bool,
}

impl<C, D, W> ControllerReader<C, D, W>
where
    C: GpioPort,
    D: GpioPort<Error = C::Error>,
    W: DelayNs,
{
    /// Create a reader. No hardware is touched until [`initialize`](Self::initialize).
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`PinConfig::validate`].
    pub fn new(control: C, data: D, delay: W, pins: PinConfig) -> Result<Self, ConfigError> {
        pins.validate()?;
        Ok(Self {
            control,
            data,
            delay,
            pins,
            initialized: false,
        })
    }

    /// Gate the ports, configure the three pins and put the lines at rest.
    ///
    /// Clock and Latch become outputs, Data an input without a forced pull.
    /// Both outputs are left high. Safe to call more than once.
    ///
    /// # Errors
    ///
    /// [`ReaderError::Port`] if a port rejects a request. The pins are then
    /// in an unknown state and reading them is meaningless.
    pub fn initialize(&mut self) -> Result<(), ReaderError<C::Error>> {
        let PinConfig { clock, latch, data } = self.pins;

        self.control.enable_clock().map_err(ReaderError::Port)?;
        self.control
            .configure(clock, PinMode::Output)
            .map_err(ReaderError::Port)?;
        self.control
            .configure(latch, PinMode::Output)
            .map_err(ReaderError::Port)?;

        self.data.enable_clock().map_err(ReaderError::Port)?;
        self.data
            .configure(data, PinMode::Input)
            .map_err(ReaderError::Port)?;

        self.set_clock_high();
        self.set_latch_high();

        self.initialized = true;
        debug!(
            "controller reader ready: clock={} latch={} data={}",
            clock, latch, data
        );
        Ok(())
    }

    #[inline]
    pub fn set_clock_high(&mut self) {
        self.control.set_bits(bit_mask(self.pins.clock));
    }

    #[inline]
    pub fn set_clock_low(&mut self) {
        self.control.clear_bits(bit_mask(self.pins.clock));
    }

    #[inline]
    pub fn set_latch_high(&mut self) {
        self.control.set_bits(bit_mask(self.pins.latch));
    }

    #[inline]
    pub fn set_latch_low(&mut self) {
        self.control.clear_bits(bit_mask(self.pins.latch));
    }

    /// Run one latch + 8 clock cycle and return the button byte.
    ///
    /// Bit 7 holds the first button the register presents (after the latch
    /// pulse), bit 0 the eighth. A set bit means pressed. Clock and Latch are
    /// both low on return.
    ///
    /// Blocks for the whole cycle. Nothing else may touch the three lines
    /// meanwhile, and a caller that can be interrupted should run this inside
    /// a critical section.
    pub fn read_frame(&mut self) -> u8 {
        self.set_clock_low();
        self.set_latch_low();

        self.set_latch_high();
        self.delay.delay_ns(LATCH_PULSE_NS);
        self.set_latch_low();

        let mut shifted = self.sample();
        for _ in 0..CLOCK_PULSES {
            shifted <<= 1;
            self.set_clock_high();
            self.half_clock_wait();
            shifted |= self.sample();
            self.half_clock_wait();
            self.set_clock_low();
        }

        // Nine samples were taken. The last one follows the eighth edge, after
        // all buttons have been shifted out, and only reads the register's
        // serial fill.
        let frame = !((shifted >> 1) as u8);
        trace!("frame {:?}", frame);
        frame
    }

    /// [`read_frame`](Self::read_frame) as named buttons.
    #[inline]
    pub fn read_buttons(&mut self) -> NesButtons {
        NesButtons::from_frame(self.read_frame())
    }

    #[inline]
    #[must_use]
    pub fn pins(&self) -> PinConfig {
        self.pins
    }

    #[inline]
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Give the ports and delay back.
    pub fn release(self) -> (C, D, W) {
        (self.control, self.data, self.delay)
    }

    /// Setup/hold wait on either side of a sample. Both sides share this.
    #[inline]
    fn half_clock_wait(&mut self) {
        self.delay.delay_ns(CLOCK_HALF_PERIOD_NS);
    }

    #[inline]
    fn sample(&mut self) -> u16 {
        u16::from(is_set(self.data.read_bits(), self.pins.data))
    }
}

impl<C, D, W> InputSource for ControllerReader<C, D, W>
where
    C: GpioPort,
    D: GpioPort<Error = C::Error>,
    W: DelayNs,
{
    /// Read one frame immediately. Pacing is up to the caller.
    fn receive(&mut self) -> impl Future<Output = Result<NesButtons, InputError>> {
        let result = if self.initialized {
            Ok(self.read_buttons())
        } else {
            warn!("controller read before initialization");
            Err(InputError::NotInitialized)
        };
        core::future::ready(result)
    }

    /// A disconnected controller can't be detected, so this only reports
    /// whether the pins have been configured.
    fn is_connected(&self) -> bool {
        self.initialized
    }
}

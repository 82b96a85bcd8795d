//! Ticker-paced controller input.
//!
//! The reader itself returns a frame as soon as it is asked; this source
//! spaces the reads out to one per [`POLL_PERIOD`] and shields each read from
//! interrupts so the bit-banged timing stays intact.

use embassy_time::{Duration, Ticker};
use nes_pad_core::{
    ControllerReader, InputError, InputSource, NesButtons, ReaderError, SpinDelay,
};

use crate::port::{FlexPort, PortError};

/// One read per displayed frame at 60 Hz.
pub const POLL_PERIOD: Duration = Duration::from_hz(60);

/// Reader wired to RP2040 pins with a clock-calibrated spin delay.
pub type BoardReader<'d> = ControllerReader<FlexPort<'d>, FlexPort<'d>, SpinDelay>;

/// [`InputSource`] that polls the controller at a fixed cadence.
pub struct PollingInput<'d> {
    reader: BoardReader<'d>,
    ticker: Ticker,
}

impl<'d> PollingInput<'d> {
    /// Wrap a reader and start the poll ticker.
    #[must_use]
    pub fn new(reader: BoardReader<'d>, period: Duration) -> Self {
        Self {
            reader,
            ticker: Ticker::every(period),
        }
    }

    /// Configure the controller pins. Must succeed before the first poll.
    pub fn initialize(&mut self) -> Result<(), ReaderError<PortError>> {
        self.reader.initialize()
    }

    /// Get a mutable reference to the reader.
    pub fn reader_mut(&mut self) -> &mut BoardReader<'d> {
        &mut self.reader
    }
}

impl InputSource for PollingInput<'_> {
    async fn receive(&mut self) -> Result<NesButtons, InputError> {
        if !self.reader.is_initialized() {
            return Err(InputError::NotInitialized);
        }

        self.ticker.next().await;

        // ~10 µs with interrupts masked.
        let buttons = cortex_m::interrupt::free(|_| self.reader.read_buttons());
        Ok(buttons)
    }

    fn is_connected(&self) -> bool {
        self.reader.is_initialized()
    }
}

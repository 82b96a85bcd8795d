//! NES controller to USB gamepad adapter for RP2040.
//!
//! This crate provides the embedded side of the controller reader: real GPIO
//! pins behind the [`GpioPort`] capability, a ticker-paced input source, and
//! a USB HID output.
//!
//! # Hardware Configuration
//!
//! | Function | GPIO | Description |
//! |----------|------|-------------|
//! | Latch    | 2    | Controller latch (output, idle high) |
//! | Clock    | 3    | Controller clock (output, idle high) |
//! | Data     | 4    | Controller serial data (input, no pull) |
//! | LED      | 25   | On-board LED (error indicator) |
//!
//! A stock NES pad runs its 4021 from 5 V; power it from
//! 3V3 (or level-shift Data) when wiring it to the Pico.
//!
//! # Architecture
//!
//! The firmware uses the Embassy async runtime with three concurrent tasks:
//!
//! - **USB Task**: Manages the USB device stack
//! - **Input Task**: Polls the controller at 60 Hz, signals state changes
//! - **Output Task**: Receives state signals, formats and sends USB HID reports
//!
//! Communication between tasks uses Embassy's [`Signal`](embassy_sync::signal::Signal)
//! with "latest value wins" semantics.
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)
//!
//! # Re-exports
//!
//! This crate re-exports the public items of [`nes_pad_core`] for convenience.

#![no_std]

#[cfg(all(feature = "dev-panic", feature = "prod-panic"))]
compile_error!("Cannot enable both `dev-panic` and `prod-panic` features - they install conflicting panic handlers");

// Re-export core types for convenience
pub use nes_pad_core::{
    Button, ButtonEdges, ControllerReader, GameInput, GpioPort, InputError, InputSource,
    NesButtons, NesReport, OutputError, OutputSink, PinConfig, PinMode, ReaderError, SpinDelay,
};

pub mod polling;
pub mod port;
pub mod usb_output;

pub use polling::{BoardReader, PollingInput, POLL_PERIOD};
pub use port::{FlexPort, PortError};
pub use usb_output::{configure_usb_hid, UsbHidOutput};

/// Controller wiring on the adapter board (GPIO numbers).
pub const BOARD_PINS: PinConfig = PinConfig::new(3, 2, 4);

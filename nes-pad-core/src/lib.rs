//! Platform-agnostic NES controller driver, types, and traits.
//!
//! This crate reads an NES controller's shift register over three GPIO lines
//! without any platform-specific dependencies. Hardware access is injected
//! through the [`GpioPort`] trait and timing through
//! [`embedded_hal::delay::DelayNs`], so the driver runs the same against real
//! registers and against simulated ports in host tests.
//!
//! # Overview
//!
//! - [`reader`]: The protocol driver ([`ControllerReader`])
//! - [`port`]: GPIO port capability ([`GpioPort`], [`PinMode`])
//! - [`config`]: Pin assignment ([`PinConfig`])
//! - [`delay`]: Calibrated busy-wait ([`SpinDelay`]) and timing constants
//! - [`types`]: Named buttons ([`NesButtons`], [`Button`], [`ButtonEdges`])
//! - [`actions`]: Game actions bound to buttons ([`GameInput`])
//! - [`report`]: USB HID report layout ([`NesReport`])
//! - [`input`] / [`output`] / [`bridge`]: Async source/sink plumbing
//!
//! # Example
//!
//! ```ignore
//! use nes_pad_core::{ControllerReader, PinConfig, SpinDelay};
//!
//! let mut reader = ControllerReader::new(
//!     control_port,
//!     data_port,
//!     SpinDelay::from_sys_clock_hz(125_000_000),
//!     PinConfig::DEFAULT,
//! )?;
//! reader.initialize()?;
//!
//! loop {
//!     let buttons = reader.read_buttons();
//!     if buttons.contains(NesButtons::START) {
//!         // ...
//!     }
//! }
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting and logging (for embedded targets)
//! - **`log`**: Log through the `log` facade instead
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

// Must come first so the macros are visible to the other modules.
mod fmt;

pub mod actions;
pub mod bridge;
pub mod config;
pub mod delay;
pub mod input;
pub mod output;
pub mod port;
pub mod reader;
pub mod report;
pub mod types;

#[cfg(test)]
mod testing;

// Re-export main types at crate root
pub use actions::GameInput;
pub use bridge::{BridgeError, ControllerBridge};
pub use config::{ConfigError, PinConfig};
pub use delay::{NoDelay, SpinDelay, CLOCK_HALF_PERIOD_NS, LATCH_PULSE_NS};
pub use input::{InputError, InputSource};
pub use output::{OutputError, OutputSink};
pub use port::{GpioPort, PinMode};
pub use reader::{ControllerReader, ReaderError};
pub use report::{NesReport, REPORT_DESCRIPTOR};
pub use types::{Button, ButtonEdges, NesButtons};

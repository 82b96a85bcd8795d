//! Output sink trait and error types.

use core::fmt;
use core::future::Future;

use crate::types::NesButtons;

/// Error type for output operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// USB/communication I/O error.
    Io,
    /// Device not ready (e.g., USB not enumerated).
    NotReady,
    /// Report dropped (e.g., host not polling fast enough).
    Dropped,
    /// Endpoint busy.
    Busy,
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            OutputError::Io => "output I/O error",
            OutputError::NotReady => "output not ready",
            OutputError::Dropped => "report dropped",
            OutputError::Busy => "endpoint busy",
        };
        f.write_str(msg)
    }
}

/// Async trait for button state sinks.
///
/// This trait abstracts the destination for controller data, enabling
/// different output methods (USB HID, game logic, serial debug, etc.).
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait OutputSink {
    /// Send a button state to the output.
    ///
    /// May block until the previous report has been sent.
    fn send(&mut self, buttons: &NesButtons) -> impl Future<Output = Result<(), OutputError>>;

    /// Check if the output is ready to accept data.
    fn is_ready(&self) -> bool;
}

//! Input source trait and error types.

use core::fmt;
use core::future::Future;

use crate::types::NesButtons;

/// Error type for input operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// The controller pins have not been configured yet.
    NotInitialized,
    /// The source stopped producing frames.
    Disconnected,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotInitialized => f.write_str("controller not initialized"),
            InputError::Disconnected => f.write_str("input source disconnected"),
        }
    }
}

/// Async trait for controller input sources.
///
/// [`ControllerReader`](crate::ControllerReader) implements it by reading one
/// frame per call; wrappers add pacing (e.g. a ticker) on top.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait InputSource {
    /// Produce the next button state.
    fn receive(&mut self) -> impl Future<Output = Result<NesButtons, InputError>>;

    /// Check if the input source is connected/ready.
    fn is_connected(&self) -> bool;
}

//! Core controller types: NesButtons, Button, ButtonEdges.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// Button state of one frame, as returned by the controller reader.
///
/// A set bit means "pressed". The bit positions follow the order in which
/// the controller's shift register presents its buttons: the first button
/// shifted out lands in the most-significant bit.
///
/// # Example
///
/// ```
/// use nes_pad_core::NesButtons;
///
/// let buttons = NesButtons::A | NesButtons::START;
/// assert!(buttons.contains(NesButtons::A));
/// assert!(buttons.contains(NesButtons::START));
/// assert!(!buttons.contains(NesButtons::B));
/// assert_eq!(buttons.raw(), 0b1001_0000);
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NesButtons(pub u8);

impl NesButtons {
    pub const A: Self = Self(1 << 7);
    pub const B: Self = Self(1 << 6);
    pub const SELECT: Self = Self(1 << 5);
    pub const START: Self = Self(1 << 4);
    pub const UP: Self = Self(1 << 3);
    pub const DOWN: Self = Self(1 << 2);
    pub const LEFT: Self = Self(1 << 1);
    pub const RIGHT: Self = Self(1 << 0);

    /// No buttons pressed.
    pub const NONE: Self = Self(0);

    /// Every button pressed.
    pub const ALL: Self = Self(0xFF);

    /// Wrap a frame byte returned by the reader.
    #[inline]
    #[must_use]
    pub const fn from_frame(frame: u8) -> Self {
        Self(frame)
    }

    /// Check if the given button(s) are pressed.
    #[inline]
    #[must_use]
    pub const fn contains(self, button: NesButtons) -> bool {
        (self.0 & button.0) == button.0
    }

    /// Check if the given button is pressed.
    #[inline]
    #[must_use]
    pub const fn is_pressed(self, button: Button) -> bool {
        self.contains(button.mask())
    }

    /// Set or clear button(s).
    #[inline]
    pub fn set(&mut self, button: NesButtons, pressed: bool) {
        if pressed {
            self.0 |= button.0;
        } else {
            self.0 &= !button.0;
        }
    }

    /// Get the raw frame byte.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Check if no buttons are pressed.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the pressed buttons in shift-register order (A first).
    pub fn iter(self) -> impl Iterator<Item = Button> {
        Button::ALL
            .into_iter()
            .filter(move |&button| self.is_pressed(button))
    }

    /// Compare with the previous frame.
    #[inline]
    #[must_use]
    pub const fn edges_since(self, previous: NesButtons) -> ButtonEdges {
        ButtonEdges {
            pressed: Self(self.0 & !previous.0),
            released: Self(!self.0 & previous.0),
        }
    }
}

impl From<u8> for NesButtons {
    #[inline]
    fn from(frame: u8) -> Self {
        Self::from_frame(frame)
    }
}

impl From<NesButtons> for u8 {
    #[inline]
    fn from(buttons: NesButtons) -> Self {
        buttons.0
    }
}

impl BitOr for NesButtons {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for NesButtons {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for NesButtons {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for NesButtons {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for NesButtons {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

/// A single controller button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    A,
    B,
    Select,
    Start,
    Up,
    Down,
    Left,
    Right,
}

impl Button {
    /// All buttons in shift-register order.
    pub const ALL: [Button; 8] = [
        Button::A,
        Button::B,
        Button::Select,
        Button::Start,
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
    ];

    /// Bit of this button inside [`NesButtons`].
    #[inline]
    #[must_use]
    pub const fn mask(self) -> NesButtons {
        match self {
            Button::A => NesButtons::A,
            Button::B => NesButtons::B,
            Button::Select => NesButtons::SELECT,
            Button::Start => NesButtons::START,
            Button::Up => NesButtons::UP,
            Button::Down => NesButtons::DOWN,
            Button::Left => NesButtons::LEFT,
            Button::Right => NesButtons::RIGHT,
        }
    }
}

/// Buttons that changed between two consecutive frames.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEdges {
    /// Pressed now, released in the previous frame.
    pub pressed: NesButtons,
    /// Released now, pressed in the previous frame.
    pub released: NesButtons,
}

impl ButtonEdges {
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pressed.is_empty() && self.released.is_empty()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::vec::Vec;

    #[test]
    fn test_buttons_bitwise_or() {
        let buttons = NesButtons::A | NesButtons::B;
        assert!(buttons.contains(NesButtons::A));
        assert!(buttons.contains(NesButtons::B));
        assert!(!buttons.contains(NesButtons::SELECT));
    }

    #[test]
    fn test_buttons_set_clear() {
        let mut buttons = NesButtons::NONE;
        buttons.set(NesButtons::UP, true);
        assert!(buttons.is_pressed(Button::Up));
        buttons.set(NesButtons::UP, false);
        assert!(!buttons.is_pressed(Button::Up));
        assert!(buttons.is_empty());
    }

    #[test]
    fn test_button_masks_cover_every_bit_once() {
        let combined = Button::ALL
            .iter()
            .fold(NesButtons::NONE, |acc, b| acc | b.mask());
        assert_eq!(combined, NesButtons::ALL);

        // First in shift order is the most-significant bit.
        assert_eq!(Button::A.mask().raw(), 0x80);
        assert_eq!(Button::Right.mask().raw(), 0x01);
    }

    #[test]
    fn test_iter_pressed_in_shift_order() {
        let buttons = NesButtons::RIGHT | NesButtons::A | NesButtons::START;
        let pressed: Vec<Button> = buttons.iter().collect();
        assert_eq!(pressed, [Button::A, Button::Start, Button::Right]);
        assert_eq!(NesButtons::NONE.iter().count(), 0);
    }

    #[test]
    fn test_edges_since() {
        let previous = NesButtons::A | NesButtons::LEFT;
        let current = NesButtons::A | NesButtons::DOWN;

        let edges = current.edges_since(previous);
        assert_eq!(edges.pressed, NesButtons::DOWN);
        assert_eq!(edges.released, NesButtons::LEFT);
        assert!(!edges.is_empty());

        assert!(current.edges_since(current).is_empty());
    }

    #[test]
    fn test_frame_conversions() {
        let buttons = NesButtons::from(0x04);
        assert_eq!(buttons, NesButtons::DOWN);
        assert_eq!(u8::from(buttons), 0x04);
        assert_eq!(!NesButtons::NONE, NesButtons::ALL);
    }
}

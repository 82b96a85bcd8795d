//! Game actions driven by the controller.
//!
//! The falling-block game reacts to five inputs; each one is bound to a
//! single controller button.

use crate::types::{Button, NesButtons};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GameInput {
    /// Drop the piece faster.
    Fall = 0,
    Left = 1,
    Right = 2,
    Rotate = 3,
    /// Toggle pause.
    Pause = 4,
}

impl GameInput {
    /// Every action, in the order they are dispatched.
    pub const ALL: [GameInput; 5] = [
        GameInput::Fall,
        GameInput::Left,
        GameInput::Right,
        GameInput::Rotate,
        GameInput::Pause,
    ];

    /// Button bound to this action.
    #[must_use]
    pub const fn button(self) -> Button {
        match self {
            GameInput::Fall => Button::Down,
            GameInput::Left => Button::Left,
            GameInput::Right => Button::Right,
            GameInput::Rotate => Button::A,
            GameInput::Pause => Button::Start,
        }
    }

    /// Action bound to `button`, if any.
    #[must_use]
    pub const fn from_button(button: Button) -> Option<Self> {
        match button {
            Button::Down => Some(GameInput::Fall),
            Button::Left => Some(GameInput::Left),
            Button::Right => Some(GameInput::Right),
            Button::A => Some(GameInput::Rotate),
            Button::Start => Some(GameInput::Pause),
            Button::B | Button::Select | Button::Up => None,
        }
    }

    /// Actions whose button is held in `buttons`.
    pub fn iter_pressed(buttons: NesButtons) -> impl Iterator<Item = GameInput> {
        Self::ALL
            .into_iter()
            .filter(move |action| buttons.is_pressed(action.button()))
    }
}

impl From<GameInput> for u8 {
    fn from(action: GameInput) -> Self {
        action as u8
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::vec::Vec;

    #[test]
    fn test_discriminants() {
        let codes: Vec<u8> = GameInput::ALL.into_iter().map(u8::from).collect();
        assert_eq!(codes, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_button_binding_roundtrips() {
        for action in GameInput::ALL {
            assert_eq!(GameInput::from_button(action.button()), Some(action));
        }
        assert_eq!(GameInput::from_button(Button::B), None);
        assert_eq!(GameInput::from_button(Button::Select), None);
        assert_eq!(GameInput::from_button(Button::Up), None);
    }

    #[test]
    fn test_iter_pressed_in_dispatch_order() {
        let buttons = NesButtons::START | NesButtons::DOWN | NesButtons::B | NesButtons::A;
        let actions: Vec<GameInput> = GameInput::iter_pressed(buttons).collect();
        assert_eq!(
            actions,
            [GameInput::Fall, GameInput::Rotate, GameInput::Pause]
        );
    }

    #[test]
    fn test_unbound_buttons_produce_nothing() {
        let buttons = NesButtons::B | NesButtons::SELECT | NesButtons::UP;
        assert_eq!(GameInput::iter_pressed(buttons).count(), 0);
    }
}

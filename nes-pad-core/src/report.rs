//! USB HID gamepad report for an NES controller.

use crate::types::NesButtons;

/// Axis value for a held direction.
const AXIS_FULL: i8 = 127;

/// USB HID gamepad report.
///
/// This matches [`REPORT_DESCRIPTOR`].
/// Total size: 3 bytes (buttons + padding: 1, D-pad axes: 2x1)
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(C)]
pub struct NesReport {
    /// HID buttons 1-4 in bits 0-3: A, B, Select, Start
    pub buttons: u8,
    /// D-pad horizontal (-127 left, 127 right)
    pub x: i8,
    /// D-pad vertical (-127 up, 127 down)
    pub y: i8,
}

impl NesReport {
    /// Size of the report in bytes.
    pub const SIZE: usize = 3;

    /// Convert the report to bytes.
    #[must_use]
    pub fn as_bytes(&self) -> [u8; Self::SIZE] {
        [self.buttons, self.x as u8, self.y as u8]
    }

    /// All-released report.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            buttons: 0,
            x: 0,
            y: 0,
        }
    }
}

/// Opposite directions held together cancel out.
const fn axis(buttons: NesButtons, negative: NesButtons, positive: NesButtons) -> i8 {
    match (buttons.contains(negative), buttons.contains(positive)) {
        (true, false) => -AXIS_FULL,
        (false, true) => AXIS_FULL,
        _ => 0,
    }
}

impl From<&NesButtons> for NesReport {
    fn from(buttons: &NesButtons) -> Self {
        let face = [
            NesButtons::A,
            NesButtons::B,
            NesButtons::SELECT,
            NesButtons::START,
        ];
        let mut report_buttons = 0u8;
        for (usage, button) in face.into_iter().enumerate() {
            if buttons.contains(button) {
                report_buttons |= 1 << usage;
            }
        }

        Self {
            buttons: report_buttons,
            x: axis(*buttons, NesButtons::LEFT, NesButtons::RIGHT),
            y: axis(*buttons, NesButtons::UP, NesButtons::DOWN),
        }
    }
}

/// HID Report Descriptor.
///
/// - 4 buttons (A, B, Select, Start) + 4 bits padding
/// - D-pad as X/Y axes, signed 8-bit
pub const REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x05, // Usage (Gamepad)
    0xA1, 0x01, // Collection (Application)
    //
    // --- Buttons (4 buttons) ---
    0x05, 0x09, //   Usage Page (Button)
    0x19, 0x01, //   Usage Minimum (Button 1)
    0x29, 0x04, //   Usage Maximum (Button 4)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x95, 0x04, //   Report Count (4)
    0x75, 0x01, //   Report Size (1)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    0x95, 0x01, //   Report Count (1)
    0x75, 0x04, //   Report Size (4)
    0x81, 0x03, //   Input (Constant) - padding
    //
    // --- D-pad ---
    0x05, 0x01, //   Usage Page (Generic Desktop)
    0x09, 0x30, //   Usage (X)
    0x09, 0x31, //   Usage (Y)
    0x15, 0x81, //   Logical Minimum (-127)
    0x25, 0x7F, //   Logical Maximum (127)
    0x95, 0x02, //   Report Count (2)
    0x75, 0x08, //   Report Size (8)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    0xC0, // End Collection
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_released_is_neutral() {
        assert_eq!(NesReport::from(&NesButtons::NONE), NesReport::neutral());
        assert_eq!(NesReport::neutral().as_bytes(), [0, 0, 0]);
    }

    #[test]
    fn test_face_buttons_map_to_hid_buttons() {
        let report = NesReport::from(&(NesButtons::A | NesButtons::START));
        assert_eq!(report.buttons, 0b1001);

        let report = NesReport::from(&(NesButtons::B | NesButtons::SELECT));
        assert_eq!(report.buttons, 0b0110);
    }

    #[test]
    fn test_dpad_maps_to_axes() {
        let report = NesReport::from(&(NesButtons::LEFT | NesButtons::DOWN));
        assert_eq!((report.x, report.y), (-127, 127));
        assert_eq!(report.as_bytes(), [0, 0x81, 0x7F]);

        let report = NesReport::from(&(NesButtons::RIGHT | NesButtons::UP));
        assert_eq!((report.x, report.y), (127, -127));
    }

    #[test]
    fn test_opposite_directions_cancel() {
        let report = NesReport::from(&(NesButtons::LEFT | NesButtons::RIGHT | NesButtons::UP));
        assert_eq!(report.x, 0);
        assert_eq!(report.y, -127);
    }

    #[test]
    fn test_descriptor_bit_count_matches_report_size() {
        // 4 buttons + 4 padding + 2 axes * 8 bits
        assert_eq!(4 + 4 + 2 * 8, NesReport::SIZE * 8);
        assert_eq!(REPORT_DESCRIPTOR.last(), Some(&0xC0));
    }
}

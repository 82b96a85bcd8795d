//! USB HID gamepad output implementation.

use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_usb::class::hid::{HidWriter, State};
use embassy_usb::Builder;
use nes_pad_core::{NesButtons, NesReport, OutputError, OutputSink, REPORT_DESCRIPTOR};

/// Largest report the HID endpoint carries.
pub const REPORT_SIZE: usize = NesReport::SIZE;

/// HID writer type used by [`UsbHidOutput`].
pub type NesHidWriter<'d> = HidWriter<'d, Driver<'d, USB>, REPORT_SIZE>;

/// USB HID gamepad output.
///
/// Wraps an embassy-usb HID writer to send controller reports.
pub struct UsbHidOutput<'d> {
    writer: NesHidWriter<'d>,
    ready: bool,
}

impl<'d> UsbHidOutput<'d> {
    /// Create a new USB HID output from the given HID writer.
    pub fn new(writer: NesHidWriter<'d>) -> Self {
        Self {
            writer,
            ready: false,
        }
    }

    /// Wait until the device is ready (USB enumerated).
    pub async fn wait_ready(&mut self) {
        self.writer.ready().await;
        self.ready = true;
    }
}

impl OutputSink for UsbHidOutput<'_> {
    async fn send(&mut self, buttons: &NesButtons) -> Result<(), OutputError> {
        if !self.ready {
            return Err(OutputError::NotReady);
        }

        let report = NesReport::from(buttons);
        self.writer
            .write(&report.as_bytes())
            .await
            .map_err(|_| OutputError::Io)
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}

/// Configure the USB HID class in the USB builder.
///
/// Returns the HID writer for use by the application.
pub fn configure_usb_hid<'d>(
    builder: &mut Builder<'d, Driver<'d, USB>>,
    state: &'d mut State<'d>,
) -> NesHidWriter<'d> {
    let config = embassy_usb::class::hid::Config {
        report_descriptor: REPORT_DESCRIPTOR,
        request_handler: None,
        poll_ms: 8,
        max_packet_size: 8,
        hid_subclass: embassy_usb::class::hid::HidSubclass::No,
        hid_boot_protocol: embassy_usb::class::hid::HidBootProtocol::None,
    };

    HidWriter::new(builder, state, config)
}

#![no_std]
#![no_main]

use defmt::{error, info, unwrap};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::gpio::{Flex, Level, Output};
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_usb::class::hid::State;
use embassy_usb::{Builder, Config as UsbConfig};
use nes_pad_firmware::{
    configure_usb_hid, ControllerReader, FlexPort, GameInput, InputSource, NesButtons, OutputSink,
    PollingInput, SpinDelay, UsbHidOutput, BOARD_PINS, POLL_PERIOD,
};
use static_cell::StaticCell;

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => embassy_rp::usb::InterruptHandler<USB>;
});

/// Signal for passing button state from input to output task.
/// Using Signal instead of Channel provides "latest value wins" semantics,
/// which is appropriate for controller state where only the most recent frame matters.
static STATE_SIGNAL: StaticCell<Signal<CriticalSectionRawMutex, NesButtons>> = StaticCell::new();

/// USB device configuration buffer.
static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static MSOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// HID state.
static HID_STATE: StaticCell<State> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("NES pad adapter starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    let signal = STATE_SIGNAL.init(Signal::new());

    // --- Controller Setup ---
    let mut control = FlexPort::new();
    unwrap!(control.add(BOARD_PINS.clock, Flex::new(p.PIN_3)));
    unwrap!(control.add(BOARD_PINS.latch, Flex::new(p.PIN_2)));
    let mut data = FlexPort::new();
    unwrap!(data.add(BOARD_PINS.data, Flex::new(p.PIN_4)));

    let delay = SpinDelay::from_sys_clock_hz(clk_sys_freq());
    info!("spin delay: {} cycles/us", delay.cycles_per_us());

    let reader = unwrap!(ControllerReader::new(control, data, delay, BOARD_PINS));
    let mut input = PollingInput::new(reader, POLL_PERIOD);
    if let Err(e) = input.initialize() {
        // Reading unconfigured pins yields garbage; don't continue.
        defmt::panic!("controller init failed: {}", e);
    }

    // --- USB Setup ---
    let usb_driver = Driver::new(p.USB, Irqs);

    let mut usb_config = UsbConfig::new(0x1209, 0x0001); // pid.codes test VID/PID
    usb_config.manufacturer = Some("Rust Gamepad");
    usb_config.product = Some("NES Controller Adapter");
    usb_config.serial_number = Some("001");
    usb_config.max_power = 100;
    usb_config.max_packet_size_0 = 64;

    let config_descriptor = CONFIG_DESCRIPTOR.init([0; 256]);
    let bos_descriptor = BOS_DESCRIPTOR.init([0; 256]);
    let msos_descriptor = MSOS_DESCRIPTOR.init([0; 256]);
    let control_buf = CONTROL_BUF.init([0; 64]);

    let mut builder = Builder::new(
        usb_driver,
        usb_config,
        config_descriptor,
        bos_descriptor,
        msos_descriptor,
        control_buf,
    );

    let hid_state = HID_STATE.init(State::new());
    let hid_writer = configure_usb_hid(&mut builder, hid_state);

    let usb_device = builder.build();
    let usb_output = UsbHidOutput::new(hid_writer);

    let led = Output::new(p.PIN_25, Level::Low);

    // Spawn tasks (unwrap the SpawnToken, then spawn)
    spawner.spawn(usb_task(usb_device).unwrap());
    spawner.spawn(input_task(input, signal, led).unwrap());
    spawner.spawn(output_task(usb_output, signal).unwrap());

    info!("NES pad adapter initialized, polling controller...");
}

/// USB device task - runs the USB stack.
#[embassy_executor::task]
async fn usb_task(mut device: embassy_usb::UsbDevice<'static, Driver<'static, USB>>) {
    device.run().await;
}

/// Input task - polls the controller and signals every change of state.
#[embassy_executor::task]
async fn input_task(
    mut input: PollingInput<'static>,
    signal: &'static Signal<CriticalSectionRawMutex, NesButtons>,
    mut led: Output<'static>,
) {
    let mut previous = NesButtons::NONE;

    loop {
        match input.receive().await {
            Ok(buttons) => {
                let edges = buttons.edges_since(previous);
                if edges.is_empty() {
                    continue;
                }
                for action in GameInput::iter_pressed(edges.pressed) {
                    info!("game input: {:?}", action);
                }
                previous = buttons;
                signal.signal(buttons);
            }
            Err(e) => {
                error!("Input error: {:?}", e);
                // Release everything on error to prevent stale inputs
                previous = NesButtons::NONE;
                signal.signal(NesButtons::NONE);
                led.toggle();
            }
        }
    }
}

/// Output task - waits for button state signals and sends to USB HID.
#[embassy_executor::task]
async fn output_task(
    mut output: UsbHidOutput<'static>,
    signal: &'static Signal<CriticalSectionRawMutex, NesButtons>,
) {
    // Wait for USB to be ready
    output.wait_ready().await;
    info!("USB HID ready, forwarding controller state...");

    loop {
        let buttons = signal.wait().await;
        if let Err(e) = output.send(&buttons).await {
            error!("Output error: {:?}", e);
        }
    }
}

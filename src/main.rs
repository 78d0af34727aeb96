//! ezkey firmware entry point (nRF52840).
//!
//! Tasks:
//!   - `usb_task`: runs the USB device stack (enumeration, control requests).
//!   - `hid_task`: drains finished reports onto the keyboard endpoint.
//!   - main: the scan loop, one cycle every `SCAN_INTERVAL_MS`.

#![no_std]
#![no_main]

mod usb;

use defmt::{error, info, unwrap};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_nrf::config::HfclkSource;
use embassy_nrf::gpio::{Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, Instant as Uptime, Ticker};
use embassy_usb::UsbDevice;
use ezkey::config::{self, REPORT_QUEUE_DEPTH};
use ezkey::sampler::{ActiveLevel, GpioSampler};
use ezkey::{Instant, KeyboardReport, Keypad, DEFAULT_KEYMAP};
use panic_probe as _;
use usb::hid_device::{self, ChannelTransmitter, KeyboardWriter, UsbDriver};

/// Finished reports on their way from the scan loop to the USB writer.
static REPORT_CHANNEL: Channel<CriticalSectionRawMutex, KeyboardReport, REPORT_QUEUE_DEPTH> =
    Channel::new();

#[embassy_executor::task]
async fn usb_task(device: UsbDevice<'static, UsbDriver>) {
    hid_device::run_usb_device(device).await
}

#[embassy_executor::task]
async fn hid_task(writer: KeyboardWriter) {
    hid_device::hid_writer_task(writer, REPORT_CHANNEL.receiver()).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // USB needs the external crystal.
    let mut nrf_config = embassy_nrf::config::Config::default();
    nrf_config.hfclk_source = HfclkSource::ExternalXtal;
    let p = embassy_nrf::init(nrf_config);

    info!("ezkey starting");

    let pins = [
        Input::new(p.P0_02, Pull::Up),
        Input::new(p.P0_03, Pull::Up),
        Input::new(p.P0_04, Pull::Up),
        Input::new(p.P0_05, Pull::Up),
        Input::new(p.P0_28, Pull::Up),
        Input::new(p.P0_29, Pull::Up),
        Input::new(p.P0_30, Pull::Up),
        Input::new(p.P0_31, Pull::Up),
        Input::new(p.P1_01, Pull::Up),
        Input::new(p.P1_02, Pull::Up),
        Input::new(p.P1_03, Pull::Up),
        Input::new(p.P1_04, Pull::Up),
    ];
    let sampler = GpioSampler::new(pins, ActiveLevel::Low);
    let transmitter = ChannelTransmitter::new(REPORT_CHANNEL.sender());

    let mut keypad = match Keypad::new(
        &DEFAULT_KEYMAP,
        config::DEBOUNCE_SAMPLES,
        sampler,
        transmitter,
    ) {
        Ok(keypad) => keypad,
        Err(e) => {
            // Never scan with a broken keymap; halt before USB comes up.
            error!("Keypad configuration rejected: {}", e);
            loop {
                cortex_m::asm::wfe();
            }
        }
    };

    let keyboard = hid_device::init(p.USBD);
    unwrap!(spawner.spawn(usb_task(keyboard.device)));
    unwrap!(spawner.spawn(hid_task(keyboard.writer)));

    let mut ticker = Ticker::every(Duration::from_millis(config::SCAN_INTERVAL_MS));
    loop {
        let now = Instant::from_millis(Uptime::now().as_millis());
        // Outcomes and failures are logged by the keypad; a failed cycle
        // just waits for the next tick.
        let _ = keypad.scan(now);
        ticker.next().await;
    }
}

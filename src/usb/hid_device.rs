//! USB HID boot keyboard.
//!
//! Initialises the Embassy USB stack on the nRF52840 hardware USB
//! peripheral and exposes one keyboard IN endpoint.

use defmt::{info, warn};
use embassy_nrf::usb::vbus_detect::HardwareVbusDetect;
use embassy_nrf::usb::Driver;
use embassy_nrf::{self, bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Receiver, Sender};
use embassy_usb::class::hid::{Config as HidConfig, HidWriter, State};
use embassy_usb::{Builder, Config, UsbDevice};
use ezkey::config::{self, REPORT_QUEUE_DEPTH};
use ezkey::hid::{KeyboardReport, KEYBOARD_REPORT_DESCRIPTOR, KEYBOARD_REPORT_SIZE};
use ezkey::{ReportTransmitter, TransmitError};
use static_cell::StaticCell;

bind_interrupts!(struct Irqs {
    USBD => embassy_nrf::usb::InterruptHandler<peripherals::USBD>;
    CLOCK_POWER => embassy_nrf::usb::vbus_detect::InterruptHandler;
});

static KB_STATE: StaticCell<State> = StaticCell::new();
static USB_CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_MSOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_CTRL_BUF: StaticCell<[u8; 64]> = StaticCell::new();

pub type UsbDriver = Driver<'static, peripherals::USBD, HardwareVbusDetect>;
pub type KeyboardWriter = HidWriter<'static, UsbDriver, KEYBOARD_REPORT_SIZE>;

pub type ReportSender = Sender<'static, CriticalSectionRawMutex, KeyboardReport, REPORT_QUEUE_DEPTH>;
pub type ReportReceiver =
    Receiver<'static, CriticalSectionRawMutex, KeyboardReport, REPORT_QUEUE_DEPTH>;

/// Build result containing the USB device runner and the keyboard writer.
pub struct UsbKeyboard {
    pub device: UsbDevice<'static, UsbDriver>,
    pub writer: KeyboardWriter,
}

/// Initialise the USB stack and create the keyboard interface.
///
/// Must be called exactly once.  All static buffers are consumed here.
pub fn init(usbd: peripherals::USBD) -> UsbKeyboard {
    // Create the low-level USB driver with hardware VBUS detection.
    let driver = Driver::new(usbd, Irqs, HardwareVbusDetect::new(Irqs));

    // USB device-level configuration.
    let mut usb_config = Config::new(config::USB_VID, config::USB_PID);
    usb_config.manufacturer = Some(config::USB_MANUFACTURER);
    usb_config.product = Some(config::USB_PRODUCT);
    usb_config.serial_number = Some(config::USB_SERIAL_NUMBER);
    usb_config.max_power = config::USB_MAX_POWER_MA;
    usb_config.max_packet_size_0 = 64;

    // Allocate static descriptor buffers.
    let config_desc = USB_CONFIG_DESC.init([0u8; 256]);
    let bos_desc = USB_BOS_DESC.init([0u8; 256]);
    let msos_desc = USB_MSOS_DESC.init([0u8; 256]);
    let ctrl_buf = USB_CTRL_BUF.init([0u8; 64]);

    let mut builder = Builder::new(
        driver,
        usb_config,
        config_desc,
        bos_desc,
        msos_desc,
        ctrl_buf,
    );

    let kb_state = KB_STATE.init(State::new());
    let kb_config = HidConfig {
        report_descriptor: KEYBOARD_REPORT_DESCRIPTOR,
        request_handler: None,
        poll_ms: config::USB_HID_POLL_MS,
        max_packet_size: KEYBOARD_REPORT_SIZE as u16,
    };
    let writer = HidWriter::new(&mut builder, kb_state, kb_config);

    let device = builder.build();

    info!("USB HID keyboard initialised");

    UsbKeyboard { device, writer }
}

/// Run the USB device stack - must be spawned as a dedicated Embassy task.
///
/// This handles USB enumeration, suspend/resume, and endpoint servicing.
pub async fn run_usb_device(mut device: UsbDevice<'static, UsbDriver>) -> ! {
    info!("USB device task started");
    device.run().await
}

/// HID report forwarding task - reads finished reports queued by the scan
/// loop and writes them to the keyboard endpoint.
///
/// A failed write is logged and dropped; the scan loop has already
/// recorded the report as sent.
pub async fn hid_writer_task(mut keyboard: KeyboardWriter, report_rx: ReportReceiver) -> ! {
    info!("HID writer task started - waiting for reports");

    let mut buf = [0u8; KEYBOARD_REPORT_SIZE];

    loop {
        let report = report_rx.receive().await;
        let n = report.serialize(&mut buf);
        if let Err(e) = keyboard.write(&buf[..n]).await {
            warn!("USB keyboard write failed: {:?}", e);
        }
    }
}

/// Scan-loop side of the report queue. Never blocks: a full queue is
/// reported back as [`TransmitError::QueueFull`].
pub struct ChannelTransmitter {
    tx: ReportSender,
}

impl ChannelTransmitter {
    pub fn new(tx: ReportSender) -> Self {
        Self { tx }
    }
}

impl ReportTransmitter for ChannelTransmitter {
    fn transmit(&mut self, report: &KeyboardReport) -> Result<(), TransmitError> {
        self.tx
            .try_send(*report)
            .map_err(|_| TransmitError::QueueFull)
    }
}

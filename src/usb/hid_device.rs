//! USB HID boot keyboard with a configuration feature report.
//!
//! Initialises the Embassy USB stack on the nRF52840 hardware USB
//! peripheral and exposes one boot keyboard interface.  Input reports go
//! out the interrupt endpoint.  GET_REPORT is answered from the snapshot
//! the bridge loop publishes; SET_REPORTs are queued in
//! [`HOST_REQUESTS`] for it.

use core::cell::Cell;

use defmt::{debug, info, warn};
use embassy_nrf::usb::vbus_detect::HardwareVbusDetect;
use embassy_nrf::usb::Driver;
use embassy_nrf::{self, bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::channel::Channel;
use embassy_usb::{Builder, Config, UsbDevice};
use static_cell::StaticCell;
use sun2usb::config;
use sun2usb::hid::keyboard::{KeyboardReport, KEYBOARD_REPORT_DESCRIPTOR, KEYBOARD_REPORT_SIZE};
use sun2usb::hid::{FeatureReport, HostRequest, ReportSnapshot};
use sun2usb::Error;

use super::boot_keyboard::{self, BootKeyboard};

bind_interrupts!(struct Irqs {
    USBD => embassy_nrf::usb::InterruptHandler<peripherals::USBD>;
    CLOCK_POWER => embassy_nrf::usb::vbus_detect::InterruptHandler;
});

pub type UsbDriver = Driver<'static, peripherals::USBD, HardwareVbusDetect>;
pub type KeyboardWriter = BootKeyboard<'static, UsbDriver>;

static KB_STATE: StaticCell<boot_keyboard::State> = StaticCell::new();
static USB_CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_MSOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_CTRL_BUF: StaticCell<[u8; 128]> = StaticCell::new();
static USB_STATE_HANDLER: StaticCell<UsbStateHandler> = StaticCell::new();

/// Host SET_REPORTs waiting for the bridge loop.
pub static HOST_REQUESTS: Channel<CriticalSectionRawMutex, HostRequest, { config::HOST_REQUEST_QUEUE_LEN }> =
    Channel::new();

/// Input and feature reports as of the last settled bridge step.
static REPORT_SNAPSHOT: Mutex<CriticalSectionRawMutex, Cell<ReportSnapshot>> =
    Mutex::new(Cell::new(ReportSnapshot::new()));

/// Publish the reports the next GET_REPORT will see.
pub fn publish_reports(input: KeyboardReport, feature: FeatureReport) {
    REPORT_SNAPSHOT.lock(|cell| cell.set(ReportSnapshot { input, feature }));
}

fn report_snapshot() -> ReportSnapshot {
    REPORT_SNAPSHOT.lock(|cell| cell.get())
}

fn queue_request(request: HostRequest) {
    if HOST_REQUESTS.try_send(request).is_err() {
        warn!("host request queue full, dropping {:?}", request);
    }
}

struct UsbStateHandler;

impl embassy_usb::Handler for UsbStateHandler {
    fn enabled(&mut self, enabled: bool) {
        debug!("USB enabled: {}", enabled);
    }

    fn configured(&mut self, configured: bool) {
        info!("USB configured: {}", configured);
    }

    fn suspended(&mut self, suspended: bool) {
        debug!("USB suspended: {}", suspended);
    }
}

/// Build result containing the USB device runner and the keyboard writer.
pub struct UsbHidDevice {
    pub device: UsbDevice<'static, UsbDriver>,
    pub keyboard_writer: KeyboardWriter,
}

/// Initialise the USB stack and create the HID keyboard.
///
/// Must be called exactly once.  All static buffers are consumed here.
pub fn init(usbd: peripherals::USBD) -> UsbHidDevice {
    // Create the low-level USB driver with hardware VBUS detection.
    let driver = Driver::new(usbd, Irqs, HardwareVbusDetect::new(Irqs));

    let mut usb_config = Config::new(config::USB_VID, config::USB_PID);
    usb_config.manufacturer = Some(config::USB_MANUFACTURER);
    usb_config.product = Some(config::USB_PRODUCT);
    usb_config.serial_number = Some(config::USB_SERIAL_NUMBER);
    usb_config.max_power = 100; // mA
    usb_config.max_packet_size_0 = 64;

    let config_desc = USB_CONFIG_DESC.init([0u8; 256]);
    let bos_desc = USB_BOS_DESC.init([0u8; 256]);
    let msos_desc = USB_MSOS_DESC.init([0u8; 256]);
    let ctrl_buf = USB_CTRL_BUF.init([0u8; 128]);

    let mut builder = Builder::new(
        driver,
        usb_config,
        config_desc,
        bos_desc,
        msos_desc,
        ctrl_buf,
    );

    builder.handler(USB_STATE_HANDLER.init(UsbStateHandler));

    let kb_state = KB_STATE.init(boot_keyboard::State::new());
    let kb_config = boot_keyboard::Config {
        report_descriptor: KEYBOARD_REPORT_DESCRIPTOR,
        poll_ms: config::USB_HID_POLL_MS,
        max_packet_size: KEYBOARD_REPORT_SIZE as u16,
        snapshot: report_snapshot,
        on_request: queue_request,
    };
    let keyboard_writer = BootKeyboard::new(&mut builder, kb_state, kb_config);

    let device = builder.build();

    info!("USB HID keyboard initialised");

    UsbHidDevice {
        device,
        keyboard_writer,
    }
}

/// Run the USB device stack - must be spawned as a dedicated Embassy task.
///
/// Handles enumeration and control requests, including the HID class
/// requests routed to the boot keyboard's control handler.
pub async fn run_usb_device(mut device: UsbDevice<'static, UsbDriver>) -> ! {
    info!("USB device task started");
    device.run().await
}

/// Send one boot keyboard report (fails e.g. while not yet configured).
pub async fn write_keyboard(writer: &mut KeyboardWriter, report: &KeyboardReport) -> Result<(), Error> {
    let mut buf = [0u8; KEYBOARD_REPORT_SIZE];
    let n = report.serialize(&mut buf);
    writer.write(&buf[..n]).await.map_err(|e| {
        debug!("USB keyboard write failed: {:?}", e);
        Error::Usb
    })
}

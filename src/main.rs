//! sun2usb firmware - Sun Type 4/5 keyboard to USB HID bridge.
//!
//! Target: nRF52840 (Cortex-M4F).  Two tasks share one executor:
//!
//! - USB task: enumeration and HID class requests (GET/SET_REPORT,
//!   protocol, idle).
//! - Bridge loop: owns [`Bridge`], feeds it legacy bytes, host requests
//!   and 1 ms ticks, then flushes everything it produced.

#![no_std]
#![no_main]

mod serial;
mod storage;
mod usb;

use defmt::{info, warn};
use embassy_embedded_hal::adapter::BlockingAsync;
use embassy_executor::Spawner;
use embassy_futures::select::{select3, Either3};
use embassy_nrf::gpio::{Level, Output, OutputDrive};
use embassy_nrf::nvmc::Nvmc;
use embassy_time::{Duration, Ticker};
use embedded_io_async::{Read, Write};
use embedded_storage_async::nor_flash::NorFlash;
use sun2usb::config::TICK_MS;
use sun2usb::hid::KeyboardReport;
use sun2usb::protocol::TxQueue;
use sun2usb::{Bridge, Error};
use {defmt_rtt as _, panic_probe as _};

use crate::storage::ClickStore;
use crate::usb::hid_device::{self, KeyboardWriter, UsbDriver, HOST_REQUESTS};

#[embassy_executor::task]
async fn usb_task(device: embassy_usb::UsbDevice<'static, UsbDriver>) -> ! {
    hid_device::run_usb_device(device).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("sun2usb starting");

    let mut flash = BlockingAsync::new(Nvmc::new(p.NVMC));
    let mut store = ClickStore::new();
    store.load_from_flash(&mut flash).await;
    let bridge = Bridge::boot(&mut store);

    let usb = hid_device::init(p.USBD);
    spawner.must_spawn(usb_task(usb.device));

    let uart = serial::init(
        p.UARTE0, p.TIMER0, p.PPI_CH0, p.PPI_CH1, p.PPI_GROUP0, p.P0_26, p.P0_27,
    );
    let (rx, tx) = uart.split();

    // LED1 on the DK, active low.
    let led = Output::new(p.P0_13, Level::High, OutputDrive::Standard);

    bridge_loop(
        bridge,
        BridgeIo {
            store,
            flash,
            rx,
            tx,
            keyboard: usb.keyboard_writer,
            led,
        },
    )
    .await
}

/// Everything the bridge loop drives besides the bridge itself.
struct BridgeIo<F, R, W> {
    store: ClickStore,
    flash: F,
    rx: R,
    tx: W,
    keyboard: KeyboardWriter,
    led: Output<'static>,
}

/// One step per iteration, then flush: legacy commands, dirty store,
/// report snapshot, status LED, input report.
async fn bridge_loop<F, R, W>(mut bridge: Bridge, mut io: BridgeIo<F, R, W>) -> !
where
    F: NorFlash,
    R: Read,
    W: Write,
{
    let mut ticker = Ticker::every(Duration::from_millis(TICK_MS));
    let mut queue = TxQueue::new();
    let mut last_report = KeyboardReport::empty();
    let mut byte = [0u8; 1];

    hid_device::publish_reports(bridge.input_report(), bridge.feature_report());

    loop {
        let step = select3(io.rx.read(&mut byte), HOST_REQUESTS.receive(), ticker.next()).await;
        match step {
            Either3::First(Ok(0)) => {}
            Either3::First(Ok(_)) => {
                bridge.feed(byte[0]);
            }
            Either3::First(Err(_)) => warn!("legacy link read error"),
            Either3::Second(request) => {
                bridge.handle_host_request(request, &mut queue, &mut io.store);
            }
            Either3::Third(()) => bridge.tick(1, &mut queue),
        }

        if let Err(e) = flush_commands(&mut io.tx, &mut queue).await {
            warn!("dropping legacy commands: {:?}", e);
        }

        if io.store.is_dirty() && io.store.save_to_flash(&mut io.flash).await.is_err() {
            warn!("click setting not persisted, will retry");
        }

        let report = bridge.input_report();
        hid_device::publish_reports(report, bridge.feature_report());

        io.led.set_level(if bridge.key_down() {
            Level::Low
        } else {
            Level::High
        });

        if report != last_report && hid_device::write_keyboard(&mut io.keyboard, &report).await.is_ok() {
            last_report = report;
        }
    }
}

/// Write out and empty the command queue.  Commands are dropped on error;
/// the link has no acknowledgement to retry against anyway.
async fn flush_commands<W: Write>(tx: &mut W, queue: &mut TxQueue) -> Result<(), Error> {
    if queue.is_empty() {
        return Ok(());
    }
    let result = tx.write_all(queue.as_slice()).await.map_err(|_| Error::Serial);
    queue.clear();
    result
}

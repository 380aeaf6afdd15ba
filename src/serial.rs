//! Legacy keyboard link: UARTE0 at 1200 baud 8N1.
//!
//! A buffered UARTE keeps receiving into its ring buffer while the bridge
//! loop is busy elsewhere, so a read cancelled by `select` loses nothing.

use defmt::info;
use embassy_nrf::buffered_uarte::{self, BufferedUarte};
use embassy_nrf::peripherals::{self, P0_26, P0_27, PPI_CH0, PPI_CH1, PPI_GROUP0, TIMER0, UARTE0};
use embassy_nrf::{bind_interrupts, uarte};
use static_cell::StaticCell;
use sun2usb::config::{LEGACY_BAUD, UART_RX_BUFFER_LEN, UART_TX_BUFFER_LEN};

bind_interrupts!(struct Irqs {
    UARTE0_UART0 => buffered_uarte::InterruptHandler<peripherals::UARTE0>;
});

static RX_BUF: StaticCell<[u8; UART_RX_BUFFER_LEN]> = StaticCell::new();
static TX_BUF: StaticCell<[u8; UART_TX_BUFFER_LEN]> = StaticCell::new();

pub type LegacyUart = BufferedUarte<'static, UARTE0, TIMER0>;

fn baudrate() -> uarte::Baudrate {
    match LEGACY_BAUD {
        1200 => uarte::Baudrate::BAUD1200,
        2400 => uarte::Baudrate::BAUD2400,
        _ => uarte::Baudrate::BAUD9600,
    }
}

/// Bring up the legacy link.  Must be called exactly once.
pub fn init(
    uarte: UARTE0,
    timer: TIMER0,
    ppi_ch0: PPI_CH0,
    ppi_ch1: PPI_CH1,
    ppi_group: PPI_GROUP0,
    rxd: P0_26,
    txd: P0_27,
) -> LegacyUart {
    let mut config = uarte::Config::default();
    config.parity = uarte::Parity::EXCLUDED;
    config.baudrate = baudrate();

    let rx_buf = RX_BUF.init([0u8; UART_RX_BUFFER_LEN]);
    let tx_buf = TX_BUF.init([0u8; UART_TX_BUFFER_LEN]);

    let uart = BufferedUarte::new(
        uarte, timer, ppi_ch0, ppi_ch1, ppi_group, Irqs, rxd, txd, config, rx_buf, tx_buf,
    );

    info!("Legacy link up at {=u32} baud", LEGACY_BAUD);
    uart
}

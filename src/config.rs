//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and protocol
//! constants live here so they can be tuned in one place.

// Legacy keyboard link

/// Baud rate of the Sun keyboard serial line (8N1).
pub const LEGACY_BAUD: u32 = 1200;

/// Maximum number of keys tracked as held down at once.
pub const MAX_KEYS_DOWN: usize = 16;

/// Bridge loop tick period (ms). Mirrors the USB start-of-frame rate.
pub const TICK_MS: u64 = 1;

/// Quiet period after boot before the layout is requested (ticks).
pub const LAYOUT_QUERY_DELAY_TICKS: u16 = 100;

/// Capacity of the outbound legacy command queue (bytes).
pub const LEGACY_TX_QUEUE_LEN: usize = 16;

/// UART ring buffer sizes (bytes).
pub const UART_RX_BUFFER_LEN: usize = 32;
pub const UART_TX_BUFFER_LEN: usize = 16;

// USB

/// USB VID/PID - the host utility discovers the adapter by this pair.
pub const USB_VID: u16 = 0x23FD;
pub const USB_PID: u16 = 0x206A;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "sun2usb";
pub const USB_PRODUCT: &str = "Sun Keyboard USB Adapter";
pub const USB_SERIAL_NUMBER: &str = "000001";

/// USB HID polling interval (ms).
pub const USB_HID_POLL_MS: u8 = 1;

/// Depth of the host-request channel (LED and feature SET_REPORTs).
pub const HOST_REQUEST_QUEUE_LEN: usize = 4;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the concrete `embassy_nrf::peripherals::*`
// pins are selected in `main.rs`.  The Sun keyboard drives inverted TTL
// levels, so an external inverter sits between the mini-DIN and the MCU.
//
//   Legacy RX      → P0.26
//   Legacy TX      → P0.27
//   Key-down LED   → P0.13 (LED1, active low)

// Settings storage

/// Flash page index where the settings map starts (4 KB per page on nRF52840).
pub const STORAGE_FLASH_PAGE_START: u32 = 240;

/// Number of flash pages reserved for the settings map.
pub const STORAGE_FLASH_PAGE_COUNT: u32 = 4;

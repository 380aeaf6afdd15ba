//! Persistent key click setting.
//!
//! Uses the nRF52840's internal flash via the `sequential-storage` crate.
//! The core sees a synchronous [`ByteStore`]; writes only touch the RAM
//! copy and mark it dirty, and the bridge loop flushes it afterwards.
//!
//! Storage layout:
//!   - One map item, key [`KEY_CLICK`], holding a single byte.
//!   - A missing item reads as the erased value (0xFF), which the core
//!     treats as first use.  A failed read reads as 0 and leaves flash
//!     untouched.

use defmt::{debug, error, info};
use embedded_storage_async::nor_flash::NorFlash;
use sun2usb::config::{STORAGE_FLASH_PAGE_COUNT, STORAGE_FLASH_PAGE_START};
use sun2usb::device::{ByteStore, StoredByte, STORE_ERASED};
use sun2usb::Error;

/// Flash page size for nRF52840 (4 KB).
const FLASH_PAGE_SIZE: u32 = 4096;

/// Start address of our storage region.
const STORAGE_START: u32 = STORAGE_FLASH_PAGE_START * FLASH_PAGE_SIZE;

/// End address (exclusive) of our storage region.
const STORAGE_END: u32 = (STORAGE_FLASH_PAGE_START + STORAGE_FLASH_PAGE_COUNT) * FLASH_PAGE_SIZE;

/// Key for the click setting in the map storage.
const KEY_CLICK: u8 = 0x01;

/// Scratch buffer for sequential-storage (item header + key + value).
const ITEM_BUF_SIZE: usize = 32;

/// In-memory copy of the click byte, synced with flash.
pub struct ClickStore {
    value: u8,
    /// Dirty flag - true if the cache differs from flash.
    dirty: bool,
}

impl ClickStore {
    pub const fn new() -> Self {
        Self {
            value: STORE_ERASED,
            dirty: false,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub async fn load_from_flash(&mut self, flash: &mut impl NorFlash) {
        let mut buf = [0u8; ITEM_BUF_SIZE];

        let stored = match sequential_storage::map::fetch_item::<u8, &[u8], _>(
            flash,
            STORAGE_START..STORAGE_END,
            &mut sequential_storage::cache::NoCache::new(),
            &mut buf,
            &KEY_CLICK,
        )
        .await
        {
            Ok(Some(data)) => match data.first() {
                Some(&value) => {
                    info!("Loaded click setting {=u8} from flash", value);
                    StoredByte::Found(value)
                }
                None => StoredByte::Missing,
            },
            Ok(None) => {
                info!("No click setting in flash");
                StoredByte::Missing
            }
            Err(e) => {
                error!("Flash read error: {:?}", defmt::Debug2Format(&e));
                StoredByte::Unreadable
            }
        };
        self.value = stored.cached();
        self.dirty = false;
    }

    /// Persist the cached byte if it changed.  On failure the dirty flag
    /// stays set and the next flush tries again.
    pub async fn save_to_flash(&mut self, flash: &mut impl NorFlash) -> Result<(), Error> {
        if !self.dirty {
            return Ok(());
        }

        let mut buf = [0u8; ITEM_BUF_SIZE];
        let item: &[u8] = &[self.value];

        match sequential_storage::map::store_item::<u8, &[u8], _>(
            flash,
            STORAGE_START..STORAGE_END,
            &mut sequential_storage::cache::NoCache::new(),
            &mut buf,
            &KEY_CLICK,
            &item,
        )
        .await
        {
            Ok(_) => {
                debug!("Saved click setting {=u8} to flash", self.value);
                self.dirty = false;
                Ok(())
            }
            Err(e) => {
                error!("Flash write error: {:?}", defmt::Debug2Format(&e));
                Err(Error::Storage)
            }
        }
    }
}

impl ByteStore for ClickStore {
    fn read_byte(&mut self) -> u8 {
        self.value
    }

    fn write_byte(&mut self, value: u8) {
        self.value = value;
        self.dirty = true;
    }
}

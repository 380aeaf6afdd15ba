//! Logger for unit tests: records each thread's `log` output so a test can
//! check what it emitted.

use std::cell::RefCell;

struct Capture;

static LOGGER: Capture = Capture;

thread_local! {
    static RECORDS: RefCell<Vec<(::log::Level, String)>> = const { RefCell::new(Vec::new()) };
}

impl ::log::Log for Capture {
    fn enabled(&self, _metadata: &::log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &::log::Record) {
        RECORDS.with(|r| {
            r.borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

/// Install the capturing logger.  Safe to call from every test.
pub fn setup() {
    // Only the first caller installs it.
    let _ = ::log::set_logger(&LOGGER);
    ::log::set_max_level(::log::LevelFilter::Debug);
}

/// Drain what this thread has logged so far.
pub fn take() -> Vec<(::log::Level, String)> {
    RECORDS.with(|r| r.take())
}

//! sunkbd-mode - query or change the Sun keyboard adapter's settings.
//!
//! Talks to the adapter's configuration feature report over hidraw.
//!
//! Usage:
//!   sunkbd-mode                # Show layout and click setting
//!   sunkbd-mode --click        # Turn key click on
//!   sunkbd-mode -d 3 -n        # Turn key click off on /dev/hidraw3

mod cli;
mod discovery;
mod error;

use anyhow::{Context, Result};
use clap::Parser;
use hidapi::{HidApi, HidDevice};
use sun2usb::hid::feature::{FeatureReport, HOST_FEATURE_BUFFER_SIZE};
use sun2usb::layout::layout_name;
use tracing::{debug, info};

use crate::cli::{device_path_from_arg, Cli};
use crate::error::ToolError;

fn setup_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn read_config(device: &HidDevice) -> Result<FeatureReport, ToolError> {
    let mut buf = [0u8; HOST_FEATURE_BUFFER_SIZE];
    let n = device.get_feature_report(&mut buf)?;
    debug!("GET feature report: {:02X?}", &buf[..n.min(buf.len())]);
    let size_error = ToolError::FeatureReportSize {
        expected: HOST_FEATURE_BUFFER_SIZE,
        actual: n,
    };
    if n != HOST_FEATURE_BUFFER_SIZE {
        return Err(size_error);
    }
    FeatureReport::from_host_buffer(&buf).ok_or(size_error)
}

fn write_click(device: &HidDevice, current: FeatureReport, enabled: bool) -> Result<(), ToolError> {
    let buf = FeatureReport {
        click_enabled: enabled,
        ..current
    }
    .to_host_buffer();
    debug!("SET feature report: {:02X?}", buf);
    device.send_feature_report(&buf)?;
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let api = HidApi::new().context("Cannot initialise hidapi")?;

    let path = match &cli.device {
        Some(arg) => discovery::to_c_path(&device_path_from_arg(arg))?,
        None => discovery::find_adapter(&api)?,
    };
    info!("Using {:?}", path);

    let device = api
        .open_path(&path)
        .with_context(|| format!("Unable to open device {path:?}"))?;

    let mut report = read_config(&device).context("Error getting feature report")?;
    println!("Layout = {:02X} ({})", report.layout, layout_name(report.layout));

    if let Some(enabled) = cli.click_setting() {
        write_click(&device, report, enabled).context("Error setting feature report")?;
        report = read_config(&device).context("Error getting feature report")?;
    }

    println!("Click = {}", if report.click_enabled { "on" } else { "off" });
    Ok(())
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };
    setup_logging(cli.verbose);
    run(&cli)
}

use clap::Parser;

/// Query the Sun keyboard adapter's layout and toggle key click
#[derive(Parser, Debug)]
#[command(name = "sunkbd-mode", version, about)]
pub struct Cli {
    /// hidraw device: a path, or N for /dev/hidrawN.
    /// If not provided, the single attached adapter is used
    #[arg(short, long, value_name = "PATH|N")]
    pub device: Option<String>,

    /// Turn key click on
    #[arg(short = 'c', long = "click", conflicts_with = "no_click")]
    pub click: bool,

    /// Turn key click off
    #[arg(short = 'n', long = "no-click")]
    pub no_click: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Requested click setting, if any.
    pub fn click_setting(&self) -> Option<bool> {
        match (self.click, self.no_click) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Absolute paths are taken as is; anything else names a hidraw node.
pub fn device_path_from_arg(arg: &str) -> String {
    if arg.starts_with('/') {
        arg.to_owned()
    } else {
        format!("/dev/hidraw{arg}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("sunkbd-mode").chain(args.iter().copied()))
    }

    #[test]
    fn device_number_becomes_hidraw_path() {
        assert_eq!(device_path_from_arg("3"), "/dev/hidraw3");
        assert_eq!(device_path_from_arg("/dev/hidraw7"), "/dev/hidraw7");
    }

    #[test]
    fn no_flags_reads_only() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.click_setting(), None);
        assert!(cli.device.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn click_flags() {
        assert_eq!(parse(&["-c"]).unwrap().click_setting(), Some(true));
        assert_eq!(parse(&["--no-click"]).unwrap().click_setting(), Some(false));
    }

    #[test]
    fn click_and_no_click_conflict() {
        assert!(parse(&["-c", "-n"]).is_err());
    }

    #[test]
    fn device_and_verbose() {
        let cli = parse(&["-d", "2", "-v"]).unwrap();
        assert_eq!(cli.device.as_deref(), Some("2"));
        assert!(cli.verbose);
    }
}

use crate::errors::WaitError;
use clap::{ArgAction, Parser};
use log::LevelFilter;

/// Command line of `waitfor`.
///
/// Positionals are collected rather than declared as a single required
/// argument so that a wrong count is reported by `waitfor` itself, with exit
/// status 1, instead of by clap.
#[derive(Parser, Debug)]
#[command(
    name = "waitfor",
    version,
    about = "waitfor will wait on the availability of a host and TCP port.",
    after_help = "For example to manage the start order of docker containers."
)]
pub struct Input {
    /// Endpoint to wait for, or `help` to print this text.
    #[arg(value_name = "host:port")]
    pub targets: Vec<String>,

    /// The timeout in seconds until the service is considered non-responsive. 0 waits indefinitely.
    #[arg(short, long, value_name = "seconds", default_value_t = 0)]
    pub timeout: u64,

    /// Only write errors to output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Raise the diagnostic log level written to stderr. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// What a parsed command line asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Wait(String),
}

impl Input {
    /// Resolves the positionals into a command.
    ///
    /// `help` in first position wins over everything else, including extra
    /// positionals.
    pub fn resolve(&self) -> Result<Command, WaitError> {
        match self.targets.as_slice() {
            [first, ..] if first == "help" => Ok(Command::Help),
            [target] => Ok(Command::Wait(target.clone())),
            _ => Err(WaitError::Usage {
                args: self.targets.clone(),
            }),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// A target is only checked for the `host:port` separator.
pub fn has_port_separator(target: &str) -> bool {
    target.contains(':')
}

#[cfg(test)]
mod tests {
    use super::{has_port_separator, Command, Input};
    use crate::errors::WaitError;
    use clap::Parser;
    use log::LevelFilter;

    fn parse(args: &[&str]) -> Input {
        Input::try_parse_from(std::iter::once("waitfor").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let input = parse(&["db:5432"]);
        assert_eq!(input.timeout, 0);
        assert!(!input.quiet);
        assert_eq!(input.log_level(), LevelFilter::Warn);
        assert_eq!(input.resolve().unwrap(), Command::Wait("db:5432".to_string()));
    }

    #[test]
    fn flags_after_target() {
        let input = parse(&["127.0.0.1:9999", "-t", "1", "--quiet"]);
        assert_eq!(input.timeout, 1);
        assert!(input.quiet);
        assert_eq!(input.resolve().unwrap(), Command::Wait("127.0.0.1:9999".to_string()));
    }

    #[test]
    fn long_flags_before_target() {
        let input = parse(&["--timeout", "30", "-q", "db:5432"]);
        assert_eq!(input.timeout, 30);
        assert!(input.quiet);
    }

    #[test]
    fn no_target_is_a_usage_error() {
        let input = parse(&[]);
        assert!(matches!(input.resolve(), Err(WaitError::Usage { args }) if args.is_empty()));
    }

    #[test]
    fn two_targets_is_a_usage_error() {
        let input = parse(&["db:5432", "cache:6379"]);
        match input.resolve() {
            Err(WaitError::Usage { args }) => assert_eq!(args, vec!["db:5432", "cache:6379"]),
            other => panic!("unexpected resolution: {:?}", other),
        }
    }

    #[test]
    fn help_wins_regardless_of_flags() {
        assert_eq!(parse(&["help"]).resolve().unwrap(), Command::Help);
        assert_eq!(parse(&["help", "-q", "-t", "5"]).resolve().unwrap(), Command::Help);
        assert_eq!(parse(&["help", "db:5432"]).resolve().unwrap(), Command::Help);
    }

    #[test]
    fn negative_timeout_is_rejected() {
        assert!(Input::try_parse_from(["waitfor", "db:5432", "-t", "-1"]).is_err());
        assert!(Input::try_parse_from(["waitfor", "db:5432", "-t", "soon"]).is_err());
    }

    #[test]
    fn verbosity_raises_log_level() {
        assert_eq!(parse(&["-v", "db:5432"]).log_level(), LevelFilter::Info);
        assert_eq!(parse(&["-vv", "db:5432"]).log_level(), LevelFilter::Debug);
        assert_eq!(parse(&["-vvvv", "db:5432"]).log_level(), LevelFilter::Trace);
    }

    #[test]
    fn separator_check() {
        assert!(has_port_separator("localhost:80"));
        assert!(has_port_separator("[::1]:80"));
        assert!(!has_port_separator("badtarget"));
    }
}

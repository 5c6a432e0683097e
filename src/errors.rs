use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WaitError {
    #[error("waitfor requires exactly one argument: 'host:port'\nYou called it with: [{}]", .args.join(" "))]
    Usage { args: Vec<String> },
    #[error("timed out after {seconds} seconds")]
    TimedOut { seconds: u64 },
    #[error("{0}")]
    Connection(#[from] io::Error),
}

impl WaitError {
    /// Process exit status reported for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            WaitError::Usage { .. } | WaitError::TimedOut { .. } | WaitError::Connection(_) => 1,
        }
    }
}

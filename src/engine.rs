use crate::{errors::WaitError, output::Reporter};
use log::{debug, warn};
use std::{io::Write, time::Duration};
use tokio::{net::TcpStream, time::timeout};

#[derive(Debug)]
pub struct Engine {
    /// `None` waits as long as the operating system lets the connect run.
    pub timeout: Option<Duration>,
}

impl Engine {
    pub fn new(timeout_seconds: u64) -> Self {
        Self {
            timeout: (timeout_seconds > 0).then(|| Duration::from_secs(timeout_seconds)),
        }
    }

    /// Attempts one TCP connection to `target` and closes it straight away.
    ///
    /// The deadline, when set, covers name resolution as well as the handshake.
    /// Only the engine's own deadline yields [`WaitError::TimedOut`]. An
    /// operating system connect timeout that fires first, with or without a
    /// deadline, is reported as a connection error.
    pub async fn connect(&self, target: &str) -> Result<(), WaitError> {
        let stream = match self.timeout {
            Some(limit) => timeout(limit, TcpStream::connect(target))
                .await
                .map_err(|_| WaitError::TimedOut {
                    seconds: limit.as_secs(),
                })??,
            None => TcpStream::connect(target).await?,
        };
        debug!("connected to {} ({:?})", target, stream.peer_addr());
        drop(stream);
        Ok(())
    }
}

/// Announces the wait, then makes a single connection attempt.
pub async fn attempt<W: Write, E: Write>(
    target: &str,
    timeout_seconds: u64,
    reporter: &mut Reporter<W, E>,
) -> Result<(), WaitError> {
    if let Err(e) = reporter.waiting(target, timeout_seconds) {
        warn!("could not write status line: {}", e);
    }
    let engine = Engine::new(timeout_seconds);
    debug!("connecting to {} with {:?}", target, engine);
    let result = engine.connect(target).await;
    match &result {
        Ok(()) => debug!("{} accepted the connection", target),
        Err(e) => debug!("attempt on {} failed: {}", target, e),
    }
    result
}

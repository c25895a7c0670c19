//! # Network Channel
//!
//! Raw TCP printing (port 9100 on most thermal printers): connect, write
//! the whole job, flush, close. Connect and write are each bounded by
//! [`NetworkPolicy::timeout`]. With the default policy a single attempt is
//! made.

use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{info, instrument, warn};

use crate::error::{TicketError, TicketResult};
use crate::printer::NetworkPolicy;

/// Delivery to a network printer.
#[derive(Debug, Clone)]
pub struct NetworkChannel {
    target: String,
    policy: NetworkPolicy,
}

impl NetworkChannel {
    /// `target` is `host:port`; host names are resolved on connect.
    pub fn new(target: impl Into<String>, policy: NetworkPolicy) -> Self {
        Self {
            target: target.into(),
            policy,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    #[instrument(skip(self, data), fields(addr = %self.target, data_len = data.len()))]
    pub async fn deliver(&self, data: &[u8]) -> TicketResult<()> {
        let attempts = self.policy.attempts.max(1);
        let mut attempt = 1;
        loop {
            match self.send_once(data).await {
                Ok(()) => return Ok(()),
                Err(e) if attempt < attempts => {
                    warn!(attempt, error = %e, "Print attempt failed, retrying");
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn send_once(&self, data: &[u8]) -> TicketResult<()> {
        let timeout = self.policy.timeout;
        info!("Connecting to printer");

        let mut stream = tokio::time::timeout(timeout, TcpStream::connect(self.target.as_str()))
            .await
            .map_err(|_| self.failure(format!("connection timed out after {}", fmt_duration(timeout))))?
            .map_err(|e| self.failure(format!("connect failed: {}", e)))?;

        info!("Connected, sending {} bytes", data.len());

        tokio::time::timeout(timeout, async {
            stream.write_all(data).await?;
            stream.flush().await?;
            stream.shutdown().await
        })
        .await
        .map_err(|_| self.failure(format!("write timed out after {}", fmt_duration(timeout))))?
        .map_err(|e| self.failure(format!("write failed: {}", e)))?;

        info!("Print job sent");
        Ok(())
    }

    fn failure(&self, reason: String) -> TicketError {
        TicketError::NetworkFailure {
            addr: self.target.clone(),
            reason,
        }
    }
}

fn fmt_duration(d: Duration) -> String {
    format!("{}ms", d.as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_sends_all_bytes() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            socket.read_to_end(&mut buf).await.unwrap();
            buf
        });

        let channel = NetworkChannel::new(addr.to_string(), NetworkPolicy::default());
        channel.deliver(b"\x1b@hello\n").await.unwrap();

        assert_eq!(server.await.unwrap(), b"\x1b@hello\n");
    }

    #[tokio::test]
    async fn test_refused_connection_is_network_failure() {
        // Bind then drop to get a port with nothing listening.
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };

        let policy = NetworkPolicy {
            timeout: Duration::from_millis(500),
            attempts: 2,
        };
        let err = NetworkChannel::new(addr.to_string(), policy)
            .deliver(b"data")
            .await
            .unwrap_err();
        match err {
            TicketError::NetworkFailure { addr: target, .. } => {
                assert_eq!(target, addr.to_string())
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

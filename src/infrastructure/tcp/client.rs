use crate::core::notify::transport::{InboundStream, NotificationTransport};
use crate::domain::error::{FloodWatchError, FloodWatchResult};
use async_trait::async_trait;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tokio::net::TcpStream;
use tracing::{debug, info, warn};

/// Notification transport over a plain TCP connection carrying one JSON
/// envelope per line
pub struct TcpLineTransport {
    connect_timeout: Duration,
}

impl TcpLineTransport {
    pub fn new(connect_timeout_ms: u64) -> Self {
        Self {
            connect_timeout: Duration::from_millis(connect_timeout_ms),
        }
    }
}

#[async_trait]
impl NotificationTransport for TcpLineTransport {
    async fn connect(&self, endpoint: &str) -> FloodWatchResult<Box<dyn InboundStream>> {
        let stream = tokio::time::timeout(self.connect_timeout, TcpStream::connect(endpoint))
            .await
            .map_err(|_| FloodWatchError::Transport {
                message: format!("Connection timeout to {}", endpoint),
            })?
            .map_err(|e| FloodWatchError::Transport {
                message: format!("Failed to connect to {}: {}", endpoint, e),
            })?;

        if let Err(e) = stream.set_nodelay(true) {
            warn!("Failed to set TCP_NODELAY: {}", e);
        }

        info!("Notification stream connected to {}", endpoint);

        Ok(Box::new(TcpLineStream {
            lines: BufReader::new(stream).lines(),
        }))
    }
}

struct TcpLineStream {
    lines: Lines<BufReader<TcpStream>>,
}

#[async_trait]
impl InboundStream for TcpLineStream {
    async fn next_frame(&mut self) -> Option<String> {
        match self.lines.next_line().await {
            Ok(Some(line)) => {
                debug!("Received {} byte frame", line.len());
                Some(line)
            }
            Ok(None) => {
                info!("Notification stream closed by peer");
                None
            }
            Err(e) => {
                warn!("Notification stream read failed: {}", e);
                None
            }
        }
    }
}

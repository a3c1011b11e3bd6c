//! # Port Adapters
//!
//! Production implementations of the CS-02 outbound ports: the wall clock
//! as `TimestampSource` and an in-process channel standing in for the
//! lower radio layers.

use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use tokio::sync::mpsc;

use cs_02_broadcast_auth::{BroadcastFrames, RadioGateway, TimestampSource, TransmitError};
use shared_types::NtpTimestamp;

/// Wall-clock timestamp source in NTP format.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimestampSource for SystemClock {
    fn now(&self) -> NtpTimestamp {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        NtpTimestamp::from_unix_duration(elapsed)
    }
}

/// Radio gateway backed by a bounded in-process channel.
///
/// The receiving half is consumed by the UE monitor. A real deployment
/// would implement [`RadioGateway`] over the actual RLC/MAC path instead.
pub struct ChannelRadioLink {
    tx: mpsc::Sender<BroadcastFrames>,
}

impl ChannelRadioLink {
    /// Create a link and the receiver for the other end of the air.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<BroadcastFrames>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }
}

#[async_trait]
impl RadioGateway for ChannelRadioLink {
    async fn transmit(&self, frames: BroadcastFrames) -> Result<(), TransmitError> {
        self.tx
            .send(frames)
            .await
            .map_err(|_| TransmitError::LinkClosed)
    }
}

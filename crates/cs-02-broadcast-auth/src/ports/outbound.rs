//! # Outbound Ports (Driven Ports / SPI)
//!
//! Traits that define dependencies this subsystem needs: a clock for
//! broadcast timestamps and a gateway to the lower radio layers.

use shared_types::NtpTimestamp;
use thiserror::Error;

use crate::domain::entities::BroadcastFrames;

/// Source of broadcast timestamps.
///
/// Injected rather than read from a global clock, so tests can pin time
/// and the production adapter can pick the wall clock it trusts.
pub trait TimestampSource: Send + Sync {
    /// Current time in 64-bit NTP format.
    fn now(&self) -> NtpTimestamp;
}

/// Error from the radio transmission path.
#[derive(Debug, Error)]
pub enum TransmitError {
    /// The lower layers are gone (channel closed, link down).
    #[error("Radio link closed")]
    LinkClosed,

    /// The frames were rejected.
    #[error("Transmission rejected: {reason}")]
    Rejected { reason: String },
}

/// Gateway to the lower radio layers (RLC/MAC stand-in).
///
/// This port receives fully encoded PDUs; everything below it is outside
/// the authentication core's trust and scope.
#[async_trait::async_trait]
pub trait RadioGateway: Send + Sync {
    /// Hand one broadcast cycle's frames to the lower layers.
    ///
    /// # Errors
    /// * `TransmitError::LinkClosed` - the radio path is gone
    /// * `TransmitError::Rejected` - the frames were refused
    async fn transmit(&self, frames: BroadcastFrames) -> Result<(), TransmitError>;
}

//! # UE-Side Broadcast Monitor
//!
//! Consumes frames from the radio channel, authenticates them, and applies
//! the receiver freshness policy. The verification core only surfaces the
//! embedded timestamp; judging it against the local clock happens here.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, warn};

use cs_02_broadcast_auth::{BroadcastFrames, BroadcastVerifier, BroadcastVerifierApi, TimestampSource};

/// Counters for observed broadcast outcomes.
#[derive(Debug, Default)]
pub struct MonitorStats {
    accepted: AtomicU64,
    stale: AtomicU64,
    rejected: AtomicU64,
    undecodable: AtomicU64,
}

impl MonitorStats {
    /// Broadcasts that authenticated and passed the freshness policy.
    pub fn accepted(&self) -> u64 {
        self.accepted.load(Ordering::Relaxed)
    }

    /// Authenticated broadcasts outside the freshness window.
    pub fn stale(&self) -> u64 {
        self.stale.load(Ordering::Relaxed)
    }

    /// Broadcasts that failed authentication.
    pub fn rejected(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }

    /// Frames that did not decode as broadcast messages.
    pub fn undecodable(&self) -> u64 {
        self.undecodable.load(Ordering::Relaxed)
    }
}

/// The UE-side monitor task.
pub struct UeMonitor<T: TimestampSource> {
    verifier: BroadcastVerifier,
    clock: T,
    rx: mpsc::Receiver<BroadcastFrames>,
    max_skew_secs: u64,
    stats: Arc<MonitorStats>,
}

impl<T: TimestampSource> UeMonitor<T> {
    /// Create a monitor for one cell's public key.
    pub fn new(
        verifier: BroadcastVerifier,
        clock: T,
        rx: mpsc::Receiver<BroadcastFrames>,
        max_skew_secs: u64,
    ) -> Self {
        Self {
            verifier,
            clock,
            rx,
            max_skew_secs,
            stats: Arc::new(MonitorStats::default()),
        }
    }

    /// Shared handle to the outcome counters.
    pub fn stats(&self) -> Arc<MonitorStats> {
        Arc::clone(&self.stats)
    }

    /// Run until the radio channel closes.
    pub async fn run(mut self) {
        while let Some(frames) = self.rx.recv().await {
            self.handle_frames(&frames);
        }
        info!("Radio channel closed, UE monitor exiting");
    }

    fn handle_frames(&self, frames: &BroadcastFrames) {
        match self
            .verifier
            .verify_broadcast_pdus(&frames.mib_pdu, &frames.sib1_pdu)
        {
            Ok(result) if result.valid => match result.timestamp {
                Some(ts) => {
                    let skew = ts.abs_delta_secs(self.clock.now());
                    if skew > self.max_skew_secs {
                        self.stats.stale.fetch_add(1, Ordering::Relaxed);
                        warn!(skew_secs = skew, "Authenticated broadcast outside freshness window");
                    } else {
                        self.stats.accepted.fetch_add(1, Ordering::Relaxed);
                        info!(ntp_seconds = ts.seconds(), "Authenticated broadcast accepted");
                    }
                }
                None => {
                    // Cannot happen: a valid result always carries its
                    // timestamp. Count it as stale rather than trusting it.
                    self.stats.stale.fetch_add(1, Ordering::Relaxed);
                }
            },
            Ok(result) => {
                self.stats.rejected.fetch_add(1, Ordering::Relaxed);
                match result.error {
                    Some(failure) => warn!(%failure, "Broadcast failed authentication"),
                    None => warn!("Broadcast failed authentication"),
                }
            }
            Err(e) => {
                self.stats.undecodable.fetch_add(1, Ordering::Relaxed);
                warn!(error = %e, "Received frames did not decode as broadcast messages");
            }
        }
    }
}

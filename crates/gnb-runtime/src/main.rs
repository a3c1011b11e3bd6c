//! # CellSign gNB Runtime
//!
//! The main entry point for an authenticated-broadcast gNB.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (file argument + environment overrides)
//! 2. Parse and self-test the key material (abort on any fault)
//! 3. Spawn the UE-side monitor on the receiving end of the radio link
//! 4. Run the periodic broadcast loop: construct MIB/SIB1, sign, transmit
//! 5. Shut down on Ctrl+C and report monitor counters

mod adapters;
mod config;
mod monitor;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use cs_02_broadcast_auth::{BroadcastAuthService, BroadcastVerifier};
use shared_types::{MasterInfoBlock, SysInfoBlock1};

use crate::adapters::{ChannelRadioLink, SystemClock};
use crate::monitor::UeMonitor;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = config::load_config(config_path.as_deref())?;
    let (keypair, public_key) = config::build_key_material(&config.keys)?;

    info!("===========================================");
    info!("  CellSign gNB Runtime v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");
    info!("PLMN: {:?}", config.cell.plmn);
    info!("TAC: {} NCI: {}", config.cell.tac, config.cell.nci);
    info!("Broadcast interval: {} ms", config.broadcast_interval_ms);

    // Radio link with the UE monitor on the far end
    let (radio, radio_rx) = ChannelRadioLink::new(16);

    // Key self-test runs inside the service constructor; a mismatched pair
    // never broadcasts a single frame.
    let service = BroadcastAuthService::new(keypair, public_key, SystemClock, radio)
        .context("Key material failed the startup self-test")?;

    let ue_monitor = UeMonitor::new(
        BroadcastVerifier::new(public_key),
        SystemClock,
        radio_rx,
        config.max_timestamp_skew_secs,
    );
    let stats = ue_monitor.stats();
    let monitor_handle = tokio::spawn(ue_monitor.run());

    // Shutdown channel
    let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

    // Broadcast loop
    let cell = config.cell.clone();
    let broadcaster = tokio::spawn(async move {
        let mib = MasterInfoBlock::new(cell.barred, cell.intra_freq_reselection);
        let sib1 = SysInfoBlock1::new(
            cell.cell_reserved,
            cell.tac,
            cell.nci,
            cell.plmn,
            cell.ai_barring,
        );

        let mut ticker =
            tokio::time::interval(Duration::from_millis(config.broadcast_interval_ms.max(1)));
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = service.sign_and_transmit(&mib, &sib1).await {
                        error!("Broadcast cycle failed: {e}");
                    }
                }
                _ = shutdown_rx.changed() => {
                    info!("[cs-02] Shutdown signal received");
                    break;
                }
            }
        }
    });

    info!("gNB is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    // Graceful shutdown: stop broadcasting, then let the monitor drain.
    info!("Initiating graceful shutdown...");
    let _ = shutdown_tx.send(true);
    let _ = broadcaster.await;
    let _ = monitor_handle.await;

    info!(
        accepted = stats.accepted(),
        stale = stats.stale(),
        rejected = stats.rejected(),
        undecodable = stats.undecodable(),
        "Shutdown complete"
    );

    Ok(())
}

//! # Configuration Loading
//!
//! Configuration comes from an optional JSON file plus environment
//! overrides. Key material is validated here, at startup: bad hex or
//! wrong-length keys abort before any broadcast cycle runs.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use shared_crypto::{Ed25519KeyPair, Ed25519PublicKey};
use shared_types::{GnbConfig, KeyConfig};

/// Load configuration from an optional file and the environment.
///
/// Precedence: defaults < config file < `CS_SECRET_KEY` / `CS_PUBLIC_KEY` /
/// `CS_BROADCAST_INTERVAL_MS` environment variables.
pub fn load_config(path: Option<&Path>) -> Result<GnbConfig> {
    let mut config = match path {
        Some(p) => {
            let raw = std::fs::read_to_string(p)
                .with_context(|| format!("Failed to read config file {}", p.display()))?;
            let parsed: GnbConfig = serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse config file {}", p.display()))?;
            info!(path = %p.display(), "Loaded configuration file");
            parsed
        }
        None => GnbConfig::default(),
    };

    if let Ok(secret_hex) = std::env::var("CS_SECRET_KEY") {
        config.keys.secret_key = secret_hex;
        info!("Loaded secret key from environment");
    }
    if let Ok(public_hex) = std::env::var("CS_PUBLIC_KEY") {
        config.keys.public_key = public_hex;
        info!("Loaded public key from environment");
    }
    if let Ok(interval) = std::env::var("CS_BROADCAST_INTERVAL_MS") {
        if let Ok(ms) = interval.parse() {
            config.broadcast_interval_ms = ms;
        }
    }

    Ok(config)
}

/// Parse and validate the configured key material.
///
/// # Errors
///
/// Fails when either half is missing, not valid hex, or not exactly
/// 32 bytes. These are configuration faults: fatal, never retried.
pub fn build_key_material(keys: &KeyConfig) -> Result<(Ed25519KeyPair, Ed25519PublicKey)> {
    if !keys.is_populated() {
        bail!(
            "No key material configured; provide keys in the config file \
             or via CS_SECRET_KEY / CS_PUBLIC_KEY"
        );
    }

    let keypair = Ed25519KeyPair::from_seed_hex(&keys.secret_key)
        .context("Invalid secret key in configuration")?;
    let public = Ed25519PublicKey::from_hex(&keys.public_key)
        .context("Invalid public key in configuration")?;

    Ok((keypair, public))
}

//! # Runtime Configuration Types
//!
//! Serde-loadable configuration for the gNB runtime. Key material is
//! injected here (file or environment), never compiled into a binary.

use serde::{Deserialize, Serialize};

use crate::entities::{Plmn, UacAiBarringSet};

/// Static cell parameters used to construct each broadcast cycle's messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellConfig {
    /// Serving PLMN.
    pub plmn: Plmn,
    /// Tracking area code (24 bits).
    pub tac: u32,
    /// NR cell identity (36 bits).
    pub nci: u64,
    /// Whether the cell bars new arrivals.
    pub barred: bool,
    /// Whether intra-frequency reselection is allowed when barred.
    pub intra_freq_reselection: bool,
    /// Whether the cell is reserved (operator/other use).
    pub cell_reserved: bool,
    /// Access-identity barring flags.
    pub ai_barring: UacAiBarringSet,
}

impl Default for CellConfig {
    fn default() -> Self {
        Self {
            plmn: Plmn::default(),
            tac: 1,
            nci: 16,
            barred: false,
            intra_freq_reselection: true,
            cell_reserved: false,
            ai_barring: UacAiBarringSet::default(),
        }
    }
}

/// Signing key material, hex-encoded.
///
/// Both strings must decode to exactly 32 bytes. Left empty here; the
/// runtime fills them from the config file or the `CS_SECRET_KEY` /
/// `CS_PUBLIC_KEY` environment overrides and validates at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    /// Ed25519 secret seed, 64 hex chars.
    pub secret_key: String,
    /// Matching Ed25519 public key, 64 hex chars.
    pub public_key: String,
}

impl KeyConfig {
    /// True when both halves are present.
    pub fn is_populated(&self) -> bool {
        !self.secret_key.is_empty() && !self.public_key.is_empty()
    }
}

/// Top-level gNB runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GnbConfig {
    /// Cell parameters.
    pub cell: CellConfig,
    /// Signing key material.
    pub keys: KeyConfig,
    /// Broadcast cycle period in milliseconds.
    pub broadcast_interval_ms: u64,
    /// Receiver-side freshness window in seconds. Policy for the monitor,
    /// not enforced by the verification core.
    pub max_timestamp_skew_secs: u64,
}

impl Default for GnbConfig {
    fn default() -> Self {
        Self {
            cell: CellConfig::default(),
            keys: KeyConfig::default(),
            broadcast_interval_ms: 1000,
            max_timestamp_skew_secs: 300,
        }
    }
}

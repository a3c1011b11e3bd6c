//! # Core Domain Entities
//!
//! Defines the broadcast message structures and supporting value types.
//!
//! ## Clusters
//!
//! - **Cell identity**: `Plmn`, `UacAiBarringSet`
//! - **Header message**: `MasterInfoBlock` and its field enums
//! - **Extensible message**: `SysInfoBlock1` (pre-extension base form)
//! - **Authentication**: `AuthExtension`, `SignedSysInfoBlock1`, `SignedBroadcast`
//! - **Time**: `NtpTimestamp`
//!
//! The base/signed split is deliberate: `SysInfoBlock1` is the unsigned view
//! that gets encoded for signing, `SignedSysInfoBlock1` nests that same value
//! untouched next to the authentication extension. The signed view cannot be
//! produced without fixing the base first.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};

// =============================================================================
// CLUSTER A: CELL IDENTITY
// =============================================================================

/// Public land mobile network identity (MCC + MNC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plmn {
    /// Mobile country code (3 digits).
    pub mcc: u16,
    /// Mobile network code (2 or 3 digits).
    pub mnc: u16,
    /// True when the MNC uses 3 digits.
    pub long_mnc: bool,
}

impl Default for Plmn {
    fn default() -> Self {
        Self {
            mcc: 1,
            mnc: 1,
            long_mnc: false,
        }
    }
}

/// Access-identity barring flags for unified access control.
///
/// The flag set covers AI 1, 2 and 11-15; AI 0 (ordinary access) is never
/// barred and has no flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UacAiBarringSet {
    /// Multimedia priority service.
    pub ai1: bool,
    /// Mission critical service.
    pub ai2: bool,
    /// Access identities 11-15 (operator/special use).
    pub ai11: bool,
    pub ai12: bool,
    pub ai13: bool,
    pub ai14: bool,
    pub ai15: bool,
}

impl UacAiBarringSet {
    /// Packs the flags into the 7-bit `uac-BarringForAccessIdentity` mask,
    /// AI1 in the most significant position.
    pub fn to_bitmask(self) -> u8 {
        let bits = [
            self.ai1, self.ai2, self.ai11, self.ai12, self.ai13, self.ai14, self.ai15,
        ];
        bits.iter()
            .fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit))
    }
}

// =============================================================================
// CLUSTER B: MASTER INFORMATION BLOCK (header message)
// =============================================================================

/// Common subcarrier spacing signalled in the MIB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScsCommon {
    /// 15 kHz (FR1) or 60 kHz (FR2).
    Scs15Or60,
    /// 30 kHz (FR1) or 120 kHz (FR2).
    Scs30Or120,
}

/// DM-RS type A position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DmrsTypeAPosition {
    /// Symbol position 2.
    Pos2,
    /// Symbol position 3.
    Pos3,
}

/// PDCCH configuration for SIB1 scheduling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdcchConfigSib1 {
    /// CORESET#0 index.
    pub coreset_zero: u8,
    /// Search space zero index.
    pub search_space_zero: u8,
}

/// The master information block: the small, non-extensible header message.
///
/// Carries no signature of its own; it is authenticated only by inclusion
/// in the signed broadcast payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterInfoBlock {
    /// System frame number (6 most significant bits).
    pub system_frame_number: u8,
    /// Common subcarrier spacing.
    pub sub_carrier_spacing_common: ScsCommon,
    /// SSB subcarrier offset (k_SSB).
    pub ssb_subcarrier_offset: u8,
    /// DM-RS type A position.
    pub dmrs_type_a_position: DmrsTypeAPosition,
    /// Whether the cell bars new arrivals.
    pub cell_barred: bool,
    /// Whether intra-frequency reselection is allowed when barred.
    pub intra_freq_reselection: bool,
    /// PDCCH configuration for SIB1.
    pub pdcch_config_sib1: PdcchConfigSib1,
}

impl MasterInfoBlock {
    /// Builds a MIB with the fixed cell defaults, varying only the barring
    /// and reselection flags.
    pub fn new(barred: bool, intra_freq_reselect_allowed: bool) -> Self {
        Self {
            system_frame_number: 0,
            sub_carrier_spacing_common: ScsCommon::Scs15Or60,
            ssb_subcarrier_offset: 0,
            dmrs_type_a_position: DmrsTypeAPosition::Pos2,
            cell_barred: barred,
            intra_freq_reselection: intra_freq_reselect_allowed,
            pdcch_config_sib1: PdcchConfigSib1::default(),
        }
    }
}

// =============================================================================
// CLUSTER C: SYSTEM INFORMATION BLOCK 1 (extensible message, base form)
// =============================================================================

/// UAC barring probability factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UacBarringFactor {
    P00,
    P05,
    P10,
    P15,
    P20,
    P25,
    P30,
    P40,
    P50,
    P60,
    P70,
    P75,
    P80,
    P85,
    P90,
    P95,
}

/// UAC barring time in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UacBarringTime {
    S4,
    S8,
    S16,
    S32,
    S64,
    S128,
    S256,
    S512,
}

/// One UAC barring parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UacBarringInfoSet {
    /// Barring probability factor.
    pub factor: UacBarringFactor,
    /// Barring time applied after a failed access attempt.
    pub time: UacBarringTime,
    /// 7-bit access-identity mask, AI1 most significant.
    pub for_access_identity: u8,
}

/// Per-access-category barring entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UacBarringPerCat {
    /// Access category (1-63).
    pub access_category: u8,
    /// 1-based index into the barring info set list.
    pub barring_info_set_index: u8,
}

/// Unified access control barring information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UacBarringInfo {
    /// Barring parameter sets referenced by index.
    pub barring_info_sets: Vec<UacBarringInfoSet>,
    /// Barring entries common to all PLMNs.
    pub barring_for_common: Vec<UacBarringPerCat>,
}

/// PLMN identity entry with the cell identifiers announced for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlmnIdentityInfo {
    /// PLMNs sharing this entry.
    pub plmn_list: Vec<Plmn>,
    /// Tracking area code (24 bits).
    pub tracking_area_code: u32,
    /// NR cell identity (36 bits).
    pub cell_identity: u64,
    /// Whether the cell is reserved for operator use.
    pub cell_reserved_for_operator_use: bool,
}

/// Cell access related information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellAccessRelatedInfo {
    /// Whether the cell is reserved for other use.
    pub cell_reserved_for_other_use: bool,
    /// PLMN identity list.
    pub plmn_identity_list: Vec<PlmnIdentityInfo>,
}

/// System information block 1 in its pre-extension base form.
///
/// This is the unsigned view: the exact value whose encoding is signed.
/// Authentication metadata never lives here; see [`SignedSysInfoBlock1`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SysInfoBlock1 {
    /// Cell access related information.
    pub cell_access_related_info: CellAccessRelatedInfo,
    /// Unified access control barring information.
    pub uac_barring_info: Option<UacBarringInfo>,
}

impl SysInfoBlock1 {
    /// Number of per-category barring entries announced (categories 1-63).
    pub const BARRING_CATEGORY_COUNT: u8 = 63;

    /// Builds a SIB1 base message for a single-PLMN cell.
    ///
    /// Reproduces the fixed cell policy: one barring info set (factor p50,
    /// time 4 s) referenced by every access category.
    pub fn new(
        cell_reserved: bool,
        tac: u32,
        nci: u64,
        plmn: Plmn,
        ai_barring: UacAiBarringSet,
    ) -> Self {
        let plmn_info = PlmnIdentityInfo {
            plmn_list: vec![plmn],
            tracking_area_code: tac & 0x00FF_FFFF,
            cell_identity: nci & 0x0000_000F_FFFF_FFFF,
            cell_reserved_for_operator_use: cell_reserved,
        };

        let barring_set = UacBarringInfoSet {
            factor: UacBarringFactor::P50,
            time: UacBarringTime::S4,
            for_access_identity: ai_barring.to_bitmask(),
        };

        let barring_for_common = (1..=Self::BARRING_CATEGORY_COUNT)
            .map(|category| UacBarringPerCat {
                access_category: category,
                barring_info_set_index: 1,
            })
            .collect();

        Self {
            cell_access_related_info: CellAccessRelatedInfo {
                cell_reserved_for_other_use: cell_reserved,
                plmn_identity_list: vec![plmn_info],
            },
            uac_barring_info: Some(UacBarringInfo {
                barring_info_sets: vec![barring_set],
                barring_for_common,
            }),
        }
    }
}

// =============================================================================
// CLUSTER D: AUTHENTICATION EXTENSION
// =============================================================================

/// The populated authentication extension embedded in a transmitted SIB1.
///
/// Both fields are opaque on the wire. The timestamp is kept as the raw
/// 8 big-endian bytes that entered the signed payload, so the verifier can
/// reuse them verbatim.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthExtension {
    /// Broadcast timestamp, 64-bit NTP value, big-endian.
    pub timestamp_be: [u8; 8],
    /// Ed25519 signature over the canonical broadcast payload.
    #[serde_as(as = "Bytes")]
    pub signature: [u8; 64],
}

impl AuthExtension {
    /// Returns the embedded timestamp as a typed value.
    pub fn timestamp(&self) -> NtpTimestamp {
        NtpTimestamp::from_be_bytes(self.timestamp_be)
    }
}

/// A SIB1 sealed for transmission: the untouched base plus its extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedSysInfoBlock1 {
    /// The pre-extension base exactly as it was signed.
    pub base: SysInfoBlock1,
    /// Timestamp and signature covering the canonical payload.
    pub auth: AuthExtension,
}

/// One broadcast cycle's output pair, ready for transmission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedBroadcast {
    /// The header message (authenticated by inclusion in the payload).
    pub mib: MasterInfoBlock,
    /// The extensible message carrying the authentication metadata.
    pub sib1: SignedSysInfoBlock1,
}

// =============================================================================
// CLUSTER E: TIME
// =============================================================================

/// A 64-bit NTP-format timestamp: 32.32 fixed point, seconds since
/// 1900-01-01 in the high word, binary fraction in the low word.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NtpTimestamp(pub u64);

impl NtpTimestamp {
    /// Seconds between the NTP era (1900) and the Unix epoch (1970).
    pub const UNIX_TO_NTP_SECS: u64 = 2_208_988_800;

    /// Serializes as 8 bytes, most significant byte first. This is the
    /// wire layout of the extension's timestamp field.
    pub fn to_be_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    /// Reconstructs a timestamp from its big-endian wire form.
    pub fn from_be_bytes(bytes: [u8; 8]) -> Self {
        Self(u64::from_be_bytes(bytes))
    }

    /// Converts a duration since the Unix epoch into NTP format.
    pub fn from_unix_duration(elapsed: std::time::Duration) -> Self {
        let secs = (elapsed.as_secs() + Self::UNIX_TO_NTP_SECS) & 0xFFFF_FFFF;
        let frac = (u64::from(elapsed.subsec_nanos()) << 32) / 1_000_000_000;
        Self((secs << 32) | frac)
    }

    /// NTP-era seconds (the high 32-bit word).
    pub fn seconds(self) -> u64 {
        self.0 >> 32
    }

    /// Absolute difference in whole seconds, for freshness policies.
    pub fn abs_delta_secs(self, other: Self) -> u64 {
        self.seconds().abs_diff(other.seconds())
    }
}

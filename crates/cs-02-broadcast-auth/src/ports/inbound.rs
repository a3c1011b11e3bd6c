//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem. The signer and
//! verifier sides are separate traits because they live on different ends
//! of the radio link and hold different material: the signer owns a
//! keypair, the verifier only a public key.

use shared_crypto::Ed25519PublicKey;
use shared_types::{MasterInfoBlock, SignedBroadcast, SysInfoBlock1};

use cs_01_sysinfo_codec::ReceivedSysInfoBlock1;

use crate::domain::entities::VerificationResult;
use crate::domain::errors::BroadcastAuthError;

/// Sender-side API: seal a broadcast cycle.
///
/// Implementations must be thread-safe (`Send + Sync`); signing is a pure
/// computation over borrowed inputs.
pub trait BroadcastSignerApi: Send + Sync {
    /// Sign one broadcast cycle, producing the transmission-ready pair.
    ///
    /// The timestamp comes from the implementation's injected clock.
    fn sign_broadcast(
        &self,
        mib: &MasterInfoBlock,
        sib1_base: &SysInfoBlock1,
    ) -> Result<SignedBroadcast, BroadcastAuthError>;
}

/// Receiver-side API: authenticate a received broadcast pair.
pub trait BroadcastVerifierApi: Send + Sync {
    /// Verify an already-decoded broadcast pair.
    fn verify_broadcast(
        &self,
        mib: &MasterInfoBlock,
        received: &ReceivedSysInfoBlock1,
    ) -> Result<VerificationResult, BroadcastAuthError>;

    /// Verify straight from received PDU bytes.
    ///
    /// Decode failures surface as errors, distinct from a well-formed
    /// broadcast that fails the signature check.
    fn verify_broadcast_pdus(
        &self,
        mib_pdu: &[u8],
        sib1_pdu: &[u8],
    ) -> Result<VerificationResult, BroadcastAuthError>;
}

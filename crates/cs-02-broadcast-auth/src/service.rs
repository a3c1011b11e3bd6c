//! # Broadcast Authentication Services
//!
//! Application service layer wiring the domain logic to the ports.
//!
//! - [`BroadcastAuthService`] is the gNB side: it owns the cell's keypair,
//!   takes timestamps from the injected clock, and pushes encoded frames to
//!   the radio gateway.
//! - [`BroadcastVerifier`] is the UE side: a stateless wrapper around the
//!   cell's public key.

use shared_crypto::{Ed25519KeyPair, Ed25519PublicKey};
use shared_types::{MasterInfoBlock, SignedBroadcast, SysInfoBlock1};
use tracing::{debug, info};

use cs_01_sysinfo_codec as codec;
use cs_01_sysinfo_codec::ReceivedSysInfoBlock1;

use crate::domain::entities::{BroadcastFrames, VerificationResult};
use crate::domain::errors::BroadcastAuthError;
use crate::domain::{signer, verifier};
use crate::ports::inbound::{BroadcastSignerApi, BroadcastVerifierApi};
use crate::ports::outbound::{RadioGateway, TimestampSource};

/// Sender-side broadcast authentication service.
///
/// Key material is long-lived immutable configuration: it is validated once
/// in [`BroadcastAuthService::new`] and only borrowed afterwards.
pub struct BroadcastAuthService<T: TimestampSource, G: RadioGateway> {
    keypair: Ed25519KeyPair,
    public_key: Ed25519PublicKey,
    clock: T,
    radio: G,
}

impl<T: TimestampSource, G: RadioGateway> BroadcastAuthService<T, G> {
    /// Create the service, running the key pair self-test.
    ///
    /// # Errors
    ///
    /// Returns [`BroadcastAuthError::KeyMaterial`] when `claimed_public`
    /// is not the public half of `keypair`. Fatal at startup; never
    /// retried.
    pub fn new(
        keypair: Ed25519KeyPair,
        claimed_public: Ed25519PublicKey,
        clock: T,
        radio: G,
    ) -> Result<Self, BroadcastAuthError> {
        shared_crypto::self_test(&keypair, &claimed_public)?;
        info!(public_key = %claimed_public.to_hex(), "broadcast signer ready");

        Ok(Self {
            keypair,
            public_key: claimed_public,
            clock,
            radio,
        })
    }

    /// The public key UEs must hold to verify this cell.
    pub fn public_key(&self) -> Ed25519PublicKey {
        self.public_key
    }

    /// Sign one broadcast cycle and hand the encoded frames to the radio.
    ///
    /// Returns the signed pair so callers can inspect or archive what went
    /// on the air.
    pub async fn sign_and_transmit(
        &self,
        mib: &MasterInfoBlock,
        sib1_base: &SysInfoBlock1,
    ) -> Result<SignedBroadcast, BroadcastAuthError> {
        // First seal the cycle
        let signed = self.sign_broadcast(mib, sib1_base)?;

        // Then encode for the air and push down
        let frames = BroadcastFrames {
            mib_pdu: codec::encode_mib(&signed.mib)?,
            sib1_pdu: codec::encode_sib1_signed(&signed.sib1)?,
        };
        debug!(
            mib_len = frames.mib_pdu.len(),
            sib1_len = frames.sib1_pdu.len(),
            "transmitting broadcast cycle"
        );

        self.radio
            .transmit(frames)
            .await
            .map_err(|e| BroadcastAuthError::Transmit(e.to_string()))?;

        Ok(signed)
    }
}

impl<T: TimestampSource, G: RadioGateway> BroadcastSignerApi for BroadcastAuthService<T, G> {
    fn sign_broadcast(
        &self,
        mib: &MasterInfoBlock,
        sib1_base: &SysInfoBlock1,
    ) -> Result<SignedBroadcast, BroadcastAuthError> {
        let timestamp = self.clock.now();
        signer::sign_broadcast(mib, sib1_base, &self.keypair, timestamp)
    }
}

/// Receiver-side verifier. Stateless and side-effect free; one instance
/// can serve any number of concurrent verifications.
#[derive(Debug, Clone, Copy)]
pub struct BroadcastVerifier {
    public_key: Ed25519PublicKey,
}

impl BroadcastVerifier {
    /// Create a verifier for a cell's public key.
    pub fn new(public_key: Ed25519PublicKey) -> Self {
        Self { public_key }
    }
}

impl BroadcastVerifierApi for BroadcastVerifier {
    fn verify_broadcast(
        &self,
        mib: &MasterInfoBlock,
        received: &ReceivedSysInfoBlock1,
    ) -> Result<VerificationResult, BroadcastAuthError> {
        verifier::verify_broadcast(mib, received, &self.public_key)
    }

    fn verify_broadcast_pdus(
        &self,
        mib_pdu: &[u8],
        sib1_pdu: &[u8],
    ) -> Result<VerificationResult, BroadcastAuthError> {
        verifier::verify_broadcast_pdus(mib_pdu, sib1_pdu, &self.public_key)
    }
}

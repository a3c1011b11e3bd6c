//! # Integration Test Flows
//!
//! Exercises the full sender-to-receiver choreography: cell configuration
//! builds the message pair, the CS-02 service signs and pushes frames
//! through a radio gateway, and the receiving side decodes and verifies.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::mpsc;

    use cs_02_broadcast_auth::{
        BroadcastAuthService, BroadcastFrames, BroadcastSignerApi, BroadcastVerifier,
        BroadcastVerifierApi, RadioGateway, TimestampSource, TransmitError,
    };
    use shared_crypto::{Ed25519KeyPair, Ed25519PublicKey};
    use shared_types::{CellConfig, MasterInfoBlock, NtpTimestamp, SysInfoBlock1};

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    /// The well-known development seed used by the key self-test vector.
    const DEV_SEED_HEX: &str =
        "1111111111111111222222222222222233333333333333334444444444444444";
    const DEV_PUBLIC_HEX: &str =
        "64e7782e29f2219999664e163fd6adbb80cfbae5ad86a285a386405a70201061";

    /// Clock pinned to a fixed instant.
    struct FixedClock(NtpTimestamp);

    impl TimestampSource for FixedClock {
        fn now(&self) -> NtpTimestamp {
            self.0
        }
    }

    /// Radio gateway backed by an in-process channel, standing in for the
    /// lower layers between gNB and UE.
    struct ChannelGateway {
        tx: mpsc::UnboundedSender<BroadcastFrames>,
    }

    #[async_trait]
    impl RadioGateway for ChannelGateway {
        async fn transmit(&self, frames: BroadcastFrames) -> Result<(), TransmitError> {
            self.tx.send(frames).map_err(|_| TransmitError::LinkClosed)
        }
    }

    fn radio_pair() -> (ChannelGateway, mpsc::UnboundedReceiver<BroadcastFrames>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (ChannelGateway { tx }, rx)
    }

    /// Builds the broadcast pair the way the runtime does, from cell config.
    fn messages_from_config(config: &CellConfig) -> (MasterInfoBlock, SysInfoBlock1) {
        (
            MasterInfoBlock::new(config.barred, config.intra_freq_reselection),
            SysInfoBlock1::new(
                config.cell_reserved,
                config.tac,
                config.nci,
                config.plmn,
                config.ai_barring,
            ),
        )
    }

    fn dev_keypair() -> (Ed25519KeyPair, Ed25519PublicKey) {
        let keypair = Ed25519KeyPair::from_seed_hex(DEV_SEED_HEX).expect("dev seed");
        let public = Ed25519PublicKey::from_hex(DEV_PUBLIC_HEX).expect("dev public key");
        (keypair, public)
    }

    // =========================================================================
    // END-TO-END FLOWS
    // =========================================================================

    /// Test: one full broadcast cycle authenticates on the receiving side
    #[tokio::test]
    async fn test_full_broadcast_cycle_roundtrip() {
        let (keypair, public) = dev_keypair();
        let (gateway, mut rx) = radio_pair();
        let clock = FixedClock(NtpTimestamp(0xE612_0000_0000_0000));

        let service =
            BroadcastAuthService::new(keypair, public, clock, gateway).expect("self-test");
        let (mib, sib1) = messages_from_config(&CellConfig::default());

        service.sign_and_transmit(&mib, &sib1).await.expect("cycle");

        let frames = rx.recv().await.expect("frames on the air");
        let verifier = BroadcastVerifier::new(public);
        let result = verifier
            .verify_broadcast_pdus(&frames.mib_pdu, &frames.sib1_pdu)
            .expect("decodable");

        assert!(result.valid);
        assert_eq!(result.timestamp, Some(NtpTimestamp(0xE612_0000_0000_0000)));
        assert!(result.error.is_none());
    }

    /// Test: successive cycles with advancing timestamps each verify
    /// independently
    #[tokio::test]
    async fn test_successive_cycles_all_verify() {
        struct SteppingClock(std::sync::Mutex<u64>);
        impl TimestampSource for SteppingClock {
            fn now(&self) -> NtpTimestamp {
                let mut secs = self.0.lock().unwrap();
                *secs += 1;
                NtpTimestamp(*secs << 32)
            }
        }

        let keypair = Ed25519KeyPair::from_seed([0x21; 32]);
        let public = keypair.public_key();
        let (gateway, mut rx) = radio_pair();
        let service =
            BroadcastAuthService::new(keypair, public, SteppingClock(std::sync::Mutex::new(0)), gateway)
                .expect("self-test");

        let (mib, sib1) = messages_from_config(&CellConfig::default());
        let verifier = BroadcastVerifier::new(public);

        let mut signatures = Vec::new();
        for _ in 0..5 {
            service.sign_and_transmit(&mib, &sib1).await.expect("cycle");
            let frames = rx.recv().await.expect("frames");

            let result = verifier
                .verify_broadcast_pdus(&frames.mib_pdu, &frames.sib1_pdu)
                .expect("decodable");
            assert!(result.valid);

            let received = cs_01_sysinfo_codec::decode_sib1(&frames.sib1_pdu).expect("decode");
            signatures.push(received.auth.expect("extension").signature);
        }

        // Five cycles, five distinct signatures: no signature reuse.
        signatures.sort();
        signatures.dedup();
        assert_eq!(signatures.len(), 5);
    }

    /// Test: a verifier holding a different cell's key rejects the broadcast
    #[tokio::test]
    async fn test_other_cells_key_rejects() {
        let keypair = Ed25519KeyPair::from_seed([0x21; 32]);
        let public = keypair.public_key();
        let (gateway, mut rx) = radio_pair();
        let service = BroadcastAuthService::new(keypair, public, FixedClock(NtpTimestamp(7)), gateway)
            .expect("self-test");

        let (mib, sib1) = messages_from_config(&CellConfig::default());
        service.sign_and_transmit(&mib, &sib1).await.expect("cycle");
        let frames = rx.recv().await.expect("frames");

        let other_cell = BroadcastVerifier::new(Ed25519KeyPair::from_seed([0x22; 32]).public_key());
        let result = other_cell
            .verify_broadcast_pdus(&frames.mib_pdu, &frames.sib1_pdu)
            .expect("decodable");

        assert!(!result.valid);
    }

    /// Test: garbage frames surface as decode errors, not verification
    /// results
    #[tokio::test]
    async fn test_garbage_frames_are_not_our_protocol() {
        let verifier = BroadcastVerifier::new(Ed25519KeyPair::from_seed([0x33; 32]).public_key());

        let result = verifier.verify_broadcast_pdus(&[0xDE, 0xAD], &[0xBE, 0xEF]);
        assert!(result.is_err(), "undecodable input is an error, not a verdict");
    }

    /// Test: concurrent verification of the same frames is safe and
    /// consistent
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_verification_is_consistent() {
        let keypair = Ed25519KeyPair::from_seed([0x44; 32]);
        let public = keypair.public_key();
        let (gateway, mut rx) = radio_pair();
        let service = BroadcastAuthService::new(keypair, public, FixedClock(NtpTimestamp(1)), gateway)
            .expect("self-test");

        let (mib, sib1) = messages_from_config(&CellConfig::default());
        service.sign_and_transmit(&mib, &sib1).await.expect("cycle");
        let frames = Arc::new(rx.recv().await.expect("frames"));

        let verifier = BroadcastVerifier::new(public);
        let mut handles = Vec::new();
        for _ in 0..8 {
            let frames = Arc::clone(&frames);
            handles.push(tokio::spawn(async move {
                verifier
                    .verify_broadcast_pdus(&frames.mib_pdu, &frames.sib1_pdu)
                    .expect("decodable")
                    .valid
            }));
        }

        for handle in handles {
            assert!(handle.await.expect("task"));
        }
    }

    /// Test: the signer service refuses to start with a foreign public key
    #[tokio::test]
    async fn test_service_startup_self_test_gate() {
        let keypair = Ed25519KeyPair::from_seed([0x55; 32]);
        let foreign = Ed25519KeyPair::from_seed([0x56; 32]).public_key();
        let (gateway, _rx) = radio_pair();

        assert!(
            BroadcastAuthService::new(keypair, foreign, FixedClock(NtpTimestamp(0)), gateway)
                .is_err()
        );
    }

    /// Test: signing returns the pair that verifies structurally, without
    /// going through the wire
    #[tokio::test]
    async fn test_signed_pair_verifies_structurally() {
        let (keypair, public) = dev_keypair();
        let (gateway, _rx) = radio_pair();
        let service = BroadcastAuthService::new(keypair, public, FixedClock(NtpTimestamp(3)), gateway)
            .expect("self-test");

        let (mib, sib1) = messages_from_config(&CellConfig::default());
        let signed = service.sign_broadcast(&mib, &sib1).expect("sign");

        let received = cs_01_sysinfo_codec::ReceivedSysInfoBlock1::from(&signed.sib1);
        let verifier = BroadcastVerifier::new(public);
        assert!(verifier.verify_broadcast(&signed.mib, &received).expect("verify").valid);
    }
}

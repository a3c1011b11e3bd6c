//! # Broadcast Authentication Subsystem (CS-02)
//!
//! Signs and verifies system-information broadcasts so a receiving
//! terminal can detect forged or tampered cells.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): canonical payload assembly, pure
//!   signing/verification logic, no I/O
//! - **Ports Layer** (`ports/`): trait definitions for inbound/outbound
//!   interfaces (clock, radio gateway)
//! - **Service Layer** (`service.rs`): wires domain logic to ports
//!
//! ## Wire Contract
//!
//! The signed payload is `encode(MIB) || encode(SIB1 base) || timestamp`
//! with the timestamp as 8 big-endian bytes. Signer and verifier both
//! build this sequence from scratch; the SIB1 base is carried inside the
//! transmitted PDU untouched, so stripping the extension cannot diverge
//! from what was signed.
//!
//! ## Security Notes
//!
//! - A broadcast without a well-formed extension is unauthenticated,
//!   never implicitly valid.
//! - Malformed fields are classified before the signature primitive is
//!   consulted.
//! - Freshness of the embedded timestamp is caller policy; the core only
//!   surfaces it.

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::entities::{AuthFailure, BroadcastFrames, VerificationResult};
pub use domain::errors::BroadcastAuthError;
pub use domain::payload::{canonical_payload, encode_canonical_payload, TIMESTAMP_LEN};
pub use domain::signer::sign_broadcast;
pub use domain::verifier::{verify_broadcast, verify_broadcast_pdus};
pub use ports::inbound::{BroadcastSignerApi, BroadcastVerifierApi};
pub use ports::outbound::{RadioGateway, TimestampSource, TransmitError};
pub use service::{BroadcastAuthService, BroadcastVerifier};

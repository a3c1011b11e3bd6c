//! # System Information Codec Subsystem (CS-01)
//!
//! Deterministic wire codec for the broadcast message pair.
//!
//! ## Invariants
//!
//! - Encoding is a pure function: the same logical message always yields
//!   the same bytes.
//! - The pre-extension SIB1 encoding is recoverable from a received signed
//!   PDU by re-encoding the nested base value. There is no "empty extension
//!   container" state whose encoding could diverge from "no container".
//! - Decoding never judges authentication: extension fields come back as
//!   raw byte strings for the CS-02 layer to classify.

pub mod codec;
pub mod errors;
pub mod wire;

// Re-export public API
pub use codec::{decode_mib, decode_sib1, encode_mib, encode_sib1_base, encode_sib1_signed};
pub use errors::CodecError;
pub use wire::{RawAuthExtension, ReceivedSysInfoBlock1};

//! # Ed25519 Signatures
//!
//! Twisted Edwards curve signatures with deterministic nonces.
//!
//! All key and signature material is held in fixed-length newtypes; anything
//! that is not exactly 32/64 bytes is rejected at construction time. The
//! fallible `from_slice`/`from_hex` constructors exist for the configuration
//! boundary, where lengths arrive unchecked.

use crate::CryptoError;
use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use zeroize::Zeroize;

/// Ed25519 public key (32 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ed25519PublicKey([u8; 32]);

impl Ed25519PublicKey {
    /// Fixed byte length of an Ed25519 public key.
    pub const LEN: usize = 32;

    /// Create from bytes, validating that they decode to a curve point.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        VerifyingKey::from_bytes(&bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self(bytes))
    }

    /// Create from a slice of unchecked length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let arr: [u8; Self::LEN] =
            bytes
                .try_into()
                .map_err(|_| CryptoError::InvalidKeyMaterial {
                    expected: Self::LEN,
                    actual: bytes.len(),
                })?;
        Self::from_bytes(arr)
    }

    /// Create from a 64-char hex string (configuration form).
    pub fn from_hex(hex_str: &str) -> Result<Self, CryptoError> {
        let bytes = hex::decode(hex_str).map_err(|e| CryptoError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex form for configuration and logs.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Verify a signature over `message`.
    ///
    /// Uses strict verification, rejecting the malleable edge cases that
    /// plain verification tolerates.
    pub fn verify(&self, message: &[u8], signature: &Ed25519Signature) -> Result<(), CryptoError> {
        let verifying_key =
            VerifyingKey::from_bytes(&self.0).map_err(|_| CryptoError::InvalidPublicKey)?;

        let sig = ed25519_dalek::Signature::from_bytes(&signature.0);

        verifying_key
            .verify_strict(message, &sig)
            .map_err(|_| CryptoError::SignatureVerificationFailed)
    }
}

/// Ed25519 signature (64 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ed25519Signature([u8; 64]);

impl Ed25519Signature {
    /// Fixed byte length of an Ed25519 signature.
    pub const LEN: usize = 64;

    /// Create from bytes. Any 64-byte value is a structurally valid
    /// signature; whether it verifies is a separate question.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Create from a slice of unchecked length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let arr: [u8; Self::LEN] =
            bytes
                .try_into()
                .map_err(|_| CryptoError::InvalidKeyMaterial {
                    expected: Self::LEN,
                    actual: bytes.len(),
                })?;
        Ok(Self(arr))
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

/// Ed25519 keypair.
///
/// Intentionally implements neither `Clone` nor `Debug`, so the secret seed
/// cannot leak through logs or accidental copies.
pub struct Ed25519KeyPair {
    signing_key: SigningKey,
}

impl Ed25519KeyPair {
    /// Fixed byte length of the secret seed.
    pub const SEED_LEN: usize = 32;

    /// Generate a random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from a secret seed (32 bytes).
    pub fn from_seed(seed: [u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(&seed);
        Self { signing_key }
    }

    /// Create from a seed slice of unchecked length.
    pub fn from_seed_slice(seed: &[u8]) -> Result<Self, CryptoError> {
        let arr: [u8; Self::SEED_LEN] =
            seed.try_into()
                .map_err(|_| CryptoError::InvalidKeyMaterial {
                    expected: Self::SEED_LEN,
                    actual: seed.len(),
                })?;
        Ok(Self::from_seed(arr))
    }

    /// Create from a 64-char hex seed (configuration form).
    pub fn from_seed_hex(hex_str: &str) -> Result<Self, CryptoError> {
        let mut bytes =
            hex::decode(hex_str).map_err(|e| CryptoError::InvalidHex(e.to_string()))?;
        let result = Self::from_seed_slice(&bytes);
        bytes.zeroize();
        result
    }

    /// Get the public key derived from the seed.
    pub fn public_key(&self) -> Ed25519PublicKey {
        let verifying_key = self.signing_key.verifying_key();
        Ed25519PublicKey(verifying_key.to_bytes())
    }

    /// Sign a message (deterministic, no RNG needed).
    pub fn sign(&self, message: &[u8]) -> Ed25519Signature {
        let sig = self.signing_key.sign(message);
        Ed25519Signature(sig.to_bytes())
    }

    /// Get the secret seed (for serialization by the key tooling only).
    pub fn to_seed(&self) -> [u8; 32] {
        self.signing_key.to_bytes()
    }
}

impl Drop for Ed25519KeyPair {
    fn drop(&mut self) {
        // Zeroize secret key material
        let mut bytes = self.signing_key.to_bytes();
        bytes.zeroize();
    }
}

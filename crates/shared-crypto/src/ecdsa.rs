//! # Recoverable ECDSA (secp256k1)
//!
//! Signing and signer recovery for validator attestations.
//!
//! ## Security Notes
//!
//! - RFC 6979 deterministic nonces (no RNG dependency for signing)
//! - Low-S normalization on signing; high-S signatures are rejected on
//!   recovery so each attestation has exactly one accepted encoding
//! - Signer identity is the Ethereum-style address: last 20 bytes of
//!   keccak256 of the uncompressed public key

use crate::errors::CryptoError;
use crate::hashing::keccak256;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use serde::{Deserialize, Serialize};
use shared_types::{Address, Hash};
use zeroize::Zeroize;

/// Recoverable ECDSA signature in the three-component `(r, s, v)` form.
///
/// `v` carries the recovery id; both the raw form (0/1) and the
/// Ethereum-legacy form (27/28) are accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoverableSignature {
    /// R component (32 bytes).
    pub r: [u8; 32],
    /// S component (32 bytes), always in the lower half of the curve order.
    pub s: [u8; 32],
    /// Recovery id: 0, 1, 27, or 28.
    pub v: u8,
}

/// secp256k1 keypair held by the trusted validator.
pub struct Secp256k1KeyPair {
    signing_key: SigningKey,
}

impl Secp256k1KeyPair {
    /// Generate a random keypair.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::random(&mut rand::thread_rng()),
        }
    }

    /// Create from secret key bytes (32 bytes).
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let signing_key = SigningKey::from_bytes((&bytes).into())
            .map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Ethereum-style address of this keypair's public key.
    pub fn address(&self) -> Address {
        address_of(self.signing_key.verifying_key())
    }

    /// Sign a precomputed 32-byte digest, returning a recoverable signature.
    ///
    /// The S component is normalized to the lower half of the curve order;
    /// the recovery id is flipped accordingly so `recover_address` returns
    /// this keypair's address.
    pub fn sign_prehash(&self, digest: &Hash) -> Result<RecoverableSignature, CryptoError> {
        let (sig, recid) = self
            .signing_key
            .sign_prehash_recoverable(digest)
            .map_err(|_| CryptoError::InvalidSignature)?;

        let (sig, recid) = match sig.normalize_s() {
            Some(normalized) => (
                normalized,
                RecoveryId::new(!recid.is_y_odd(), recid.is_x_reduced()),
            ),
            None => (sig, recid),
        };

        let bytes = sig.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);

        Ok(RecoverableSignature {
            r,
            s,
            v: recid.to_byte(),
        })
    }

    /// Get secret key bytes (for persistence).
    pub fn to_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes().into()
    }
}

impl Drop for Secp256k1KeyPair {
    fn drop(&mut self) {
        // Zeroize secret key material
        let mut bytes: [u8; 32] = self.signing_key.to_bytes().into();
        bytes.zeroize();
    }
}

/// Recover the signer's address from a digest and signature.
///
/// Rejects malformed scalars, unknown recovery ids, and high-S encodings
/// before attempting recovery.
pub fn recover_address(
    digest: &Hash,
    signature: &RecoverableSignature,
) -> Result<Address, CryptoError> {
    let recid = parse_recovery_id(signature.v)?;

    let sig = Signature::from_scalars(signature.r, signature.s)
        .map_err(|_| CryptoError::InvalidSignature)?;

    // normalize_s() returns Some only when S was in the upper half
    if sig.normalize_s().is_some() {
        return Err(CryptoError::MalleableSignature);
    }

    let recovered = VerifyingKey::recover_from_prehash(digest, &sig, recid)
        .map_err(|_| CryptoError::RecoveryFailed)?;

    Ok(address_of(&recovered))
}

/// Recover the signer and require it to match `expected`.
pub fn verify_signer(
    digest: &Hash,
    signature: &RecoverableSignature,
    expected: &Address,
) -> Result<(), CryptoError> {
    let recovered = recover_address(digest, signature)?;
    if recovered != *expected {
        return Err(CryptoError::SignerMismatch);
    }
    Ok(())
}

/// Derive the Ethereum-style address from a public key.
fn address_of(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);
    // Skip the 0x04 uncompressed-point prefix
    let digest = keccak256(&point.as_bytes()[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&digest[12..]);
    address
}

/// Parse a recovery id from its wire byte.
///
/// Valid values: 0, 1, 27, 28.
fn parse_recovery_id(v: u8) -> Result<RecoveryId, CryptoError> {
    let byte = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        other => return Err(CryptoError::InvalidRecoveryId(other)),
    };
    RecoveryId::try_from(byte).map_err(|_| CryptoError::InvalidRecoveryId(v))
}

//! # Validator Oracle
//!
//! Recomputes the canonical hash of an observed initiation and signs it
//! with the trust-anchor key. The resulting `(r, s, v)` triple plus the
//! swap fields is everything a destination bridge needs.

use crate::errors::ValidatorError;
use crate::feed::SwapFeed;
use bridge::{canonical_hash, SwapEvent};
use shared_crypto::{RecoverableSignature, Secp256k1KeyPair};
use shared_types::{short_hex, Address};
use tracing::info;

/// A signed endorsement of one initiated swap.
///
/// Carries the swap fields alongside the signature so the holder can call
/// `redeem_swap` without further lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attestation {
    /// The initiation being endorsed.
    pub swap: SwapEvent,
    /// Recoverable signature over the swap's canonical hash.
    pub signature: RecoverableSignature,
}

/// The attestation oracle.
///
/// Owns the trust-anchor keypair; its address is what destination bridges
/// configure as the trusted signer.
pub struct Validator<F: SwapFeed> {
    keypair: Secp256k1KeyPair,
    feed: F,
}

impl<F: SwapFeed> Validator<F> {
    /// Build a validator from its signing key and a feed of initiations.
    pub fn new(keypair: Secp256k1KeyPair, feed: F) -> Self {
        Self { keypair, feed }
    }

    /// Address destination bridges must configure as trusted.
    pub fn address(&self) -> Address {
        self.keypair.address()
    }

    /// Endorse an initiation the caller already holds.
    ///
    /// The hash is recomputed locally from the event fields; the validator
    /// never signs a caller-supplied digest.
    pub fn attest_event(&self, event: &SwapEvent) -> Result<Attestation, ValidatorError> {
        let record = event
            .to_record()
            .map_err(|err| ValidatorError::MalformedSwap(err.to_string()))?;
        let digest = canonical_hash(&record);
        let signature = self.keypair.sign_prehash(&digest)?;

        info!(
            "[validator] Attested swap from {} token {} nonce {}",
            short_hex(&event.sender),
            event.token_id,
            event.nonce
        );
        Ok(Attestation {
            swap: *event,
            signature,
        })
    }

    /// Query the feed for the most recent initiation and endorse it.
    pub async fn attest_latest(&self) -> Result<Attestation, ValidatorError> {
        let event = self.feed.latest_init_swap().await?;
        self.attest_event(&event)
    }

    /// Query the feed for a specific initiation and endorse it.
    pub async fn attest_nonce(
        &self,
        sender: Address,
        nonce: u64,
    ) -> Result<Attestation, ValidatorError> {
        let event = self.feed.init_swap_by_nonce(sender, nonce).await?;
        self.attest_event(&event)
    }
}

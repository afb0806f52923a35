//! # Outbound Ports
//!
//! Traits the bridge state machine depends on: asset custody and
//! attestation verification. The verifier seam is what keeps the trust
//! scheme pluggable: a threshold or multi-signature verifier can replace
//! the single-signer check without touching the state machine.

use crate::domain::BridgeError;
use asset_registry::RegistryError;
use shared_crypto::RecoverableSignature;
use shared_types::{Address, Hash, TokenId};

/// Asset custody - outbound port.
///
/// The bridge never manipulates registry state directly; it pulls assets
/// into custody on initiation and hands them over on redemption through
/// this seam.
pub trait AssetCustody: Send + Sync {
    /// Pull `token_id` from `from` into bridge custody.
    ///
    /// Requires the owner to have approved the bridge as operator.
    fn lock(&self, from: Address, token_id: TokenId) -> Result<(), BridgeError>;

    /// Hand `token_id` over to `to`, minting it first when it does not
    /// yet exist on this ledger.
    fn release(&self, to: Address, token_id: TokenId) -> Result<(), BridgeError>;

    /// Current owner of `token_id` on this ledger.
    fn owner_of(&self, token_id: TokenId) -> Result<Address, BridgeError>;
}

/// Attestation verification - outbound port.
pub trait AttestationVerifier: Send + Sync {
    /// Check that `attestation` is a valid endorsement of `digest` by the
    /// trusted authority. Any failure surfaces as `InvalidSignature`.
    fn verify(&self, digest: &Hash, attestation: &RecoverableSignature)
        -> Result<(), BridgeError>;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// In-memory custody for testing, with no approval bookkeeping.
#[derive(Debug, Default)]
pub struct MockCustody {
    /// Owner per token.
    owners: parking_lot::RwLock<std::collections::HashMap<TokenId, Address>>,
    /// Tokens whose lock/release should be refused.
    refuse: parking_lot::RwLock<std::collections::HashSet<TokenId>>,
}

impl MockCustody {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a token with an owner.
    pub fn seed(&self, token_id: TokenId, owner: Address) {
        self.owners.write().insert(token_id, owner);
    }

    /// Make custody operations on `token_id` fail.
    pub fn refuse(&self, token_id: TokenId) {
        self.refuse.write().insert(token_id);
    }
}

impl AssetCustody for MockCustody {
    fn lock(&self, from: Address, token_id: TokenId) -> Result<(), BridgeError> {
        if self.refuse.read().contains(&token_id) {
            return Err(RegistryError::NotOwnerOrApproved(token_id).into());
        }
        let mut owners = self.owners.write();
        match owners.get(&token_id) {
            Some(owner) if *owner == from => {
                owners.insert(token_id, [0xB0; 20]);
                Ok(())
            }
            Some(_) => Err(RegistryError::NotOwnerOrApproved(token_id).into()),
            None => Err(RegistryError::NonexistentAsset(token_id).into()),
        }
    }

    fn release(&self, to: Address, token_id: TokenId) -> Result<(), BridgeError> {
        if self.refuse.read().contains(&token_id) {
            return Err(RegistryError::NotOwnerOrApproved(token_id).into());
        }
        self.owners.write().insert(token_id, to);
        Ok(())
    }

    fn owner_of(&self, token_id: TokenId) -> Result<Address, BridgeError> {
        self.owners
            .read()
            .get(&token_id)
            .copied()
            .ok_or_else(|| RegistryError::NonexistentAsset(token_id).into())
    }
}

//! # Asset Registry State
//!
//! Ownership, approvals, and the minter capability set.

use crate::errors::RegistryError;
use serde::{Deserialize, Serialize};
use shared_types::{short_hex, Address, TokenId};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Ownership registry for one ledger instance.
///
/// Callers are identified by an explicit `caller` argument on every
/// state-changing operation; there is no ambient transaction context.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssetRegistry {
    /// Owner per token. Absence means never minted or burned.
    owners: HashMap<TokenId, Address>,
    /// Approved operator per token, cleared on transfer and burn.
    approvals: HashMap<TokenId, Address>,
    /// Accounts holding the minter capability.
    minters: HashSet<Address>,
    /// Next sequential token id to assign.
    next_id: TokenId,
}

impl AssetRegistry {
    /// Create a registry; `deployer` receives the minter capability.
    pub fn new(deployer: Address) -> Self {
        let mut minters = HashSet::new();
        minters.insert(deployer);
        Self {
            owners: HashMap::new(),
            approvals: HashMap::new(),
            minters,
            next_id: 0,
        }
    }

    /// Mint a new token to `to`, returning its id.
    ///
    /// Restricted to accounts holding the minter capability.
    pub fn mint(&mut self, caller: Address, to: Address) -> Result<TokenId, RegistryError> {
        if !self.minters.contains(&caller) {
            return Err(RegistryError::Unauthorized);
        }
        let token_id = self.next_id;
        self.next_id += 1;
        self.owners.insert(token_id, to);
        debug!("[registry] minted token {} to {}", token_id, short_hex(&to));
        Ok(token_id)
    }

    /// Mint a token with a caller-chosen id.
    ///
    /// Used by the bridge when redeeming an asset that has never existed
    /// on this ledger, so the id matches the one on the source ledger.
    pub fn mint_id(
        &mut self,
        caller: Address,
        to: Address,
        token_id: TokenId,
    ) -> Result<(), RegistryError> {
        if !self.minters.contains(&caller) {
            return Err(RegistryError::Unauthorized);
        }
        if self.owners.contains_key(&token_id) {
            return Err(RegistryError::AlreadyMinted(token_id));
        }
        self.owners.insert(token_id, to);
        // A mint at the id ceiling leaves the sequential counter alone
        // rather than wrapping it back to 0.
        if let Some(next) = token_id.checked_add(1) {
            self.next_id = self.next_id.max(next);
        }
        debug!(
            "[registry] minted token {} (explicit id) to {}",
            token_id,
            short_hex(&to)
        );
        Ok(())
    }

    /// Destroy a token. Owner or approved operator only.
    pub fn burn(&mut self, caller: Address, token_id: TokenId) -> Result<(), RegistryError> {
        self.check_owner_or_approved(caller, token_id)?;
        self.owners.remove(&token_id);
        self.approvals.remove(&token_id);
        debug!("[registry] burned token {}", token_id);
        Ok(())
    }

    /// Approve `operator` to move `token_id`. Owner only.
    pub fn approve(
        &mut self,
        caller: Address,
        operator: Address,
        token_id: TokenId,
    ) -> Result<(), RegistryError> {
        let owner = self.owner_of(token_id)?;
        if owner != caller {
            return Err(RegistryError::NotOwnerOrApproved(token_id));
        }
        self.approvals.insert(token_id, operator);
        debug!(
            "[registry] approved {} for token {}",
            short_hex(&operator),
            token_id
        );
        Ok(())
    }

    /// Move `token_id` from `from` to `to`.
    ///
    /// The caller must be the owner or the approved operator, and `from`
    /// must be the current owner. The approval is consumed on success.
    pub fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        token_id: TokenId,
    ) -> Result<(), RegistryError> {
        let owner = self.check_owner_or_approved(caller, token_id)?;
        if owner != from {
            return Err(RegistryError::NotOwnerOrApproved(token_id));
        }
        self.approvals.remove(&token_id);
        self.owners.insert(token_id, to);
        debug!(
            "[registry] token {} moved {} -> {}",
            token_id,
            short_hex(&from),
            short_hex(&to)
        );
        Ok(())
    }

    /// Current owner of `token_id`.
    pub fn owner_of(&self, token_id: TokenId) -> Result<Address, RegistryError> {
        self.owners
            .get(&token_id)
            .copied()
            .ok_or(RegistryError::NonexistentAsset(token_id))
    }

    /// Approved operator for `token_id`, if any.
    pub fn approved_for(&self, token_id: TokenId) -> Option<Address> {
        self.approvals.get(&token_id).copied()
    }

    /// Grant the minter capability. Existing minters only.
    pub fn add_minter(&mut self, caller: Address, account: Address) -> Result<(), RegistryError> {
        if !self.minters.contains(&caller) {
            return Err(RegistryError::Unauthorized);
        }
        self.minters.insert(account);
        Ok(())
    }

    /// Whether `account` holds the minter capability.
    pub fn is_minter(&self, account: &Address) -> bool {
        self.minters.contains(account)
    }

    /// Number of tokens owned by `owner`.
    pub fn balance_of(&self, owner: &Address) -> usize {
        self.owners.values().filter(|o| *o == owner).count()
    }

    /// Token ids owned by `owner`, ascending.
    pub fn tokens_of(&self, owner: &Address) -> Vec<TokenId> {
        let mut tokens: Vec<TokenId> = self
            .owners
            .iter()
            .filter(|(_, o)| *o == owner)
            .map(|(id, _)| *id)
            .collect();
        tokens.sort_unstable();
        tokens
    }

    /// The `index`-th token of `owner` in ascending id order.
    pub fn token_of_owner_by_index(
        &self,
        owner: &Address,
        index: usize,
    ) -> Result<TokenId, RegistryError> {
        self.tokens_of(owner)
            .get(index)
            .copied()
            .ok_or(RegistryError::NoTokenAtIndex(index))
    }

    /// Number of live (minted and not burned) tokens.
    pub fn total_supply(&self) -> usize {
        self.owners.len()
    }

    /// Resolve the owner and authorize `caller` as owner or operator.
    fn check_owner_or_approved(
        &self,
        caller: Address,
        token_id: TokenId,
    ) -> Result<Address, RegistryError> {
        let owner = self.owner_of(token_id)?;
        if caller != owner && self.approvals.get(&token_id) != Some(&caller) {
            return Err(RegistryError::NotOwnerOrApproved(token_id));
        }
        Ok(owner)
    }
}

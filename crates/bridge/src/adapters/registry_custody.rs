//! # Registry Custody Adapter
//!
//! Implements `AssetCustody` over a shared asset registry handle. The
//! bridge account must be approved by owners before locking and must hold
//! the minter capability on ledgers where redeemed assets are minted on
//! demand.

use crate::domain::BridgeError;
use crate::ports::AssetCustody;
use asset_registry::{AssetRegistry, RegistryError};
use parking_lot::RwLock;
use shared_types::{Address, TokenId};
use std::sync::Arc;
use tracing::debug;

/// Custody over an in-process registry instance.
pub struct RegistryCustody {
    registry: Arc<RwLock<AssetRegistry>>,
    /// Account the bridge acts as on the registry.
    bridge_account: Address,
}

impl RegistryCustody {
    /// Bind custody to a registry and the bridge's account.
    pub fn new(registry: Arc<RwLock<AssetRegistry>>, bridge_account: Address) -> Self {
        Self {
            registry,
            bridge_account,
        }
    }

    /// The account the bridge acts as.
    pub fn bridge_account(&self) -> Address {
        self.bridge_account
    }
}

impl AssetCustody for RegistryCustody {
    fn lock(&self, from: Address, token_id: TokenId) -> Result<(), BridgeError> {
        self.registry
            .write()
            .transfer_from(self.bridge_account, from, self.bridge_account, token_id)?;
        Ok(())
    }

    fn release(&self, to: Address, token_id: TokenId) -> Result<(), BridgeError> {
        let mut registry = self.registry.write();
        match registry.owner_of(token_id) {
            Ok(_) => {
                registry.transfer_from(self.bridge_account, self.bridge_account, to, token_id)?;
            }
            Err(RegistryError::NonexistentAsset(_)) => {
                debug!("[bridge] token {} absent on this ledger, minting", token_id);
                registry.mint_id(self.bridge_account, to, token_id)?;
            }
            Err(other) => return Err(other.into()),
        }
        Ok(())
    }

    fn owner_of(&self, token_id: TokenId) -> Result<Address, BridgeError> {
        Ok(self.registry.read().owner_of(token_id)?)
    }
}

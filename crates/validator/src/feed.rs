//! # Swap Feed
//!
//! How the validator observes initiated swaps. The port is async because
//! a deployed validator watches a remote ledger; the bundled adapter reads
//! an in-process bridge instance directly.

use crate::errors::ValidatorError;
use async_trait::async_trait;
use bridge::{AssetCustody, AttestationVerifier, Bridge, SwapEvent};
use shared_types::Address;
use std::sync::Arc;

/// Source of initiation notifications - outbound port.
#[async_trait]
pub trait SwapFeed: Send + Sync {
    /// The most recent initiation on the watched ledger.
    async fn latest_init_swap(&self) -> Result<SwapEvent, ValidatorError>;

    /// The initiation from `sender` carrying `nonce`.
    async fn init_swap_by_nonce(
        &self,
        sender: Address,
        nonce: u64,
    ) -> Result<SwapEvent, ValidatorError>;
}

/// Feed over an in-process bridge instance.
pub struct BridgeFeed<C: AssetCustody, V: AttestationVerifier> {
    bridge: Arc<Bridge<C, V>>,
}

impl<C: AssetCustody, V: AttestationVerifier> BridgeFeed<C, V> {
    /// Watch `bridge` for initiations.
    pub fn new(bridge: Arc<Bridge<C, V>>) -> Self {
        Self { bridge }
    }
}

#[async_trait]
impl<C: AssetCustody, V: AttestationVerifier> SwapFeed for BridgeFeed<C, V> {
    async fn latest_init_swap(&self) -> Result<SwapEvent, ValidatorError> {
        self.bridge
            .latest_init_swap()
            .ok_or(ValidatorError::NoEventFound)
    }

    async fn init_swap_by_nonce(
        &self,
        sender: Address,
        nonce: u64,
    ) -> Result<SwapEvent, ValidatorError> {
        self.bridge
            .init_swap_by_nonce(&sender, nonce)
            .ok_or(ValidatorError::NoEventFound)
    }
}

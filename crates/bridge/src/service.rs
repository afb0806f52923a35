//! # Bridge Service
//!
//! The per-ledger state machine. Each swap attempt, keyed by the canonical
//! hash of its record, moves through exactly one transition on each side:
//!
//! ```text
//! Uninitiated --initSwap-->  Locked    (source ledger, terminal)
//! Uninitiated --redeemSwap-> Redeemed  (destination ledger, terminal)
//! ```
//!
//! State-changing calls serialize on one write lock, so no two initiations
//! or redemptions on the same instance interleave their storage mutations.

use crate::algorithms::canonical_hash;
use crate::domain::{
    BridgeConfig, BridgeError, BridgeEvent, EventStore, NonceStore, SwapEvent, SwapRecord,
};
use crate::ports::{AssetCustody, AttestationVerifier};
use parking_lot::RwLock;
use shared_crypto::RecoverableSignature;
use shared_types::{short_hex, Address, ChainName, Hash, TokenId};
use tracing::info;

/// Mutable state of one bridge instance, guarded as a unit.
#[derive(Default)]
struct BridgeState {
    event_store: EventStore,
    nonce_store: NonceStore,
    events: Vec<BridgeEvent>,
}

/// One bridge instance, bound to a ledger and its asset registry.
pub struct Bridge<C: AssetCustody, V: AttestationVerifier> {
    config: BridgeConfig,
    custody: C,
    verifier: V,
    state: RwLock<BridgeState>,
}

impl<C: AssetCustody, V: AttestationVerifier> Bridge<C, V> {
    /// Create a bridge instance with empty stores.
    pub fn new(config: BridgeConfig, custody: C, verifier: V) -> Self {
        Self {
            config,
            custody,
            verifier,
            state: RwLock::new(BridgeState::default()),
        }
    }

    /// This instance's static configuration.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// The custody adapter this instance moves assets through.
    pub fn custody(&self) -> &C {
        &self.custody
    }

    /// Lock `token_id` for transfer to the counterpart ledger.
    ///
    /// The caller must own the token and have approved the bridge as
    /// operator. On success the asset is in bridge custody, the swap is
    /// recorded under its canonical hash, the caller's nonce advances by
    /// one, and the returned `InitSwap` notification is appended to the
    /// event log.
    pub fn init_swap(&self, caller: Address, token_id: TokenId) -> Result<SwapEvent, BridgeError> {
        let mut state = self.state.write();

        // Nonce is assigned pre-increment: a sender's first swap uses 0.
        let nonce = state.nonce_store.next_of(&caller);
        let record = SwapRecord::new(
            caller,
            token_id,
            self.config.chain,
            self.config.counterpart,
            nonce,
        )?;
        let digest = canonical_hash(&record);
        if state.event_store.contains(&digest) {
            return Err(BridgeError::AlreadyRecorded(digest));
        }

        // The custody pull is the last fallible step: if it rejects the
        // caller, no store has been touched.
        self.custody.lock(caller, token_id)?;

        state.nonce_store.assign(caller);
        state.event_store.insert(digest, record.clone())?;
        let event = SwapEvent::from(&record);
        state.events.push(BridgeEvent::InitSwap(event));

        info!(
            "[bridge] InitSwap {} token {} {} -> {} nonce {}",
            short_hex(&caller),
            token_id,
            record.chain_from,
            record.chain_to,
            nonce
        );
        Ok(event)
    }

    /// Redeem a swap initiated on the counterpart ledger.
    ///
    /// The record is rebuilt from the explicit arguments, never from
    /// local state, which knows nothing of the other ledger. The
    /// attestation must be the trusted validator's signature over its
    /// canonical hash. A hash already consumed here is rejected; the
    /// ledger pair is not re-validated beyond being part of the signed
    /// digest.
    pub fn redeem_swap(
        &self,
        sender: Address,
        token_id: TokenId,
        chain_from: ChainName,
        chain_to: ChainName,
        nonce: u64,
        attestation: &RecoverableSignature,
    ) -> Result<SwapEvent, BridgeError> {
        let record = SwapRecord::new(sender, token_id, chain_from, chain_to, nonce)?;
        let digest = canonical_hash(&record);

        // Forgery and tampering are both caught here: any field change
        // above altered the digest, so the signature no longer recovers
        // the validator.
        self.verifier.verify(&digest, attestation)?;

        let mut state = self.state.write();
        if state.event_store.contains(&digest) {
            return Err(BridgeError::AlreadyRedeemed(digest));
        }

        self.custody.release(sender, token_id)?;

        state.event_store.insert(digest, record.clone())?;
        let event = SwapEvent::from(&record);
        state.events.push(BridgeEvent::RedeemSwap(event));

        info!(
            "[bridge] RedeemSwap {} token {} {} -> {} nonce {}",
            short_hex(&sender),
            token_id,
            chain_from,
            chain_to,
            nonce
        );
        Ok(event)
    }

    /// Recorded swap under `digest`, if any.
    pub fn swap_record(&self, digest: &Hash) -> Option<SwapRecord> {
        self.state.read().event_store.get(digest).cloned()
    }

    /// The nonce the next initiation from `sender` will use.
    pub fn nonce_of(&self, sender: &Address) -> u64 {
        self.state.read().nonce_store.next_of(sender)
    }

    /// Number of recorded swaps on this ledger.
    pub fn recorded_swaps(&self) -> usize {
        self.state.read().event_store.len()
    }

    /// Full notification log, in emission order.
    pub fn events(&self) -> Vec<BridgeEvent> {
        self.state.read().events.clone()
    }

    /// Initiation notifications only, in emission order.
    pub fn init_swap_events(&self) -> Vec<SwapEvent> {
        self.state
            .read()
            .events
            .iter()
            .filter(|e| e.is_init())
            .map(|e| *e.swap())
            .collect()
    }

    /// The most recent initiation, if any.
    ///
    /// A convenience default only, racy when several initiations precede
    /// redemption. Callers wanting a specific swap address it by nonce.
    pub fn latest_init_swap(&self) -> Option<SwapEvent> {
        self.state
            .read()
            .events
            .iter()
            .rev()
            .find(|e| e.is_init())
            .map(|e| *e.swap())
    }

    /// The initiation from `sender` carrying `nonce`, if any.
    pub fn init_swap_by_nonce(&self, sender: &Address, nonce: u64) -> Option<SwapEvent> {
        self.state
            .read()
            .events
            .iter()
            .filter(|e| e.is_init())
            .map(|e| *e.swap())
            .find(|s| s.sender == *sender && s.nonce == nonce)
    }
}

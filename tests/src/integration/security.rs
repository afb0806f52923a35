//! # Security Integration Tests
//!
//! Adversarial flows against a real two-ledger deployment: replayed
//! attestations, tampered redemption arguments, forged signatures, and
//! custody pulls without approval. Every rejection must leave all stores
//! untouched.

#[cfg(test)]
mod tests {
    use crate::fixtures::{deploy, Ledger, ALICE, BOB, BRIDGE_ACCOUNT, DEPLOYER};
    use asset_registry::RegistryError;
    use bridge::{BridgeError, SwapEvent};
    use shared_crypto::Secp256k1KeyPair;
    use shared_types::ChainName;
    use validator::Attestation;

    fn redeem_on(
        ledger: &Ledger,
        attestation: &Attestation,
    ) -> Result<SwapEvent, BridgeError> {
        let swap = attestation.swap;
        ledger.bridge.redeem_swap(
            swap.sender,
            swap.token_id,
            swap.chain_from,
            swap.chain_to,
            swap.nonce,
            &attestation.signature,
        )
    }

    #[tokio::test]
    async fn test_replayed_attestation_rejected() {
        let d = deploy();
        let token = d.bsc.mint_approved(ALICE);
        d.bsc.bridge.init_swap(ALICE, token).unwrap();
        let attestation = d.bsc_validator.attest_latest().await.unwrap();

        redeem_on(&d.polygon, &attestation).unwrap();
        assert!(matches!(
            redeem_on(&d.polygon, &attestation),
            Err(BridgeError::AlreadyRedeemed(_))
        ));

        // One redemption, one token
        assert_eq!(d.polygon.owner_of(token), ALICE);
        assert_eq!(d.polygon.registry.read().total_supply(), 1);
        assert_eq!(d.polygon.bridge.recorded_swaps(), 1);
    }

    #[tokio::test]
    async fn test_tampered_sender_rejected() {
        let d = deploy();
        let token = d.bsc.mint_approved(ALICE);
        d.bsc.bridge.init_swap(ALICE, token).unwrap();
        let attestation = d.bsc_validator.attest_latest().await.unwrap();

        // Bob presents Alice's attestation with himself as sender
        let swap = attestation.swap;
        let result = d.polygon.bridge.redeem_swap(
            BOB,
            swap.token_id,
            swap.chain_from,
            swap.chain_to,
            swap.nonce,
            &attestation.signature,
        );
        assert_eq!(result, Err(BridgeError::InvalidSignature));
        assert_eq!(d.polygon.bridge.recorded_swaps(), 0);
    }

    #[tokio::test]
    async fn test_tampered_token_rejected() {
        let d = deploy();
        let token = d.bsc.mint_approved(ALICE);
        d.bsc.bridge.init_swap(ALICE, token).unwrap();
        let attestation = d.bsc_validator.attest_latest().await.unwrap();

        let swap = attestation.swap;
        let result = d.polygon.bridge.redeem_swap(
            swap.sender,
            swap.token_id + 100,
            swap.chain_from,
            swap.chain_to,
            swap.nonce,
            &attestation.signature,
        );
        assert_eq!(result, Err(BridgeError::InvalidSignature));
    }

    #[tokio::test]
    async fn test_forged_attestation_rejected() {
        let d = deploy();
        let token = d.bsc.mint_approved(ALICE);
        let event = d.bsc.bridge.init_swap(ALICE, token).unwrap();

        // Attacker signs the genuine digest with their own key
        let attacker = Secp256k1KeyPair::generate();
        let digest = bridge::canonical_hash(&event.to_record().unwrap());
        let forged = attacker.sign_prehash(&digest).unwrap();

        let result = d.polygon.bridge.redeem_swap(
            event.sender,
            event.token_id,
            event.chain_from,
            event.chain_to,
            event.nonce,
            &forged,
        );
        assert_eq!(result, Err(BridgeError::InvalidSignature));
    }

    #[tokio::test]
    async fn test_init_without_approval_changes_nothing() {
        let d = deploy();
        // Minted but never approved for the bridge
        let token = d.bsc.registry.write().mint(DEPLOYER, ALICE).unwrap();

        assert_eq!(
            d.bsc.bridge.init_swap(ALICE, token),
            Err(BridgeError::Registry(RegistryError::NotOwnerOrApproved(
                token
            )))
        );

        assert_eq!(d.bsc.owner_of(token), ALICE);
        assert_eq!(d.bsc.bridge.nonce_of(&ALICE), 0);
        assert_eq!(d.bsc.bridge.recorded_swaps(), 0);
        assert!(d.bsc.bridge.events().is_empty());
    }

    #[tokio::test]
    async fn test_init_of_someone_elses_token_rejected() {
        let d = deploy();
        let token = d.bsc.mint_approved(ALICE);

        // Bob cannot ship Alice's token even though the bridge is approved
        assert!(matches!(
            d.bsc.bridge.init_swap(BOB, token),
            Err(BridgeError::Registry(RegistryError::NotOwnerOrApproved(_)))
        ));
        assert_eq!(d.bsc.owner_of(token), ALICE);
    }

    #[tokio::test]
    async fn test_same_chain_redemption_rejected() {
        let d = deploy();
        let keypair = Secp256k1KeyPair::generate();
        let sig = keypair.sign_prehash(&[0u8; 32]).unwrap();

        assert_eq!(
            d.polygon.bridge.redeem_swap(
                ALICE,
                1,
                ChainName::Polygon,
                ChainName::Polygon,
                0,
                &sig
            ),
            Err(BridgeError::SameChainSwap(ChainName::Polygon))
        );
    }

    #[tokio::test]
    async fn test_double_init_after_custody_loss() {
        let d = deploy();
        let token = d.bsc.mint_approved(ALICE);
        d.bsc.bridge.init_swap(ALICE, token).unwrap();

        // The asset now sits with the bridge account; a second initiation
        // from Alice fails at custody, not at the event store
        assert!(matches!(
            d.bsc.bridge.init_swap(ALICE, token),
            Err(BridgeError::Registry(RegistryError::NotOwnerOrApproved(_)))
        ));
        assert_eq!(d.bsc.owner_of(token), BRIDGE_ACCOUNT);
        assert_eq!(d.bsc.bridge.recorded_swaps(), 1);
    }
}

//! # Swap Flow Integration Tests
//!
//! Happy-path journeys across the whole pipeline:
//!
//! 1. **Lock**: owner approves the bridge, `init_swap` pulls the asset
//!    into custody and assigns a nonce.
//! 2. **Attest**: the validator observes the initiation and signs its
//!    canonical hash.
//! 3. **Redeem**: the destination bridge verifies the attestation and
//!    hands the asset to the sender, minting it when absent.

#[cfg(test)]
mod tests {
    use crate::fixtures::{deploy, ALICE, BOB, BRIDGE_ACCOUNT};
    use validator::Attestation;

    /// Carry an attestation to its destination ledger's redeem call.
    fn redeem_on(
        ledger: &crate::fixtures::Ledger,
        attestation: &Attestation,
    ) -> Result<bridge::SwapEvent, bridge::BridgeError> {
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
    async fn test_full_swap_bsc_to_polygon() {
        let d = deploy();
        let token = d.bsc.mint_approved(ALICE);

        let event = d.bsc.bridge.init_swap(ALICE, token).unwrap();
        assert_eq!(d.bsc.owner_of(token), BRIDGE_ACCOUNT);
        assert_eq!(event.nonce, 0);

        let attestation = d.bsc_validator.attest_latest().await.unwrap();
        redeem_on(&d.polygon, &attestation).unwrap();

        // Minted on arrival: Polygon never saw this token before
        assert_eq!(d.polygon.owner_of(token), ALICE);
    }

    #[tokio::test]
    async fn test_round_trip_returns_the_locked_token() {
        let d = deploy();
        let token = d.bsc.mint_approved(ALICE);

        // There: BSC -> Polygon
        d.bsc.bridge.init_swap(ALICE, token).unwrap();
        let there = d.bsc_validator.attest_latest().await.unwrap();
        redeem_on(&d.polygon, &there).unwrap();
        assert_eq!(d.polygon.owner_of(token), ALICE);

        // Back: Polygon -> BSC. Alice approves the Polygon bridge first.
        d.polygon
            .registry
            .write()
            .approve(ALICE, BRIDGE_ACCOUNT, token)
            .unwrap();
        d.polygon.bridge.init_swap(ALICE, token).unwrap();
        let back = d.polygon_validator.attest_latest().await.unwrap();
        redeem_on(&d.bsc, &back).unwrap();

        // BSC already held the token in custody; redemption transfers,
        // never re-mints
        assert_eq!(d.bsc.owner_of(token), ALICE);
        assert_eq!(d.bsc.registry.read().total_supply(), 1);
    }

    #[tokio::test]
    async fn test_nonces_sequence_per_sender() {
        let d = deploy();
        let first = d.bsc.mint_approved(ALICE);
        let second = d.bsc.mint_approved(ALICE);
        let bobs = d.bsc.mint_approved(BOB);

        assert_eq!(d.bsc.bridge.init_swap(ALICE, first).unwrap().nonce, 0);
        assert_eq!(d.bsc.bridge.init_swap(ALICE, second).unwrap().nonce, 1);
        assert_eq!(d.bsc.bridge.init_swap(BOB, bobs).unwrap().nonce, 0);

        assert_eq!(d.bsc.bridge.nonce_of(&ALICE), 2);
        assert_eq!(d.bsc.bridge.nonce_of(&BOB), 1);
    }

    #[tokio::test]
    async fn test_attest_by_nonce_redeems_older_swap() {
        let d = deploy();
        let first = d.bsc.mint_approved(ALICE);
        let second = d.bsc.mint_approved(ALICE);
        d.bsc.bridge.init_swap(ALICE, first).unwrap();
        d.bsc.bridge.init_swap(ALICE, second).unwrap();

        // Latest points at the second swap; nonce addressing recovers
        // the first
        let latest = d.bsc_validator.attest_latest().await.unwrap();
        assert_eq!(latest.swap.token_id, second);

        let addressed = d.bsc_validator.attest_nonce(ALICE, 0).await.unwrap();
        assert_eq!(addressed.swap.token_id, first);

        redeem_on(&d.polygon, &addressed).unwrap();
        assert_eq!(d.polygon.owner_of(first), ALICE);
    }

    #[tokio::test]
    async fn test_validator_with_nothing_to_attest() {
        let d = deploy();
        assert_eq!(
            d.bsc_validator.attest_latest().await,
            Err(validator::ValidatorError::NoEventFound)
        );
        assert_eq!(
            d.bsc_validator.attest_nonce(ALICE, 0).await,
            Err(validator::ValidatorError::NoEventFound)
        );
    }

    #[tokio::test]
    async fn test_events_record_both_sides() {
        let d = deploy();
        let token = d.bsc.mint_approved(ALICE);
        d.bsc.bridge.init_swap(ALICE, token).unwrap();
        let attestation = d.bsc_validator.attest_latest().await.unwrap();
        redeem_on(&d.polygon, &attestation).unwrap();

        let source_events = d.bsc.bridge.events();
        assert_eq!(source_events.len(), 1);
        assert!(source_events[0].is_init());

        let destination_events = d.polygon.bridge.events();
        assert_eq!(destination_events.len(), 1);
        assert!(!destination_events[0].is_init());
        assert_eq!(destination_events[0].swap().token_id, token);
    }
}

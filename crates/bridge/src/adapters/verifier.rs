//! # ECDSA Attestation Verifier
//!
//! Single-signer implementation of the `AttestationVerifier` port: the
//! recovered signer must equal the one trusted validator address fixed at
//! construction. A multi-signature scheme would replace this adapter, not
//! the state machine.

use crate::domain::BridgeError;
use crate::ports::AttestationVerifier;
use shared_crypto::{recover_address, RecoverableSignature};
use shared_types::{short_hex, Address, Hash};
use tracing::debug;

/// Verifier trusting exactly one attestation signer.
#[derive(Clone, Copy, Debug)]
pub struct EcdsaAttestationVerifier {
    trusted: Address,
}

impl EcdsaAttestationVerifier {
    /// Trust attestations signed by `trusted`.
    pub fn new(trusted: Address) -> Self {
        Self { trusted }
    }

    /// The trusted validator address.
    pub fn trusted(&self) -> Address {
        self.trusted
    }
}

impl AttestationVerifier for EcdsaAttestationVerifier {
    fn verify(
        &self,
        digest: &Hash,
        attestation: &RecoverableSignature,
    ) -> Result<(), BridgeError> {
        // A malformed signature and a wrong signer are indistinguishable
        // to the caller; both mean "not endorsed by the validator".
        let recovered = recover_address(digest, attestation).map_err(|e| {
            debug!("[bridge] attestation rejected: {}", e);
            BridgeError::InvalidSignature
        })?;

        if recovered != self.trusted {
            debug!(
                "[bridge] attestation signer {} is not the validator {}",
                short_hex(&recovered),
                short_hex(&self.trusted)
            );
            return Err(BridgeError::InvalidSignature);
        }
        Ok(())
    }
}

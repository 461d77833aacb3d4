//! The decryption oracle capability and its proof scheme.
//!
//! `request_decryption` hands a vector of ciphertext handles to the oracle
//! and returns immediately with an oracle-allocated request id; the
//! cleartexts arrive later through a separate callback entry point, with no
//! shared call stack. `verify_proof` authenticates that callback.
//!
//! The proof scheme is an ed25519 signature over a canonical message
//! derived from the request id and the cleartexts. Any oracle that signs
//! its results with a known key can be verified with
//! [`verify_signed_result`].

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use serde::{Deserialize, Serialize};
use veilbatch_types::{CiphertextHandle, RequestId};

/// Opaque proof accompanying a decryption result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecryptionProof(pub Vec<u8>);

impl DecryptionProof {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Asynchronous decryption oracle capability.
pub trait DecryptionOracle {
    /// Submit a vector of ciphertext handles for decryption. Returns a
    /// fresh, unique request id; the result arrives later via the ledger's
    /// callback entry point.
    fn request_decryption(&mut self, handles: &[CiphertextHandle]) -> RequestId;

    /// Whether `proof` authenticates `cleartexts` as the decryption result
    /// for `request_id`.
    fn verify_proof(
        &self,
        request_id: RequestId,
        cleartexts: &[u64],
        proof: &DecryptionProof,
    ) -> bool;
}

/// Canonical message an oracle signs over one decryption result.
///
/// Commits to the domain tag, the request id, and the cleartext count and
/// values in order.
fn result_message(request_id: RequestId, cleartexts: &[u64]) -> Vec<u8> {
    let mut msg = Vec::with_capacity(27 + 16 + 8 + cleartexts.len() * 8);
    msg.extend_from_slice(b"veilbatch:oracle-result:v1:");
    msg.extend_from_slice(request_id.0.as_bytes());
    msg.extend_from_slice(&(cleartexts.len() as u64).to_le_bytes());
    for value in cleartexts {
        msg.extend_from_slice(&value.to_le_bytes());
    }
    msg
}

/// Sign a decryption result with the oracle's key.
#[must_use]
pub fn sign_result(key: &SigningKey, request_id: RequestId, cleartexts: &[u64]) -> DecryptionProof {
    let signature = key.sign(&result_message(request_id, cleartexts));
    DecryptionProof(signature.to_bytes().to_vec())
}

/// Verify a signed decryption result against the oracle's public key.
///
/// Malformed proofs (wrong length, garbage bytes) verify as `false`, never
/// as an error.
#[must_use]
pub fn verify_signed_result(
    key: &VerifyingKey,
    request_id: RequestId,
    cleartexts: &[u64],
    proof: &DecryptionProof,
) -> bool {
    let Ok(signature) = Signature::from_slice(&proof.0) else {
        return false;
    };
    key.verify(&result_message(request_id, cleartexts), &signature)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use rand::rngs::OsRng;

    use super::*;

    fn keypair() -> (SigningKey, VerifyingKey) {
        let signing = SigningKey::generate(&mut OsRng);
        let verifying = signing.verifying_key();
        (signing, verifying)
    }

    #[test]
    fn signed_result_verifies() {
        let (signing, verifying) = keypair();
        let request_id = RequestId::new();
        let cleartexts = [100u64, 90u64];

        let proof = sign_result(&signing, request_id, &cleartexts);
        assert!(verify_signed_result(&verifying, request_id, &cleartexts, &proof));
    }

    #[test]
    fn tampered_cleartexts_rejected() {
        let (signing, verifying) = keypair();
        let request_id = RequestId::new();

        let proof = sign_result(&signing, request_id, &[100, 90]);
        assert!(!verify_signed_result(&verifying, request_id, &[100, 91], &proof));
    }

    #[test]
    fn wrong_request_id_rejected() {
        let (signing, verifying) = keypair();
        let cleartexts = [100u64, 90u64];

        let proof = sign_result(&signing, RequestId::new(), &cleartexts);
        assert!(!verify_signed_result(&verifying, RequestId::new(), &cleartexts, &proof));
    }

    #[test]
    fn foreign_key_rejected() {
        let (signing, _) = keypair();
        let (_, other_verifying) = keypair();
        let request_id = RequestId::new();
        let cleartexts = [42u64];

        let proof = sign_result(&signing, request_id, &cleartexts);
        assert!(!verify_signed_result(&other_verifying, request_id, &cleartexts, &proof));
    }

    #[test]
    fn truncated_proof_rejected() {
        let (signing, verifying) = keypair();
        let request_id = RequestId::new();
        let cleartexts = [7u64];

        let mut proof = sign_result(&signing, request_id, &cleartexts);
        proof.0.truncate(10);
        assert!(!verify_signed_result(&verifying, request_id, &cleartexts, &proof));
    }
}

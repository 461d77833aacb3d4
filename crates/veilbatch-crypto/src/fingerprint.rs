//! State fingerprinting for the decryption protocol.
//!
//! The fingerprint is a content hash over the exact ciphertext vector
//! submitted to the oracle plus the ledger identity. It binds a decryption
//! request to the ledger state it was issued against: any mutation that
//! changes the canonical vector between request and callback changes the
//! recomputed fingerprint, and the callback is rejected.

use sha2::{Digest, Sha256};
use veilbatch_types::{Ciphertext, LedgerId, StateFingerprint, constants::CANONICAL_VECTOR_LEN};

/// Compute the fingerprint for a canonical ciphertext vector.
///
/// The hash commits to:
/// - the domain separation tag (versioned)
/// - the ledger identity
/// - the vector length and each handle, in vector order
#[must_use]
pub fn state_fingerprint(
    ledger_id: LedgerId,
    vector: &[Ciphertext; CANONICAL_VECTOR_LEN],
) -> StateFingerprint {
    let mut hasher = Sha256::new();
    hasher.update(b"veilbatch:fingerprint:v1:");
    hasher.update(ledger_id.as_bytes());
    hasher.update((vector.len() as u64).to_le_bytes());
    for ct in vector {
        hasher.update(ct.handle().as_bytes());
    }

    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    StateFingerprint(hash)
}

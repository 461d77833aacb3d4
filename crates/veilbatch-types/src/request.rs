//! Decryption request model.
//!
//! A request binds an oracle-allocated [`RequestId`] to the exact ledger
//! state that existed when it was issued, via a content-hash
//! [`StateFingerprint`] over the canonical ciphertext vector. The
//! `finalized` flag is monotone false→true: it flips exactly once, on the
//! first successfully verified callback.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{BatchId, RequestId};

// ---------------------------------------------------------------------------
// StateFingerprint
// ---------------------------------------------------------------------------

/// SHA-256 content hash over the canonical ciphertext vector plus the
/// ledger identity. A content hash, not a version counter: it also guards
/// against any code path that recomputes the same totals differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateFingerprint(pub [u8; 32]);

impl StateFingerprint {
    #[must_use]
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Display for StateFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fp:{}", hex::encode(&self.0[..8]))
    }
}

// ---------------------------------------------------------------------------
// DecryptionRequest
// ---------------------------------------------------------------------------

/// One outstanding (or finalized) decryption request. A request that never
/// receives a callback stays pending forever; a request whose callback hits
/// a fingerprint mismatch also stays pending — a fresh request must be
/// issued against the then-current state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecryptionRequest {
    pub id: RequestId,
    pub batch_id: BatchId,
    pub state_fingerprint: StateFingerprint,
    pub finalized: bool,
}

impl DecryptionRequest {
    #[must_use]
    pub fn pending(id: RequestId, batch_id: BatchId, state_fingerprint: StateFingerprint) -> Self {
        Self {
            id,
            batch_id,
            state_fingerprint,
            finalized: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_request_is_not_finalized() {
        let req = DecryptionRequest::pending(
            RequestId::new(),
            BatchId(1),
            StateFingerprint([7u8; 32]),
        );
        assert!(!req.finalized);
        assert_eq!(req.batch_id, BatchId(1));
    }

    #[test]
    fn fingerprint_display_is_short_hex() {
        let fp = StateFingerprint([0xEF; 32]);
        assert_eq!(format!("{fp}"), "fp:efefefefefefefef");
        assert_eq!(fp.short(), "efefefef");
    }

    #[test]
    fn serde_roundtrip() {
        let req = DecryptionRequest::pending(
            RequestId::new(),
            BatchId(2),
            StateFingerprint([1u8; 32]),
        );
        let json = serde_json::to_string(&req).unwrap();
        let back: DecryptionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req.id, back.id);
        assert_eq!(req.state_fingerprint, back.state_fingerprint);
    }
}

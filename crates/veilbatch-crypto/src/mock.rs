//! Deterministic in-memory collaborators for tests.
//!
//! `MockCipherEngine` derives result handles by domain-separated hashing of
//! the operand handles, so recomputing the same sum yields the same handle
//! — the determinism the fingerprint protocol requires of any real engine.
//! `MockOracle` queues requests and signs results with a real ed25519 key,
//! so both the happy path and forged-proof paths are exercisable.

use std::collections::HashMap;
use std::sync::Mutex;

use ed25519_dalek::{SigningKey, VerifyingKey};
use sha2::{Digest, Sha256};
use veilbatch_types::{Ciphertext, CiphertextHandle, RequestId};

use crate::engine::CipherEngine;
use crate::oracle::{DecryptionOracle, DecryptionProof, sign_result, verify_signed_result};

// ---------------------------------------------------------------------------
// MockCipherEngine
// ---------------------------------------------------------------------------

/// In-memory cipher engine with deterministic handle derivation and a
/// plaintext table for test-side decryption.
#[derive(Debug, Default)]
pub struct MockCipherEngine {
    table: Mutex<HashMap<CiphertextHandle, u64>>,
}

impl MockCipherEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Test-side decryption: the plaintext behind a handle, if this engine
    /// minted it.
    #[must_use]
    pub fn decrypt(&self, ct: &Ciphertext) -> Option<u64> {
        self.table.lock().expect("mock table poisoned").get(&ct.handle()).copied()
    }

    /// Decrypt a batch of handles, in order. Panics if any handle was not
    /// minted by this engine.
    #[must_use]
    pub fn decrypt_handles(&self, handles: &[CiphertextHandle]) -> Vec<u64> {
        let table = self.table.lock().expect("mock table poisoned");
        handles
            .iter()
            .map(|h| *table.get(h).expect("handle not minted by this engine"))
            .collect()
    }

    fn derive(tag: &[u8], parts: &[&[u8]]) -> CiphertextHandle {
        let mut hasher = Sha256::new();
        hasher.update(tag);
        for part in parts {
            hasher.update(part);
        }
        let result = hasher.finalize();
        let mut handle = [0u8; 32];
        handle.copy_from_slice(&result);
        CiphertextHandle(handle)
    }

    fn mint(&self, handle: CiphertextHandle, plain: u64) -> Ciphertext {
        self.table.lock().expect("mock table poisoned").insert(handle, plain);
        Ciphertext::from_handle(handle)
    }
}

impl CipherEngine for MockCipherEngine {
    fn encode(&self, plain: u64) -> Ciphertext {
        let handle = Self::derive(b"veilbatch:mock:enc:", &[&plain.to_le_bytes()]);
        self.mint(handle, plain)
    }

    fn add(&self, a: &Ciphertext, b: &Ciphertext) -> Ciphertext {
        let (lhs, rhs) = {
            let table = self.table.lock().expect("mock table poisoned");
            (
                *table.get(&a.handle()).expect("lhs not minted by this engine"),
                *table.get(&b.handle()).expect("rhs not minted by this engine"),
            )
        };
        let handle = Self::derive(
            b"veilbatch:mock:add:",
            &[a.handle().as_bytes(), b.handle().as_bytes()],
        );
        self.mint(handle, lhs.wrapping_add(rhs))
    }

    fn zero(&self) -> Ciphertext {
        let handle = Self::derive(b"veilbatch:mock:zero:", &[]);
        self.mint(handle, 0)
    }
}

// ---------------------------------------------------------------------------
// MockOracle
// ---------------------------------------------------------------------------

/// One queued decryption the test harness has yet to answer.
#[derive(Debug, Clone)]
pub struct PendingDecryption {
    pub request_id: RequestId,
    pub handles: Vec<CiphertextHandle>,
}

/// Signing oracle double: allocates request ids, queues the submitted
/// handle vectors, and signs results with a generated ed25519 key.
pub struct MockOracle {
    signing: SigningKey,
    pending: Vec<PendingDecryption>,
}

impl MockOracle {
    #[must_use]
    pub fn new() -> Self {
        Self {
            signing: SigningKey::generate(&mut rand::rngs::OsRng),
            pending: Vec::new(),
        }
    }

    #[must_use]
    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing.verifying_key()
    }

    /// Drain every queued request, oldest first.
    pub fn take_pending(&mut self) -> Vec<PendingDecryption> {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Sign a decryption result the way a real oracle would.
    #[must_use]
    pub fn sign_result(&self, request_id: RequestId, cleartexts: &[u64]) -> DecryptionProof {
        sign_result(&self.signing, request_id, cleartexts)
    }
}

impl Default for MockOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl DecryptionOracle for MockOracle {
    fn request_decryption(&mut self, handles: &[CiphertextHandle]) -> RequestId {
        let request_id = RequestId::new();
        self.pending.push(PendingDecryption {
            request_id,
            handles: handles.to_vec(),
        });
        request_id
    }

    fn verify_proof(
        &self,
        request_id: RequestId,
        cleartexts: &[u64],
        proof: &DecryptionProof,
    ) -> bool {
        verify_signed_result(&self.verifying_key(), request_id, cleartexts, proof)
    }
}

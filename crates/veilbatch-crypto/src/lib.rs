//! # veilbatch-crypto
//!
//! Capability seams between the confidential ledger and its external
//! cryptographic collaborators:
//!
//! - [`CipherEngine`]: the homomorphic encryption engine, consumed as an
//!   opaque capability over [`veilbatch_types::Ciphertext`] values
//! - [`DecryptionOracle`]: the asynchronous decryption service with its
//!   request/callback contract and proof verification
//! - [`state_fingerprint`]: the content hash binding a decryption request
//!   to the exact ciphertext vector it was issued for
//! - Signed-result proof scheme for ed25519-signing oracles
//!
//! The `test-helpers` feature exposes a deterministic in-memory engine and
//! a signing oracle for tests.

pub mod engine;
pub mod fingerprint;
pub mod oracle;

#[cfg(any(test, feature = "test-helpers"))]
pub mod mock;

pub use engine::CipherEngine;
pub use fingerprint::state_fingerprint;
pub use oracle::{DecryptionOracle, DecryptionProof, sign_result, verify_signed_result};

#[cfg(any(test, feature = "test-helpers"))]
pub use mock::{MockCipherEngine, MockOracle, PendingDecryption};

//! Opaque ciphertext handles.
//!
//! The core never sees plaintext: every encrypted field is a [`Ciphertext`]
//! whose only serialized form is a fixed-width [`CiphertextHandle`]. What a
//! handle *means* is the encryption engine's business; this crate only
//! compares handles for equality and hashes them into state fingerprints.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::HANDLE_WIDTH;

// ---------------------------------------------------------------------------
// CiphertextHandle
// ---------------------------------------------------------------------------

/// Fixed-width opaque handle referencing one ciphertext inside the
/// encryption engine. The all-zero handle is the "absent / uninitialized"
/// sentinel and never references a live ciphertext.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CiphertextHandle(pub [u8; HANDLE_WIDTH]);

impl CiphertextHandle {
    /// The absent/uninitialized sentinel.
    pub const NULL: Self = Self([0u8; HANDLE_WIDTH]);

    #[must_use]
    pub fn from_bytes(bytes: [u8; HANDLE_WIDTH]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; HANDLE_WIDTH] {
        &self.0
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }

    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Display for CiphertextHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ct:{}", hex::encode(&self.0[..8]))
    }
}

// ---------------------------------------------------------------------------
// Ciphertext
// ---------------------------------------------------------------------------

/// An opaque encrypted value. Supports homomorphic addition only through a
/// `CipherEngine` capability — the value itself exposes nothing but its
/// handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ciphertext(CiphertextHandle);

impl Ciphertext {
    #[must_use]
    pub fn from_handle(handle: CiphertextHandle) -> Self {
        Self(handle)
    }

    #[must_use]
    pub fn handle(&self) -> CiphertextHandle {
        self.0
    }

    /// Whether this is the absent/uninitialized sentinel.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    /// The absent/uninitialized ciphertext.
    #[must_use]
    pub fn null() -> Self {
        Self(CiphertextHandle::NULL)
    }
}

impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

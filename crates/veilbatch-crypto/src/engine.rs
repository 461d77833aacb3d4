//! The homomorphic encryption engine capability.
//!
//! The ledger never assumes anything about ciphertext internals: every
//! operation goes through this trait, and every ciphertext is identified
//! only by its fixed-width handle. Any backend can be substituted without
//! the core ever seeing plaintext.

use veilbatch_types::Ciphertext;

/// Opaque homomorphic encryption capability.
///
/// Implementations must be deterministic in operand handles: `add` called
/// twice on the same pair of handles yields the same result handle, and
/// `zero` yields the same handle across calls. The decryption protocol
/// recomputes the canonical ciphertext vector at callback time and compares
/// fingerprints for equality — a nondeterministic engine would make every
/// callback fail with a state mismatch.
pub trait CipherEngine {
    /// Trivially encrypt a plaintext value.
    fn encode(&self, plain: u64) -> Ciphertext;

    /// Homomorphic addition without decryption.
    fn add(&self, a: &Ciphertext, b: &Ciphertext) -> Ciphertext;

    /// The canonical zero ciphertext, used as the total for a side with no
    /// contributing orders.
    fn zero(&self) -> Ciphertext;

    /// Whether the ciphertext holds a live value. The all-zero handle is
    /// the absent/uninitialized sentinel.
    fn is_present(&self, ct: &Ciphertext) -> bool {
        !ct.is_null()
    }
}

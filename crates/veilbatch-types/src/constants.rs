//! System-wide constants for the veilbatch ledger.

/// Width in bytes of a serialized ciphertext handle.
pub const HANDLE_WIDTH: usize = 32;

/// Length of the canonical ciphertext vector submitted for decryption:
/// `[bid_total, ask_total]`.
pub const CANONICAL_VECTOR_LEN: usize = 2;

/// Default cooldown between same-class operations by one actor (seconds).
pub const DEFAULT_COOLDOWN_SECS: u64 = 30;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "veilbatch";

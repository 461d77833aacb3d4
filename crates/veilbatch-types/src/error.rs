//! Error types for the veilbatch ledger.
//!
//! All errors use the `VB_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Access control errors
//! - 2xx: Rate limiting errors
//! - 3xx: Batch / order errors
//! - 4xx: Decryption protocol errors
//!
//! Every error is a terminal, synchronous rejection of the triggering call.
//! None are retried internally, and no failure path leaves partial state
//! behind: an operation either fully applies or fully rejects.

use thiserror::Error;

use crate::{ActorId, BatchId, RequestId, StateFingerprint};

/// Central error enum for all ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // =================================================================
    // Access Control Errors (1xx)
    // =================================================================
    /// The caller lacks the role the operation requires.
    #[error("VB_ERR_100: Unauthorized caller: {0}")]
    Unauthorized(ActorId),

    /// The ledger is paused; mutating operations are rejected.
    #[error("VB_ERR_101: System is paused")]
    SystemPaused,

    /// `pause` was called while already paused.
    #[error("VB_ERR_102: System is already paused")]
    AlreadyPaused,

    // =================================================================
    // Rate Limiting Errors (2xx)
    // =================================================================
    /// The actor's cooldown window for this operation class has not
    /// elapsed yet.
    #[error("VB_ERR_200: Cooldown active: retry in {retry_after_secs}s")]
    CooldownActive { retry_after_secs: i64 },

    // =================================================================
    // Batch / Order Errors (3xx)
    // =================================================================
    /// No batch is currently accepting orders (none opened, or the current
    /// batch is closed).
    #[error("VB_ERR_300: No active batch")]
    NoActiveBatch,

    /// The batch id is zero, unknown, or the batch is not closed yet.
    #[error("VB_ERR_301: Invalid batch for decryption: {0}")]
    InvalidBatch(BatchId),

    // =================================================================
    // Decryption Protocol Errors (4xx)
    // =================================================================
    /// No decryption request with this id exists.
    #[error("VB_ERR_400: Unknown decryption request: {0}")]
    UnknownRequest(RequestId),

    /// The request was already finalized; a second callback is a replay.
    #[error("VB_ERR_401: Replay detected for request: {0}")]
    ReplayDetected(RequestId),

    /// The ledger state changed between request and callback; the revealed
    /// cleartext no longer matches present state.
    #[error("VB_ERR_402: State fingerprint mismatch: expected {expected}, recomputed {actual}")]
    StateMismatch {
        expected: StateFingerprint,
        actual: StateFingerprint,
    },

    /// The oracle's proof over the cleartexts did not verify.
    #[error("VB_ERR_403: Invalid decryption proof for request: {0}")]
    InvalidProof(RequestId),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, LedgerError>;

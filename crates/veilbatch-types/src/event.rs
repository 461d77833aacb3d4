//! Notification events emitted on every state transition.
//!
//! Events are observability surface only — no ledger behavior hangs off
//! them. Idempotent no-ops (re-adding an existing provider, unpausing an
//! unpaused ledger) emit nothing.

use serde::{Deserialize, Serialize};

use crate::{ActorId, BatchId, OrderId, OrderSide, RequestId};

/// Structured notification for one state transition, carrying the relevant
/// ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    OwnershipTransferred {
        previous: ActorId,
        new_owner: ActorId,
    },
    ProviderAdded {
        actor: ActorId,
    },
    ProviderRemoved {
        actor: ActorId,
    },
    Paused,
    Unpaused,
    CooldownChanged {
        cooldown_secs: u64,
    },
    BatchOpened {
        batch_id: BatchId,
    },
    BatchClosed {
        batch_id: BatchId,
    },
    OrderSubmitted {
        order_id: OrderId,
        batch_id: BatchId,
        side: OrderSide,
        submitter: ActorId,
    },
    DecryptionRequested {
        request_id: RequestId,
        batch_id: BatchId,
    },
    DecryptionCompleted {
        request_id: RequestId,
        batch_id: BatchId,
    },
}

impl std::fmt::Display for LedgerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OwnershipTransferred { previous, new_owner } => {
                write!(f, "ownership transferred {previous} -> {new_owner}")
            }
            Self::ProviderAdded { actor } => write!(f, "provider added {actor}"),
            Self::ProviderRemoved { actor } => write!(f, "provider removed {actor}"),
            Self::Paused => write!(f, "ledger paused"),
            Self::Unpaused => write!(f, "ledger unpaused"),
            Self::CooldownChanged { cooldown_secs } => {
                write!(f, "cooldown changed to {cooldown_secs}s")
            }
            Self::BatchOpened { batch_id } => write!(f, "{batch_id} opened"),
            Self::BatchClosed { batch_id } => write!(f, "{batch_id} closed"),
            Self::OrderSubmitted {
                order_id,
                batch_id,
                side,
                submitter,
            } => write!(f, "{order_id} ({side}) submitted to {batch_id} by {submitter}"),
            Self::DecryptionRequested { request_id, batch_id } => {
                write!(f, "decryption of {batch_id} requested as {request_id}")
            }
            Self::DecryptionCompleted { request_id, batch_id } => {
                write!(f, "decryption {request_id} for {batch_id} completed")
            }
        }
    }
}

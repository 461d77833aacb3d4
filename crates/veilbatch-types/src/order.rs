//! Order model for the confidential ledger.
//!
//! Price, quantity, and asset identifier are opaque ciphertexts — only the
//! side is public, because the aggregator must know which running sum an
//! order contributes to. Orders are immutable once created and never
//! deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ActorId, BatchId, Ciphertext, OrderId};

/// Which side of the book this order is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum OrderSide {
    Bid,
    Ask,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bid => write!(f, "BID"),
            Self::Ask => write!(f, "ASK"),
        }
    }
}

/// One confidential order. Batch membership is fixed at submission time:
/// the order carries the id of the batch that was current when it was
/// accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub batch_id: BatchId,
    pub submitter: ActorId,
    pub side: OrderSide,
    pub asset_id: Ciphertext,
    pub price: Ciphertext,
    pub amount: Ciphertext,
    pub submitted_at: DateTime<Utc>,
}

impl Order {
    /// Whether the price field holds a live ciphertext. Orders with an
    /// absent price are skipped by the aggregator.
    #[must_use]
    pub fn has_price(&self) -> bool {
        !self.price.is_null()
    }
}

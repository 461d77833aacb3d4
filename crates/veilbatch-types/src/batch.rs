//! Batch lifecycle model.
//!
//! A batch is a bounded window of orders intended to be aggregated and
//! revealed together. Closing is one-way: a closed batch never reopens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::BatchId;

/// One order batch. At most one batch is "current" (accepting orders) at a
/// time; that selection lives in the ledger, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    pub id: BatchId,
    pub created_at: DateTime<Utc>,
    pub closed: bool,
}

impl Batch {
    #[must_use]
    pub fn open(id: BatchId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at,
            closed: false,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.closed
    }
}

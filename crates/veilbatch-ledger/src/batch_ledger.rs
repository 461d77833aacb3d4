//! Batch lifecycle and the append-only order table.
//!
//! Orders and batches are keyed by monotone ids starting at 1 and never
//! deleted or reused. At most one batch is current; opening a new batch
//! simply redirects subsequent submissions, so only the latest-opened
//! batch is ever writable. Closing is terminal.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use veilbatch_types::{
    ActorId, Batch, BatchId, Ciphertext, LedgerError, Order, OrderId, OrderSide, Result,
};

/// Batch table + order table + current-batch selection.
#[derive(Debug, Clone)]
pub struct BatchLedger {
    batches: BTreeMap<BatchId, Batch>,
    orders: BTreeMap<OrderId, Order>,
    current: Option<BatchId>,
    next_batch_id: u64,
    next_order_id: u64,
}

impl BatchLedger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            batches: BTreeMap::new(),
            orders: BTreeMap::new(),
            current: None,
            next_batch_id: 1,
            next_order_id: 1,
        }
    }

    /// Open a new batch and make it current. The previous batch, open or
    /// not, stops receiving orders because it is no longer current.
    pub fn open_batch(&mut self, now: DateTime<Utc>) -> BatchId {
        let id = BatchId(self.next_batch_id);
        self.next_batch_id += 1;
        self.batches.insert(id, Batch::open(id, now));
        self.current = Some(id);
        id
    }

    /// Close the current batch (terminal).
    ///
    /// # Errors
    /// `NoActiveBatch` if no batch is current or the current batch is
    /// already closed.
    pub fn close_batch(&mut self) -> Result<BatchId> {
        let id = self.current.ok_or(LedgerError::NoActiveBatch)?;
        let batch = self.batches.get_mut(&id).ok_or(LedgerError::NoActiveBatch)?;
        if batch.closed {
            return Err(LedgerError::NoActiveBatch);
        }
        batch.closed = true;
        Ok(id)
    }

    /// Append an order to the current open batch. Returns the allocated
    /// order id and the batch it joined.
    ///
    /// # Errors
    /// `NoActiveBatch` if no batch is current or the current batch is
    /// closed. Nothing is allocated or stored on failure.
    pub fn append_order(
        &mut self,
        submitter: ActorId,
        side: OrderSide,
        asset_id: Ciphertext,
        price: Ciphertext,
        amount: Ciphertext,
        now: DateTime<Utc>,
    ) -> Result<(OrderId, BatchId)> {
        let batch_id = self.current.ok_or(LedgerError::NoActiveBatch)?;
        match self.batches.get(&batch_id) {
            Some(batch) if batch.is_open() => {}
            _ => return Err(LedgerError::NoActiveBatch),
        }

        let id = OrderId(self.next_order_id);
        self.next_order_id += 1;
        self.orders.insert(
            id,
            Order {
                id,
                batch_id,
                submitter,
                side,
                asset_id,
                price,
                amount,
                submitted_at: now,
            },
        );
        Ok((id, batch_id))
    }

    #[must_use]
    pub fn batch(&self, id: BatchId) -> Option<&Batch> {
        self.batches.get(&id)
    }

    #[must_use]
    pub fn current_batch(&self) -> Option<&Batch> {
        self.current.and_then(|id| self.batches.get(&id))
    }

    #[must_use]
    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    /// All orders in ascending id order — the iteration order the
    /// aggregator's determinism depends on.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    /// Orders that were accepted into the given batch, ascending by id.
    pub fn orders_in_batch(&self, batch_id: BatchId) -> impl Iterator<Item = &Order> {
        self.orders.values().filter(move |o| o.batch_id == batch_id)
    }

    #[must_use]
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    #[must_use]
    pub fn highest_order_id(&self) -> Option<OrderId> {
        self.orders.keys().next_back().copied()
    }
}

impl Default for BatchLedger {
    fn default() -> Self {
        Self::new()
    }
}

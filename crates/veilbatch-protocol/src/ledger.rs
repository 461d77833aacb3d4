//! The confidential ledger facade.
//!
//! One explicitly constructed state object owning every component; all
//! mutating operations run through it strictly sequentially, so state
//! transitions are atomic and totally ordered. Guard ordering is uniform:
//! authorization → pause flag → cooldown check → domain checks →
//! mutations → cooldown record → notification. Rejections happen before
//! the first mutation, so no failure path leaves partial state behind.

use chrono::{DateTime, Utc};
use veilbatch_crypto::{CipherEngine, DecryptionOracle, DecryptionProof, state_fingerprint};
use veilbatch_ledger::{
    AccessControl, BatchLedger, OpClass, RateLimiter, canonical_vector,
};
use veilbatch_types::{
    ActorId, Batch, BatchId, Ciphertext, CiphertextHandle, DecryptionRequest, LedgerConfig,
    LedgerError, LedgerEvent, LedgerId, Order, OrderId, OrderSide, RequestId, Result,
};

use crate::event_log::EventLog;
use crate::request_tracker::RequestTracker;

/// The single-writer confidential ledger.
///
/// Generic over the encryption engine; the decryption oracle is passed
/// per call, keeping the message-passing boundary to that collaborator
/// explicit.
pub struct ConfidentialLedger<E: CipherEngine> {
    engine: E,
    ledger_id: LedgerId,
    access: AccessControl,
    limiter: RateLimiter,
    batches: BatchLedger,
    requests: RequestTracker,
    events: EventLog,
}

impl<E: CipherEngine> ConfidentialLedger<E> {
    #[must_use]
    pub fn new(engine: E, ledger_id: LedgerId, owner: ActorId, config: &LedgerConfig) -> Self {
        Self {
            engine,
            ledger_id,
            access: AccessControl::new(owner),
            limiter: RateLimiter::new(config.cooldown()),
            batches: BatchLedger::new(),
            requests: RequestTracker::new(),
            events: EventLog::new(),
        }
    }

    // =====================================================================
    // Administration
    // =====================================================================

    pub fn transfer_ownership(&mut self, caller: ActorId, new_owner: ActorId) -> Result<()> {
        let previous = self.access.transfer_ownership(caller, new_owner)?;
        self.events.record(LedgerEvent::OwnershipTransferred { previous, new_owner });
        Ok(())
    }

    /// Grant the provider role. Re-adding an existing provider succeeds
    /// without a duplicate notification.
    pub fn add_provider(&mut self, caller: ActorId, actor: ActorId) -> Result<()> {
        if self.access.add_provider(caller, actor)? {
            self.events.record(LedgerEvent::ProviderAdded { actor });
        }
        Ok(())
    }

    /// Revoke the provider role. Re-removing a non-provider succeeds
    /// without a duplicate notification.
    pub fn remove_provider(&mut self, caller: ActorId, actor: ActorId) -> Result<()> {
        if self.access.remove_provider(caller, actor)? {
            self.events.record(LedgerEvent::ProviderRemoved { actor });
        }
        Ok(())
    }

    pub fn pause(&mut self, caller: ActorId) -> Result<()> {
        self.access.pause(caller)?;
        self.events.record(LedgerEvent::Paused);
        Ok(())
    }

    pub fn unpause(&mut self, caller: ActorId) -> Result<()> {
        if self.access.unpause(caller)? {
            self.events.record(LedgerEvent::Unpaused);
        }
        Ok(())
    }

    /// Change the cooldown for both operation classes. Applies to future
    /// checks only — timestamps already recorded keep their meaning.
    pub fn set_cooldown(&mut self, caller: ActorId, cooldown_secs: u64) -> Result<()> {
        self.access.ensure_owner(caller)?;
        self.limiter
            .set_cooldown(chrono::Duration::seconds(i64::try_from(cooldown_secs).unwrap_or(i64::MAX)));
        self.events.record(LedgerEvent::CooldownChanged { cooldown_secs });
        Ok(())
    }

    // =====================================================================
    // Batch lifecycle
    // =====================================================================

    /// Open a new batch and make it the submission target. The previous
    /// batch need not be closed; it simply stops being current.
    pub fn open_batch(&mut self, caller: ActorId, now: DateTime<Utc>) -> Result<BatchId> {
        self.access.ensure_owner(caller)?;
        self.access.ensure_active()?;
        let batch_id = self.batches.open_batch(now);
        self.events.record(LedgerEvent::BatchOpened { batch_id });
        Ok(batch_id)
    }

    /// Close the current batch (terminal).
    pub fn close_batch(&mut self, caller: ActorId) -> Result<BatchId> {
        self.access.ensure_owner(caller)?;
        self.access.ensure_active()?;
        let batch_id = self.batches.close_batch()?;
        self.events.record(LedgerEvent::BatchClosed { batch_id });
        Ok(batch_id)
    }

    /// Submit a confidential order into the current open batch.
    ///
    /// Provider-only. The rate-limit timestamp is recorded only after
    /// every other guard has passed, so a rejected submission never
    /// consumes the caller's cooldown window.
    pub fn submit_order(
        &mut self,
        caller: ActorId,
        now: DateTime<Utc>,
        asset_id: Ciphertext,
        price: Ciphertext,
        amount: Ciphertext,
        side: OrderSide,
    ) -> Result<OrderId> {
        self.access.ensure_provider(caller)?;
        self.access.ensure_active()?;
        self.limiter.check(caller, OpClass::Submission, now)?;

        let (order_id, batch_id) = self
            .batches
            .append_order(caller, side, asset_id, price, amount, now)?;
        self.limiter.record(caller, OpClass::Submission, now);

        self.events.record(LedgerEvent::OrderSubmitted {
            order_id,
            batch_id,
            side,
            submitter: caller,
        });
        Ok(order_id)
    }

    // =====================================================================
    // Decryption protocol
    // =====================================================================

    /// Issue a decryption request for a closed batch.
    ///
    /// Computes the canonical ciphertext vector over present ledger state,
    /// fingerprints it together with the ledger identity, and registers
    /// the oracle-allocated request id as pending. A second request for
    /// the same batch produces an independent new request.
    pub fn request_batch_decryption(
        &mut self,
        caller: ActorId,
        now: DateTime<Utc>,
        batch_id: BatchId,
        oracle: &mut impl DecryptionOracle,
    ) -> Result<RequestId> {
        self.access.ensure_owner(caller)?;
        self.access.ensure_active()?;
        self.limiter.check(caller, OpClass::DecryptionRequest, now)?;

        // Batch id 0 is never allocated, so the unknown-batch lookup also
        // covers the zero sentinel.
        match self.batches.batch(batch_id) {
            Some(batch) if batch.closed => {}
            _ => return Err(LedgerError::InvalidBatch(batch_id)),
        }

        let vector = canonical_vector(&self.engine, &self.batches);
        let fingerprint = state_fingerprint(self.ledger_id, &vector);
        let handles: Vec<CiphertextHandle> = vector.iter().map(Ciphertext::handle).collect();

        let request_id = oracle.request_decryption(&handles);
        self.requests
            .register(DecryptionRequest::pending(request_id, batch_id, fingerprint));
        self.limiter.record(caller, OpClass::DecryptionRequest, now);
        self.events.record(LedgerEvent::DecryptionRequested { request_id, batch_id });
        Ok(request_id)
    }

    /// Oracle callback: deliver a decryption result.
    ///
    /// Verification order: replay guard, state-fingerprint recomputation
    /// against *current* ledger state, proof verification, then the
    /// single terminal finalized transition. On a fingerprint mismatch the
    /// request stays pending forever — the protocol rejects rather than
    /// reconciles, and a fresh request must be issued against the
    /// then-current state.
    pub fn on_decryption_result(
        &mut self,
        request_id: RequestId,
        cleartexts: &[u64],
        proof: &DecryptionProof,
        oracle: &impl DecryptionOracle,
    ) -> Result<BatchId> {
        let (batch_id, expected) = {
            let request = self.requests.expect_pending(request_id)?;
            (request.batch_id, request.state_fingerprint)
        };

        let vector = canonical_vector(&self.engine, &self.batches);
        let actual = state_fingerprint(self.ledger_id, &vector);
        if actual != expected {
            return Err(LedgerError::StateMismatch { expected, actual });
        }

        if !oracle.verify_proof(request_id, cleartexts, proof) {
            return Err(LedgerError::InvalidProof(request_id));
        }

        self.requests.finalize(request_id)?;
        self.events.record(LedgerEvent::DecryptionCompleted { request_id, batch_id });
        Ok(batch_id)
    }

    // =====================================================================
    // Read surface
    // =====================================================================

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[must_use]
    pub fn ledger_id(&self) -> LedgerId {
        self.ledger_id
    }

    #[must_use]
    pub fn owner(&self) -> ActorId {
        self.access.owner()
    }

    #[must_use]
    pub fn is_provider(&self, actor: ActorId) -> bool {
        self.access.is_provider(actor)
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.access.is_paused()
    }

    #[must_use]
    pub fn cooldown(&self) -> chrono::Duration {
        self.limiter.cooldown()
    }

    #[must_use]
    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.batches.order(id)
    }

    #[must_use]
    pub fn batch(&self, id: BatchId) -> Option<&Batch> {
        self.batches.batch(id)
    }

    #[must_use]
    pub fn current_batch(&self) -> Option<&Batch> {
        self.batches.current_batch()
    }

    #[must_use]
    pub fn order_count(&self) -> usize {
        self.batches.order_count()
    }

    #[must_use]
    pub fn request(&self, id: RequestId) -> Option<&DecryptionRequest> {
        self.requests.get(id)
    }

    /// Requests still awaiting a callback. There is no timeout: a request
    /// the oracle never answers stays pending, and this count is the
    /// monitoring hook for that.
    #[must_use]
    pub fn pending_request_count(&self) -> usize {
        self.requests.pending_count()
    }

    #[must_use]
    pub fn events(&self) -> &[LedgerEvent] {
        self.events.events()
    }

    /// Hand accumulated notifications to an external consumer.
    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        self.events.drain()
    }
}

//! End-to-end integration tests for the full ledger lifecycle:
//! role administration → batch collection → closure → decryption request →
//! oracle callback → finalization.
//!
//! The oracle is driven by hand: requests queue inside the mock, the test
//! decrypts the submitted handle vector with the mock engine and signs the
//! result, then feeds it back through the callback entry point.

use chrono::{DateTime, TimeZone, Utc};
use veilbatch_crypto::{CipherEngine, DecryptionProof, MockCipherEngine, MockOracle, PendingDecryption};
use veilbatch_protocol::ConfidentialLedger;
use veilbatch_types::*;

const OWNER: ActorId = ActorId([1u8; 32]);
const ALICE: ActorId = ActorId([2u8; 32]);
const BOB: ActorId = ActorId([3u8; 32]);

const COOLDOWN_SECS: u64 = 30;

/// Helper: ledger plus a hand-driven oracle.
struct Harness {
    ledger: ConfidentialLedger<MockCipherEngine>,
    oracle: MockOracle,
    queued: Vec<PendingDecryption>,
}

impl Harness {
    fn new() -> Self {
        let mut ledger = ConfidentialLedger::new(
            MockCipherEngine::new(),
            LedgerId::of(7),
            OWNER,
            &LedgerConfig {
                cooldown_secs: COOLDOWN_SECS,
            },
        );
        ledger.add_provider(OWNER, ALICE).unwrap();
        ledger.add_provider(OWNER, BOB).unwrap();
        Self {
            ledger,
            oracle: MockOracle::new(),
            queued: Vec::new(),
        }
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn submit(&mut self, provider: ActorId, secs: i64, price: u64, side: OrderSide) -> OrderId {
        let asset = self.ledger.engine().encode(1);
        let price = self.ledger.engine().encode(price);
        let amount = self.ledger.engine().encode(10);
        self.ledger
            .submit_order(provider, Self::at(secs), asset, price, amount, side)
            .expect("submission should succeed")
    }

    fn request(&mut self, secs: i64, batch_id: BatchId) -> RequestId {
        self.ledger
            .request_batch_decryption(OWNER, Self::at(secs), batch_id, &mut self.oracle)
            .expect("decryption request should succeed")
    }

    /// Decrypt the queued handle vector for `request_id` and sign the
    /// result the way the real oracle would.
    fn answer(&mut self, request_id: RequestId) -> (Vec<u64>, DecryptionProof) {
        self.queued.extend(self.oracle.take_pending());
        let entry = self
            .queued
            .iter()
            .find(|p| p.request_id == request_id)
            .expect("request was never submitted to the oracle")
            .clone();
        let cleartexts = self.ledger.engine().decrypt_handles(&entry.handles);
        let proof = self.oracle.sign_result(request_id, &cleartexts);
        (cleartexts, proof)
    }

    fn deliver(&mut self, request_id: RequestId) -> Result<BatchId> {
        let (cleartexts, proof) = self.answer(request_id);
        self.ledger
            .on_decryption_result(request_id, &cleartexts, &proof, &self.oracle)
    }
}

// =============================================================================
// Test: full reveal cycle for one batch
// =============================================================================
#[test]
fn e2e_single_batch_reveal() {
    let mut h = Harness::new();

    let batch_id = h.ledger.open_batch(OWNER, Harness::at(100)).unwrap();
    h.submit(ALICE, 100, 100, OrderSide::Bid);
    h.submit(BOB, 100, 90, OrderSide::Ask);
    h.ledger.close_batch(OWNER).unwrap();

    let request_id = h.request(100, batch_id);
    assert_eq!(h.ledger.pending_request_count(), 1);

    // The oracle saw exactly [bid_total, ask_total].
    let (cleartexts, proof) = h.answer(request_id);
    assert_eq!(cleartexts, vec![100, 90]);

    let delivered = h
        .ledger
        .on_decryption_result(request_id, &cleartexts, &proof, &h.oracle)
        .unwrap();
    assert_eq!(delivered, batch_id);
    assert!(h.ledger.request(request_id).unwrap().finalized);
    assert_eq!(h.ledger.pending_request_count(), 0);

    let events = h.ledger.events();
    assert!(events.contains(&LedgerEvent::DecryptionRequested { request_id, batch_id }));
    assert!(events.contains(&LedgerEvent::DecryptionCompleted { request_id, batch_id }));
}

// =============================================================================
// Test: a finalized request never accepts a second callback
// =============================================================================
#[test]
fn e2e_replay_rejected_after_finalize() {
    let mut h = Harness::new();

    let batch_id = h.ledger.open_batch(OWNER, Harness::at(100)).unwrap();
    h.submit(ALICE, 100, 100, OrderSide::Bid);
    h.ledger.close_batch(OWNER).unwrap();

    let request_id = h.request(100, batch_id);
    h.deliver(request_id).unwrap();

    // Even a perfectly valid result is rejected the second time.
    let err = h.deliver(request_id).unwrap_err();
    assert!(matches!(err, LedgerError::ReplayDetected(id) if id == request_id));
    assert!(h.ledger.request(request_id).unwrap().finalized);
}

// =============================================================================
// Test: a batch with no orders reveals zero totals
// =============================================================================
#[test]
fn e2e_empty_batch_reveals_zero_totals() {
    let mut h = Harness::new();

    let batch_id = h.ledger.open_batch(OWNER, Harness::at(100)).unwrap();
    h.ledger.close_batch(OWNER).unwrap();

    let request_id = h.request(100, batch_id);
    let (cleartexts, proof) = h.answer(request_id);
    assert_eq!(cleartexts, vec![0, 0]);

    h.ledger
        .on_decryption_result(request_id, &cleartexts, &proof, &h.oracle)
        .unwrap();
}

// =============================================================================
// Test: multiple independent requests for the same batch
// =============================================================================
#[test]
fn e2e_multiple_requests_per_batch_are_independent() {
    let mut h = Harness::new();

    let batch_id = h.ledger.open_batch(OWNER, Harness::at(100)).unwrap();
    h.submit(ALICE, 100, 50, OrderSide::Bid);
    h.ledger.close_batch(OWNER).unwrap();

    let first = h.request(100, batch_id);
    let second = h.request(100 + COOLDOWN_SECS as i64, batch_id);
    assert_ne!(first, second);
    assert_eq!(h.ledger.pending_request_count(), 2);

    // Finalizing one leaves the other deliverable: the ledger state both
    // requests were issued against is unchanged.
    h.deliver(second).unwrap();
    h.deliver(first).unwrap();
    assert_eq!(h.ledger.pending_request_count(), 0);
}

// =============================================================================
// Test: decryption requests are rate limited per owner
// =============================================================================
#[test]
fn e2e_decryption_requests_rate_limited() {
    let mut h = Harness::new();

    let batch_id = h.ledger.open_batch(OWNER, Harness::at(100)).unwrap();
    h.ledger.close_batch(OWNER).unwrap();

    h.request(100, batch_id);
    let err = h
        .ledger
        .request_batch_decryption(OWNER, Harness::at(110), batch_id, &mut h.oracle)
        .unwrap_err();
    assert!(matches!(err, LedgerError::CooldownActive { .. }));

    // The window elapsing restores the capability.
    h.request(100 + COOLDOWN_SECS as i64, batch_id);
}

// =============================================================================
// Test: only closed batches can be decrypted
// =============================================================================
#[test]
fn e2e_request_requires_closed_batch() {
    let mut h = Harness::new();

    let open_batch = h.ledger.open_batch(OWNER, Harness::at(100)).unwrap();
    let err = h
        .ledger
        .request_batch_decryption(OWNER, Harness::at(100), open_batch, &mut h.oracle)
        .unwrap_err();
    assert!(matches!(err, LedgerError::InvalidBatch(id) if id == open_batch));

    // The zero sentinel and unknown ids are equally invalid.
    for bogus in [BatchId(0), BatchId(99)] {
        let err = h
            .ledger
            .request_batch_decryption(OWNER, Harness::at(100), bogus, &mut h.oracle)
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidBatch(id) if id == bogus));
    }
    assert_eq!(h.ledger.pending_request_count(), 0);
}

// =============================================================================
// Test: submissions require an open current batch, and never half-apply
// =============================================================================
#[test]
fn e2e_submission_requires_open_batch() {
    let mut h = Harness::new();
    let asset = h.ledger.engine().encode(1);
    let price = h.ledger.engine().encode(50);
    let amount = h.ledger.engine().encode(10);

    let err = h
        .ledger
        .submit_order(ALICE, Harness::at(100), asset, price, amount, OrderSide::Bid)
        .unwrap_err();
    assert!(matches!(err, LedgerError::NoActiveBatch));
    assert_eq!(h.ledger.order_count(), 0);

    h.ledger.open_batch(OWNER, Harness::at(100)).unwrap();
    h.ledger.close_batch(OWNER).unwrap();
    let err = h
        .ledger
        .submit_order(ALICE, Harness::at(100), asset, price, amount, OrderSide::Bid)
        .unwrap_err();
    assert!(matches!(err, LedgerError::NoActiveBatch));
    assert_eq!(h.ledger.order_count(), 0);
}

// =============================================================================
// Test: accepted orders are retrievable with fields unchanged
// =============================================================================
#[test]
fn e2e_orders_retrievable_unchanged() {
    let mut h = Harness::new();
    let batch_id = h.ledger.open_batch(OWNER, Harness::at(100)).unwrap();

    let asset = h.ledger.engine().encode(42);
    let price = h.ledger.engine().encode(123);
    let amount = h.ledger.engine().encode(5);
    let order_id = h
        .ledger
        .submit_order(ALICE, Harness::at(100), asset, price, amount, OrderSide::Ask)
        .unwrap();

    assert_eq!(h.ledger.order_count(), 1);
    let order = h.ledger.order(order_id).unwrap();
    assert_eq!(order.id, order_id);
    assert_eq!(order.batch_id, batch_id);
    assert_eq!(order.submitter, ALICE);
    assert_eq!(order.side, OrderSide::Ask);
    assert_eq!(order.asset_id, asset);
    assert_eq!(order.price, price);
    assert_eq!(order.amount, amount);
}

// =============================================================================
// Test: totals accumulate across batches, not per batch
// =============================================================================
#[test]
fn e2e_totals_span_the_whole_order_table() {
    let mut h = Harness::new();

    let first = h.ledger.open_batch(OWNER, Harness::at(100)).unwrap();
    h.submit(ALICE, 100, 10, OrderSide::Bid);
    h.ledger.close_batch(OWNER).unwrap();

    h.ledger.open_batch(OWNER, Harness::at(200)).unwrap();
    h.submit(BOB, 200, 20, OrderSide::Bid);
    h.ledger.close_batch(OWNER).unwrap();

    // Decrypting the first batch still reveals the running sums over every
    // order on the ledger.
    let request_id = h.request(200, first);
    let (cleartexts, _) = h.answer(request_id);
    assert_eq!(cleartexts, vec![30, 0]);
}

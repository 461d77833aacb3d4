//! Confidential aggregation over the order table.
//!
//! Produces the homomorphic running sums of the bid-side and ask-side
//! price fields across *every* order with a live price, independent of
//! batch closure, iterating in ascending order-id order. This procedure is
//! pure with respect to ledger state and must run identically when a
//! decryption request is created and when its callback is verified — that
//! determinism is the linchpin of the anti-replay protocol.

use veilbatch_crypto::CipherEngine;
use veilbatch_types::{Ciphertext, OrderSide, constants::CANONICAL_VECTOR_LEN};

use crate::batch_ledger::BatchLedger;

/// The two running sums.
#[derive(Debug, Clone, Copy)]
pub struct EncryptedTotals {
    pub bid: Ciphertext,
    pub ask: Ciphertext,
}

/// Fold the order table into per-side homomorphic totals.
///
/// Orders whose price handle is absent are skipped. A side with no
/// contributing orders yields the engine's canonical zero ciphertext.
pub fn compute_totals<E: CipherEngine>(engine: &E, ledger: &BatchLedger) -> EncryptedTotals {
    let mut bid: Option<Ciphertext> = None;
    let mut ask: Option<Ciphertext> = None;

    for order in ledger.orders() {
        if !engine.is_present(&order.price) {
            continue;
        }
        let side_total = match order.side {
            OrderSide::Bid => &mut bid,
            OrderSide::Ask => &mut ask,
        };
        *side_total = Some(match side_total.take() {
            None => order.price,
            Some(acc) => engine.add(&acc, &order.price),
        });
    }

    EncryptedTotals {
        bid: bid.unwrap_or_else(|| engine.zero()),
        ask: ask.unwrap_or_else(|| engine.zero()),
    }
}

/// The exact, order-stable payload submitted to and expected back from the
/// decryption oracle: `[bid_total, ask_total]`.
pub fn canonical_vector<E: CipherEngine>(
    engine: &E,
    ledger: &BatchLedger,
) -> [Ciphertext; CANONICAL_VECTOR_LEN] {
    let totals = compute_totals(engine, ledger);
    [totals.bid, totals.ask]
}

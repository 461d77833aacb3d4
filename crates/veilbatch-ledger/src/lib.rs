//! # veilbatch-ledger
//!
//! The private-state mutator of the confidential batch order ledger:
//!
//! 1. **AccessControl**: owner + provider role registry, pause flag
//! 2. **RateLimiter**: per-actor cooldown gate for two independent
//!    operation classes
//! 3. **BatchLedger**: batch lifecycle and the append-only order table
//! 4. **ConfidentialAggregator**: deterministic homomorphic running sums
//!    over the order table and the canonical ciphertext vector
//!
//! ## Order Flow
//!
//! ```text
//! caller → AccessControl.ensure_provider() → RateLimiter.check()
//!        → BatchLedger.append_order() → RateLimiter.record()
//! ```
//!
//! Every component here is a single-owner data structure mutated only by
//! the operations of the protocol facade; the facade supplies the total
//! ordering the consistency protocol relies on.

pub mod access_control;
pub mod aggregator;
pub mod batch_ledger;
pub mod rate_limiter;

pub use access_control::AccessControl;
pub use aggregator::{EncryptedTotals, canonical_vector, compute_totals};
pub use batch_ledger::BatchLedger;
pub use rate_limiter::{OpClass, RateLimiter};

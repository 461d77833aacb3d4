//! # veilbatch-protocol
//!
//! The decryption request/callback state machine and the
//! [`ConfidentialLedger`] facade that wires every component into one
//! single-writer state object.
//!
//! ## Architecture
//!
//! ```text
//! provider ──submit_order──────────────▶ ConfidentialLedger ──┐
//! owner ────open/close/request─────────▶        │             │ events
//! oracle ───on_decryption_result───────▶        │             ▼
//!                                        AccessControl      EventLog
//!                                        RateLimiter
//!                                        BatchLedger
//!                                        RequestTracker
//! ```
//!
//! The only asynchrony in the system is the gap between
//! `request_batch_decryption` returning and `on_decryption_result` being
//! invoked later by the oracle. Arbitrary submissions and batch operations
//! may land in that gap; the stored state fingerprint is what polices
//! them: a callback whose recomputed fingerprint differs from the stored
//! one is rejected, and the request stays pending forever.

pub mod event_log;
pub mod ledger;
pub mod request_tracker;

pub use event_log::EventLog;
pub use ledger::ConfidentialLedger;
pub use request_tracker::RequestTracker;

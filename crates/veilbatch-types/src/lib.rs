//! # veilbatch-types
//!
//! Shared types, errors, and configuration for the **veilbatch**
//! confidential batch order ledger.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`OrderId`], [`BatchId`], [`RequestId`], [`ActorId`], [`LedgerId`]
//! - **Ciphertext handles**: [`Ciphertext`], [`CiphertextHandle`]
//! - **Order model**: [`Order`], [`OrderSide`]
//! - **Batch model**: [`Batch`]
//! - **Decryption protocol model**: [`DecryptionRequest`], [`StateFingerprint`]
//! - **Notifications**: [`LedgerEvent`]
//! - **Configuration**: [`LedgerConfig`]
//! - **Errors**: [`LedgerError`] with `VB_ERR_` prefix codes
//! - **Constants**: system-wide limits and defaults

pub mod batch;
pub mod ciphertext;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ids;
pub mod order;
pub mod request;

// Re-export all primary types at crate root for ergonomic imports:
//   use veilbatch_types::{Order, OrderSide, Batch, DecryptionRequest, ...};

pub use batch::*;
pub use ciphertext::*;
pub use config::*;
pub use error::*;
pub use event::*;
pub use ids::*;
pub use order::*;
pub use request::*;

// Constants are accessed via `veilbatch_types::constants::FOO`
// (not re-exported to avoid name collisions).

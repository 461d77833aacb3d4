//! Per-actor cooldown gate.
//!
//! Two independent operation classes so exhausting one never blocks the
//! other: an actor who just submitted an order can still request a
//! decryption, and vice versa. Check and record are split so the facade
//! can run every other guard between them — a rejected operation never
//! consumes the actor's cooldown window.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Duration, Utc};
use veilbatch_types::{ActorId, LedgerError, Result};

/// Operation class with its own per-actor timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpClass {
    Submission,
    DecryptionRequest,
}

impl fmt::Display for OpClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Submission => write!(f, "SUBMISSION"),
            Self::DecryptionRequest => write!(f, "DECRYPTION_REQUEST"),
        }
    }
}

/// Cooldown gate over `(actor, class)` pairs.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    cooldown: Duration,
    last_action: HashMap<(ActorId, OpClass), DateTime<Utc>>,
}

impl RateLimiter {
    #[must_use]
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_action: HashMap::new(),
        }
    }

    #[must_use]
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Change the cooldown. Applies to future checks only — recorded
    /// timestamps are untouched.
    pub fn set_cooldown(&mut self, cooldown: Duration) {
        self.cooldown = cooldown;
    }

    /// Fail while the actor's window for this class is still open. The
    /// exact boundary (`now == last + cooldown`) passes.
    pub fn check(&self, actor: ActorId, class: OpClass, now: DateTime<Utc>) -> Result<()> {
        if let Some(last) = self.last_action.get(&(actor, class)) {
            let ready_at = *last + self.cooldown;
            if now < ready_at {
                return Err(LedgerError::CooldownActive {
                    retry_after_secs: (ready_at - now).num_seconds(),
                });
            }
        }
        Ok(())
    }

    /// Stamp the actor's last-action time for this class.
    pub fn record(&mut self, actor: ActorId, class: OpClass, now: DateTime<Utc>) {
        self.last_action.insert((actor, class), now);
    }

    /// Check then record in one step.
    pub fn check_and_record(
        &mut self,
        actor: ActorId,
        class: OpClass,
        now: DateTime<Utc>,
    ) -> Result<()> {
        self.check(actor, class, now)?;
        self.record(actor, class, now);
        Ok(())
    }
}

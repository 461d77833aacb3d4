//! Role registry and pause flag.
//!
//! One distinguished owner (reassignable) holds administrative capability;
//! a set of providers holds submission capability. Guards fail closed:
//! any caller outside the required role is rejected before state is read.

use std::collections::BTreeSet;

use veilbatch_types::{ActorId, LedgerError, Result};

/// Owner + provider registry with a pause flag.
#[derive(Debug, Clone)]
pub struct AccessControl {
    owner: ActorId,
    providers: BTreeSet<ActorId>,
    paused: bool,
}

impl AccessControl {
    #[must_use]
    pub fn new(owner: ActorId) -> Self {
        Self {
            owner,
            providers: BTreeSet::new(),
            paused: false,
        }
    }

    #[must_use]
    pub fn owner(&self) -> ActorId {
        self.owner
    }

    #[must_use]
    pub fn is_provider(&self, actor: ActorId) -> bool {
        self.providers.contains(&actor)
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Reject callers other than the owner.
    pub fn ensure_owner(&self, caller: ActorId) -> Result<()> {
        if caller == self.owner {
            Ok(())
        } else {
            Err(LedgerError::Unauthorized(caller))
        }
    }

    /// Reject callers without the provider role. The owner has no implicit
    /// provider capability.
    pub fn ensure_provider(&self, caller: ActorId) -> Result<()> {
        if self.providers.contains(&caller) {
            Ok(())
        } else {
            Err(LedgerError::Unauthorized(caller))
        }
    }

    /// Reject every mutating operation while paused.
    pub fn ensure_active(&self) -> Result<()> {
        if self.paused {
            Err(LedgerError::SystemPaused)
        } else {
            Ok(())
        }
    }

    /// Reassign ownership. Returns the previous owner.
    pub fn transfer_ownership(&mut self, caller: ActorId, new_owner: ActorId) -> Result<ActorId> {
        self.ensure_owner(caller)?;
        let previous = self.owner;
        self.owner = new_owner;
        Ok(previous)
    }

    /// Grant the provider role. Idempotent: returns `true` only when the
    /// registry actually changed, so callers can suppress duplicate
    /// notifications.
    pub fn add_provider(&mut self, caller: ActorId, actor: ActorId) -> Result<bool> {
        self.ensure_owner(caller)?;
        Ok(self.providers.insert(actor))
    }

    /// Revoke the provider role. Idempotent, same change-flag contract as
    /// [`Self::add_provider`].
    pub fn remove_provider(&mut self, caller: ActorId, actor: ActorId) -> Result<bool> {
        self.ensure_owner(caller)?;
        Ok(self.providers.remove(&actor))
    }

    /// Pause the ledger. Pausing twice is rejected.
    pub fn pause(&mut self, caller: ActorId) -> Result<()> {
        self.ensure_owner(caller)?;
        if self.paused {
            return Err(LedgerError::AlreadyPaused);
        }
        self.paused = true;
        Ok(())
    }

    /// Unpause the ledger. Unconditional and idempotent: returns `true`
    /// only when the flag actually flipped.
    pub fn unpause(&mut self, caller: ActorId) -> Result<bool> {
        self.ensure_owner(caller)?;
        let changed = self.paused;
        self.paused = false;
        Ok(changed)
    }
}

//! Exactly-once finalization guard for decryption requests.
//!
//! Each request can be finalized at most once. A second callback for the
//! same request id returns [`LedgerError::ReplayDetected`] regardless of
//! proof validity. Requests are never evicted: a pending request with no
//! callback stays pending forever, and finalized requests are retained so
//! replays remain detectable.

use std::collections::BTreeMap;

use veilbatch_types::{BatchId, DecryptionRequest, LedgerError, RequestId, Result};

/// Request table with unknown-id and replay guards.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    requests: BTreeMap<RequestId, DecryptionRequest>,
}

impl RequestTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly issued pending request. Request ids are
    /// oracle-allocated and unique, so this never overwrites.
    pub fn register(&mut self, request: DecryptionRequest) {
        self.requests.insert(request.id, request);
    }

    #[must_use]
    pub fn get(&self, id: RequestId) -> Option<&DecryptionRequest> {
        self.requests.get(&id)
    }

    /// Look up a request that is still awaiting its callback.
    ///
    /// # Errors
    /// - `UnknownRequest` if no request with this id exists
    /// - `ReplayDetected` if the request was already finalized
    pub fn expect_pending(&self, id: RequestId) -> Result<&DecryptionRequest> {
        let request = self.requests.get(&id).ok_or(LedgerError::UnknownRequest(id))?;
        if request.finalized {
            return Err(LedgerError::ReplayDetected(id));
        }
        Ok(request)
    }

    /// Flip the request to finalized (terminal). Returns its batch id.
    ///
    /// # Errors
    /// Same guards as [`Self::expect_pending`].
    pub fn finalize(&mut self, id: RequestId) -> Result<BatchId> {
        let request = self.requests.get_mut(&id).ok_or(LedgerError::UnknownRequest(id))?;
        if request.finalized {
            return Err(LedgerError::ReplayDetected(id));
        }
        request.finalized = true;
        Ok(request.batch_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Requests still awaiting a callback.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.requests.values().filter(|r| !r.finalized).count()
    }
}

#[cfg(test)]
mod tests {
    use veilbatch_types::StateFingerprint;

    use super::*;

    fn pending(batch: u64) -> DecryptionRequest {
        DecryptionRequest::pending(RequestId::new(), BatchId(batch), StateFingerprint([1u8; 32]))
    }

    #[test]
    fn register_and_finalize_once() {
        let mut tracker = RequestTracker::new();
        let request = pending(1);
        let id = request.id;
        tracker.register(request);

        assert_eq!(tracker.pending_count(), 1);
        assert!(tracker.expect_pending(id).is_ok());
        assert_eq!(tracker.finalize(id).unwrap(), BatchId(1));
        assert_eq!(tracker.pending_count(), 0);
        assert!(tracker.get(id).unwrap().finalized);
    }

    #[test]
    fn second_finalize_is_replay() {
        let mut tracker = RequestTracker::new();
        let request = pending(1);
        let id = request.id;
        tracker.register(request);
        tracker.finalize(id).unwrap();

        let err = tracker.finalize(id).unwrap_err();
        assert!(matches!(err, LedgerError::ReplayDetected(r) if r == id));
        let err = tracker.expect_pending(id).unwrap_err();
        assert!(matches!(err, LedgerError::ReplayDetected(r) if r == id));
    }

    #[test]
    fn unknown_request_rejected() {
        let mut tracker = RequestTracker::new();
        let id = RequestId::new();
        assert!(matches!(
            tracker.expect_pending(id),
            Err(LedgerError::UnknownRequest(r)) if r == id
        ));
        assert!(matches!(
            tracker.finalize(id),
            Err(LedgerError::UnknownRequest(r)) if r == id
        ));
    }

    #[test]
    fn requests_are_independent() {
        let mut tracker = RequestTracker::new();
        let first = pending(1);
        let second = pending(1);
        let (a, b) = (first.id, second.id);
        tracker.register(first);
        tracker.register(second);

        tracker.finalize(a).unwrap();
        // Finalizing one request for a batch leaves others pending.
        assert!(tracker.expect_pending(b).is_ok());
        assert_eq!(tracker.len(), 2);
        assert_eq!(tracker.pending_count(), 1);
    }
}

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Admits one bid submission at a time.
///
/// A form must not be submitted again while a previous submission is still
/// being delivered. Rather than queueing, a second attempt is refused and the
/// bidder is told to wait. Clones share the same gate.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGate {
    busy: Arc<AtomicBool>,
}

impl SubmissionGate {
    /// Try to start a submission. Returns None if one is already in flight.
    ///
    /// The gate reopens when the returned pass is dropped.
    pub fn try_enter(&self) -> Option<GatePass> {
        self.busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| GatePass {
                busy: self.busy.clone(),
            })
    }

    /// Whether a submission is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Proof that the holder is the only submission in flight.
#[derive(Debug)]
#[must_use = "the gate reopens as soon as the pass is dropped"]
pub struct GatePass {
    busy: Arc<AtomicBool>,
}

impl Drop for GatePass {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

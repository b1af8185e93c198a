//! Fire-and-forget deferred effects gated on the run generation
//!
//! Every run start or return to the menu bumps the generation. Effects carry
//! the generation they were scheduled under and are dropped, not applied, if
//! it no longer matches when they come due.

use serde::{Deserialize, Serialize};

/// Identifies one run (or menu visit) of a `GameCore`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RunGeneration(pub u64);

impl RunGeneration {
    pub fn next(self) -> Self {
        RunGeneration(self.0.wrapping_add(1))
    }
}

#[derive(Debug, Clone)]
struct Deferred<T> {
    due_ms: f64,
    generation: RunGeneration,
    payload: T,
}

/// Pending effects ordered by due time
#[derive(Debug, Clone)]
pub struct DeferredQueue<T> {
    pending: Vec<Deferred<T>>,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<T> DeferredQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: f64, generation: RunGeneration, payload: T) {
        // Keep sorted by due time; ties stay in scheduling order
        let idx = self.pending.partition_point(|d| d.due_ms <= due_ms);
        self.pending.insert(
            idx,
            Deferred {
                due_ms,
                generation,
                payload,
            },
        );
    }

    /// Remove everything due at `now_ms`; return the payloads that still
    /// belong to `current`. Stale ones are discarded.
    pub fn take_due(&mut self, now_ms: f64, current: RunGeneration) -> Vec<T> {
        let split = self.pending.partition_point(|d| d.due_ms <= now_ms);
        self.pending
            .drain(..split)
            .filter(|d| d.generation == current)
            .map(|d| d.payload)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

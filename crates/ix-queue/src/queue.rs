//! `EventQueue`: the pending-event list of one simulation run.
//!
//! # Ordering
//!
//! Events are stored in a `BTreeMap` keyed by
//!
//! ```text
//! (timestamp, kind, insertion sequence)
//! ```
//!
//! The first two components are exactly [`Event::order_key`]; the sequence
//! number is a per-queue counter, so events with an identical
//! `(timestamp, kind)` come out in the order they went in.  Iterating the
//! map is therefore iterating the canonical order, and the sorted invariant
//! holds by construction after every operation.
//!
//! # Cost
//!
//! `insert` and `pop_next` are O(log n).  Bulk deletion is a single O(n)
//! `retain` pass: the map filters itself without the caller ever holding an
//! iterator over a collection it is also removing from.
//!
//! # Threading
//!
//! The queue is `Send` but has no internal locking.  A multi-threaded host
//! must wrap it in one `Mutex` and hold the lock for each whole operation.

use std::collections::BTreeMap;
use std::fmt;

use ix_core::{Event, EventError, EventKind, EventResult, LanePair, SimTime};
use tracing::{debug, trace};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
struct QueueKey {
    time: SimTime,
    kind: EventKind,
    seq:  u64,
}

/// A priority queue of pending events in canonical order.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    inner:    BTreeMap<QueueKey, Event>,
    /// Next insertion sequence number.
    next_seq: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `event` at its canonical position, after any queued events
    /// with the same timestamp and kind.
    pub fn insert(&mut self, event: Event) {
        let (time, kind) = event.order_key();
        let key = QueueKey { time, kind, seq: self.next_seq };
        self.next_seq += 1;
        trace!(%event, "insert");
        self.inner.insert(key, event);
    }

    /// Insert every event from `events`, in iteration order.
    pub fn extend<I: IntoIterator<Item = Event>>(&mut self, events: I) {
        for event in events {
            self.insert(event);
        }
    }

    /// Remove and return the earliest event.
    ///
    /// Fails with [`EventError::EmptyQueue`] when nothing is pending.
    pub fn pop_next(&mut self) -> EventResult<Event> {
        let (_, event) = self.inner.pop_first().ok_or(EventError::EmptyQueue)?;
        trace!(%event, "pop");
        Ok(event)
    }

    /// The earliest event without removing it.
    pub fn peek(&self) -> Option<&Event> {
        self.inner.values().next()
    }

    /// Copies of the first `n` events (fewer if the queue is shorter).
    pub fn peek_first_n(&self, n: usize) -> Vec<Event> {
        self.inner.values().take(n).copied().collect()
    }

    /// All pending events in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Event> + '_ {
        self.inner.values()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Drop every pending event.
    pub fn clear(&mut self) {
        debug!(dropped = self.inner.len(), "clear");
        self.inner.clear();
        self.next_seq = 0;
    }

    /// Remove every event of `kind`, whatever its lane.  Returns how many
    /// were removed.
    ///
    /// Meant for lane-less kinds, typically stale `EndOfPhase` events when a
    /// phase changes early.  Survivors keep their relative order.
    pub fn remove_all_of_kind(&mut self, kind: EventKind) -> usize {
        let removed = self.remove_where(|e| e.kind() == kind);
        debug!(%kind, removed, "removed events by kind");
        removed
    }

    /// Remove every `kind` event whose lane is exactly `lane`.  Returns how
    /// many were removed.
    ///
    /// Only Arrival and Departure carry lanes; any other `kind` fails with
    /// [`EventError::InvalidArgument`] and leaves the queue untouched.
    pub fn remove_all_of_kind_in_lane(
        &mut self,
        kind: EventKind,
        lane: LanePair,
    ) -> EventResult<usize> {
        if !kind.has_lane() {
            return Err(EventError::InvalidArgument(format!(
                "{kind} events have no lane; use remove_all_of_kind"
            )));
        }
        let removed = self.remove_where(|e| e.kind() == kind && e.lane() == Some(lane));
        debug!(%kind, %lane, removed, "removed events by kind and lane");
        Ok(removed)
    }

    fn remove_where<F: Fn(&Event) -> bool>(&mut self, doomed: F) -> usize {
        let before = self.inner.len();
        self.inner.retain(|_, e| !doomed(e));
        before - self.inner.len()
    }
}

/// One event per line, earliest first.
impl fmt::Display for EventQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in self.iter() {
            writeln!(f, "{event}")?;
        }
        Ok(())
    }
}

//! The event entity and its canonical ordering.
//!
//! # Ordering
//!
//! Events are ordered by `(timestamp, kind priority)`:
//!
//! ```text
//! earlier timestamp first;
//! on an exact tie: Arrival(1) < Departure(2) < EndOfPhase(3) < Termination(4)
//! ```
//!
//! [`Event::order_key`] is the only place this rule is written down.  The
//! queue derives its position key from it and appends an insertion sequence
//! number for stability, so there is no second comparator to drift.
//!
//! # Text form
//!
//! ```text
//! Arrival\t5.0\t[0, 1]
//! End of color phase\t5.0
//! ```
//!
//! Label, timestamp, and (for lane-bearing kinds) the lane pair, separated by
//! single tabs with no padding.  Older logs wrote a space before the first
//! tab (`"Arrival \t5.0"`), so they do not match this output byte for byte;
//! `FromStr` trims the label and reads both forms.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::{EventError, EventResult, LanePair, SimTime};

// ── EventKind ─────────────────────────────────────────────────────────────────

/// What happens at an event.  Declaration order is tie-break priority.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// A vehicle joins the queue of a lane pair.
    Arrival = 1,
    /// A vehicle leaves the intersection through a lane pair.
    Departure = 2,
    /// The current signal phase ends.
    EndOfPhase = 3,
    /// The run is over.
    Termination = 4,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::Arrival,
        EventKind::Departure,
        EventKind::EndOfPhase,
        EventKind::Termination,
    ];

    /// Tie-break priority, 1 (first) through 4 (last).
    #[inline]
    pub fn priority(self) -> u8 {
        self as u8
    }

    /// `true` for kinds that must carry a [`LanePair`].
    #[inline]
    pub fn has_lane(self) -> bool {
        matches!(self, EventKind::Arrival | EventKind::Departure)
    }

    /// Label used in the event text form.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Arrival     => "Arrival",
            EventKind::Departure   => "Departure",
            EventKind::EndOfPhase  => "End of color phase",
            EventKind::Termination => "Termination",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = EventError;
    fn from_str(s: &str) -> EventResult<Self> {
        let s = s.trim();
        EventKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| EventError::Parse(format!("unknown event kind {s:?}")))
    }
}

// ── Event ─────────────────────────────────────────────────────────────────────

/// An immutable timed occurrence.
///
/// Fields are private so the lane invariant (present exactly for
/// lane-bearing kinds) cannot be broken after construction.  Rescheduling
/// means removing an event from the queue and inserting a new one.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Event {
    kind: EventKind,
    time: SimTime,
    lane: Option<LanePair>,
}

impl Event {
    /// Validating constructor for loosely typed input.
    ///
    /// Fails with [`EventError::InvalidArgument`] if `time` is negative or
    /// not finite, if an Arrival/Departure has no lane, or if an
    /// EndOfPhase/Termination is given one.
    pub fn new(kind: EventKind, time: f64, lane: Option<LanePair>) -> EventResult<Self> {
        let time = SimTime::new(time)?;
        match (kind.has_lane(), lane) {
            (true, None) => Err(EventError::InvalidArgument(format!(
                "{kind} event must have a lane"
            ))),
            (false, Some(lane)) => Err(EventError::InvalidArgument(format!(
                "{kind} event cannot carry a lane (got {lane})"
            ))),
            _ => Ok(Self { kind, time, lane }),
        }
    }

    #[inline]
    pub fn arrival(time: SimTime, lane: LanePair) -> Self {
        Self { kind: EventKind::Arrival, time, lane: Some(lane) }
    }

    #[inline]
    pub fn departure(time: SimTime, lane: LanePair) -> Self {
        Self { kind: EventKind::Departure, time, lane: Some(lane) }
    }

    #[inline]
    pub fn end_of_phase(time: SimTime) -> Self {
        Self { kind: EventKind::EndOfPhase, time, lane: None }
    }

    #[inline]
    pub fn termination(time: SimTime) -> Self {
        Self { kind: EventKind::Termination, time, lane: None }
    }

    #[inline]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    #[inline]
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// The lane pair; always `Some` for Arrival/Departure, `None` otherwise.
    #[inline]
    pub fn lane(&self) -> Option<LanePair> {
        self.lane
    }

    /// The canonical ordering key: timestamp, then kind priority.
    #[inline]
    pub fn order_key(&self) -> (SimTime, EventKind) {
        (self.time, self.kind)
    }

    /// Compare two events under the canonical order.
    ///
    /// `Equal` means same timestamp and kind; the queue then falls back to
    /// insertion order.
    #[inline]
    pub fn canonical_cmp(&self, other: &Event) -> Ordering {
        self.order_key().cmp(&other.order_key())
    }

    /// `true` if `self` is processed strictly before `other`.
    #[inline]
    pub fn precedes(&self, other: &Event) -> bool {
        self.canonical_cmp(other) == Ordering::Less
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.kind, self.time)?;
        if let Some(lane) = self.lane {
            write!(f, "\t{lane}")?;
        }
        Ok(())
    }
}

impl FromStr for Event {
    type Err = EventError;

    fn from_str(s: &str) -> EventResult<Self> {
        let mut fields = s.trim_end_matches(['\r', '\n']).split('\t');
        let kind: EventKind = fields
            .next()
            .ok_or_else(|| EventError::Parse("empty event line".into()))?
            .parse()?;
        let time: SimTime = fields
            .next()
            .ok_or_else(|| EventError::Parse(format!("{kind} line has no timestamp")))?
            .parse()?;
        let lane = fields.next().map(parse_lane).transpose()?;
        if let Some(extra) = fields.next() {
            return Err(EventError::Parse(format!("unexpected trailing field {extra:?}")));
        }
        Event::new(kind, time.minutes(), lane)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_lane(s: &str) -> EventResult<LanePair> {
    let bad = || EventError::Parse(format!("invalid lane {s:?}: expected \"[from, to]\""));
    let inner = s
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(bad)?;
    let (from, to) = inner.split_once(',').ok_or_else(bad)?;
    let from = from.trim().parse::<u32>().map_err(|_| bad())?;
    let to = to.trim().parse::<u32>().map_err(|_| bad())?;
    Ok(LanePair::new(from, to))
}

//! Validated scheduling surface for dispatch-loop policy code.
//!
//! Policy code never builds an [`Event`] directly.  It describes what it
//! wants as a [`ScheduleRequest`] and hands it to
//! [`EventQueue::schedule`], which checks the kind/lane combination and
//! inserts.  Termination is not schedulable; only run initialisation
//! creates it.

use ix_core::{Event, EventError, EventKind, EventResult, LanePair, SimTime};

use crate::EventQueue;

/// A request to add one event to the queue.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ScheduleRequest {
    /// An Arrival or Departure in `lane`.
    Vehicle { kind: EventKind, time: f64, lane: LanePair },
    /// The end of the current signal phase.
    PhaseEnd { time: f64 },
}

impl ScheduleRequest {
    pub fn arrival(time: f64, lane: LanePair) -> Self {
        ScheduleRequest::Vehicle { kind: EventKind::Arrival, time, lane }
    }

    pub fn departure(time: f64, lane: LanePair) -> Self {
        ScheduleRequest::Vehicle { kind: EventKind::Departure, time, lane }
    }

    pub fn phase_end(time: f64) -> Self {
        ScheduleRequest::PhaseEnd { time }
    }

    /// Build a request from loose parts.
    ///
    /// Arrival/Departure need a lane, EndOfPhase must not have one, and
    /// Termination is always rejected.
    pub fn from_parts(kind: EventKind, time: f64, lane: Option<LanePair>) -> EventResult<Self> {
        match (kind, lane) {
            (EventKind::Arrival | EventKind::Departure, Some(lane)) => {
                Ok(ScheduleRequest::Vehicle { kind, time, lane })
            }
            (EventKind::EndOfPhase, None) => Ok(ScheduleRequest::PhaseEnd { time }),
            (EventKind::Arrival | EventKind::Departure, None) => Err(EventError::InvalidArgument(
                format!("only lane-bearing scheduling is valid for {kind} events"),
            )),
            (EventKind::EndOfPhase, Some(lane)) => Err(EventError::InvalidArgument(format!(
                "{kind} events cannot be scheduled with a lane (got {lane})"
            ))),
            (EventKind::Termination, _) => Err(EventError::InvalidArgument(
                "Termination events cannot be scheduled".into(),
            )),
        }
    }

    /// Validate and build the event.
    pub fn into_event(self) -> EventResult<Event> {
        match self {
            ScheduleRequest::Vehicle { kind: EventKind::Arrival, time, lane } => {
                Ok(Event::arrival(SimTime::new(time)?, lane))
            }
            ScheduleRequest::Vehicle { kind: EventKind::Departure, time, lane } => {
                Ok(Event::departure(SimTime::new(time)?, lane))
            }
            ScheduleRequest::Vehicle { kind, .. } => Err(EventError::InvalidArgument(format!(
                "lane-bearing scheduling is only valid for Arrival and Departure, not {kind}"
            ))),
            ScheduleRequest::PhaseEnd { time } => Ok(Event::end_of_phase(SimTime::new(time)?)),
        }
    }
}

impl EventQueue {
    /// Validate `request` and insert the resulting event.
    ///
    /// On error the queue is unchanged.
    pub fn schedule(&mut self, request: ScheduleRequest) -> EventResult<()> {
        let event = request.into_event()?;
        self.insert(event);
        Ok(())
    }

    /// [`schedule`][Self::schedule] from loose parts; see
    /// [`ScheduleRequest::from_parts`].
    pub fn schedule_kind(
        &mut self,
        kind: EventKind,
        time: f64,
        lane: Option<LanePair>,
    ) -> EventResult<()> {
        self.schedule(ScheduleRequest::from_parts(kind, time, lane)?)
    }
}

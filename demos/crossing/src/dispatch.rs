//! The pop–dispatch loop.
//!
//! Arrivals are counted into lane occupancy and Departures are recorded if
//! any were scheduled.  A Departure's wait is measured from the oldest
//! unmatched Arrival on the same approach lane.  Phase ends are only logged:
//! deciding light changes and departure pacing is traffic policy, which this
//! driver leaves out.

use std::collections::VecDeque;

use ix_core::{Event, EventKind, LanePair, SimTime};
use ix_intersection::{Intersection, IntersectionResult};
use ix_output::{TraceRow, TraceWriter};
use ix_queue::EventQueue;
use tracing::{debug, info, warn};

/// Per-kind counts for one run.
#[derive(Debug, Default)]
pub struct DispatchSummary {
    pub arrivals:      u64,
    pub departures:    u64,
    pub phase_ends:    u64,
    /// Events skipped because their lane is not in the intersection.
    pub skipped:       u64,
    pub terminated_at: Option<SimTime>,
}

/// Pop until Termination or an empty queue, updating `intersection` and
/// appending every popped event to `trace`.
pub fn run<T: TraceWriter>(
    queue:        &mut EventQueue,
    intersection: &mut Intersection,
    trace:        &mut Option<T>,
) -> anyhow::Result<DispatchSummary> {
    let mut summary = DispatchSummary::default();
    let mut pending = ArrivalLog::default();

    while let Ok(event) = queue.pop_next() {
        if let Some(writer) = trace.as_mut() {
            writer.write_row(&TraceRow::from(&event))?;
        }

        let now = event.time().minutes();
        match event.kind() {
            EventKind::Arrival => {
                if apply(&event, intersection, &mut summary, |ix, lane| {
                    ix.record_arrival(lane)?;
                    pending.push(lane, now);
                    Ok(())
                }) {
                    summary.arrivals += 1;
                }
            }
            EventKind::Departure => {
                if apply(&event, intersection, &mut summary, |ix, lane| {
                    let waited = pending.pop(lane).map_or(0.0, |at| now - at);
                    ix.record_departure(lane, waited)
                }) {
                    summary.departures += 1;
                }
            }
            EventKind::EndOfPhase => {
                summary.phase_ends += 1;
                debug!(
                    time = event.time().minutes(),
                    waiting = intersection.total_waiting(),
                    "end of phase"
                );
            }
            EventKind::Termination => {
                summary.terminated_at = Some(event.time());
                info!(time = event.time().minutes(), pending = queue.len(), "termination reached");
                break;
            }
        }
    }

    if let Some(writer) = trace.as_mut() {
        writer.finish()?;
    }
    Ok(summary)
}

/// Arrival times not yet matched by a Departure, oldest first, per approach
/// lane.
#[derive(Default)]
struct ArrivalLog(Vec<VecDeque<f64>>);

impl ArrivalLog {
    fn push(&mut self, lane: LanePair, at: f64) {
        let i = lane.from_index();
        if self.0.len() <= i {
            self.0.resize_with(i + 1, VecDeque::new);
        }
        self.0[i].push_back(at);
    }

    fn pop(&mut self, lane: LanePair) -> Option<f64> {
        self.0.get_mut(lane.from_index())?.pop_front()
    }
}

/// Apply a lane update; a lane outside the intersection is logged and
/// skipped.  Returns `true` if the update was applied.
fn apply<F>(
    event:        &Event,
    intersection: &mut Intersection,
    summary:      &mut DispatchSummary,
    update:       F,
) -> bool
where
    F: FnOnce(&mut Intersection, LanePair) -> IntersectionResult<()>,
{
    let Some(lane) = event.lane() else {
        return false;
    };
    match update(intersection, lane) {
        Ok(()) => true,
        Err(e) => {
            warn!(%event, error = %e, "skipping event");
            summary.skipped += 1;
            false
        }
    }
}

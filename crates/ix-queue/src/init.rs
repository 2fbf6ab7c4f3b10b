//! Run initialisation: seeding a queue from generated arrivals.
//!
//! ```text
//! arrivals  ─▶ insert all
//! EndOfPhase @ time of earliest queued event   (0.0 if none)
//! Termination @ horizon
//! ```
//!
//! An empty arrival set is legal: the first phase then ends at time zero and
//! the run consists of that phase end followed by termination.

use ix_arrivals::{
    ArrivalGenerator, ArrivalRecord, ArrivalResult, RateMatrix, arrivals_from_rates,
    arrivals_from_schedule,
};
use ix_core::{Event, SimRng, SimTime};
use tracing::info;

use crate::EventQueue;

/// Add the first EndOfPhase and the Termination event to `queue`.
///
/// Call once, after all initial arrivals are in.
pub fn initialize(queue: &mut EventQueue, horizon: SimTime) {
    let first_phase_end = queue.peek().map_or(SimTime::ZERO, Event::time);
    queue.insert(Event::end_of_phase(first_phase_end));
    queue.insert(Event::termination(horizon));
    info!(
        pending = queue.len(),
        first_phase_end = first_phase_end.minutes(),
        horizon = horizon.minutes(),
        "event queue initialised"
    );
}

impl EventQueue {
    /// A ready-to-run queue from already generated arrivals.
    pub fn from_arrivals(horizon: SimTime, arrivals: Vec<Event>) -> Self {
        let mut queue = EventQueue::new();
        queue.extend(arrivals);
        initialize(&mut queue, horizon);
        queue
    }

    /// A ready-to-run queue from an explicit `(time, from, to)` schedule.
    pub fn from_schedule(horizon: SimTime, records: &[ArrivalRecord]) -> ArrivalResult<Self> {
        Ok(Self::from_arrivals(horizon, arrivals_from_schedule(records)?))
    }

    /// A ready-to-run queue with Poisson arrivals drawn from `rng`.
    pub fn from_rates(horizon: SimTime, rates: &RateMatrix, rng: &mut SimRng) -> Self {
        Self::from_arrivals(horizon, arrivals_from_rates(horizon, rates, rng))
    }

    /// A ready-to-run queue from either generation mode.
    pub fn from_generator(
        horizon: SimTime,
        generator: &ArrivalGenerator,
        rng: &mut SimRng,
    ) -> ArrivalResult<Self> {
        Ok(Self::from_arrivals(horizon, generator.generate(horizon, rng)?))
    }
}

//! Arrival event generation.
//!
//! # Rate-based mode
//!
//! Each lane pair with rate `r > 0` (vehicles per hour) is an independent
//! Poisson process.  Starting from `t = 0`:
//!
//! ```text
//! u      ~ Uniform(0, 1)           open interval
//! gap    = -ln(1 - u) / (r / 60)   exponential, minutes
//! gap    = round(gap * 10) / 10    0.1-minute resolution
//! t     += gap
//! emit Arrival(t, lane)            only while t < horizon
//! ```
//!
//! A gap that rounds to zero is kept, so one lane can produce several arrivals
//! at the same timestamp; the queue orders those by insertion.  Rates are
//! capped at [`MAX_RATE_PER_HOUR`], which leaves every draw a real chance of
//! advancing the clock.
//!
//! Lane pairs are visited in row-major order and each draws from the same
//! `SimRng`, so the output depends only on the seed and the matrix.

use ix_core::{Event, SimRng, SimTime};
use tracing::{debug, info};

use crate::{ArrivalRecord, ArrivalResult, MAX_RATE_PER_HOUR, RateMatrix};

/// Interarrival gaps are rounded to this many minutes.
pub const GAP_RESOLUTION_MINUTES: f64 = 0.1;

/// Where a run's arrivals come from.
#[derive(Clone, Debug)]
pub enum ArrivalGenerator {
    /// Emit one Arrival per record, verbatim.
    Schedule(Vec<ArrivalRecord>),
    /// Sample exponential interarrival times per lane pair.
    Rates(RateMatrix),
}

impl ArrivalGenerator {
    /// Produce this run's Arrival events.
    ///
    /// `horizon` and `rng` are only consulted in rate mode; explicit
    /// schedules are emitted as given, even past the horizon.
    pub fn generate(&self, horizon: SimTime, rng: &mut SimRng) -> ArrivalResult<Vec<Event>> {
        match self {
            ArrivalGenerator::Schedule(records) => arrivals_from_schedule(records),
            ArrivalGenerator::Rates(rates) => Ok(arrivals_from_rates(horizon, rates, rng)),
        }
    }
}

/// One Arrival per `(time, from, to)` record, in record order.
pub fn arrivals_from_schedule(records: &[ArrivalRecord]) -> ArrivalResult<Vec<Event>> {
    let events = records
        .iter()
        .map(ArrivalRecord::to_event)
        .collect::<ArrivalResult<Vec<_>>>()?;
    info!(arrivals = events.len(), "loaded explicit arrival schedule");
    Ok(events)
}

/// Poisson arrivals for every positive-rate lane pair, strictly before
/// `horizon`.
///
/// Events are grouped by lane pair (row-major), each group non-decreasing in
/// time.  The queue establishes the global order.
pub fn arrivals_from_rates(horizon: SimTime, rates: &RateMatrix, rng: &mut SimRng) -> Vec<Event> {
    let horizon = horizon.minutes();
    let mut events = Vec::new();

    for (lane, rate) in rates.positive() {
        let before = events.len();
        let mut time = 0.0;
        loop {
            time += interarrival_minutes(rate, rng);
            if time >= horizon {
                break;
            }
            // `time` is a finite sum of non-negative gaps, so it is always valid.
            let Ok(at) = SimTime::new(time) else { break };
            events.push(Event::arrival(at, lane));
        }
        debug!(%lane, rate, arrivals = events.len() - before, "generated lane arrivals");
    }

    info!(arrivals = events.len(), horizon, "generated Poisson arrivals");
    events
}

/// Draw one exponential interarrival gap for `rate_per_hour`, in minutes,
/// rounded to the nearest [`GAP_RESOLUTION_MINUTES`].  May be `0.0`.
///
/// `rate_per_hour` must be in `(0, MAX_RATE_PER_HOUR]`.
pub fn interarrival_minutes(rate_per_hour: f64, rng: &mut SimRng) -> f64 {
    debug_assert!(rate_per_hour > 0.0 && rate_per_hour <= MAX_RATE_PER_HOUR);
    let u = rng.open01();
    let gap = -(1.0 - u).ln() / (rate_per_hour / 60.0);
    (gap * 10.0).round() / 10.0
}

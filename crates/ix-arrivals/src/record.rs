//! Explicit arrival schedule entries.

use ix_core::{Event, LanePair, SimTime};
use serde::Deserialize;

use crate::ArrivalResult;

/// One scheduled arrival: a vehicle enters lane pair `(from, to)` at `time`.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct ArrivalRecord {
    pub time: f64,
    pub from: u32,
    pub to:   u32,
}

impl ArrivalRecord {
    pub fn new(time: f64, from: u32, to: u32) -> Self {
        Self { time, from, to }
    }

    #[inline]
    pub fn lane(&self) -> LanePair {
        LanePair::new(self.from, self.to)
    }

    /// Build the Arrival event.  Fails if `time` is negative or not finite.
    pub fn to_event(&self) -> ArrivalResult<Event> {
        Ok(Event::arrival(SimTime::new(self.time)?, self.lane()))
    }
}

impl From<(f64, u32, u32)> for ArrivalRecord {
    fn from((time, from, to): (f64, u32, u32)) -> Self {
        Self { time, from, to }
    }
}

//! The lane and light tables of one intersection.

use ix_core::LanePair;
use tracing::trace;

use crate::{IntersectionError, IntersectionResult, Lane, LaneType, Light};

/// Lanes of each type in [`Intersection::standard`].
pub const LANES_PER_TYPE: u32 = 4;

/// All lanes and lights.  Lane `i` is addressed by `LanePair::from == i`.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Intersection {
    pub lanes:  Vec<Lane>,
    pub lights: Vec<Light>,
}

impl Intersection {
    /// Four-way layout: twelve lanes (four left, four center, four right),
    /// each with its own light, all starting red.
    pub fn standard() -> Self {
        let mut ix = Intersection::default();
        for lane_type in [LaneType::Left, LaneType::Center, LaneType::Right] {
            for _ in 0..LANES_PER_TYPE {
                ix.add_lane(lane_type);
            }
        }
        ix
    }

    /// Append a lane with a fresh red light; returns the lane id.
    pub fn add_lane(&mut self, lane_type: LaneType) -> u32 {
        let id = self.lanes.len() as u32;
        let light = self.lights.len() as u32;
        self.lights.push(Light::new(light));
        self.lanes.push(Lane::new(id, lane_type, light));
        id
    }

    pub fn lane(&self, pair: LanePair) -> IntersectionResult<&Lane> {
        self.lanes
            .get(pair.from_index())
            .ok_or(IntersectionError::UnknownLane(pair.from, self.lanes.len()))
    }

    pub fn lane_mut(&mut self, pair: LanePair) -> IntersectionResult<&mut Lane> {
        let count = self.lanes.len();
        self.lanes
            .get_mut(pair.from_index())
            .ok_or(IntersectionError::UnknownLane(pair.from, count))
    }

    /// The light controlling the approach lane of `pair`.
    pub fn light_for(&self, pair: LanePair) -> IntersectionResult<&Light> {
        let lane = self.lane(pair)?;
        self.lights
            .get(lane.light as usize)
            .ok_or(IntersectionError::UnknownLane(lane.id, self.lanes.len()))
    }

    /// A vehicle joins the approach lane of `pair`.
    pub fn record_arrival(&mut self, pair: LanePair) -> IntersectionResult<()> {
        let lane = self.lane_mut(pair)?;
        lane.cars_waiting += 1;
        trace!(lane = lane.id, waiting = lane.cars_waiting, "arrival recorded");
        Ok(())
    }

    /// A vehicle leaves the approach lane of `pair` after waiting
    /// `waited_minutes`.
    pub fn record_departure(&mut self, pair: LanePair, waited_minutes: f64) -> IntersectionResult<()> {
        let lane = self.lane_mut(pair)?;
        lane.cars_waiting = lane.cars_waiting.saturating_sub(1);
        lane.cars_departed += 1;
        lane.waiting_time += waited_minutes;
        trace!(lane = lane.id, waiting = lane.cars_waiting, "departure recorded");
        Ok(())
    }

    /// Vehicles currently queued across all lanes.
    pub fn total_waiting(&self) -> u64 {
        self.lanes.iter().map(|l| u64::from(l.cars_waiting)).sum()
    }
}

//! Per-lane occupancy and statistics.

use std::fmt;

/// Which movement an approach lane serves.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LaneType {
    Left,
    Center,
    Right,
}

impl LaneType {
    pub fn as_str(self) -> &'static str {
        match self {
            LaneType::Left   => "left",
            LaneType::Center => "center",
            LaneType::Right  => "right",
        }
    }
}

impl fmt::Display for LaneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One approach lane.
///
/// A plain record: the dispatch loop reads and updates it, nothing here
/// schedules events.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lane {
    pub id:            u32,
    pub lane_type:     LaneType,
    /// Index of the controlling light in `Intersection::lights`.
    pub light:         u32,
    pub cars_waiting:  u32,
    pub cars_departed: u32,
    /// Cumulative minutes spent waiting by departed vehicles.
    pub waiting_time:  f64,
}

impl Lane {
    pub fn new(id: u32, lane_type: LaneType, light: u32) -> Self {
        Self {
            id,
            lane_type,
            light,
            cars_waiting:  0,
            cars_departed: 0,
            waiting_time:  0.0,
        }
    }

    /// Mean wait per departed vehicle, or `None` before any departure.
    pub fn mean_wait(&self) -> Option<f64> {
        (self.cars_departed > 0).then(|| self.waiting_time / f64::from(self.cars_departed))
    }
}

//! Simulation time model.
//!
//! # Design
//!
//! Time is a non-negative real number of simulated minutes, wrapped in
//! `SimTime`.  Construction rejects NaN, infinities, and negative values, so
//! every `SimTime` in the system is totally ordered and `Ord` can be
//! implemented with `f64::total_cmp` without surprises.  `-0.0` is folded to
//! `0.0` on construction so the two never compare unequal.
//!
//! Arrival generation rounds interarrival gaps to 0.1 minute but the running
//! sum is left as-is, so timestamps carry ordinary floating-point residue
//! (`12.299999999999999`).  Equality in the queue is exact, matching the
//! arithmetic that produced the values.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::{EventError, EventResult, SimRng};

// ── SimTime ──────────────────────────────────────────────────────────────────

/// A validated simulated timestamp in minutes.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct SimTime(f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Validate and wrap `minutes`.
    pub fn new(minutes: f64) -> EventResult<Self> {
        if !minutes.is_finite() || minutes < 0.0 {
            return Err(EventError::InvalidArgument(format!(
                "timestamp must be finite and non-negative, got {minutes}"
            )));
        }
        // `+ 0.0` turns -0.0 into 0.0.
        Ok(SimTime(minutes + 0.0))
    }

    #[inline]
    pub fn minutes(self) -> f64 {
        self.0
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for SimTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl TryFrom<f64> for SimTime {
    type Error = EventError;
    fn try_from(minutes: f64) -> EventResult<Self> {
        SimTime::new(minutes)
    }
}

impl From<SimTime> for f64 {
    #[inline]
    fn from(t: SimTime) -> f64 {
        t.0
    }
}

/// Shortest representation that parses back to the same `f64`; whole values
/// keep a trailing `.0` (`5.0`, `12.3`, `12.299999999999999`).
impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl FromStr for SimTime {
    type Err = EventError;
    fn from_str(s: &str) -> EventResult<Self> {
        let minutes = s
            .trim()
            .parse::<f64>()
            .map_err(|e| EventError::Parse(format!("invalid timestamp {s:?}: {e}")))?;
        SimTime::new(minutes)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Per-run configuration.
///
/// Typically assembled by the application from command-line arguments and
/// passed to the queue constructors.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Simulated minute at which the run terminates.
    pub horizon_minutes: f64,

    /// Master RNG seed.  The same seed always produces identical arrivals.
    pub seed: u64,
}

impl SimConfig {
    /// The validated termination time.
    pub fn horizon(&self) -> EventResult<SimTime> {
        SimTime::new(self.horizon_minutes)
    }

    /// Construct the run's `SimRng` from `seed`.
    pub fn make_rng(&self) -> SimRng {
        SimRng::new(self.seed)
    }
}

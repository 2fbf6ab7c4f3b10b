//! `ix-core`: foundational types for the intersection event driver.
//!
//! Every other `ix-*` crate depends on this one.  It has no `ix-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`lane`]    | `LanePair`: approach/exit lane combination           |
//! | [`event`]   | `Event`, `EventKind`, canonical ordering, text form   |
//! | [`time`]    | `SimTime`, `SimConfig`                                |
//! | [`rng`]     | `SimRng` (seedable simulation RNG)                    |
//! | [`error`]   | `EventError`, `EventResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the public value types.  |

pub mod error;
pub mod event;
pub mod lane;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{EventError, EventResult};
pub use event::{Event, EventKind};
pub use lane::LanePair;
pub use rng::SimRng;
pub use time::{SimConfig, SimTime};

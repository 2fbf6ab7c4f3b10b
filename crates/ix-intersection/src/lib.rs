//! `ix-intersection`: intersection state records.
//!
//! Lanes and lights are plain mutable data owned by the application's
//! dispatch loop.  They hold no scheduling logic; the loop pops an event
//! from `ix_queue::EventQueue`, updates these records, and decides what to
//! schedule next.
//!
//! | Module           | Contents                                  |
//! |------------------|-------------------------------------------|
//! | [`lane`]         | `Lane`, `LaneType`                        |
//! | [`light`]        | `Light`                                   |
//! | [`intersection`] | `Intersection`: lane and light tables    |

pub mod error;
pub mod intersection;
pub mod lane;
pub mod light;


pub use error::{IntersectionError, IntersectionResult};
pub use intersection::{Intersection, LANES_PER_TYPE};
pub use lane::{Lane, LaneType};
pub use light::Light;

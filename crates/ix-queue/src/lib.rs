//! `ix-queue`: the time-ordered event queue that drives a simulation run.
//!
//! # Run shape
//!
//! ```text
//! let mut queue = EventQueue::from_rates(horizon, &rates, &mut rng);
//! while let Ok(event) = queue.pop_next():
//!   match event.kind():
//!     Arrival     → update lane state, maybe schedule a Departure
//!     Departure   → update lane state
//!     EndOfPhase  → switch lights, remove stale phase ends, schedule next
//!     Termination → stop
//! ```
//!
//! The dispatch loop and the traffic policy live in the application; this
//! crate only guarantees that events come out in canonical order and that
//! policy cannot insert a malformed event.
//!
//! | Module        | Contents                                           |
//! |---------------|----------------------------------------------------|
//! | [`queue`]     | `EventQueue`: insert, pop, bulk removal, views    |
//! | [`schedule`]  | `ScheduleRequest`, `EventQueue::schedule`          |
//! | [`init`]      | `initialize`, `EventQueue::from_*` constructors    |

pub mod init;
pub mod queue;
pub mod schedule;

#[cfg(test)]
mod tests;

pub use init::initialize;
pub use queue::EventQueue;
pub use schedule::ScheduleRequest;

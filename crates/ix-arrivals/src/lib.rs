//! `ix-arrivals`: arrival event generation and CSV loading.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`record`]    | `ArrivalRecord`: one `(time, from, to)` schedule entry   |
//! | [`rates`]     | `RateMatrix`: vehicles/hour per lane pair                |
//! | [`generator`] | `ArrivalGenerator`, schedule and Poisson generation       |
//! | [`loader`]    | `load_arrivals_csv`, `load_rates_csv` (+ reader variants) |
//! | [`error`]     | `ArrivalError`, `ArrivalResult<T>`                        |
//!
//! Generators return a flat `Vec<Event>` of Arrivals.  Ordering is the
//! queue's job; see `ix-queue`.

pub mod error;
pub mod generator;
pub mod loader;
pub mod rates;
pub mod record;


pub use error::{ArrivalError, ArrivalResult};
pub use generator::{
    ArrivalGenerator, GAP_RESOLUTION_MINUTES, arrivals_from_rates, arrivals_from_schedule,
    interarrival_minutes,
};
pub use loader::{load_arrivals_csv, load_arrivals_reader, load_rates_csv, load_rates_reader};
pub use rates::{MAX_RATE_PER_HOUR, RateMatrix};
pub use record::ArrivalRecord;

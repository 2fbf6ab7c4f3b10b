//! CSV loaders for arrival schedules and rate matrices.
//!
//! # Arrival schedule
//!
//! One row per arrival, in the order they should be emitted.
//!
//! ```csv
//! time,from,to
//! 5.0,0,1
//! 5.0,2,3
//! 10.0,1,2
//! ```
//!
//! # Rate matrix
//!
//! One row per lane pair; pairs absent from the file have rate zero.
//!
//! ```csv
//! from,to,rate_per_hour
//! 0,1,120
//! 0,2,45.5
//! 3,1,0
//! ```
//!
//! A lane pair listed twice is a parse error rather than last-wins, since a
//! silently overwritten rate would change the generated traffic.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use ix_core::LanePair;
use serde::Deserialize;
use tracing::warn;

use crate::{ArrivalError, ArrivalRecord, ArrivalResult, RateMatrix};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RateRecord {
    from:          u32,
    to:            u32,
    rate_per_hour: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an explicit arrival schedule from a CSV file.
pub fn load_arrivals_csv(path: &Path) -> ArrivalResult<Vec<ArrivalRecord>> {
    let file = std::fs::File::open(path)?;
    load_arrivals_reader(file)
}

/// Like [`load_arrivals_csv`] but accepts any `Read` source.
pub fn load_arrivals_reader<R: Read>(reader: R) -> ArrivalResult<Vec<ArrivalRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for result in csv_reader.deserialize::<ArrivalRecord>() {
        let row = result.map_err(|e| ArrivalError::Parse(e.to_string()))?;
        // Catch bad timestamps at load time rather than at queue build.
        row.to_event()?;
        records.push(row);
    }

    Ok(records)
}

/// Load a rate matrix from a CSV file.
pub fn load_rates_csv(path: &Path) -> ArrivalResult<RateMatrix> {
    let file = std::fs::File::open(path)?;
    load_rates_reader(file)
}

/// Like [`load_rates_csv`] but accepts any `Read` source.
pub fn load_rates_reader<R: Read>(reader: R) -> ArrivalResult<RateMatrix> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rates = RateMatrix::default();
    let mut seen: HashSet<LanePair> = HashSet::new();

    for result in csv_reader.deserialize::<RateRecord>() {
        let row = result.map_err(|e| ArrivalError::Parse(e.to_string()))?;
        let lane = LanePair::new(row.from, row.to);
        if !seen.insert(lane) {
            return Err(ArrivalError::Parse(format!("lane {lane} listed more than once")));
        }
        if row.rate_per_hour < 0.0 {
            warn!(%lane, rate = row.rate_per_hour, "negative arrival rate; lane will generate no arrivals");
        }
        rates.set(lane, row.rate_per_hour)?;
    }

    Ok(rates)
}

//! Per-lane-pair arrival intensities.

use ix_core::LanePair;

use crate::{ArrivalError, ArrivalResult};

/// Highest accepted rate.  Above it the mean gap is under half the 0.1-minute
/// rounding step and most draws round to zero.
pub const MAX_RATE_PER_HOUR: f64 = 1_200.0;

/// Arrival rates in vehicles per hour, indexed `[from][to]`.
///
/// Rows may have different lengths; a pair outside the stored shape has rate
/// zero.  Zero and negative entries generate no arrivals; entries above
/// [`MAX_RATE_PER_HOUR`] are rejected.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RateMatrix {
    rows: Vec<Vec<f64>>,
}

impl RateMatrix {
    /// An all-zero `n_from × n_to` matrix.
    pub fn zeros(n_from: usize, n_to: usize) -> Self {
        Self { rows: vec![vec![0.0; n_to]; n_from] }
    }

    /// Wrap explicit rows.  Every entry must be finite and at most
    /// [`MAX_RATE_PER_HOUR`].
    pub fn from_rows(rows: Vec<Vec<f64>>) -> ArrivalResult<Self> {
        for (from, row) in rows.iter().enumerate() {
            for (to, &rate) in row.iter().enumerate() {
                check_rate(LanePair::new(from as u32, to as u32), rate)?;
            }
        }
        Ok(Self { rows })
    }

    /// Set the rate for `lane`, growing the matrix as needed.
    pub fn set(&mut self, lane: LanePair, rate_per_hour: f64) -> ArrivalResult<()> {
        check_rate(lane, rate_per_hour)?;
        let (from, to) = (lane.from as usize, lane.to as usize);
        if self.rows.len() <= from {
            self.rows.resize_with(from + 1, Vec::new);
        }
        let row = &mut self.rows[from];
        if row.len() <= to {
            row.resize(to + 1, 0.0);
        }
        row[to] = rate_per_hour;
        Ok(())
    }

    /// Rate for `lane`, or `0.0` outside the stored shape.
    pub fn get(&self, lane: LanePair) -> f64 {
        self.rows
            .get(lane.from as usize)
            .and_then(|row| row.get(lane.to as usize))
            .copied()
            .unwrap_or(0.0)
    }

    /// Number of `from` rows.
    pub fn from_count(&self) -> usize {
        self.rows.len()
    }

    /// Pairs with a strictly positive rate, in row-major order.
    pub fn positive(&self) -> impl Iterator<Item = (LanePair, f64)> + '_ {
        self.rows.iter().enumerate().flat_map(|(from, row)| {
            row.iter().enumerate().filter_map(move |(to, &rate)| {
                (rate > 0.0).then(|| (LanePair::new(from as u32, to as u32), rate))
            })
        })
    }
}

fn check_rate(lane: LanePair, rate: f64) -> ArrivalResult<()> {
    if rate.is_finite() && rate <= MAX_RATE_PER_HOUR {
        Ok(())
    } else {
        Err(ArrivalError::InvalidRate { lane, rate })
    }
}
